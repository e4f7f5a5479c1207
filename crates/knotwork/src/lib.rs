//! Knotwork: lattice knot puzzles.
//!
//! A knot is a closed, self-avoiding loop of unit edges on the 3D integer
//! lattice. The player selects runs of edges and slides them sideways; every
//! move either keeps the loop valid or is refused. A [`grid::Grid`] turns
//! the current loop into renderable pipes, junctions and surfaces with
//! stable identity across edits.
//!
//! This is the facade crate that re-exports the public API from all
//! knotwork sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use knotwork::prelude::*;
//!
//! let mut knot = Knot::from_directions("square", [Up, Right, Down, Left]).unwrap();
//! let mut grid = Grid::default();
//! grid.update(&knot);
//!
//! // Push the top edge up by two.
//! let top = knot.edges().nth(1).unwrap().id();
//! knot.select(top);
//! assert!(knot.move_selection(Up, 2));
//! assert_eq!(knot.len(), 8);
//!
//! // The grid keeps the four original pipes and adds the four bridges.
//! let report = grid.update(&knot);
//! assert_eq!((report.pipes.kept, report.pipes.created), (4, 4));
//!
//! // A 1x3 rectangle, whichever edge it starts from.
//! let tall = Knot::from_directions("tall", [Down, Down, Down, Left, Up, Up, Up, Right]).unwrap();
//! assert_eq!(knot, tall);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `knotwork-core` | Nodes, directions, edges, persistence types |
//! | [`ring`] | `knotwork-ring` | Arena-backed circular list |
//! | [`knot`] | `knotwork-knot` | Knots, selection, moves, equality |
//! | [`grid`] | `knotwork-grid` | Pipes, junctions, surfaces |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice primitives and the persistence contract (`knotwork-core`).
pub use knotwork_core as types;

/// Circular list with generation-checked handles (`knotwork-ring`).
pub use knotwork_ring as ring;

/// Knot topology (`knotwork-knot`).
///
/// [`knot::Knot`] holds the edge cycle and selection; moves go through
/// [`knot::Knot::move_selection`].
pub use knotwork_knot as knot;

/// Renderable index (`knotwork-grid`).
pub use knotwork_grid as grid;

/// Common imports for typical knotwork usage.
///
/// ```rust
/// use knotwork::prelude::*;
/// ```
pub mod prelude {
    // Lattice primitives
    pub use knotwork_core::Direction::{self, Backward, Down, Forward, Left, Right, Up};
    pub use knotwork_core::{Axis, Color, Edge, EdgeId, EdgeSpec, KnotData, Node};

    // Knot
    pub use knotwork_knot::{Knot, KnotEvent, Symmetries};

    // Errors
    pub use knotwork_core::StructureError;
    pub use knotwork_knot::{KnotError, MoveRejection};

    // Grid
    pub use knotwork_grid::{Grid, GridConfig, Renderable, UpdateReport};
}
