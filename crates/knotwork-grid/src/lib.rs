//! Renderable index over a knotwork knot.
//!
//! A [`Grid`] turns a [`Knot`](knotwork_knot::Knot)'s edge cycle into three
//! collections of renderable objects:
//!
//! - [`Pipe`]: one per edge, keyed by [`EdgeId`](knotwork_core::EdgeId).
//! - [`Junction`]: one per pass of the knot through a node, keyed by
//!   [`JunctionKey`]; each node also gets a [`JointShape`].
//! - [`Surface`]: one per lattice point the knot encloses in some plane.
//!
//! [`Grid::update`] reconciles these with the knot by generational
//! mark-and-sweep on a [`Tick`] counter, so an object whose key survives an
//! edit keeps its identity across frames.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
pub mod junction;
pub mod pipe;
pub mod surface;
pub mod tick;
pub mod view;

pub use config::GridConfig;
pub use error::GridConfigError;
pub use grid::{Churn, Grid, UpdateReport};
pub use junction::{JointShape, Junction, JunctionKey, JunctionShape};
pub use pipe::Pipe;
pub use surface::{Surface, SurfaceSide};
pub use tick::Tick;
pub use view::{Objects, Renderable};
