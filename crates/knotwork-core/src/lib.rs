//! Lattice primitives for the knotwork workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other crate builds on: lattice [`Node`]s, the six unit
//! [`Direction`]s and their [`Axis`], colored [`Edge`]s with a stable
//! [`EdgeId`], the persistence contract ([`KnotData`]) and the structural
//! error type shared by validation code.
//!
//! Edges never store their endpoints. A node position only exists relative
//! to a walk along a cycle of edges, which is why [`Node`] doubles as a
//! displacement vector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod data;
pub mod direction;
pub mod edge;
pub mod error;
pub mod id;
pub mod node;

pub use data::{EdgeSpec, KnotData};
pub use direction::{Axis, Direction, ParseDirectionError};
pub use edge::{Color, Edge};
pub use error::StructureError;
pub use id::EdgeId;
pub use node::{Node, GRID_UNIT};
