//! Knot error types.

use std::error::Error;
use std::fmt;

use knotwork_core::{EdgeId, StructureError};

/// Errors constructing a knot from external data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KnotError {
    /// The edge sequence does not form a closed self-avoiding loop.
    InvalidStructure(StructureError),
}

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStructure(reason) => write!(f, "invalid knot structure: {reason}"),
        }
    }
}

impl Error for KnotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStructure(reason) => Some(reason),
        }
    }
}

impl From<StructureError> for KnotError {
    fn from(reason: StructureError) -> Self {
        Self::InvalidStructure(reason)
    }
}

/// Why a move was refused.
///
/// A refused move never modifies the knot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// A selected edge ended up next to an edge running straight back
    /// over it. Selected edges are never cancelled away.
    SelectedEdgeCancelled {
        /// The selected edge of the cancelling pair.
        edge: EdgeId,
    },
    /// The moved knot would intersect itself or fall below four edges.
    Structure(StructureError),
    /// The distance does not fit the lattice: a moved edge would leave the
    /// `i32` coordinate range.
    DistanceOutOfRange {
        /// The requested distance.
        distance: usize,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectedEdgeCancelled { edge } => {
                write!(f, "move would cancel selected edge {edge}")
            }
            Self::Structure(reason) => write!(f, "moved knot is invalid: {reason}"),
            Self::DistanceOutOfRange { distance } => {
                write!(f, "move distance {distance} leaves the lattice")
            }
        }
    }
}

impl Error for MoveRejection {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structure(reason) => Some(reason),
            Self::SelectedEdgeCancelled { .. } | Self::DistanceOutOfRange { .. } => None,
        }
    }
}
