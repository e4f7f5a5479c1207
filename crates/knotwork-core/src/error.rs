//! Structural validation errors shared across the workspace.

use std::error::Error;
use std::fmt;

use crate::node::Node;

/// Why a sequence of directions is not a legal knot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructureError {
    /// Fewer than four edges cannot close a self-avoiding lattice loop.
    TooShort {
        /// Number of edges supplied.
        len: usize,
    },
    /// An edge has the `Zero` direction.
    ZeroDirection {
        /// Position of the offending edge.
        index: usize,
    },
    /// Two edges occupy the same midpoint.
    SelfIntersection {
        /// Position of the second edge reaching the occupied midpoint.
        index: usize,
        /// Doubled midpoint coordinates that collided.
        midpoint: Node,
    },
    /// The walk does not return to its start.
    NotClosed {
        /// Net displacement after the last edge.
        displacement: Node,
    },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "knot needs at least 4 edges, got {len}")
            }
            Self::ZeroDirection { index } => {
                write!(f, "edge {index} has no direction")
            }
            Self::SelfIntersection { index, midpoint } => {
                write!(
                    f,
                    "edge {index} intersects an earlier edge at doubled midpoint {midpoint}"
                )
            }
            Self::NotClosed { displacement } => {
                write!(f, "knot is not closed: net displacement {displacement}")
            }
        }
    }
}

impl Error for StructureError {}
