//! Grid error types.

use std::error::Error;
use std::fmt;

/// Errors from [`GridConfig::validate`](crate::GridConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum GridConfigError {
    /// The world-space size of a lattice step must be finite and positive.
    InvalidUnit {
        /// The rejected value.
        unit: f32,
    },
}

impl fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUnit { unit } => {
                write!(f, "grid unit must be finite and positive, got {unit}")
            }
        }
    }
}

impl Error for GridConfigError {}
