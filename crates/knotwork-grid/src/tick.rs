//! Rebuild generations.

use std::fmt;

/// Generation counter of a [`Grid`](crate::Grid).
///
/// Every update advances the grid to the next tick and stamps each object it
/// confirms. Objects stamped with an older tick are stale and get swept.
/// A fresh grid sits at tick 0, which no object ever carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl Tick {
    /// The following generation.
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
