//! Grid configuration.

use knotwork_core::GRID_UNIT;

use crate::error::GridConfigError;

/// Configuration for a [`Grid`](crate::Grid).
///
/// Validated by [`Grid::new`](crate::Grid::new). A replacement passed to
/// [`Grid::set_config`](crate::Grid::set_config) is validated again and
/// applies from the next update.
///
/// # Examples
///
/// ```
/// use knotwork_grid::{Grid, GridConfig};
///
/// let mut grid = Grid::default();
/// let bad = GridConfig { unit: -1.0, surfaces: true };
/// assert!(grid.set_config(bad).is_err());
/// assert_eq!(grid.config(), &GridConfig::default());
///
/// grid.set_config(GridConfig::default().without_surfaces()).unwrap();
/// assert!(!grid.config().surfaces);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// World-space length of one lattice step.
    ///
    /// Default: [`GRID_UNIT`]. Must be finite and positive.
    pub unit: f32,

    /// Whether updates run the surface sweep.
    ///
    /// Default: `true`. When disabled the next update drops every surface.
    pub surfaces: bool,
}

impl GridConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(GridConfigError::InvalidUnit { unit: self.unit });
        }
        Ok(())
    }

    /// Same configuration with surfaces switched off.
    pub fn without_surfaces(self) -> Self {
        Self {
            surfaces: false,
            ..self
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            unit: GRID_UNIT,
            surfaces: true,
        }
    }
}
