//! Persistence contract between knots and the file-format layer.
//!
//! A knot reduces to a name and the ordered list of its edges' directions
//! and colors. Identity is not persisted: loading allocates fresh
//! [`EdgeId`](crate::EdgeId)s. The byte format is left to the caller; with
//! the `serde` feature enabled these types derive `Serialize` and
//! `Deserialize`.

use crate::direction::Direction;
use crate::edge::{Color, Edge};

/// One persisted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSpec {
    /// Direction of travel.
    pub direction: Direction,
    /// Color tag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Color,
}

impl EdgeSpec {
    /// Spec for an edge in the default color.
    pub fn plain(direction: Direction) -> Self {
        Self {
            direction,
            color: Color::DEFAULT,
        }
    }

    /// Materialise an edge with a fresh identity.
    pub fn to_edge(self) -> Edge {
        Edge::new(self.direction, self.color)
    }
}

impl From<&Edge> for EdgeSpec {
    fn from(edge: &Edge) -> Self {
        Self {
            direction: edge.direction(),
            color: edge.color(),
        }
    }
}

/// A persisted knot: a name plus its edges in cycle order.
///
/// # Examples
///
/// ```
/// use knotwork_core::{Direction, KnotData};
///
/// let data = KnotData::from_directions(
///     "square",
///     [Direction::Up, Direction::Right, Direction::Down, Direction::Left],
/// );
/// assert_eq!(data.edges.len(), 4);
/// assert_eq!(data.name, "square");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotData {
    /// Display name of the knot.
    pub name: String,
    /// Edges in cycle order, starting at the knot's start edge.
    pub edges: Vec<EdgeSpec>,
}

impl KnotData {
    /// Build data for uniformly colored edges.
    pub fn from_directions(
        name: impl Into<String>,
        directions: impl IntoIterator<Item = Direction>,
    ) -> Self {
        Self {
            name: name.into(),
            edges: directions.into_iter().map(EdgeSpec::plain).collect(),
        }
    }

    /// Directions in cycle order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.edges.iter().map(|e| e.direction)
    }
}
