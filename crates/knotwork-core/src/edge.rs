//! Directed, colored unit edges.

use std::fmt;

use crate::direction::Direction;
use crate::id::EdgeId;

/// An RGBA color tag carried by each edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Pipe color used when none is given.
    pub const DEFAULT: Color = Color::rgb(0x64, 0x95, 0xed);

    /// Opaque color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A directed unit edge of a knot.
///
/// The edge's endpoints are not stored: they follow from where the edge sits
/// in its cycle. Equality includes the [`EdgeId`], so two independently
/// created edges with the same direction and color are *not* equal; use
/// [`Edge::same_shape`] to compare by value.
///
/// # Examples
///
/// ```
/// use knotwork_core::{Color, Direction, Edge};
///
/// let a = Edge::new(Direction::Up, Color::DEFAULT);
/// let b = Edge::new(Direction::Up, Color::DEFAULT);
/// assert_ne!(a, b);
/// assert!(a.same_shape(&b));
/// assert_eq!(a.clone(), a);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    id: EdgeId,
    direction: Direction,
    color: Color,
}

impl Edge {
    /// Create an edge with a freshly allocated [`EdgeId`].
    pub fn new(direction: Direction, color: Color) -> Self {
        Self {
            id: EdgeId::next(),
            direction,
            color,
        }
    }

    /// Create an edge in the default color.
    pub fn plain(direction: Direction) -> Self {
        Self::new(direction, Color::DEFAULT)
    }

    /// The edge's identity.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The direction the edge runs in along its cycle.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The color tag.
    pub fn color(&self) -> Color {
        self.color
    }

    /// A copy with the same identity and direction but another color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Value comparison ignoring identity.
    pub fn same_shape(&self, other: &Edge) -> bool {
        self.direction == other.direction && self.color == other.color
    }

    /// Twice the midpoint of this edge when it starts at `start`.
    ///
    /// Midpoints sit on half-integer coordinates; doubling keeps them exact.
    pub fn doubled_midpoint(&self, start: crate::Node) -> crate::Node {
        start * 2 + self.direction
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.direction)
    }
}
