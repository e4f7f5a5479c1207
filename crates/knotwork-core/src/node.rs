//! Integer lattice points.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::direction::{Axis, Direction};

/// World-space length of one lattice step.
pub const GRID_UNIT: f32 = 100.0;

/// A point of the integer lattice, or a displacement between two points.
///
/// # Examples
///
/// ```
/// use knotwork_core::{Direction, Node};
///
/// let n = Node::ORIGIN + Direction::Up + Direction::Right;
/// assert_eq!(n, Node::new(1, 1, 0));
/// assert_eq!(n - Direction::Right, Node::new(0, 1, 0));
/// assert_eq!(n.to_world(100.0), [100.0, 100.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// X coordinate (Left/Right).
    pub x: i32,
    /// Y coordinate (Down/Up).
    pub y: i32,
    /// Z coordinate (Forward/Backward).
    pub z: i32,
}

impl Node {
    /// The lattice origin.
    pub const ORIGIN: Node = Node { x: 0, y: 0, z: 0 };

    /// Create a node from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// A copy with the coordinate along `axis` replaced.
    pub fn with_coord(mut self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Scale to world space with the given lattice unit.
    pub fn to_world(self, unit: f32) -> [f32; 3] {
        [
            self.x as f32 * unit,
            self.y as f32 * unit,
            self.z as f32 * unit,
        ]
    }

    /// Componentwise addition, or `None` if any coordinate overflows.
    pub fn checked_add(self, rhs: Node) -> Option<Node> {
        Some(Node::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    /// Whether this is the zero displacement.
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        Node::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Node) -> Node {
        Node::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Node {
    fn add_assign(&mut self, rhs: Node) {
        *self = *self + rhs;
    }
}

impl SubAssign for Node {
    fn sub_assign(&mut self, rhs: Node) {
        *self = *self - rhs;
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        Node::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Node {
    type Output = Node;

    fn mul(self, rhs: i32) -> Node {
        Node::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Add<Direction> for Node {
    type Output = Node;

    fn add(self, rhs: Direction) -> Node {
        self + rhs.vector()
    }
}

impl Sub<Direction> for Node {
    type Output = Node;

    fn sub(self, rhs: Direction) -> Node {
        self - rhs.vector()
    }
}

impl AddAssign<Direction> for Node {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}
