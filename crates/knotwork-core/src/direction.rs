//! Unit directions and lattice axes.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::node::Node;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Left/Right.
    X,
    /// Down/Up.
    Y,
    /// Forward/Backward.
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The direction pointing towards increasing coordinates.
    pub fn positive(self) -> Direction {
        match self {
            Axis::X => Direction::Right,
            Axis::Y => Direction::Up,
            Axis::Z => Direction::Backward,
        }
    }

    /// The direction pointing towards decreasing coordinates.
    pub fn negative(self) -> Direction {
        self.positive().reverse()
    }

    /// The two axes perpendicular to this one, in X, Y, Z order.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Position in [`Axis::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// A unit step on the lattice, or no step at all.
///
/// The six non-zero directions are listed in [`Direction::ALL`]; `Zero`
/// exists so that a move command can carry "no direction".
///
/// # Examples
///
/// ```
/// use knotwork_core::{Axis, Direction};
///
/// assert_eq!(Direction::Up.reverse(), Direction::Down);
/// assert_eq!(Direction::Forward.axis(), Some(Axis::Z));
/// assert_eq!(Direction::Zero.axis(), None);
/// assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +Y.
    Up,
    /// -Y.
    Down,
    /// -X.
    Left,
    /// +X.
    Right,
    /// -Z.
    Forward,
    /// +Z.
    Backward,
    /// No displacement.
    Zero,
}

impl Direction {
    /// The six non-zero directions.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// The opposite direction. `Zero` is its own reverse.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Zero => Direction::Zero,
        }
    }

    /// The axis this direction runs along, or `None` for `Zero`.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Direction::Left | Direction::Right => Some(Axis::X),
            Direction::Up | Direction::Down => Some(Axis::Y),
            Direction::Forward | Direction::Backward => Some(Axis::Z),
            Direction::Zero => None,
        }
    }

    /// The unit displacement vector.
    pub fn vector(self) -> Node {
        match self {
            Direction::Up => Node::new(0, 1, 0),
            Direction::Down => Node::new(0, -1, 0),
            Direction::Left => Node::new(-1, 0, 0),
            Direction::Right => Node::new(1, 0, 0),
            Direction::Forward => Node::new(0, 0, -1),
            Direction::Backward => Node::new(0, 0, 1),
            Direction::Zero => Node::ORIGIN,
        }
    }

    /// Whether this is the `Zero` direction.
    pub fn is_zero(self) -> bool {
        self == Direction::Zero
    }

    /// Whether this direction points towards increasing coordinates.
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Right | Direction::Backward
        )
    }

    /// The unit direction of a displacement, if it is one.
    pub fn from_vector(v: Node) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Stable textual name.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
            Direction::Zero => "Zero",
        }
    }

    /// Single-letter code used in compact knot dumps.
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
            Direction::Zero => '0',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The unrecognised input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.input)
    }
}

impl Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the full name (case-insensitive) or the single-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .chain(std::iter::once(Direction::Zero))
            .find(|d| {
                d.name().eq_ignore_ascii_case(trimmed)
                    || (trimmed.len() == 1 && trimmed.starts_with(d.letter()))
            })
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().axis(), d.axis());
        }
        assert_eq!(Direction::Zero.reverse(), Direction::Zero);
    }

    #[test]
    fn vectors_are_unit_and_opposite() {
        for d in Direction::ALL {
            let v = d.vector();
            assert_eq!(v.x.abs() + v.y.abs() + v.z.abs(), 1);
            assert_eq!(v + d.reverse().vector(), Node::ORIGIN);
            assert_eq!(Direction::from_vector(v), Some(d));
        }
        assert_eq!(Direction::from_vector(Node::new(2, 0, 0)), None);
    }

    #[test]
    fn axis_directions_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(axis.positive().axis(), Some(axis));
            assert_eq!(axis.negative(), axis.positive().reverse());
            assert!(axis.positive().is_positive());
            let (a, b) = axis.others();
            assert!(a != axis && b != axis && a < b);
        }
    }

    #[test]
    fn parse_names_and_letters() {
        for d in Direction::ALL {
            assert_eq!(d.name().parse::<Direction>().unwrap(), d);
            assert_eq!(d.name().to_lowercase().parse::<Direction>().unwrap(), d);
            assert_eq!(d.letter().to_string().parse::<Direction>().unwrap(), d);
        }
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(ParseDirectionError { .. })
        ));
    }
}
