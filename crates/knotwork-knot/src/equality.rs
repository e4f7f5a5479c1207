//! Structural equality of knots.
//!
//! Two knots are equal when they trace the same path up to translation,
//! choice of start edge and direction of traversal. Rather than trying every
//! rotation of the cycle, each knot picks a canonical *characteristic edge*:
//! the one whose midpoint is lexicographically smallest. Translating a knot
//! or starting its walk elsewhere does not change which lattice segment that
//! is, so both walks can be aligned on it and compared in one pass.
//!
//! [`Knot::congruent_to`] widens equality to the lattice symmetries: the 24
//! rotations of the cube, optionally with the 24 reflections.

use std::fmt;

use knotwork_core::{Axis, Direction, Node};

use crate::knot::Knot;

/// Canonical alignment point of a knot's edge cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Characteristic {
    /// Position, counted from the start edge, of the edge with the
    /// lexicographically smallest midpoint.
    pub index: usize,
    /// Number of edges in the cycle.
    pub len: usize,
}

impl Characteristic {
    /// Characteristic of the cycle traced by `directions`.
    ///
    /// Returns `None` for an empty sequence.
    pub fn of(directions: &[Direction]) -> Option<Characteristic> {
        let mut position = Node::ORIGIN;
        let mut best: Option<(Node, usize)> = None;
        for (index, &direction) in directions.iter().enumerate() {
            let midpoint = position * 2 + direction;
            match best {
                Some((m, _)) if m <= midpoint => {}
                _ => best = Some((midpoint, index)),
            }
            position += direction;
        }
        best.map(|(_, index)| Characteristic {
            index,
            len: directions.len(),
        })
    }
}

/// Whether two cycles, aligned on their characteristics, trace the same
/// path either in the same or in opposite traversal order.
fn aligned_cycles_match(
    a: &[Direction],
    ca: Characteristic,
    b: &[Direction],
    cb: Characteristic,
) -> bool {
    let n = ca.len;
    if n != cb.len || n != a.len() || n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    let (ai, bi) = (ca.index, cb.index);
    if a[ai] == b[bi] {
        (0..n).all(|k| a[(ai + k) % n] == b[(bi + k) % n])
    } else if a[ai] == b[bi].reverse() {
        (0..n).all(|k| a[(ai + k) % n] == b[(bi + n - k) % n].reverse())
    } else {
        false
    }
}

/// A signed permutation of the lattice axes.
///
/// Output axis `i` takes the input coordinate on `axes[i]`, negated when
/// `flip[i]` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    axes: [Axis; 3],
    flip: [bool; 3],
}

const PERMUTATIONS: [([Axis; 3], bool); 6] = [
    ([Axis::X, Axis::Y, Axis::Z], true),
    ([Axis::Y, Axis::Z, Axis::X], true),
    ([Axis::Z, Axis::X, Axis::Y], true),
    ([Axis::X, Axis::Z, Axis::Y], false),
    ([Axis::Z, Axis::Y, Axis::X], false),
    ([Axis::Y, Axis::X, Axis::Z], false),
];

impl Symmetry {
    /// The identity mapping.
    pub const IDENTITY: Symmetry = Symmetry {
        axes: [Axis::X, Axis::Y, Axis::Z],
        flip: [false; 3],
    };

    /// All 48 symmetries of the cubic lattice, identity first.
    pub fn all() -> impl Iterator<Item = Symmetry> {
        PERMUTATIONS.into_iter().flat_map(|(axes, _)| {
            (0u8..8).map(move |bits| Symmetry {
                axes,
                flip: [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0],
            })
        })
    }

    /// Whether this symmetry preserves handedness.
    pub fn is_rotation(&self) -> bool {
        let even = PERMUTATIONS
            .iter()
            .find(|(axes, _)| *axes == self.axes)
            .is_some_and(|(_, even)| *even);
        let flips = self.flip.iter().filter(|f| **f).count();
        even == (flips % 2 == 0)
    }

    /// Map a displacement.
    pub fn apply_vector(&self, v: Node) -> Node {
        let mut out = Node::ORIGIN;
        for (axis, (&source, &flip)) in Axis::ALL.iter().zip(self.axes.iter().zip(&self.flip)) {
            let c = v.coord(source);
            out = out.with_coord(*axis, if flip { -c } else { c });
        }
        out
    }

    /// Map a direction. `Zero` maps to itself.
    pub fn apply(&self, direction: Direction) -> Direction {
        Direction::from_vector(self.apply_vector(direction.vector())).unwrap_or(Direction::Zero)
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (axis, flip)) in self.axes.iter().zip(&self.flip).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}{axis}", if *flip { "-" } else { "+" })?;
        }
        Ok(())
    }
}

/// Which lattice symmetries [`Knot::congruent_to`] may apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symmetries {
    /// The 24 proper rotations.
    #[default]
    Rotations,
    /// Rotations and reflections, 48 in total.
    RotationsAndReflections,
}

impl Symmetries {
    /// The symmetries in this group.
    pub fn iter(self) -> impl Iterator<Item = Symmetry> {
        Symmetry::all().filter(move |s| match self {
            Symmetries::Rotations => s.is_rotation(),
            Symmetries::RotationsAndReflections => true,
        })
    }
}

impl Knot {
    /// The cached characteristic of the current edge cycle.
    pub fn characteristic(&self) -> Characteristic {
        *self.characteristic.get_or_init(|| {
            let directions: Vec<Direction> = self.directions().collect();
            Characteristic::of(&directions).unwrap_or(Characteristic { index: 0, len: 0 })
        })
    }

    /// Whether `other` can be carried onto `self` by a lattice symmetry
    /// from `symmetries` plus a translation, re-rooting or reversal.
    pub fn congruent_to(&self, other: &Knot, symmetries: Symmetries) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let ours: Vec<Direction> = self.directions().collect();
        let ca = self.characteristic();
        symmetries.iter().any(|symmetry| {
            let theirs: Vec<Direction> = other.directions().map(|d| symmetry.apply(d)).collect();
            Characteristic::of(&theirs).is_some_and(|cb| aligned_cycles_match(&ours, ca, &theirs, cb))
        })
    }
}

/// Shape equality; name, colors, selection and offset are ignored.
impl PartialEq for Knot {
    fn eq(&self, other: &Knot) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let a: Vec<Direction> = self.directions().collect();
        let b: Vec<Direction> = other.directions().collect();
        aligned_cycles_match(&a, self.characteristic(), &b, other.characteristic())
    }
}

impl Eq for Knot {}
