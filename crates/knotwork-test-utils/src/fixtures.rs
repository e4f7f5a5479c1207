//! Reusable knot fixtures.
//!
//! - [`unit_square`]: the smallest valid knot.
//! - [`rectangle`]: an axis-aligned rectangle in the XY plane.
//! - [`flat_ring`]: a square lying in the XZ plane.
//! - [`default_knot`]: the ten-edge layout new documents start with.
//! - [`random_knot`]: a knot shaped by a seeded sequence of random moves.

use knotwork_core::Direction::{self, *};
use knotwork_knot::Knot;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub fn unit_square() -> Knot {
    rectangle(1, 1)
}

/// `width` x `height` rectangle walked counter-clockwise from its
/// bottom-left corner, starting upwards.
///
/// # Panics
///
/// Panics if either side is zero.
pub fn rectangle(width: usize, height: usize) -> Knot {
    let dirs = run(Up, height)
        .chain(run(Right, width))
        .chain(run(Down, height))
        .chain(run(Left, width));
    Knot::from_directions(format!("rect {width}x{height}"), dirs)
        .expect("rectangle sides must be non-zero")
}

/// Square of side `side` in the XZ plane.
///
/// # Panics
///
/// Panics if `side` is zero.
pub fn flat_ring(side: usize) -> Knot {
    let dirs = run(Backward, side)
        .chain(run(Right, side))
        .chain(run(Forward, side))
        .chain(run(Left, side));
    Knot::from_directions(format!("flat {side}"), dirs).expect("flat ring side must be non-zero")
}

pub fn default_knot() -> Knot {
    Knot::default()
}

/// Start from the default knot and attempt `moves` random moves.
///
/// Each attempt selects a random arc of one to three edges and moves it one
/// or two steps in a random direction. Rejected moves are skipped, so the
/// result is always valid. The same seed always yields the same knot.
pub fn random_knot(seed: u64, moves: usize) -> Knot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut knot = Knot::default();
    for _ in 0..moves {
        let ids: Vec<_> = knot.edges().map(|e| e.id()).collect();
        let first = rng.gen_range(0..ids.len());
        let span = rng.gen_range(0..3);
        knot.clear_selection();
        knot.select(ids[first]);
        knot.select_range(ids[(first + span) % ids.len()]);
        let direction = *Direction::ALL.choose(&mut rng).unwrap_or(&Up);
        knot.move_selection(direction, rng.gen_range(1..=2));
    }
    knot.clear_selection();
    knot
}

fn run(direction: Direction, n: usize) -> impl Iterator<Item = Direction> {
    std::iter::repeat_n(direction, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_knot::is_valid_structure;

    #[test]
    fn fixtures_are_valid() {
        for knot in [unit_square(), rectangle(3, 2), flat_ring(2), default_knot()] {
            assert!(is_valid_structure(knot.directions()), "{knot}");
        }
        assert_eq!(rectangle(3, 2).len(), 10);
        assert_eq!(flat_ring(2).len(), 8);
    }

    #[test]
    fn random_knot_is_deterministic() {
        let a = random_knot(7, 40);
        let b = random_knot(7, 40);
        assert_eq!(a, b);
        assert_eq!(a.to_data(), b.to_data());
        assert!(is_valid_structure(a.directions()));
    }
}
