//! Benchmark profiles for knotwork.
//!
//! - [`comb`]: a planar comb whose size scales with its tooth count
//! - [`comb_with_tips_selected`]: the same comb, ready to move
//!
//! Both are deterministic, so benchmark runs compare like with like.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use knotwork_core::Direction::{self, *};
use knotwork_knot::Knot;

/// A comb in the XY plane: `teeth` teeth of height `height` standing on a
/// spine one step below the origin.
///
/// Has `teeth * (2 * height + 4) + 2` edges.
///
/// # Panics
///
/// Panics if `teeth` or `height` is zero.
pub fn comb(teeth: usize, height: usize) -> Knot {
    assert!(teeth > 0 && height > 0, "comb needs at least one tooth of height one");
    let mut dirs: Vec<Direction> = Vec::with_capacity(teeth * (2 * height + 4) + 2);
    for _ in 0..teeth {
        dirs.extend(std::iter::repeat_n(Up, height));
        dirs.push(Right);
        dirs.extend(std::iter::repeat_n(Down, height));
        dirs.push(Right);
    }
    dirs.push(Down);
    dirs.extend(std::iter::repeat_n(Left, 2 * teeth));
    dirs.push(Up);
    Knot::from_directions(format!("comb {teeth}x{height}"), dirs).expect("comb layout is valid")
}

/// [`comb`] with the tip edge of every tooth selected.
///
/// Moving the selection [`Up`] is always valid.
pub fn comb_with_tips_selected(teeth: usize, height: usize) -> Knot {
    let mut knot = comb(teeth, height);
    let tips: Vec<_> = knot
        .edges()
        .enumerate()
        .filter(|(i, _)| *i < teeth * (2 * height + 2) && i % (2 * height + 2) == height)
        .map(|(_, e)| e.id())
        .collect();
    for tip in tips {
        knot.select(tip);
    }
    knot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comb_has_expected_size() {
        let knot = comb(5, 3);
        assert_eq!(knot.len(), 5 * 10 + 2);
    }

    #[test]
    fn tips_move_up() {
        let mut knot = comb_with_tips_selected(4, 2);
        assert_eq!(knot.selection_len(), 4);
        assert!(knot.selected_edges().all(|e| e.direction() == Right));
        assert!(knot.move_selection(Up, 1));
        assert_eq!(knot.len(), comb(4, 3).len());
        assert_eq!(knot, comb(4, 3));
    }
}
