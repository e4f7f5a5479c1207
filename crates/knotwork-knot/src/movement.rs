//! Moving selected runs of edges.
//!
//! A move slides every maximal run of selected edges sideways by
//! `direction × distance`. Each run gets a bridge of `distance` new edges in
//! `direction` before it and a bridge in the reverse direction after it, so
//! the cycle stays closed. Bridges that land on an unselected edge running
//! the other way cancel against it pairwise. Moving the starred edge of a
//! square up by one:
//!
//! ```text
//!                     +--*--+
//!                     |     |
//!   +--*--+           +     +
//!   |     |    Up     |     |
//!   +-----+   ---->   +-----+
//! ```
//!
//! Selected edges never cancel. A move that would need to cancel one is
//! rejected, as is any move whose result fails [`check_structure`].

use knotwork_core::{Direction, Edge, Node};
use knotwork_ring::{Ring, RingHandle};
use tracing::{debug, trace};

use crate::error::MoveRejection;
use crate::knot::Knot;
use crate::validity::check_structure;

/// An edge of the knot under construction.
#[derive(Clone, Debug)]
struct Piece {
    edge: Edge,
    selected: bool,
    /// Absolute start node after the move, known for original edges only.
    start: Option<Node>,
}

impl Knot {
    /// Cheap pre-check for [`Knot::move_selection`].
    ///
    /// Returns `false` for moves that are certain to fail: nothing is
    /// selected, a run boundary would immediately cancel a selected edge
    /// against its own bridge, or every selected edge lies on the move's own
    /// axis. A `true` result does not guarantee [`Knot::try_move`] succeeds.
    pub fn is_valid_move(&self, direction: Direction) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        if self.selection.len() == self.edges.len() {
            return true;
        }

        let reverse = direction.reverse();
        for (prev, cur, next) in self.edges.triples() {
            if !self.is_selected(cur.id()) {
                continue;
            }
            let run_start = !self.is_selected(prev.id());
            let run_end = !self.is_selected(next.id());
            if run_start && cur.direction() == reverse && prev.direction() != reverse {
                return false;
            }
            if run_end && cur.direction() == direction && next.direction() != direction {
                return false;
            }
        }

        let Some(axis) = direction.axis() else {
            return true;
        };
        !self
            .selected_edges()
            .all(|e| e.direction().axis() == Some(axis))
    }

    /// Compute the knot that results from moving the selection.
    ///
    /// `self` is never modified. A zero direction or distance yields an
    /// identical copy. The result keeps the name and the selection; edges
    /// not involved in the move keep their absolute lattice positions and
    /// every selected edge shifts by exactly `direction × distance`.
    ///
    /// # Errors
    ///
    /// [`MoveRejection::SelectedEdgeCancelled`] if a selected edge would
    /// have to cancel, [`MoveRejection::Structure`] if the result would not
    /// be a valid knot, [`MoveRejection::DistanceOutOfRange`] if a moved
    /// edge would leave the `i32` lattice.
    pub fn try_move(&self, direction: Direction, distance: usize) -> Result<Knot, MoveRejection> {
        if direction.is_zero() || distance == 0 {
            return Ok(self.clone());
        }
        let out_of_range = MoveRejection::DistanceOutOfRange { distance };
        let steps = i32::try_from(distance).map_err(|_| out_of_range.clone())?;
        let capacity = distance
            .checked_mul(2)
            .and_then(|bridges| bridges.checked_add(self.edges.len()))
            .ok_or_else(|| out_of_range.clone())?;
        let shift = direction.vector() * steps;
        let reverse = direction.reverse();

        let mut built = Vec::with_capacity(capacity);
        let mut head_id = None;
        for ((start, _), (prev, cur, next)) in self.positions().zip(self.edges.triples()) {
            head_id.get_or_insert(cur.id());
            let selected = self.is_selected(cur.id());
            if selected && !self.is_selected(prev.id()) {
                built.extend((0..distance).map(|_| bridge(direction, cur)));
            }
            let start = if selected {
                start.checked_add(shift).ok_or_else(|| out_of_range.clone())?
            } else {
                start
            };
            built.push(Piece {
                edge: cur.clone(),
                selected,
                start: Some(start),
            });
            if selected && !self.is_selected(next.id()) {
                built.extend((0..distance).map(|_| bridge(reverse, cur)));
            }
        }

        let mut pieces: Ring<Piece> = built.into_iter().collect();
        cancel_unselected_pairs(&mut pieces);

        for h in pieces.handles() {
            let (a, b) = (&pieces[h], &pieces[pieces.next(h)]);
            if a.edge.direction() == b.edge.direction().reverse() {
                let kept = if a.selected { &a.edge } else { &b.edge };
                return Err(MoveRejection::SelectedEdgeCancelled { edge: kept.id() });
            }
        }
        check_structure(pieces.iter().map(|p| p.edge.direction()))
            .map_err(MoveRejection::Structure)?;

        // Keep the original start edge in front whenever it survives.
        if let Some(h) = head_id.and_then(|id| pieces.find_first(|p| p.edge.id() == id)) {
            pieces.set_head(h);
        }
        let offset = anchored_offset(&pieces).unwrap_or(self.offset);

        let mut moved = Knot::from_ring(
            self.name.clone(),
            pieces.iter().map(|p| p.edge.clone()).collect(),
            offset,
        );
        moved.selection = self.selection.clone();
        moved.last_selected = self.last_selected;
        Ok(moved)
    }

    /// Move the selection and commit the result.
    ///
    /// Returns `false`, leaving the knot untouched, if the move is rejected.
    /// Emits [`KnotEvent::EdgesChanged`](crate::KnotEvent::EdgesChanged) on
    /// success unless the move was a no-op.
    pub fn move_selection(&mut self, direction: Direction, distance: usize) -> bool {
        if direction.is_zero() || distance == 0 {
            return true;
        }
        if !self.is_valid_move(direction) {
            debug!(knot = %self.name, %direction, distance, "move refused by pre-check");
            return false;
        }
        match self.try_move(direction, distance) {
            Ok(moved) => {
                let before = self.edges.len();
                self.replace_structure(moved.edges, moved.offset);
                trace!(
                    knot = %self.name,
                    %direction,
                    distance,
                    before,
                    after = self.edges.len(),
                    "moved selection"
                );
                true
            }
            Err(reason) => {
                debug!(knot = %self.name, %direction, distance, %reason, "move rejected");
                false
            }
        }
    }
}

fn bridge(direction: Direction, run_edge: &Edge) -> Piece {
    Piece {
        edge: Edge::new(direction, run_edge.color()),
        selected: false,
        start: None,
    }
}

/// Remove adjacent unselected pairs that run straight back over each other.
///
/// After each removal the scan resumes from the edge before the splice, so
/// pairs that become adjacent through the removal are found too. Stops once
/// a full lap finds nothing to remove.
fn cancel_unselected_pairs(pieces: &mut Ring<Piece>) {
    let Some(mut cursor) = pieces.head() else {
        return;
    };
    let mut unchanged = 0;
    while pieces.len() >= 2 && unchanged < pieces.len() {
        let next = pieces.next(cursor);
        let (a, b) = (&pieces[cursor], &pieces[next]);
        let cancels = !a.selected
            && !b.selected
            && a.edge.direction() == b.edge.direction().reverse();
        if !cancels {
            cursor = next;
            unchanged += 1;
            continue;
        }
        let before: RingHandle = pieces.prev(cursor);
        pieces.remove(cursor);
        pieces.remove(next);
        if pieces.is_empty() {
            return;
        }
        cursor = before;
        unchanged = 0;
    }
}

/// Start node of the head piece, derived from the first piece whose
/// absolute position is known.
fn anchored_offset(pieces: &Ring<Piece>) -> Option<Node> {
    let mut walked = Node::ORIGIN;
    for piece in pieces.iter() {
        if let Some(start) = piece.start {
            return Some(start - walked);
        }
        walked += piece.edge.direction();
    }
    None
}
