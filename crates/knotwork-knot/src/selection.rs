//! Selection commands.
//!
//! The selection is a set of [`EdgeId`]s. Selection order is not
//! significant; [`Knot::selected_edges`] always reports ring order. Every
//! command returns whether the selection actually changed and emits
//! [`KnotEvent::SelectionChanged`] exactly when it did.

use knotwork_core::{Edge, EdgeId};
use knotwork_ring::RingHandle;
use tracing::trace;

use crate::events::KnotEvent;
use crate::knot::Knot;

impl Knot {
    /// Add one edge to the selection and make it the range anchor.
    ///
    /// Returns `false` if the edge is not part of this knot or was already
    /// selected.
    pub fn select(&mut self, edge: EdgeId) -> bool {
        if !self.contains(edge) {
            return false;
        }
        self.last_selected = Some(edge);
        let changed = self.selection.insert(edge);
        if changed {
            self.selection_changed("select");
        }
        changed
    }

    /// Remove one edge from the selection.
    pub fn deselect(&mut self, edge: EdgeId) -> bool {
        let changed = self.selection.shift_remove(&edge);
        if self.last_selected == Some(edge) {
            self.last_selected = None;
        }
        if changed {
            self.selection_changed("deselect");
        }
        changed
    }

    /// Select every edge between the last selected edge and `edge`.
    ///
    /// Walks whichever way round the cycle is shorter; on a tie the forward
    /// arc wins. Without a range anchor this is [`Knot::select`].
    pub fn select_range(&mut self, edge: EdgeId) -> bool {
        let Some(target) = self.handle_of(edge) else {
            return false;
        };
        let Some(anchor) = self.last_selected.and_then(|id| self.handle_of(id)) else {
            return self.select(edge);
        };

        let forward = self.edges.distance_forward(anchor, target);
        let backward = self.edges.len() - forward;
        let arc: Vec<RingHandle> = if forward <= backward {
            self.edges.range(anchor, target).collect()
        } else {
            self.edges.range(target, anchor).collect()
        };

        let mut changed = false;
        for h in arc {
            changed |= self.selection.insert(self.edges[h].id());
        }
        self.last_selected = Some(edge);
        if changed {
            self.selection_changed("select range");
        }
        changed
    }

    /// Select every edge of the knot.
    pub fn select_all(&mut self) -> bool {
        let before = self.selection.len();
        self.selection.extend(self.edges.iter().map(Edge::id));
        let changed = self.selection.len() != before;
        if changed {
            self.selection_changed("select all");
        }
        changed
    }

    /// Empty the selection and forget the range anchor.
    pub fn clear_selection(&mut self) -> bool {
        self.last_selected = None;
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        self.selection_changed("clear selection");
        true
    }

    /// Whether `edge` is selected.
    pub fn is_selected(&self, edge: EdgeId) -> bool {
        self.selection.contains(&edge)
    }

    /// Selected edges in ring order, starting at the start edge.
    pub fn selected_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .filter(|e| self.selection.contains(&e.id()))
    }

    /// Number of selected edges.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// The range anchor used by [`Knot::select_range`].
    pub fn last_selected(&self) -> Option<EdgeId> {
        self.last_selected
    }

    fn selection_changed(&mut self, command: &'static str) {
        trace!(knot = %self.name, command, selected = self.selection.len(), "selection changed");
        self.subscribers.emit(KnotEvent::SelectionChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_core::Direction::*;

    fn ids(knot: &Knot) -> Vec<EdgeId> {
        knot.edges().map(Edge::id).collect()
    }

    fn selected(knot: &Knot) -> Vec<EdgeId> {
        knot.selected_edges().map(Edge::id).collect()
    }

    fn octagon() -> Knot {
        Knot::from_directions("octagon", [Up, Up, Right, Right, Down, Down, Left, Left]).unwrap()
    }

    #[test]
    fn select_and_deselect_track_the_anchor() {
        let mut knot = octagon();
        let e = ids(&knot);
        assert!(knot.select(e[2]));
        assert!(!knot.select(e[2]));
        assert_eq!(knot.last_selected(), Some(e[2]));
        assert!(knot.deselect(e[2]));
        assert_eq!(knot.last_selected(), None);
        assert!(!knot.deselect(e[2]));
    }

    #[test]
    fn foreign_edges_are_ignored() {
        let mut knot = octagon();
        let stranger = Edge::plain(Up).id();
        assert!(!knot.select(stranger));
        assert!(!knot.select_range(stranger));
        assert_eq!(knot.selection_len(), 0);
    }

    #[test]
    fn range_takes_the_shorter_arc() {
        let mut knot = octagon();
        let e = ids(&knot);
        knot.select(e[1]);
        knot.select_range(e[3]);
        assert_eq!(selected(&knot), vec![e[1], e[2], e[3]]);

        knot.clear_selection();
        knot.select(e[1]);
        knot.select_range(e[7]);
        assert_eq!(selected(&knot), vec![e[0], e[1], e[7]]);
        assert_eq!(knot.last_selected(), Some(e[7]));
    }

    #[test]
    fn range_tie_goes_forward() {
        let mut knot = octagon();
        let e = ids(&knot);
        knot.select(e[6]);
        knot.select_range(e[2]);
        assert_eq!(selected(&knot), vec![e[0], e[1], e[2], e[6], e[7]]);
    }

    #[test]
    fn range_without_anchor_selects_one() {
        let mut knot = octagon();
        let e = ids(&knot);
        assert!(knot.select_range(e[4]));
        assert_eq!(selected(&knot), vec![e[4]]);
    }

    #[test]
    fn selected_edges_report_ring_order() {
        let mut knot = octagon();
        let e = ids(&knot);
        knot.select(e[5]);
        knot.select(e[0]);
        knot.select(e[3]);
        assert_eq!(selected(&knot), vec![e[0], e[3], e[5]]);
    }

    #[test]
    fn events_fire_only_on_change() {
        let mut knot = octagon();
        let rx = knot.subscribe();
        let e = ids(&knot);
        assert!(!knot.clear_selection());
        knot.select(e[0]);
        knot.select(e[0]);
        assert!(knot.select_all());
        assert!(!knot.select_all());
        assert!(knot.clear_selection());
        let events: Vec<KnotEvent> = rx.try_iter().collect();
        assert_eq!(events, vec![KnotEvent::SelectionChanged; 3]);
    }
}
