//! Test utilities for knotwork development.
//!
//! Fixture knots live in [`fixtures`]; the helpers here inspect knots and
//! their event streams in the shapes tests usually want.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeMap;

use crossbeam_channel::Receiver;
use knotwork_core::{Direction, EdgeId, Node};
use knotwork_knot::{Knot, KnotEvent};

pub use fixtures::{default_knot, flat_ring, random_knot, rectangle, unit_square};

/// Every event currently queued on `rx`, without blocking.
pub fn drain_events(rx: &Receiver<KnotEvent>) -> Vec<KnotEvent> {
    rx.try_iter().collect()
}

/// Edge identities in cycle order.
pub fn edge_ids(knot: &Knot) -> Vec<EdgeId> {
    knot.edges().map(|e| e.id()).collect()
}

/// Directions in cycle order.
pub fn directions(knot: &Knot) -> Vec<Direction> {
    knot.directions().collect()
}

/// Absolute start node of every edge, keyed by identity.
pub fn absolute_starts(knot: &Knot) -> BTreeMap<EdgeId, Node> {
    knot.positions().map(|(n, e)| (e.id(), n)).collect()
}

/// Select the edges at `indices` (counted from the start edge).
pub fn select_indices(knot: &mut Knot, indices: &[usize]) {
    let ids = edge_ids(knot);
    for &i in indices {
        knot.select(ids[i % ids.len()]);
    }
}
