//! The [`Knot`] type: construction, persistence and read-only queries.

use std::cell::OnceCell;
use std::fmt;

use crossbeam_channel::Receiver;
use indexmap::IndexSet;
use knotwork_core::{Color, Direction, Edge, EdgeId, KnotData, Node};
use knotwork_ring::{Ring, RingHandle};
use tracing::{debug, trace};

use crate::equality::Characteristic;
use crate::error::KnotError;
use crate::events::{KnotEvent, Subscribers};
use crate::validity::check_structure;

/// Layout of [`Knot::default`]: a ten-edge loop spanning all three axes.
const DEFAULT_LAYOUT: [Direction; 10] = [
    Direction::Up,
    Direction::Right,
    Direction::Right,
    Direction::Down,
    Direction::Backward,
    Direction::Up,
    Direction::Left,
    Direction::Left,
    Direction::Down,
    Direction::Forward,
];

/// A closed, self-avoiding cycle of lattice edges with a selection.
///
/// Structure invariant: the edge cycle always passes [`check_structure`].
/// Constructors validate it and every mutation preserves it.
///
/// # Examples
///
/// ```
/// use knotwork_core::Direction::*;
/// use knotwork_knot::Knot;
///
/// let mut knot = Knot::from_directions("square", [Up, Right, Down, Left]).unwrap();
/// let top = knot.edges().nth(1).unwrap().id();
/// knot.select(top);
/// assert!(knot.move_selection(Up, 1));
/// assert_eq!(knot.len(), 6);
/// ```
#[derive(Debug)]
pub struct Knot {
    pub(crate) name: String,
    pub(crate) edges: Ring<Edge>,
    pub(crate) selection: IndexSet<EdgeId>,
    pub(crate) last_selected: Option<EdgeId>,
    /// Lattice position of the start node of the head edge.
    pub(crate) offset: Node,
    pub(crate) characteristic: OnceCell<Characteristic>,
    pub(crate) subscribers: Subscribers,
}

impl Knot {
    /// Build a knot from edges in cycle order.
    ///
    /// Returns `Err(KnotError::InvalidStructure)` if the edges do not form a
    /// closed self-avoiding loop of at least four edges.
    pub fn new(
        name: impl Into<String>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, KnotError> {
        let name = name.into();
        let edges: Ring<Edge> = edges.into_iter().collect();
        if let Err(reason) = check_structure(edges.iter().map(Edge::direction)) {
            debug!(name = %name, %reason, "rejected knot structure");
            return Err(KnotError::InvalidStructure(reason));
        }
        Ok(Self::from_ring(name, edges, Node::ORIGIN))
    }

    /// Build a uniformly colored knot from directions.
    pub fn from_directions(
        name: impl Into<String>,
        directions: impl IntoIterator<Item = Direction>,
    ) -> Result<Self, KnotError> {
        Self::new(name, directions.into_iter().map(Edge::plain))
    }

    /// Load a knot from persisted data, allocating fresh edge identities.
    pub fn from_data(data: &KnotData) -> Result<Self, KnotError> {
        Self::new(data.name.clone(), data.edges.iter().map(|spec| spec.to_edge()))
    }

    /// Reduce to persisted data, starting at the start edge.
    pub fn to_data(&self) -> KnotData {
        KnotData {
            name: self.name.clone(),
            edges: self.edges.iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn from_ring(name: String, edges: Ring<Edge>, offset: Node) -> Self {
        Self {
            name,
            edges,
            selection: IndexSet::new(),
            last_selected: None,
            offset,
            characteristic: OnceCell::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the knot.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false`: a knot has at least four edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in cycle order, starting at the start edge.
    pub fn edges(&self) -> knotwork_ring::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Directions in cycle order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.edges.iter().map(Edge::direction)
    }

    /// The edge every traversal starts at.
    pub fn start_edge(&self) -> Option<&Edge> {
        self.edges.nth(0)
    }

    /// Lattice position of the start edge's start node.
    ///
    /// Moves keep untouched edges where they are in the lattice, so when the
    /// start edge changes (or is itself moved) this offset changes with it.
    pub fn offset(&self) -> Node {
        self.offset
    }

    /// Every edge paired with its absolute start node, in cycle order.
    pub fn positions(&self) -> impl Iterator<Item = (Node, &Edge)> + '_ {
        self.edges.iter().scan(self.offset, |node, edge| {
            let start = *node;
            *node += edge.direction();
            Some((start, edge))
        })
    }

    /// Whether an edge with this identity is part of the knot.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.handle_of(edge).is_some()
    }

    /// The edge with this identity.
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.handle_of(edge).map(|h| &self.edges[h])
    }

    /// Receive a [`KnotEvent`] after every committed change.
    pub fn subscribe(&mut self) -> Receiver<KnotEvent> {
        self.subscribers.subscribe()
    }

    /// Recolor every selected edge, keeping identities.
    ///
    /// Emits [`KnotEvent::EdgesChanged`] if any color actually changed.
    pub fn color_selection(&mut self, color: Color) -> usize {
        let targets: Vec<RingHandle> = self
            .edges
            .find(|e| self.selection.contains(&e.id()) && e.color() != color);
        for &h in &targets {
            let recolored = self.edges[h].recolored(color);
            self.edges[h] = recolored;
        }
        if !targets.is_empty() {
            trace!(knot = %self.name, count = targets.len(), %color, "recolored selection");
            self.subscribers.emit(KnotEvent::EdgesChanged);
        }
        targets.len()
    }

    pub(crate) fn handle_of(&self, edge: EdgeId) -> Option<RingHandle> {
        self.edges.find_first(|e| e.id() == edge)
    }

    /// Swap in a new committed edge cycle.
    pub(crate) fn replace_structure(&mut self, edges: Ring<Edge>, offset: Node) {
        self.edges = edges;
        self.offset = offset;
        self.characteristic.take();
        self.subscribers.emit(KnotEvent::EdgesChanged);
    }
}

impl Default for Knot {
    fn default() -> Self {
        Self::from_ring(
            "Untitled".to_string(),
            DEFAULT_LAYOUT.into_iter().map(Edge::plain).collect(),
            Node::ORIGIN,
        )
    }
}

/// Deep copy for undo/redo snapshots.
///
/// The copy shares no state with the original and starts without
/// subscribers. Edge identities are kept.
impl Clone for Knot {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            edges: self.edges.clone(),
            selection: self.selection.clone(),
            last_selected: self.last_selected,
            offset: self.offset,
            characteristic: self.characteristic.clone(),
            subscribers: Subscribers::default(),
        }
    }
}

impl fmt::Display for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for d in self.directions() {
            write!(f, "{}", d.letter())?;
        }
        write!(f, "]")
    }
}
