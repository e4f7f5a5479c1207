//! The [`Grid`]: a tick-stamped index of renderable objects.

use std::cell::OnceCell;
use std::fmt;

use indexmap::map::Entry;
use indexmap::IndexMap;
use knotwork_core::{Edge, EdgeId, Node};
use knotwork_knot::Knot;
use tracing::trace;

use crate::config::GridConfig;
use crate::error::GridConfigError;
use crate::junction::{JointShape, Junction, JunctionKey};
use crate::pipe::Pipe;
use crate::surface::{self, Surface};
use crate::tick::Tick;

/// Everything the grid knows about one lattice node.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeContent {
    /// Edges starting here.
    pub(crate) outgoing: IndexMap<EdgeId, Tick>,
    /// Edges ending here.
    pub(crate) incoming: IndexMap<EdgeId, Tick>,
    pub(crate) junctions: IndexMap<JunctionKey, Junction>,
    pub(crate) joint: Option<JointShape>,
}

impl NodeContent {
    fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty() && self.junctions.is_empty()
    }

    /// Number the passes through this node and classify its joint.
    fn classify(&mut self) {
        let mut order: Vec<_> = self.junctions.values().map(Junction::order).collect();
        order.sort_unstable();
        let count = u8::try_from(order.len()).unwrap_or(u8::MAX);
        self.joint = JointShape::classify(self.junctions.values().map(Junction::shape));
        let Some(joint) = self.joint else {
            return;
        };
        for (index, (_, _, key)) in order.into_iter().enumerate() {
            if let Some(junction) = self.junctions.get_mut(&key) {
                junction.place(u8::try_from(index).unwrap_or(u8::MAX), count, joint);
            }
        }
    }
}

/// Created, kept and removed counts for one kind of object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Churn {
    /// Objects that appeared in this update.
    pub created: usize,
    /// Objects confirmed (and possibly updated in place).
    pub kept: usize,
    /// Stale objects swept away.
    pub removed: usize,
}

impl Churn {
    /// Objects alive after the update.
    pub fn live(&self) -> usize {
        self.created + self.kept
    }
}

impl fmt::Display for Churn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} ={} -{}", self.created, self.kept, self.removed)
    }
}

/// What a [`Grid::update`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// The grid's tick after the update.
    pub tick: Tick,
    /// Pipe churn.
    pub pipes: Churn,
    /// Junction churn.
    pub junctions: Churn,
    /// Surface churn.
    pub surfaces: Churn,
    /// Pipes that were kept but whose endpoints moved.
    pub moved_pipes: usize,
}

/// Renderable index over a [`Knot`].
///
/// The grid owns one [`Pipe`] per knot edge, one [`Junction`] per pass of
/// the knot through a node and, when enabled, one [`Surface`] per enclosed
/// lattice point. [`Grid::update`] re-walks the knot and reconciles these
/// objects by key rather than rebuilding them, so an object whose key
/// survives an edit keeps its identity (and whatever animation state a
/// renderer attached to it).
///
/// # Invalidation
///
/// Each update advances the [`Tick`] and stamps every object it confirms.
/// Whatever still carries an older tick afterwards is removed. The lazily
/// built views ([`Grid::pipes`], [`Grid::junctions`], [`Grid::surfaces`])
/// are dropped at the start of every update.
///
/// # Examples
///
/// ```
/// use knotwork_grid::Grid;
/// use knotwork_knot::Knot;
///
/// let knot = Knot::default();
/// let mut grid = Grid::default();
/// let report = grid.update(&knot);
/// assert_eq!(report.pipes.created, knot.len());
/// assert_eq!(grid.pipes().count(), knot.len());
/// ```
#[derive(Debug)]
pub struct Grid {
    pub(crate) config: GridConfig,
    pub(crate) tick: Tick,
    pub(crate) nodes: IndexMap<Node, NodeContent>,
    pub(crate) pipes: IndexMap<EdgeId, Pipe>,
    pub(crate) surfaces: IndexMap<Node, Surface>,
    pub(crate) pipe_view: OnceCell<Vec<EdgeId>>,
    pub(crate) junction_view: OnceCell<Vec<JunctionKey>>,
    pub(crate) surface_view: OnceCell<Vec<Node>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tick: Tick::default(),
            nodes: IndexMap::new(),
            pipes: IndexMap::new(),
            surfaces: IndexMap::new(),
            pipe_view: OnceCell::new(),
            junction_view: OnceCell::new(),
            surface_view: OnceCell::new(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Change the configuration from the next update on.
    pub fn set_config(&mut self, config: GridConfig) -> Result<(), GridConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Tick of the latest update.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// World-space position of a lattice node.
    pub fn world(&self, node: Node) -> [f32; 3] {
        node.to_world(self.config.unit)
    }

    /// Reconcile the grid with the knot's current edge cycle.
    pub fn update(&mut self, knot: &Knot) -> UpdateReport {
        self.tick = self.tick.next();
        let tick = self.tick;
        self.pipe_view.take();
        self.junction_view.take();
        self.surface_view.take();

        let mut report = UpdateReport {
            tick,
            ..UpdateReport::default()
        };
        let positions: Vec<(Node, &Edge)> = knot.positions().collect();

        for &(start, edge) in &positions {
            match self.pipes.entry(edge.id()) {
                Entry::Occupied(mut slot) => {
                    if slot.get_mut().refresh(edge, start, tick) {
                        report.moved_pipes += 1;
                    }
                    report.pipes.kept += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(Pipe::new(edge, start, tick));
                    report.pipes.created += 1;
                }
            }
            let end = start + edge.direction();
            self.nodes
                .entry(start)
                .or_default()
                .outgoing
                .insert(edge.id(), tick);
            self.nodes
                .entry(end)
                .or_default()
                .incoming
                .insert(edge.id(), tick);
        }

        let n = positions.len();
        for i in 0..n {
            let (_, from) = positions[i];
            let (node, to) = positions[(i + 1) % n];
            let key = JunctionKey {
                from: from.id(),
                to: to.id(),
                node,
            };
            let content = self.nodes.entry(node).or_default();
            match content.junctions.entry(key) {
                Entry::Occupied(mut slot) => {
                    slot.get_mut().refresh(from, to, tick);
                    report.junctions.kept += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(Junction::new(key, from, to, tick));
                    report.junctions.created += 1;
                }
            }
        }

        self.sweep_stale(&mut report);
        for content in self.nodes.values_mut() {
            content.classify();
        }

        if self.config.surfaces {
            self.update_surfaces(&positions, &mut report);
        } else {
            report.surfaces.removed = self.surfaces.len();
            self.surfaces.clear();
        }

        trace!(
            knot = %knot.name(),
            %tick,
            pipes = %report.pipes,
            junctions = %report.junctions,
            surfaces = %report.surfaces,
            moved = report.moved_pipes,
            "grid updated"
        );
        report
    }

    /// Drop everything stamped before the current tick.
    fn sweep_stale(&mut self, report: &mut UpdateReport) {
        let tick = self.tick;
        let pipes_before = self.pipes.len();
        self.pipes.retain(|_, pipe| pipe.tick() == tick);
        report.pipes.removed = pipes_before - self.pipes.len();

        for content in self.nodes.values_mut() {
            content.outgoing.retain(|_, t| *t == tick);
            content.incoming.retain(|_, t| *t == tick);
            let before = content.junctions.len();
            content.junctions.retain(|_, j| j.tick() == tick);
            report.junctions.removed += before - content.junctions.len();
        }
        self.nodes.retain(|_, content| !content.is_empty());
    }

    fn update_surfaces(&mut self, positions: &[(Node, &Edge)], report: &mut UpdateReport) {
        let tick = self.tick;
        for (point, side) in surface::sweep(positions) {
            match self.surfaces.entry(point) {
                Entry::Occupied(mut slot) => {
                    if slot.get().tick() != tick {
                        report.surfaces.kept += 1;
                    }
                    slot.get_mut().add_side(side, tick);
                }
                Entry::Vacant(slot) => {
                    slot.insert(Surface::new(point, tick)).add_side(side, tick);
                    report.surfaces.created += 1;
                }
            }
        }
        let before = self.surfaces.len();
        self.surfaces.retain(|_, s| s.tick() == tick);
        report.surfaces.removed = before - self.surfaces.len();
    }

    /// The pipe rendering `edge`.
    pub fn pipe(&self, edge: EdgeId) -> Option<&Pipe> {
        self.pipes.get(&edge)
    }

    /// The junction with this key.
    pub fn junction(&self, key: &JunctionKey) -> Option<&Junction> {
        self.nodes.get(&key.node)?.junctions.get(key)
    }

    /// The surface at `location`.
    pub fn surface(&self, location: Node) -> Option<&Surface> {
        self.surfaces.get(&location)
    }

    /// Joint shape of a node the knot passes through.
    pub fn joint_at(&self, node: Node) -> Option<JointShape> {
        self.nodes.get(&node)?.joint
    }

    /// Junctions at one node, in insertion order.
    pub fn junctions_at(&self, node: Node) -> impl Iterator<Item = &Junction> + '_ {
        self.nodes
            .get(&node)
            .into_iter()
            .flat_map(|content| content.junctions.values())
    }

    /// Every node the knot touches, in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.keys().copied()
    }

    /// Edges starting and ending at `node`.
    pub fn incidence(&self, node: Node) -> (Vec<EdgeId>, Vec<EdgeId>) {
        match self.nodes.get(&node) {
            Some(content) => (
                content.outgoing.keys().copied().collect(),
                content.incoming.keys().copied().collect(),
            ),
            None => (Vec::new(), Vec::new()),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            config: GridConfig::default(),
            tick: Tick::default(),
            nodes: IndexMap::new(),
            pipes: IndexMap::new(),
            surfaces: IndexMap::new(),
            pipe_view: OnceCell::new(),
            junction_view: OnceCell::new(),
            surface_view: OnceCell::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_core::Direction::{self, *};

    fn knot(dirs: &[Direction]) -> Knot {
        Knot::from_directions("k", dirs.iter().copied()).unwrap()
    }

    #[test]
    fn rejects_bad_config() {
        let config = GridConfig {
            unit: 0.0,
            surfaces: true,
        };
        assert!(Grid::new(config.clone()).is_err());
        let mut grid = Grid::default();
        assert!(grid.set_config(config).is_err());
        assert_eq!(grid.config().unit, 100.0);
    }

    #[test]
    fn first_update_creates_everything() {
        let k = knot(&[Up, Right, Down, Left]);
        let mut grid = Grid::default();
        let report = grid.update(&k);
        assert_eq!(report.tick, Tick(1));
        assert_eq!(report.pipes, Churn { created: 4, kept: 0, removed: 0 });
        assert_eq!(report.junctions.created, 4);
        assert_eq!(grid.nodes().count(), 4);
        for node in grid.nodes() {
            assert_eq!(grid.joint_at(node), Some(JointShape::Angled));
            let (out, inc) = grid.incidence(node);
            assert_eq!((out.len(), inc.len()), (1, 1));
        }
    }

    #[test]
    fn second_update_keeps_identity() {
        let k = knot(&[Up, Right, Down, Left]);
        let mut grid = Grid::default();
        grid.update(&k);
        let report = grid.update(&k);
        assert_eq!(report.pipes, Churn { created: 0, kept: 4, removed: 0 });
        assert_eq!(report.junctions, Churn { created: 0, kept: 4, removed: 0 });
        assert_eq!(report.moved_pipes, 0);
    }

    #[test]
    fn moved_edges_update_in_place() {
        let mut k = knot(&[Up, Right, Down, Left]);
        let top = k.edges().nth(1).unwrap().id();
        let mut grid = Grid::default();
        grid.update(&k);
        k.select(top);
        assert!(k.move_selection(Up, 1));
        let report = grid.update(&k);
        assert_eq!(report.pipes, Churn { created: 2, kept: 4, removed: 0 });
        assert_eq!(report.moved_pipes, 1);
        assert_eq!(grid.pipe(top).map(Pipe::from), Some(Node::new(0, 2, 0)));
        // Up->Right and Right->Down are replaced by junctions around the
        // bridges.
        assert_eq!(report.junctions.removed, 2);
        assert_eq!(report.junctions.created, 4);
        assert_eq!(grid.joint_at(Node::new(0, 1, 0)), Some(JointShape::Straight));
    }

    #[test]
    fn shrinking_knot_sweeps_pipes_and_nodes() {
        let mut k = knot(&[Up, Up, Right, Down, Down, Left]);
        let ids: Vec<EdgeId> = k.edges().map(Edge::id).collect();
        let mut grid = Grid::default();
        grid.update(&k);
        k.select(ids[2]);
        assert!(k.move_selection(Down, 1));
        let report = grid.update(&k);
        assert_eq!(report.pipes.removed, 2);
        assert_eq!(grid.pipes.len(), 4);
        assert!(grid.pipe(ids[1]).is_none());
        assert!(grid.pipe(ids[3]).is_none());
        assert_eq!(grid.nodes().count(), 4);
        assert!(!grid.nodes().any(|n| n == Node::new(0, 2, 0)));
    }

    #[test]
    fn touching_passes_form_a_crossing() {
        // Two unit squares sharing the corner (1, 1, 0).
        let k = knot(&[Up, Right, Up, Right, Down, Left, Down, Left]);
        let mut grid = Grid::default();
        grid.update(&k);
        let corner = Node::new(1, 1, 0);
        assert_eq!(grid.joint_at(corner), Some(JointShape::Crossing { bends: 2 }));
        let mut indices: Vec<(u8, u8)> = grid
            .junctions_at(corner)
            .map(|j| (j.index_at_node(), j.count_at_node()))
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn disabling_surfaces_drops_them() {
        let k = knot(&[Up, Up, Right, Right, Down, Down, Left, Left]);
        let mut grid = Grid::default();
        let report = grid.update(&k);
        assert_eq!(report.surfaces.created, 1);
        let centre = grid.surface(Node::new(1, 1, 0)).unwrap();
        assert_eq!(centre.sides().len(), 4);
        assert!(centre.is_renderable());

        let config = grid.config().clone().without_surfaces();
        grid.set_config(config).unwrap();
        let report = grid.update(&k);
        assert_eq!(report.surfaces.removed, 1);
        assert!(grid.surface(Node::new(1, 1, 0)).is_none());
    }
}
