//! Cached views and the flattened object traversal.
//!
//! The views are built on first access after an update by walking the node
//! incidence maps, and memoized until the next update.

use knotwork_core::{EdgeId, Node};

use crate::grid::{Grid, NodeContent};
use crate::junction::{Junction, JunctionKey};
use crate::pipe::Pipe;
use crate::surface::Surface;
use crate::tick::Tick;

/// Any object the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Renderable<'a> {
    /// An edge.
    Pipe(&'a Pipe),
    /// A pass through a node.
    Junction(&'a Junction),
    /// An enclosed lattice point.
    Surface(&'a Surface),
}

impl Renderable<'_> {
    /// Lattice node the object is anchored at.
    pub fn anchor(&self) -> Node {
        match self {
            Renderable::Pipe(p) => p.from(),
            Renderable::Junction(j) => j.node(),
            Renderable::Surface(s) => s.location(),
        }
    }
}

impl Grid {
    /// Pipes confirmed by the latest update, grouped by start node.
    pub fn pipes(&self) -> impl Iterator<Item = &Pipe> + '_ {
        let keys = self.pipe_view.get_or_init(|| {
            self.nodes
                .values()
                .flat_map(|content| content.outgoing.iter())
                .filter(|(_, t)| **t == self.tick)
                .map(|(id, _)| *id)
                .collect::<Vec<EdgeId>>()
        });
        keys.iter().filter_map(|id| self.pipes.get(id))
    }

    /// Junctions confirmed by the latest update, grouped by node.
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> + '_ {
        let keys = self.junction_view.get_or_init(|| {
            self.nodes
                .values()
                .flat_map(|content| content.junctions.values())
                .filter(|j| j.tick() == self.tick)
                .map(Junction::key)
                .collect::<Vec<JunctionKey>>()
        });
        keys.iter().filter_map(|key| self.junction(key))
    }

    /// Renderable surfaces confirmed by the latest update.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> + '_ {
        self.surface_keys()
            .iter()
            .filter_map(|at| self.surfaces.get(at))
    }

    fn surface_keys(&self) -> &[Node] {
        self.surface_view.get_or_init(|| {
            self.surfaces
                .values()
                .filter(|s| s.tick() == self.tick && s.is_renderable())
                .map(Surface::location)
                .collect()
        })
    }

    /// Every renderable object: per node its outgoing pipes then its
    /// junctions, nodes in first-seen order, then all surfaces.
    pub fn objects(&self) -> Objects<'_> {
        Objects::new(self)
    }
}

enum Frame<'a> {
    Nodes(indexmap::map::Values<'a, Node, NodeContent>),
    Pipes(indexmap::map::Keys<'a, EdgeId, Tick>),
    Junctions(indexmap::map::Values<'a, JunctionKey, Junction>),
    Surfaces(std::slice::Iter<'a, Node>),
}

/// Iterator returned by [`Grid::objects`].
///
/// Walks the grid's nested collections with an explicit stack of open
/// frames, innermost on top.
pub struct Objects<'a> {
    grid: &'a Grid,
    stack: Vec<Frame<'a>>,
}

impl<'a> Objects<'a> {
    fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            stack: vec![
                Frame::Surfaces(grid.surface_keys().iter()),
                Frame::Nodes(grid.nodes.values()),
            ],
        }
    }
}

impl<'a> Iterator for Objects<'a> {
    type Item = Renderable<'a>;

    fn next(&mut self) -> Option<Renderable<'a>> {
        loop {
            match self.stack.last_mut()? {
                Frame::Nodes(nodes) => match nodes.next() {
                    Some(content) => {
                        self.stack.push(Frame::Junctions(content.junctions.values()));
                        self.stack.push(Frame::Pipes(content.outgoing.keys()));
                    }
                    None => {
                        self.stack.pop();
                    }
                },
                Frame::Pipes(ids) => match ids.next() {
                    Some(id) => {
                        if let Some(pipe) = self.grid.pipes.get(id) {
                            return Some(Renderable::Pipe(pipe));
                        }
                    }
                    None => {
                        self.stack.pop();
                    }
                },
                Frame::Junctions(junctions) => match junctions.next() {
                    Some(junction) => return Some(Renderable::Junction(junction)),
                    None => {
                        self.stack.pop();
                    }
                },
                Frame::Surfaces(locations) => match locations.next() {
                    Some(at) => {
                        if let Some(surface) = self.grid.surfaces.get(at) {
                            return Some(Renderable::Surface(surface));
                        }
                    }
                    None => {
                        self.stack.pop();
                    }
                },
            }
        }
    }
}
