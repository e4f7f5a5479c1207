//! Pipes: one renderable segment per knot edge.

use knotwork_core::{Color, Direction, Edge, EdgeId, Node};

use crate::tick::Tick;

/// Renderable proxy for one knot edge.
///
/// Keyed by the edge's [`EdgeId`]. A pipe survives as long as its edge stays
/// in the knot; moves that shift the edge update `from` and `to` in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    edge: EdgeId,
    direction: Direction,
    color: Color,
    from: Node,
    to: Node,
    tick: Tick,
}

impl Pipe {
    pub(crate) fn new(edge: &Edge, from: Node, tick: Tick) -> Self {
        Self {
            edge: edge.id(),
            direction: edge.direction(),
            color: edge.color(),
            from,
            to: from + edge.direction(),
            tick,
        }
    }

    /// Refresh from the edge's current state. Returns whether the pipe moved.
    pub(crate) fn refresh(&mut self, edge: &Edge, from: Node, tick: Tick) -> bool {
        let moved = self.from != from;
        self.direction = edge.direction();
        self.color = edge.color();
        self.from = from;
        self.to = from + edge.direction();
        self.tick = tick;
        moved
    }

    /// Identity of the edge this pipe renders.
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Direction of travel along the knot.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Color of the edge.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Lattice node the edge starts at.
    pub fn from(&self) -> Node {
        self.from
    }

    /// Lattice node the edge ends at.
    pub fn to(&self) -> Node {
        self.to
    }

    /// Tick of the update that last confirmed this pipe.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// World-space start and end points.
    pub fn world_endpoints(&self, unit: f32) -> ([f32; 3], [f32; 3]) {
        (self.from.to_world(unit), self.to.to_world(unit))
    }

    /// World-space midpoint.
    pub fn world_midpoint(&self, unit: f32) -> [f32; 3] {
        let (a, b) = self.world_endpoints(unit);
        [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_the_direction() {
        let edge = Edge::plain(Direction::Forward);
        let mut pipe = Pipe::new(&edge, Node::new(1, 2, 3), Tick(1));
        assert_eq!(pipe.to(), Node::new(1, 2, 2));
        assert_eq!(pipe.world_midpoint(10.0), [10.0, 20.0, 25.0]);

        assert!(pipe.refresh(&edge, Node::new(0, 0, 0), Tick(2)));
        assert_eq!(pipe.to(), Node::new(0, 0, -1));
        assert_eq!(pipe.tick(), Tick(2));
        assert!(!pipe.refresh(&edge, Node::new(0, 0, 0), Tick(3)));
        assert_eq!(pipe.edge(), edge.id());
    }
}
