//! Junctions: the turn between two consecutive edges at a node.
//!
//! Every node the knot passes through holds one junction per pass. A node
//! usually sees one pass, but a knot may touch itself at a vertex, so up to
//! three passes can share a node. The renderer picks its joint mesh from the
//! node's [`JointShape`], which depends only on the directions involved.

use std::fmt;

use knotwork_core::{Direction, Edge, EdgeId, Node};

use crate::tick::Tick;

/// Identity of a junction: the edge arriving, the edge leaving and the node
/// between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JunctionKey {
    /// Edge arriving at the node.
    pub from: EdgeId,
    /// Edge leaving the node.
    pub to: EdgeId,
    /// The shared node.
    pub node: Node,
}

impl fmt::Display for JunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}@({},{},{})",
            self.from, self.to, self.node.x, self.node.y, self.node.z
        )
    }
}

/// Shape of a single pass through a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JunctionShape {
    /// Both edges run the same way.
    Straight,
    /// The knot turns by ninety degrees.
    Angled,
}

/// Joint mesh selector for a node, from all passes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointShape {
    /// One straight pass.
    Straight,
    /// One turning pass.
    Angled,
    /// Two passes touching at the node.
    Crossing {
        /// How many of the passes turn.
        bends: u8,
    },
    /// Three passes touching at the node.
    Star {
        /// How many of the passes turn.
        bends: u8,
    },
}

impl JointShape {
    /// Classify a node from the shapes of the passes through it.
    ///
    /// Returns `None` for no passes. A lattice node has six edge slots, so
    /// more than three passes cannot occur; they classify as `Star`.
    pub fn classify(passes: impl IntoIterator<Item = JunctionShape>) -> Option<JointShape> {
        let (count, bends) = passes.into_iter().fold((0u8, 0u8), |(n, b), shape| {
            (
                n.saturating_add(1),
                b + u8::from(shape == JunctionShape::Angled),
            )
        });
        match count {
            0 => None,
            1 if bends == 0 => Some(JointShape::Straight),
            1 => Some(JointShape::Angled),
            2 => Some(JointShape::Crossing { bends }),
            _ => Some(JointShape::Star { bends }),
        }
    }
}

/// Renderable proxy for one pass of the knot through a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Junction {
    key: JunctionKey,
    incoming: Direction,
    outgoing: Direction,
    index_at_node: u8,
    count_at_node: u8,
    joint: JointShape,
    tick: Tick,
}

impl Junction {
    pub(crate) fn new(key: JunctionKey, from: &Edge, to: &Edge, tick: Tick) -> Self {
        Self {
            key,
            incoming: from.direction(),
            outgoing: to.direction(),
            index_at_node: 0,
            count_at_node: 1,
            joint: JointShape::Straight,
            tick,
        }
    }

    pub(crate) fn refresh(&mut self, from: &Edge, to: &Edge, tick: Tick) {
        self.incoming = from.direction();
        self.outgoing = to.direction();
        self.tick = tick;
    }

    pub(crate) fn place(&mut self, index: u8, count: u8, joint: JointShape) {
        self.index_at_node = index;
        self.count_at_node = count;
        self.joint = joint;
    }

    /// Sort key used to number the passes through a node.
    pub(crate) fn order(&self) -> (Direction, Direction, JunctionKey) {
        (self.incoming, self.outgoing, self.key)
    }

    /// This junction's identity.
    pub fn key(&self) -> JunctionKey {
        self.key
    }

    /// The node the junction sits on.
    pub fn node(&self) -> Node {
        self.key.node
    }

    /// Direction of the arriving edge.
    pub fn incoming(&self) -> Direction {
        self.incoming
    }

    /// Direction of the leaving edge.
    pub fn outgoing(&self) -> Direction {
        self.outgoing
    }

    /// Straight or angled.
    pub fn shape(&self) -> JunctionShape {
        if self.incoming == self.outgoing {
            JunctionShape::Straight
        } else {
            JunctionShape::Angled
        }
    }

    /// Position of this pass among all passes through the node, ordered by
    /// direction.
    pub fn index_at_node(&self) -> u8 {
        self.index_at_node
    }

    /// Number of passes through the node.
    pub fn count_at_node(&self) -> u8 {
        self.count_at_node
    }

    /// Joint shape of the whole node.
    pub fn joint(&self) -> JointShape {
        self.joint
    }

    /// Tick of the update that last confirmed this junction.
    pub fn tick(&self) -> Tick {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use JunctionShape::{Angled, Straight};

    #[test]
    fn classification_by_pass_count() {
        assert_eq!(JointShape::classify([]), None);
        assert_eq!(JointShape::classify([Straight]), Some(JointShape::Straight));
        assert_eq!(JointShape::classify([Angled]), Some(JointShape::Angled));
        assert_eq!(
            JointShape::classify([Angled, Straight]),
            Some(JointShape::Crossing { bends: 1 })
        );
        assert_eq!(
            JointShape::classify([Angled, Angled, Angled]),
            Some(JointShape::Star { bends: 3 })
        );
    }

    #[test]
    fn shape_follows_directions() {
        let a = Edge::plain(Direction::Up);
        let b = Edge::plain(Direction::Up);
        let c = Edge::plain(Direction::Left);
        let key = JunctionKey {
            from: a.id(),
            to: b.id(),
            node: Node::ORIGIN,
        };
        let mut j = Junction::new(key, &a, &b, Tick(1));
        assert_eq!(j.shape(), Straight);
        j.refresh(&a, &c, Tick(2));
        assert_eq!(j.shape(), Angled);
        assert_eq!(j.outgoing(), Direction::Left);
        assert_eq!(j.tick(), Tick(2));
    }
}
