//! Surfaces: lattice points enclosed by the knot within a plane.
//!
//! The sweep looks at the knot one axis-aligned line at a time. For a plane
//! with normal `N`, pick one in-plane axis `L` as the line axis; the other
//! in-plane axis `M` is the cross axis. Knot edges running along `M` cross
//! lines of constant `M`, and are called rails. Walking along a line, rails
//! alternate between entering and leaving the region the knot encloses in
//! that plane, so consecutive rails pair up and every lattice point strictly
//! between a pair is inside:
//!
//! ```text
//!         L ->
//!   rail  .  .  .  rail        rail  .  rail
//!    |    x  x  x   |           |    x   |
//! ```
//!
//! A line with an odd number of rails is degenerate in that plane and
//! contributes nothing.

use std::collections::{BTreeMap, HashSet};

use knotwork_core::{Axis, Direction, Edge, EdgeId, Node};
use smallvec::SmallVec;
use tracing::trace;

use crate::tick::Tick;

/// One bounding rail of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceSide {
    /// The rail edge.
    pub rail: EdgeId,
    /// Direction from the surface point towards the rail, along the line.
    pub toward: Direction,
    /// Normal of the plane the rail was found in.
    pub normal: Axis,
}

/// Renderable proxy for a lattice point enclosed by the knot.
///
/// Keyed by its location. Sides accumulate over all planes and line axes
/// of one update; there are at most twelve.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    location: Node,
    sides: SmallVec<[SurfaceSide; 12]>,
    tick: Tick,
}

impl Surface {
    pub(crate) fn new(location: Node, tick: Tick) -> Self {
        Self {
            location,
            sides: SmallVec::new(),
            tick,
        }
    }

    /// Record a side found during the update at `tick`.
    ///
    /// The first side of a new update replaces the sides of the previous
    /// one.
    pub(crate) fn add_side(&mut self, side: SurfaceSide, tick: Tick) {
        if self.tick != tick {
            self.sides.clear();
            self.tick = tick;
        }
        if !self.sides.contains(&side) {
            self.sides.push(side);
        }
    }

    /// The enclosed lattice point.
    pub fn location(&self) -> Node {
        self.location
    }

    /// Bounding rails found so far.
    pub fn sides(&self) -> &[SurfaceSide] {
        &self.sides
    }

    /// Plane normals this point is enclosed in.
    pub fn normals(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.sides.iter().any(|s| s.normal == *axis))
    }

    /// Whether enough sides are known to draw the surface.
    pub fn is_renderable(&self) -> bool {
        self.sides.len() >= 2
    }

    /// Tick of the update that last confirmed this surface.
    pub fn tick(&self) -> Tick {
        self.tick
    }
}

/// A rail crossing a line, by its coordinate along the line.
type Rail = (i32, EdgeId);

/// Pair up the rails of one line, sorted along the line.
///
/// Returns `None` when the rail count is odd.
pub(crate) fn pair_rails(rails: &mut [Rail]) -> Option<Vec<(Rail, Rail)>> {
    if rails.len() % 2 != 0 {
        return None;
    }
    rails.sort_unstable();
    Some(rails.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Run the sweep over a knot given as `(start node, edge)` pairs.
///
/// Returns every enclosed point with one side per bounding rail, in a
/// deterministic order. Points on the knot itself are never enclosed.
pub(crate) fn sweep(positions: &[(Node, &Edge)]) -> Vec<(Node, SurfaceSide)> {
    let on_knot: HashSet<Node> = positions.iter().map(|(n, _)| *n).collect();
    let mut found = Vec::new();

    for normal in Axis::ALL {
        let (a, b) = normal.others();
        for (line, cross) in [(a, b), (b, a)] {
            let mut lines: BTreeMap<(i32, i32), Vec<Rail>> = BTreeMap::new();
            for (start, edge) in positions {
                if edge.direction().axis() != Some(cross) {
                    continue;
                }
                let lower = if edge.direction().is_positive() {
                    *start
                } else {
                    *start + edge.direction()
                };
                lines
                    .entry((lower.coord(normal), lower.coord(cross)))
                    .or_default()
                    .push((lower.coord(line), edge.id()));
            }

            for ((plane, m), mut rails) in lines {
                let Some(pairs) = pair_rails(&mut rails) else {
                    trace!(%normal, %line, plane, cross = m, rails = rails.len(), "odd rail count, line skipped");
                    continue;
                };
                for ((lo, lo_rail), (hi, hi_rail)) in pairs {
                    for l in lo + 1..hi {
                        let point = Node::ORIGIN
                            .with_coord(normal, plane)
                            .with_coord(cross, m)
                            .with_coord(line, l);
                        if on_knot.contains(&point) {
                            continue;
                        }
                        found.push((
                            point,
                            SurfaceSide {
                                rail: lo_rail,
                                toward: line.negative(),
                                normal,
                            },
                        ));
                        found.push((
                            point,
                            SurfaceSide {
                                rail: hi_rail,
                                toward: line.positive(),
                                normal,
                            },
                        ));
                    }
                }
            }
        }
    }
    found
}
