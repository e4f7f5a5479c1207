//! Grid reconciliation against generated knots.

use std::collections::HashSet;

use knotwork_core::{Axis, Direction, EdgeId, Node};
use knotwork_grid::{Grid, GridConfig, Renderable};
use knotwork_knot::Knot;
use knotwork_test_utils::{edge_ids, flat_ring, random_knot, rectangle, select_indices};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn pipe_ids(grid: &Grid) -> HashSet<EdgeId> {
    grid.pipes().map(|p| p.edge()).collect()
}

proptest! {
    #[test]
    fn one_current_pipe_per_edge(seed in 0u64..300, moves in 0usize..30) {
        let knot = random_knot(seed, moves);
        let mut grid = Grid::default();
        grid.update(&knot);
        prop_assert_eq!(grid.pipes().count(), knot.len());
        prop_assert_eq!(grid.junctions().count(), knot.len());
        prop_assert!(grid.pipes().all(|p| p.tick() == grid.tick()));
        prop_assert_eq!(pipe_ids(&grid), edge_ids(&knot).into_iter().collect::<HashSet<_>>());
        for (start, edge) in knot.positions() {
            let pipe = grid.pipe(edge.id()).unwrap();
            prop_assert_eq!(pipe.from(), start);
            prop_assert_eq!(pipe.to(), start + edge.direction());
        }
    }

    #[test]
    fn incremental_update_matches_fresh_build(
        seed in 0u64..300,
        start in 0usize..64,
        dir in direction(),
    ) {
        let mut knot = random_knot(seed, 10);
        let mut incremental = Grid::default();
        incremental.update(&knot);

        let ids = edge_ids(&knot);
        knot.select(ids[start % ids.len()]);
        let survivors: HashSet<EdgeId> = ids.iter().copied().collect();
        knot.move_selection(dir, 1);
        let report = incremental.update(&knot);

        let mut fresh = Grid::default();
        fresh.update(&knot);
        prop_assert_eq!(pipe_ids(&incremental), pipe_ids(&fresh));
        let kept = pipe_ids(&incremental).intersection(&survivors).count();
        prop_assert_eq!(report.pipes.kept, kept);
        prop_assert_eq!(report.pipes.live(), knot.len());

        let junctions = |g: &Grid| g.junctions().map(|j| j.key()).collect::<HashSet<_>>();
        prop_assert_eq!(junctions(&incremental), junctions(&fresh));
        let surfaces = |g: &Grid| g.surfaces().map(|s| (s.location(), s.sides().len())).collect::<HashSet<_>>();
        prop_assert_eq!(surfaces(&incremental), surfaces(&fresh));
        for node in fresh.nodes() {
            prop_assert_eq!(incremental.joint_at(node), fresh.joint_at(node));
        }
    }

    #[test]
    fn objects_cover_every_view(seed in 0u64..200, moves in 0usize..20) {
        let knot = random_knot(seed, moves);
        let mut grid = Grid::default();
        grid.update(&knot);
        let total = grid.pipes().count() + grid.junctions().count() + grid.surfaces().count();
        prop_assert_eq!(grid.objects().count(), total);
    }
}

#[test]
fn removed_edges_lose_their_pipes() {
    let mut knot = rectangle(1, 2);
    let ids = edge_ids(&knot);
    let mut grid = Grid::default();
    grid.update(&knot);
    assert_eq!(grid.pipes().count(), 6);

    select_indices(&mut knot, &[2]);
    assert!(knot.move_selection(Direction::Down, 1));
    let report = grid.update(&knot);
    assert_eq!(grid.pipes().count(), 4);
    assert_eq!(report.pipes.removed, 2);
    assert!(grid.pipe(ids[1]).is_none());
    assert!(grid.pipe(ids[2]).is_some());
}

#[test]
fn flat_ring_encloses_its_centre() {
    let knot = flat_ring(2);
    let mut grid = Grid::default();
    grid.update(&knot);
    let surfaces: Vec<_> = grid.surfaces().collect();
    assert_eq!(surfaces.len(), 1);
    assert_eq!(surfaces[0].location(), Node::new(1, 0, 1));
    assert_eq!(surfaces[0].sides().len(), 4);
    assert_eq!(surfaces[0].normals().collect::<Vec<_>>(), vec![Axis::Y]);
}

#[test]
fn surfaces_follow_the_config() {
    let knot = rectangle(3, 3);
    let mut grid = Grid::new(GridConfig::default().without_surfaces()).unwrap();
    grid.update(&knot);
    assert_eq!(grid.surfaces().count(), 0);

    grid.set_config(GridConfig::default()).unwrap();
    let report = grid.update(&knot);
    assert_eq!(report.surfaces.created, 4);
    assert_eq!(grid.surfaces().count(), 4);
    assert!(grid
        .objects()
        .any(|o| matches!(o, Renderable::Surface(s) if s.location() == Node::new(1, 1, 0))));
}

#[test]
fn identity_survives_unrelated_moves() {
    let mut knot = Knot::default();
    let mut grid = Grid::default();
    grid.update(&knot);
    let first = knot.start_edge().map(|e| e.id()).unwrap();
    let before = grid.pipe(first).cloned().unwrap();

    knot.select_all();
    assert!(knot.move_selection(Direction::Up, 2));
    grid.update(&knot);
    let after = grid.pipe(first).unwrap();
    assert_eq!(after.edge(), before.edge());
    assert_eq!(after.from(), before.from() + Node::new(0, 2, 0));
    assert_eq!(grid.world(after.from()), [0.0, 200.0, 0.0]);
}
