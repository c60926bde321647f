//! End-to-end scenarios: place through a controller, then query.

use floorplate_core::{GridPosition, Rotation, Space, SpaceId};
use floorplate_layout::PlacementController;
use floorplate_query::{
    adjacency, bounding_box, contacts, is_on_perimeter, layout_metrics, metrics_by_level,
    perimeter_spaces, Side,
};
use floorplate_test_utils::{assert_consistent, grid_of, room_at, row_of};
use proptest::prelude::*;

#[test]
fn collision_then_adjacent_placement() {
    let mut plan = PlacementController::default();
    plan.place(room_at("a", 10.0, 10.0, 0.0, 0.0)).unwrap();

    let err = plan.place(room_at("b", 10.0, 10.0, 5.0, 5.0)).unwrap_err();
    assert!(err.is_collision());
    assert_eq!(err.conflicts(), &[SpaceId::from("a")]);

    plan.place(room_at("b", 10.0, 10.0, 10.0, 0.0)).unwrap();
    assert_consistent(&plan);

    let graph = adjacency(&plan.spaces());
    assert!(graph.are_adjacent(&"a".into(), &"b".into()));
    assert!(graph.are_adjacent(&"b".into(), &"a".into()));

    let c = contacts(&plan.spaces());
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].length, 10.0);
    assert!(matches!(c[0].side, Side::MaxX | Side::MinX));
}

#[test]
fn row_of_three_is_all_perimeter() {
    let mut plan = PlacementController::default();
    assert_eq!(plan.restore(row_of("s", 3, 10.0, 10.0)).unwrap(), 3);

    let spaces = plan.spaces();
    let bbox = bounding_box(&spaces).unwrap();
    assert_eq!(
        (bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y),
        (0.0, 0.0, 30.0, 10.0)
    );
    for s in &spaces {
        assert!(is_on_perimeter(s, &bbox), "{} should be on perimeter", s.id());
    }
    assert_eq!(perimeter_spaces(&spaces).len(), 3);

    let graph = adjacency(&spaces);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(&"s1".into()), 2);
}

#[test]
fn rotating_changes_adjacency() {
    let mut plan = PlacementController::default();
    plan.place(room_at("wide", 20.0, 10.0, 0.0, 0.0)).unwrap();
    plan.place(room_at("east", 10.0, 10.0, 20.0, 0.0)).unwrap();
    assert!(adjacency(&plan.spaces()).are_adjacent(&"wide".into(), &"east".into()));

    plan.rotate(&"wide".into()).unwrap();
    let graph = adjacency(&plan.spaces());
    assert!(!graph.are_adjacent(&"wide".into(), &"east".into()));
    assert_eq!(
        plan.get(&"wide".into()).map(|s| s.rotation()),
        Some(Rotation::Deg90)
    );
}

#[test]
fn metrics_follow_the_registry() {
    let mut plan = PlacementController::default();
    plan.restore(grid_of(2, 2, 10.0)).unwrap();
    let m = layout_metrics(&plan.spaces()).unwrap();
    assert_eq!(m.total_area, 400.0);
    assert_eq!(m.exterior_perimeter, 80.0);
    assert_eq!(m.fill_ratio, 1.0);

    plan.remove(&"r1c1".into()).unwrap();
    let m = layout_metrics(&plan.spaces()).unwrap();
    assert_eq!(m.total_area, 300.0);
    assert_eq!(m.fill_ratio, 0.75);
}

#[test]
fn stacked_levels_are_not_adjacent() {
    let mut plan = PlacementController::default();
    plan.place(room_at("ground", 10.0, 10.0, 0.0, 0.0)).unwrap();
    let upper = Space::new("upper", 10.0, 10.0, 9.0)
        .unwrap()
        .at(GridPosition::new(10.0, 0.0, 12.0));
    plan.place(upper).unwrap();
    assert_eq!(adjacency(&plan.spaces()).edge_count(), 0);
}

#[test]
fn half_foot_apart_is_another_level_everywhere() {
    let mut plan = PlacementController::default();
    plan.place(room_at("ground", 10.0, 10.0, 0.0, 0.0)).unwrap();
    plan.place(room_at("east", 10.0, 10.0, 10.0, 0.0)).unwrap();
    let mezzanine = Space::new("mezzanine", 10.0, 10.0, 9.0)
        .unwrap()
        .at(GridPosition::new(0.0, 0.0, 0.5));
    plan.place(mezzanine).unwrap();
    assert_consistent(&plan);

    let spaces = plan.spaces();
    let graph = adjacency(&spaces);
    assert!(graph.are_adjacent(&"ground".into(), &"east".into()));
    assert_eq!(graph.degree(&"mezzanine".into()), 0);
    let per_level = metrics_by_level(&spaces);
    assert_eq!(per_level.len(), 2);
    assert_eq!(per_level[1], (0.5, layout_metrics(&spaces[2..]).unwrap()));
}

fn arb_layout() -> impl Strategy<Value = Vec<Space>> {
    prop::collection::vec(
        (1u8..6, 1u8..6, 0u8..12, 0u8..12, 0u8..2, 0u8..4),
        0..25,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (w, d, x, y, level, rot))| {
                Space::new(format!("s{i}"), f64::from(w) * 2.5, f64::from(d) * 2.5, 9.0)
                    .unwrap()
                    .at(GridPosition::new(
                        f64::from(x) * 2.5,
                        f64::from(y) * 2.5,
                        f64::from(level) * 12.0,
                    ))
                    .rotated(Rotation::ALL[usize::from(rot)])
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(spaces in arb_layout()) {
        let graph = adjacency(&spaces);
        for (id, neighbours) in graph.iter() {
            for n in neighbours {
                prop_assert!(graph.are_adjacent(n, id), "{id} -> {n} without {n} -> {id}");
            }
        }
    }

    #[test]
    fn adjacency_ignores_input_order(spaces in arb_layout()) {
        let forward = adjacency(&spaces);
        let mut reversed = spaces.clone();
        reversed.reverse();
        let backward = adjacency(&reversed);
        prop_assert_eq!(forward.edge_count(), backward.edge_count());
        for (id, neighbours) in forward.iter() {
            for n in neighbours {
                prop_assert!(backward.are_adjacent(id, n));
            }
        }
    }

    #[test]
    fn placed_layouts_stay_inside_their_bounding_box(spaces in arb_layout()) {
        let mut plan = PlacementController::new(
            floorplate_layout::LayoutConfig::with_pitch(2.5),
        ).unwrap();
        for s in spaces {
            let _ = plan.place(s);
        }
        assert_consistent(&plan);
        let placed = plan.spaces();
        match bounding_box(&placed) {
            None => prop_assert!(placed.is_empty()),
            Some(bbox) => {
                prop_assert!(!perimeter_spaces(&placed).is_empty());
                for s in &placed {
                    let p = s.position();
                    prop_assert!(p.x >= bbox.min_x && p.y >= bbox.min_y);
                }
                let m = layout_metrics(&placed).unwrap();
                prop_assert!(m.fill_ratio > 0.0);
            }
        }
    }
}
