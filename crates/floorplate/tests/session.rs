//! A drag-and-drop session as the interaction layer would drive it:
//! candidate positions are snapped and checked for preview on every
//! pointer sample, and the layout is only mutated once, at drop time.

use floorplate::prelude::*;
use floorplate_test_utils::{assert_consistent, room_at, row_of};

#[test]
fn drag_preview_then_single_commit() {
    let mut plan = PlacementController::new(LayoutConfig::with_pitch(2.5)).unwrap();
    plan.restore(row_of("bay", 3, 10.0, 10.0)).unwrap();
    let id = SpaceId::from("bay2");
    let bay = plan.get(&id).unwrap();
    let cells_before = plan.occupancy().len();

    // The last sample would land on bay1 and keeps the previous preview.
    let samples = [(20.3, 0.2), (22.9, 3.1), (26.2, 11.4), (12.0, 1.0)];
    let mut preview = bay.position();
    for (x, y) in samples {
        let candidate = GridPosition::new(
            plan.pitch().snap(x),
            plan.pitch().snap(y),
            bay.position().z,
        );
        if plan.can_move_to(&id, candidate).is_ok() {
            preview = candidate;
        }
    }
    assert_eq!(plan.get(&id), Some(bay));
    assert_eq!(plan.occupancy().len(), cells_before);
    assert_eq!(preview, GridPosition::new(25.0, 12.5, 0.0));

    let dropped = plan.move_to(&id, preview).unwrap();
    assert_eq!(dropped.position(), preview);
    assert_consistent(&plan);
}

#[test]
fn persisted_layout_round_trips_through_restore() {
    let mut plan = PlacementController::default();
    plan.restore(row_of("s", 4, 10.0, 8.0)).unwrap();
    plan.rotate(&"s3".into()).unwrap();
    let saved = plan.spaces();

    let mut reloaded = PlacementController::default();
    assert_eq!(reloaded.restore(saved.clone()).unwrap(), 4);
    assert_eq!(reloaded.spaces(), saved);
    assert_consistent(&reloaded);
}

#[test]
fn stale_persisted_data_is_rejected_whole() {
    let mut plan = PlacementController::default();
    let stale = vec![
        room_at("a", 10.0, 10.0, 0.0, 0.0),
        room_at("b", 10.0, 10.0, 5.0, 0.0),
    ];
    let err = plan.restore(stale).unwrap_err();
    assert!(err.is_collision());
    assert!(plan.is_empty());
    assert!(plan.occupancy().is_empty());
}

#[test]
fn presets_drive_resize_minimum() {
    let mut plan = PlacementController::default();
    plan.place(room_at("a", 30.0, 30.0, 0.0, 0.0)).unwrap();
    for pitch in Pitch::PRESETS {
        plan.set_pitch(pitch.get()).unwrap();
        let below = pitch.get() / 2.0;
        assert!(matches!(
            plan.resize(&"a".into(), below, 30.0, 9.0),
            Err(LayoutError::InvalidArgument { .. })
        ));
        plan.resize(&"a".into(), pitch.get(), pitch.get(), 9.0).unwrap();
    }
    assert_consistent(&plan);
}
