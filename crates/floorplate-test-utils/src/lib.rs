//! Test utilities for Floorplate development.
//!
//! Space builders for common fixtures and [`assert_consistent`], which
//! recomputes the union of registered footprints and compares it with a
//! controller's occupancy index.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use floorplate_layout::{Footprint, PlacementController};

pub use fixtures::{grid_of, room, room_at, row_of};

/// Panic unless the occupancy index holds exactly the union of the
/// registered spaces' footprints, each cell mapped to its owner.
pub fn assert_consistent(plan: &PlacementController) {
    let mut expected = 0usize;
    for space in plan.registry().iter() {
        let footprint = Footprint::of(space, space.position());
        for cell in footprint.iter() {
            assert_eq!(
                plan.occupancy().occupant(&cell),
                Some(space.id()),
                "cell {cell} of '{}' not mapped to it",
                space.id()
            );
        }
        expected += footprint.len();
    }
    assert_eq!(
        plan.occupancy().len(),
        expected,
        "index has {} cells, registered footprints cover {expected}",
        plan.occupancy().len()
    );
}
