//! Benchmark profiles for the Floorplate layout engine.
//!
//! - [`office_floor`]: a deterministic floor of mixed-size rooms
//! - [`loaded_controller`]: the same floor already placed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use floorplate_core::{GridPosition, Rotation, Space};
use floorplate_layout::PlacementController;

/// `count` rooms on a 10 ft module, packed row by row into a floor
/// `cols` modules wide. Sizes and rotations cycle deterministically.
pub fn office_floor(count: usize, cols: usize) -> Vec<Space> {
    (0..count)
        .map(|i| {
            let w = 10.0 - (i % 3) as f64 * 2.5;
            let d = 10.0 - (i % 2) as f64 * 5.0;
            let x = (i % cols) as f64 * 10.0;
            let y = (i / cols) as f64 * 10.0;
            let rotation = if i % 4 == 0 { Rotation::Deg90 } else { Rotation::Deg0 };
            Space::new(format!("room-{i}"), w, d, 9.0)
                .expect("bench dimensions are positive")
                .at(GridPosition::new(x, y, 0.0))
                .rotated(rotation)
        })
        .collect()
}

/// A controller holding [`office_floor`].
pub fn loaded_controller(count: usize, cols: usize) -> PlacementController {
    let mut plan = PlacementController::default();
    plan.restore(office_floor(count, cols))
        .expect("office floor rooms fit their modules");
    plan
}
