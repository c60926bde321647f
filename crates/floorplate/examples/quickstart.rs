//! Floorplate Quickstart: lay out one level of a small office.
//!
//! Demonstrates:
//!   1. Building a controller with a snap pitch from the preset menu
//!   2. Placing spaces from imprecise drop positions
//!   3. Handling collision and not-found rejections
//!   4. Rotating, moving and resizing with rollback on failure
//!   5. Querying adjacency, perimeter membership and level metrics
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use floorplate::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Program ────────────────────────────────────────────────────

// (id, width, depth, height, drop x, drop y)
const PROGRAM: &[(&str, f64, f64, f64, f64, f64)] = &[
    ("lobby", 30.0, 20.0, 14.0, 0.4, 0.0),
    ("reception", 10.0, 10.0, 9.0, 31.0, 2.0),
    ("open-office", 40.0, 30.0, 9.0, 1.0, 21.0),
    ("meeting", 15.0, 10.0, 9.0, 41.0, 19.0),
    ("core", 10.0, 20.0, 14.0, 59.0, 0.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pitch = Pitch::PRESETS[2];
    let mut plan = PlacementController::new(LayoutConfig::with_pitch(pitch.get()))?;
    println!("snap pitch: {pitch}");

    for &(id, w, d, h, x, y) in PROGRAM {
        let space = Space::new(id, w, d, h)?.at(GridPosition::new(x, y, 0.0));
        match plan.place(space) {
            Ok(placed) => {
                let p = placed.position();
                println!("placed {id:<12} at ({:>5}, {:>5})", p.x, p.y);
            }
            Err(e) => println!("rejected {id}: {e}"),
        }
    }

    // A drop that lands on the lobby is rejected and changes nothing.
    let stray = Space::new("storage", 10.0, 10.0, 9.0)?.at(GridPosition::new(12.0, 8.0, 0.0));
    if let Err(e) = plan.place(stray) {
        println!("rejected storage: {e}");
    }

    // Rotation keeps the anchor and is refused if the turned footprint hits a neighbour.
    match plan.rotate(&"meeting".into()) {
        Ok(s) => println!("meeting rotated to {}°", s.rotation().degrees()),
        Err(e) => println!("rotate refused: {e}"),
    }

    plan.move_to(&"core".into(), GridPosition::new(61.0, 2.0, 0.0))?;
    plan.resize(&"reception".into(), 15.0, 10.0, 9.0)?;

    if let Err(e) = plan.remove(&"cafe".into()) {
        println!("{e}");
    }

    let spaces = plan.spaces();
    let graph = adjacency(&spaces);
    println!("\nadjacency ({} edges):", graph.edge_count());
    for (id, neighbours) in graph.iter() {
        let names: Vec<&str> = neighbours.iter().map(SpaceId::as_str).collect();
        println!("  {id:<12} -> {}", names.join(", "));
    }

    if let Some(bbox) = bounding_box(&spaces) {
        println!("\nbounding box: {} x {} ft", bbox.width, bbox.depth);
        for s in &spaces {
            let mark = if is_on_perimeter(s, &bbox) { "perimeter" } else { "interior" };
            println!("  {:<12} {mark}", s.id());
        }
    }

    for (z, m) in metrics_by_level(&spaces) {
        println!(
            "\nlevel z={z}: {} spaces, {:.0} sq ft, perimeter {:.0} ft, compactness {:.3}, fill {:.2}",
            m.space_count, m.total_area, m.exterior_perimeter, m.compactness, m.fill_ratio
        );
    }

    Ok(())
}
