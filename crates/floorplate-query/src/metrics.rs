//! Area, perimeter and compactness of a layout.

use crate::adjacency::contacts;
use crate::bounds::bounding_box;
use floorplate_core::{Rect, Space};
use std::f64::consts::PI;

/// Aggregate measurements of a set of spaces.
///
/// Meant for the spaces of a single level; see [`metrics_by_level`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Number of spaces measured.
    pub space_count: usize,
    /// Sum of plan areas (square feet).
    pub total_area: f64,
    /// Sum of enclosed volumes (cubic feet).
    pub total_volume: f64,
    /// Length of every edge not shared with another space: the sum of
    /// rectangle perimeters minus twice each shared contact length.
    /// Includes the edges of internal courtyards.
    pub exterior_perimeter: f64,
    /// Isoperimetric quotient `4πA / P²`: 1.0 for a circle, π/4 for a
    /// square, smaller for elongated or ragged layouts.
    pub compactness: f64,
    /// Occupied share of the bounding box. In `(0, 1]` for non-overlapping
    /// spaces such as a controller's layout; overlapping input can push it
    /// above 1.
    pub fill_ratio: f64,
}

/// Measure `spaces`, or `None` for an empty list.
pub fn layout_metrics(spaces: &[Space]) -> Option<LayoutMetrics> {
    let bbox = bounding_box(spaces)?;
    let total_area: f64 = spaces.iter().map(Space::area).sum();
    let total_volume: f64 = spaces.iter().map(Space::volume).sum();
    let outline: f64 = spaces.iter().map(|s| Rect::of(s).perimeter()).sum();
    let shared: f64 = contacts(spaces).iter().map(|c| c.length).sum();
    let exterior_perimeter = outline - 2.0 * shared;

    Some(LayoutMetrics {
        space_count: spaces.len(),
        total_area,
        total_volume,
        exterior_perimeter,
        compactness: 4.0 * PI * total_area / (exterior_perimeter * exterior_perimeter),
        fill_ratio: total_area / bbox.area(),
    })
}

/// The spaces sharing one exact level height.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    /// Level height (feet).
    pub z: f64,
    /// Spaces on this level, in input order.
    pub spaces: Vec<Space>,
}

/// Group spaces by exact `z`, lowest level first.
pub fn levels(spaces: &[Space]) -> Vec<Level> {
    let mut sorted: Vec<&Space> = spaces.iter().collect();
    // Stable sort keeps input order within a level.
    sorted.sort_by(|a, b| a.position().z.total_cmp(&b.position().z));

    let mut out: Vec<Level> = Vec::new();
    for space in sorted {
        let position = space.position();
        match out.last_mut() {
            Some(level) if level.spaces[0].position().same_level(&position) => {
                level.spaces.push(space.clone());
            }
            _ => out.push(Level {
                z: position.z,
                spaces: vec![space.clone()],
            }),
        }
    }
    out
}

/// [`layout_metrics`] for each level, lowest first.
pub fn metrics_by_level(spaces: &[Space]) -> Vec<(f64, LayoutMetrics)> {
    levels(spaces)
        .into_iter()
        .filter_map(|level| layout_metrics(&level.spaces).map(|m| (level.z, m)))
        .collect()
}
