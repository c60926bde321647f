//! Overall bounding geometry and perimeter membership.

use floorplate_core::{Rect, Space, SpaceId};

/// Axis-aligned box covering every space's rotation-adjusted rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
    /// `max_x - min_x`.
    pub width: f64,
    /// `max_y - min_y`.
    pub depth: f64,
}

impl BoundingBox {
    /// Plan area of the box.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

/// Bounding box of `spaces`, or `None` for an empty list.
///
/// Levels are ignored: the box covers every space's plan rectangle.
pub fn bounding_box(spaces: &[Space]) -> Option<BoundingBox> {
    let mut rects = spaces.iter().map(Rect::of);
    let first = rects.next()?;
    let hull = rects.fold(first, |acc, r| Rect {
        min_x: acc.min_x.min(r.min_x),
        min_y: acc.min_y.min(r.min_y),
        max_x: acc.max_x.max(r.max_x),
        max_y: acc.max_y.max(r.max_y),
    });
    Some(BoundingBox {
        min_x: hull.min_x,
        min_y: hull.min_y,
        max_x: hull.max_x,
        max_y: hull.max_y,
        width: hull.width(),
        depth: hull.depth(),
    })
}

/// `true` iff one of the space's edges lies exactly on the matching edge
/// of `bbox`.
pub fn is_on_perimeter(space: &Space, bbox: &BoundingBox) -> bool {
    let r = Rect::of(space);
    r.min_x == bbox.min_x || r.max_x == bbox.max_x || r.min_y == bbox.min_y || r.max_y == bbox.max_y
}

/// Ids of the spaces touching the bounding box of `spaces`, in input order.
pub fn perimeter_spaces(spaces: &[Space]) -> Vec<SpaceId> {
    let Some(bbox) = bounding_box(spaces) else {
        return Vec::new();
    };
    spaces
        .iter()
        .filter(|s| is_on_perimeter(s, &bbox))
        .map(|s| s.id().clone())
        .collect()
}
