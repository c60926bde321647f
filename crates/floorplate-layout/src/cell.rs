//! Unit grid cells and space footprints.

use floorplate_core::{effective_extent, GridPosition, LayoutError, Space};
use std::fmt;

/// Largest plan coordinate magnitude a footprint may reach: 2^53, the
/// range in which every whole foot is exactly representable as `f64`.
pub const MAX_PLAN_COORDINATE: f64 = 9_007_199_254_740_992.0;

/// One unit cell of the occupancy grid: `[x, x+1) x [y, y+1)` on one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Cell column (feet, floored).
    pub x: i64,
    /// Cell row (feet, floored).
    pub y: i64,
    /// Exact level key; see [`GridPosition::level_key`].
    pub level: u64,
}

impl CellKey {
    /// The cell containing a plan position.
    pub fn containing(position: GridPosition) -> Self {
        Self {
            x: position.x.floor() as i64,
            y: position.y.floor() as i64,
            level: position.level_key(),
        }
    }

    /// Cell `(x, y)` on the level at height `z`.
    pub fn on_level(x: i64, y: i64, z: f64) -> Self {
        Self {
            x,
            y,
            level: GridPosition::new(0.0, 0.0, z).level_key(),
        }
    }

    /// Level height this cell belongs to.
    pub fn z(&self) -> f64 {
        f64::from_bits(self.level)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} @ z={}", self.x, self.y, self.z())
    }
}

/// The set of unit cells a space covers on one level.
///
/// Stored as half-open cell ranges, so a footprint is cheap to build for
/// a hypothetical placement and iterates without allocating. Every axis
/// covers at least one cell, so spaces narrower than one foot still
/// claim the cell they sit in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
    level: u64,
}

impl Footprint {
    /// Footprint of `space` if it were anchored at `position`.
    ///
    /// Uses `position` rather than `space.position()` so callers can test
    /// placements before committing them.
    pub fn of(space: &Space, position: GridPosition) -> Self {
        let extent = effective_extent(space);
        let (min_x, max_x) = axis_span(position.x, extent.width);
        let (min_y, max_y) = axis_span(position.y, extent.depth);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            level: position.level_key(),
        }
    }

    /// Like [`Footprint::of`], rejecting footprints with more than
    /// `max_cells` cells or reaching beyond [`MAX_PLAN_COORDINATE`].
    pub fn bounded(
        space: &Space,
        position: GridPosition,
        max_cells: usize,
    ) -> Result<Self, LayoutError> {
        let extent = effective_extent(space);
        let axes = [
            ("x", position.x, extent.width),
            ("y", position.y, extent.depth),
        ];
        for (axis, origin, length) in axes {
            let far = origin + length;
            let inside = origin.abs() <= MAX_PLAN_COORDINATE && far.abs() <= MAX_PLAN_COORDINATE;
            if !inside {
                return Err(LayoutError::invalid(format!(
                    "footprint of '{}' spans {axis} {origin}..{far}, beyond +/-{MAX_PLAN_COORDINATE}",
                    space.id()
                )));
            }
        }
        let footprint = Self::of(space, position);
        let len = footprint.len();
        if len > max_cells {
            return Err(LayoutError::invalid(format!(
                "footprint of '{}' covers {len} cells, limit is {max_cells}",
                space.id()
            )));
        }
        Ok(footprint)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        let dx = self.max_x.abs_diff(self.min_x);
        let dy = self.max_y.abs_diff(self.min_y);
        usize::try_from(dx.saturating_mul(dy)).unwrap_or(usize::MAX)
    }

    /// Whether the footprint has no cells. Never true for footprints
    /// accepted by [`Footprint::bounded`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Level key shared by every cell.
    pub fn level(&self) -> u64 {
        self.level
    }

    /// Whether `cell` belongs to this footprint.
    pub fn contains(&self, cell: &CellKey) -> bool {
        cell.level == self.level
            && (self.min_x..self.max_x).contains(&cell.x)
            && (self.min_y..self.max_y).contains(&cell.y)
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellKey> {
        let Self {
            min_x,
            max_x,
            min_y,
            max_y,
            level,
        } = *self;
        (min_y..max_y).flat_map(move |y| (min_x..max_x).map(move |x| CellKey { x, y, level }))
    }
}

/// Footprint of `space` at `position`; see [`Footprint::of`].
pub fn cells_for(space: &Space, position: GridPosition) -> Footprint {
    Footprint::of(space, position)
}

/// Half-open cell range `[floor(origin), floor(origin + extent))`,
/// widened to one cell if the extent rounds away to nothing.
fn axis_span(origin: f64, extent: f64) -> (i64, i64) {
    let lo = origin.floor() as i64;
    let hi = (origin + extent).floor() as i64;
    (lo, hi.max(lo.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplate_core::Rotation;

    fn room(w: f64, d: f64) -> Space {
        Space::new("r", w, d, 9.0).unwrap()
    }

    #[test]
    fn footprint_covers_whole_rectangle() {
        let f = cells_for(&room(3.0, 2.0), GridPosition::new(1.0, 4.0, 0.0));
        assert_eq!(f.len(), 6);
        let cells: Vec<_> = f.iter().collect();
        assert_eq!(cells.first(), Some(&CellKey::on_level(1, 4, 0.0)));
        assert_eq!(cells.last(), Some(&CellKey::on_level(3, 5, 0.0)));
        assert!(!f.contains(&CellKey::on_level(4, 4, 0.0)));
        assert!(!f.contains(&CellKey::on_level(1, 4, 1.0)));
    }

    #[test]
    fn footprint_uses_rotated_extent() {
        let s = room(20.0, 10.0).rotated(Rotation::Deg90);
        let f = cells_for(&s, GridPosition::default());
        assert!(f.contains(&CellKey::on_level(9, 19, 0.0)));
        assert!(!f.contains(&CellKey::on_level(10, 0, 0.0)));
        assert_eq!(f.len(), 200);
    }

    #[test]
    fn footprint_uses_supplied_position_not_own() {
        let s = room(2.0, 2.0).at(GridPosition::new(100.0, 100.0, 0.0));
        let f = cells_for(&s, GridPosition::default());
        assert!(f.contains(&CellKey::on_level(0, 0, 0.0)));
    }

    #[test]
    fn fractional_anchor_floors() {
        let f = cells_for(&room(2.5, 2.5), GridPosition::new(2.5, 0.0, 10.0));
        // x: floor(2.5)=2 .. floor(5.0)=5, y: 0 .. floor(2.5)=2
        assert_eq!(f.len(), 6);
        assert_eq!(f.level(), GridPosition::new(0.0, 0.0, 10.0).level_key());
    }

    #[test]
    fn tiny_space_claims_one_cell() {
        let f = cells_for(&room(0.25, 0.25), GridPosition::new(0.2, 0.2, 0.0));
        assert_eq!(f.len(), 1);
        assert!(!f.is_empty());
    }

    #[test]
    fn bounded_rejects_huge_footprints() {
        let s = room(1000.0, 1000.0);
        assert!(Footprint::bounded(&s, GridPosition::default(), 1_000_000).is_ok());
        assert!(matches!(
            Footprint::bounded(&s, GridPosition::default(), 999_999),
            Err(LayoutError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn bounded_rejects_coordinates_beyond_exact_range() {
        let s = room(10.0, 10.0);
        for position in [
            GridPosition::new(1e19, 0.0, 0.0),
            GridPosition::new(0.0, -1e19, 0.0),
            GridPosition::new(MAX_PLAN_COORDINATE - 5.0, 0.0, 0.0),
        ] {
            assert!(matches!(
                Footprint::bounded(&s, position, usize::MAX),
                Err(LayoutError::InvalidArgument { .. })
            ));
        }
        let edge = GridPosition::new(MAX_PLAN_COORDINATE - 16.0, 0.0, 0.0);
        let f = Footprint::bounded(&s, edge, usize::MAX).unwrap();
        assert_eq!(f.len(), 100);
    }

    #[test]
    fn levels_are_keyed_by_exact_height() {
        let s = room(2.0, 2.0);
        let ground = cells_for(&s, GridPosition::new(0.0, 0.0, 0.0));
        let mezzanine = cells_for(&s, GridPosition::new(0.0, 0.0, 0.5));
        assert_ne!(ground.level(), mezzanine.level());
        assert!(!mezzanine.contains(&CellKey::on_level(0, 0, 0.0)));
        assert_eq!(
            cells_for(&s, GridPosition::new(0.0, 0.0, -0.0)).level(),
            ground.level()
        );
    }

    #[test]
    fn negative_coordinates_floor_downwards() {
        let f = cells_for(&room(2.0, 1.0), GridPosition::new(-0.5, -1.0, -3.0));
        let cells: Vec<_> = f.iter().collect();
        assert_eq!(
            cells,
            vec![
                CellKey::on_level(-1, -1, -3.0),
                CellKey::on_level(0, -1, -3.0)
            ]
        );
    }
}
