//! Cell occupancy index.
//!
//! Maps every occupied unit cell to the id of the space that covers it.
//! Read access is public; [`occupy`](OccupancyIndex::occupy) and
//! [`release`](OccupancyIndex::release) are crate-private and only the
//! placement controller calls them, after a legality check has passed.

use crate::cell::{CellKey, Footprint};
use floorplate_core::SpaceId;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Cell -> occupant map used for O(cells) collision tests.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    cells: IndexMap<CellKey, SpaceId>,
}

impl OccupancyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` iff none of the footprint's cells are occupied.
    pub fn is_free(&self, footprint: &Footprint) -> bool {
        footprint.iter().all(|cell| !self.cells.contains_key(&cell))
    }

    /// Distinct occupants of the footprint's cells, in first-hit order.
    pub fn conflicts(&self, footprint: &Footprint) -> SmallVec<[SpaceId; 4]> {
        let mut out: SmallVec<[SpaceId; 4]> = SmallVec::new();
        for cell in footprint.iter() {
            if let Some(owner) = self.cells.get(&cell) {
                if !out.contains(owner) {
                    out.push(owner.clone());
                }
            }
        }
        out
    }

    /// The space covering `cell`, if any.
    pub fn occupant(&self, cell: &CellKey) -> Option<&SpaceId> {
        self.cells.get(cell)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate `(cell, occupant)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &SpaceId)> {
        self.cells.iter()
    }

    /// Mark every cell of `footprint` as covered by `id`.
    ///
    /// Callers must have checked [`is_free`](Self::is_free) first.
    pub(crate) fn occupy(&mut self, footprint: &Footprint, id: &SpaceId) {
        for cell in footprint.iter() {
            let prev = self.cells.insert(cell, id.clone());
            debug_assert!(prev.is_none(), "cell {cell} was already occupied");
        }
    }

    /// Free every cell of `footprint`.
    pub(crate) fn release(&mut self, footprint: &Footprint) {
        for cell in footprint.iter() {
            let prev = self.cells.swap_remove(&cell);
            debug_assert!(prev.is_some(), "cell {cell} was not occupied");
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}
