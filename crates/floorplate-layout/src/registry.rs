//! Canonical storage of placed spaces.

use floorplate_core::{Space, SpaceId};
use indexmap::IndexMap;

/// Placed spaces keyed by id.
///
/// The registry holds no legality logic: it trusts the placement
/// controller to have validated every insert. Lookup, insert and delete
/// are O(1). Enumeration order is deterministic (insertion order, with a
/// removed entry's slot taken by the most recently inserted space).
#[derive(Clone, Debug, Default)]
pub struct SpaceRegistry {
    spaces: IndexMap<SpaceId, Space>,
}

impl SpaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a space.
    pub fn get(&self, id: &SpaceId) -> Option<&Space> {
        self.spaces.get(id)
    }

    /// `true` if `id` is registered.
    pub fn contains(&self, id: &SpaceId) -> bool {
        self.spaces.contains_key(id)
    }

    /// Number of registered spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Iterate registered spaces.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.values()
    }

    /// Iterate registered ids.
    pub fn ids(&self) -> impl Iterator<Item = &SpaceId> {
        self.spaces.keys()
    }

    /// Insert or replace the entry for `space.id()`.
    pub(crate) fn insert(&mut self, space: Space) -> Option<Space> {
        self.spaces.insert(space.id().clone(), space)
    }

    pub(crate) fn remove(&mut self, id: &SpaceId) -> Option<Space> {
        self.spaces.swap_remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.spaces.clear();
    }
}
