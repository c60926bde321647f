//! The placement state machine.
//!
//! Per space: absent -> placed -> (placed)* -> absent. Every transition
//! goes through [`PlacementController`], which keeps the registry and the
//! occupancy index in exact correspondence between calls.

use crate::cell::{CellKey, Footprint};
use crate::config::{ConfigError, LayoutConfig};
use crate::occupancy::OccupancyIndex;
use crate::registry::SpaceRegistry;
use floorplate_core::{GridPosition, LayoutError, Pitch, Space, SpaceId};
use tracing::debug;

/// Places, moves, rotates, resizes and removes spaces on the grid.
///
/// One controller per canvas. The controller is single-threaded: all
/// mutation takes `&mut self` and runs to completion without I/O.
///
/// # Examples
///
/// ```
/// use floorplate_core::{GridPosition, Space};
/// use floorplate_layout::PlacementController;
///
/// let mut plan = PlacementController::default();
/// let a = Space::new("a", 10.0, 10.0, 9.0).unwrap();
/// plan.place(a).unwrap();
///
/// let b = Space::new("b", 10.0, 10.0, 9.0)
///     .unwrap()
///     .at(GridPosition::new(5.0, 5.0, 0.0));
/// let err = plan.place(b).unwrap_err();
/// assert!(err.is_collision());
/// assert_eq!(plan.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PlacementController {
    config: LayoutConfig,
    pitch: Pitch,
    registry: SpaceRegistry,
    occupancy: OccupancyIndex,
}

impl Default for PlacementController {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            pitch: Pitch::default(),
            registry: SpaceRegistry::new(),
            occupancy: OccupancyIndex::new(),
        }
    }
}

impl PlacementController {
    /// Create an empty controller.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        let pitch = config.validated_pitch()?;
        Ok(Self {
            config,
            pitch,
            registry: SpaceRegistry::new(),
            occupancy: OccupancyIndex::new(),
        })
    }

    // ── Read-only views ────────────────────────────────────────────

    /// The configuration this controller was built with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The active snap pitch.
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Change the active snap pitch.
    ///
    /// Applies to subsequent `place`/`move_to` calls and to the resize
    /// minimum. Spaces already placed are not re-snapped.
    pub fn set_pitch(&mut self, value: f64) -> Result<(), LayoutError> {
        self.pitch = Pitch::new(value)?;
        debug!(pitch = value, "snap pitch changed");
        Ok(())
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &SpaceRegistry {
        &self.registry
    }

    /// Read-only view of the occupancy index.
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// A copy of the space registered under `id`.
    pub fn get(&self, id: &SpaceId) -> Option<Space> {
        self.registry.get(id).cloned()
    }

    /// `true` if `id` is placed.
    pub fn contains(&self, id: &SpaceId) -> bool {
        self.registry.contains(id)
    }

    /// Copies of every placed space.
    pub fn spaces(&self) -> Vec<Space> {
        self.registry.iter().cloned().collect()
    }

    /// Number of placed spaces.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// `true` if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The space covering the unit cell that contains `position`.
    pub fn space_at(&self, position: GridPosition) -> Option<Space> {
        position.validate().ok()?;
        let id = self.occupancy.occupant(&CellKey::containing(position))?;
        self.get(id)
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Dry-run of [`place`](Self::place): same checks, no mutation.
    pub fn can_place(&self, space: &Space) -> Result<(), LayoutError> {
        self.admit(space.clone()).map(|_| ())
    }

    /// Place a new space.
    ///
    /// `x`/`y` are snapped to the active pitch; `z` is kept exactly.
    /// Returns the committed copy. On rejection nothing changes.
    pub fn place(&mut self, space: Space) -> Result<Space, LayoutError> {
        let (space, footprint) = match self.admit(space) {
            Ok(admitted) => admitted,
            Err(e) => {
                debug!(error = %e, "placement rejected");
                return Err(e);
            }
        };
        self.occupancy.occupy(&footprint, space.id());
        self.registry.insert(space.clone());
        debug!(
            id = %space.id(),
            x = space.position().x,
            y = space.position().y,
            z = space.position().z,
            rotation = space.rotation().degrees(),
            "placed space"
        );
        Ok(space)
    }

    /// Remove a space, returning it.
    pub fn remove(&mut self, id: &SpaceId) -> Result<Space, LayoutError> {
        let space = self
            .evict(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        debug!(id = %id, "removed space");
        Ok(space)
    }

    /// Move a space to `position`.
    ///
    /// `x`/`y` are snapped to the active pitch, `z` is taken as given.
    /// Moving onto the space's own current cells always succeeds.
    pub fn move_to(&mut self, id: &SpaceId, position: GridPosition) -> Result<Space, LayoutError> {
        position.validate()?;
        let target = self.pitch.snap_position(position);
        self.transform(id, "move", |space| Ok(space.at(target)))
    }

    /// Dry-run of [`move_to`](Self::move_to): same checks, no mutation.
    ///
    /// Cells the space itself covers count as free, so an interaction
    /// layer can test every pointer sample and commit once on drop.
    pub fn can_move_to(&self, id: &SpaceId, position: GridPosition) -> Result<(), LayoutError> {
        position.validate()?;
        let current = self
            .registry
            .get(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        let candidate = current.clone().at(self.pitch.snap_position(position));
        let next = self.footprint(&candidate)?;
        let mut conflicts = self.occupancy.conflicts(&next);
        conflicts.retain(|other| *other != *id);
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(LayoutError::Collision {
                id: id.clone(),
                conflicts,
            })
        }
    }

    /// Rotate a space by +90° about its anchor.
    pub fn rotate(&mut self, id: &SpaceId) -> Result<Space, LayoutError> {
        self.transform(id, "rotate", |space| {
            let next = space.rotation().next();
            Ok(space.rotated(next))
        })
    }

    /// Change a space's dimensions, keeping its anchor and rotation.
    ///
    /// `width` and `depth` must be at least the active pitch; `height`
    /// only has to be positive.
    pub fn resize(
        &mut self,
        id: &SpaceId,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Result<Space, LayoutError> {
        let min = self.pitch.get();
        for (name, value) in [("width", width), ("depth", depth)] {
            // NaN fails this comparison and is rejected by `resized` below.
            if value < min {
                return Err(LayoutError::invalid(format!(
                    "{name} {value} is below the active pitch {min}"
                )));
            }
        }
        self.transform(id, "resize", |space| space.resized(width, depth, height))
    }

    /// Re-place a persisted layout.
    ///
    /// Each space goes through [`place`](Self::place), so stale or
    /// overlapping data is detected rather than trusted. All-or-nothing:
    /// on the first rejection every space placed by this call is removed
    /// again and the error is returned. Returns the number placed.
    pub fn restore<I>(&mut self, spaces: I) -> Result<usize, LayoutError>
    where
        I: IntoIterator<Item = Space>,
    {
        let mut placed: Vec<SpaceId> = Vec::new();
        for space in spaces {
            match self.place(space) {
                Ok(committed) => placed.push(committed.id().clone()),
                Err(e) => {
                    for id in placed.iter().rev() {
                        self.evict(id);
                    }
                    debug!(error = %e, rolled_back = placed.len(), "restore rejected");
                    return Err(e);
                }
            }
        }
        debug!(count = placed.len(), "restored layout");
        Ok(placed.len())
    }

    /// Remove every space.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.occupancy.clear();
        debug!("cleared layout");
    }

    // ── Internals ──────────────────────────────────────────────────

    /// Validate a new space and compute its snapped footprint.
    fn admit(&self, space: Space) -> Result<(Space, Footprint), LayoutError> {
        if self.registry.contains(space.id()) {
            return Err(LayoutError::DuplicateId {
                id: space.id().clone(),
            });
        }
        let position = space.position();
        position.validate()?;
        let space = space.at(self.pitch.snap_position(position));
        let footprint = self.footprint(&space)?;
        let conflicts = self.occupancy.conflicts(&footprint);
        if !conflicts.is_empty() {
            return Err(LayoutError::Collision {
                id: space.id().clone(),
                conflicts,
            });
        }
        Ok((space, footprint))
    }

    fn footprint(&self, space: &Space) -> Result<Footprint, LayoutError> {
        Footprint::bounded(space, space.position(), self.config.max_footprint_cells)
    }

    fn evict(&mut self, id: &SpaceId) -> Option<Space> {
        let space = self.registry.remove(id)?;
        self.occupancy
            .release(&Footprint::of(&space, space.position()));
        Some(space)
    }

    /// Release the old footprint, try the edited one, and restore the
    /// original cells if the edit collides.
    fn transform<F>(&mut self, id: &SpaceId, op: &'static str, edit: F) -> Result<Space, LayoutError>
    where
        F: FnOnce(Space) -> Result<Space, LayoutError>,
    {
        let current = self
            .registry
            .get(id)
            .cloned()
            .ok_or_else(|| LayoutError::NotFound { id: id.clone() })?;
        let candidate = edit(current.clone())?;
        let next = self.footprint(&candidate)?;
        let original = Footprint::of(&current, current.position());

        self.occupancy.release(&original);
        let conflicts = self.occupancy.conflicts(&next);
        if !conflicts.is_empty() {
            self.occupancy.occupy(&original, id);
            debug!(id = %id, op, conflicts = ?conflicts, "transform rejected");
            return Err(LayoutError::Collision {
                id: id.clone(),
                conflicts,
            });
        }
        self.occupancy.occupy(&next, id);
        self.registry.insert(candidate.clone());
        debug!(
            id = %id,
            op,
            x = candidate.position().x,
            y = candidate.position().y,
            z = candidate.position().z,
            rotation = candidate.rotation().degrees(),
            "transformed space"
        );
        Ok(candidate)
    }
}
