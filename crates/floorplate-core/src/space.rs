//! The [`Space`] description: the engine's unit of layout.

use crate::error::LayoutError;
use crate::geometry::{GridPosition, Rotation};
use crate::id::SpaceId;

/// A rectangular block of program (a room, a core, a corridor segment).
///
/// `Space` is plain data. Callers build one, hand it to the placement
/// controller by value and get clones back; the controller never exposes
/// a mutable reference into its registry. Dimensions are validated on
/// construction so every `Space` in existence has finite, positive
/// `width`, `depth` and `height`.
///
/// # Examples
///
/// ```
/// use floorplate_core::{GridPosition, Rotation, Space};
///
/// let office = Space::new("office-1", 12.0, 10.0, 9.0)
///     .unwrap()
///     .at(GridPosition::new(0.0, 0.0, 0.0))
///     .rotated(Rotation::Deg90);
/// assert_eq!(office.id().as_str(), "office-1");
/// assert_eq!(office.area(), 120.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Space {
    id: SpaceId,
    width: f64,
    depth: f64,
    height: f64,
    position: GridPosition,
    rotation: Rotation,
}

impl Space {
    /// Create an unrotated space at the origin.
    ///
    /// Returns [`LayoutError::InvalidArgument`] if any dimension is not
    /// finite and positive.
    pub fn new(
        id: impl Into<SpaceId>,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Result<Self, LayoutError> {
        check_dimension("width", width)?;
        check_dimension("depth", depth)?;
        check_dimension("height", height)?;
        Ok(Self {
            id: id.into(),
            width,
            depth,
            height,
            position: GridPosition::default(),
            rotation: Rotation::Deg0,
        })
    }

    /// Return this space anchored at `position`.
    pub fn at(mut self, position: GridPosition) -> Self {
        self.position = position;
        self
    }

    /// Return this space with the given rotation.
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Return this space with new dimensions, validated as in [`Space::new`].
    pub fn resized(mut self, width: f64, depth: f64, height: f64) -> Result<Self, LayoutError> {
        check_dimension("width", width)?;
        check_dimension("depth", depth)?;
        check_dimension("height", height)?;
        self.width = width;
        self.depth = depth;
        self.height = height;
        Ok(self)
    }

    /// Stable identifier.
    pub fn id(&self) -> &SpaceId {
        &self.id
    }

    /// Unrotated extent along x (feet).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Unrotated extent along y (feet).
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Floor-to-ceiling height (feet).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Minimum plan corner and level.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Quarter-turn rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Plan area (square feet). Rotation does not change it.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// Enclosed volume (cubic feet).
    pub fn volume(&self) -> f64 {
        self.area() * self.height
    }
}

fn check_dimension(name: &str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::invalid(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}
