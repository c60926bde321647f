//! Plan geometry: positions, quarter-turn rotations, extents and rectangles.
//!
//! All lengths are in feet. `x`/`y` are horizontal plan axes and `z` is
//! the level height. Rotation only ever happens in quarter turns, so the
//! axis-aligned extent of a rotated space is fully determined by the
//! parity of the rotation; [`effective_extent`] is the one place that
//! rule lives.

use crate::error::LayoutError;
use crate::space::Space;

/// A position in plan coordinates.
///
/// `(x, y)` is the minimum corner of a space's rotation-adjusted
/// rectangle. `z` selects the level and is never snapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPosition {
    /// Horizontal plan coordinate (feet).
    pub x: f64,
    /// Horizontal plan coordinate (feet).
    pub y: f64,
    /// Level height (feet).
    pub z: f64,
}

impl GridPosition {
    /// Construct a position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reject NaN and infinite coordinates.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (axis, v) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !v.is_finite() {
                return Err(LayoutError::invalid(format!(
                    "{axis} coordinate must be finite, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Exact key of the level this position sits on.
    ///
    /// Levels are discrete caller-assigned heights, so two positions share
    /// a level iff their `z` values are equal. `-0.0` and `0.0` map to the
    /// same key.
    pub fn level_key(&self) -> u64 {
        if self.z == 0.0 {
            0
        } else {
            self.z.to_bits()
        }
    }

    /// `true` if both positions are on the same level.
    pub fn same_level(&self, other: &GridPosition) -> bool {
        self.level_key() == other.level_key()
    }
}

/// A quarter-turn rotation about the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// Quarter turn.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three-quarter turn.
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order starting at 0°.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Parse a rotation from degrees.
    ///
    /// Only exact values 0, 90, 180 and 270 are accepted; anything else
    /// (including 360 or negative angles) is
    /// [`LayoutError::InvalidRotation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplate_core::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(90).unwrap(), Rotation::Deg90);
    /// assert!(Rotation::from_degrees(45).is_err());
    /// ```
    pub fn from_degrees(degrees: i32) -> Result<Self, LayoutError> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(LayoutError::InvalidRotation { degrees }),
        }
    }

    /// The rotation in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Advance by +90° modulo 360°.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// `true` for 90° and 270°, where width and depth swap.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

/// Axis-aligned plan extent of a space after rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Extent along x (feet).
    pub width: f64,
    /// Extent along y (feet).
    pub depth: f64,
}

impl Extent {
    /// Plan area (square feet).
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

/// Rotation-adjusted `(width, depth)` of a space.
///
/// Every component that needs a space's plan extent (footprints,
/// adjacency, bounding boxes, metrics) goes through this function.
pub fn effective_extent(space: &Space) -> Extent {
    extent_for(space.width(), space.depth(), space.rotation())
}

/// Rotation-adjusted extent for raw dimensions.
pub fn extent_for(width: f64, depth: f64, rotation: Rotation) -> Extent {
    if rotation.swaps_axes() {
        Extent {
            width: depth,
            depth: width,
        }
    } else {
        Extent { width, depth }
    }
}

/// Half-open axis-aligned plan rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum x (inclusive).
    pub min_x: f64,
    /// Minimum y (inclusive).
    pub min_y: f64,
    /// Maximum x (exclusive).
    pub max_x: f64,
    /// Maximum y (exclusive).
    pub max_y: f64,
}

impl Rect {
    /// Rectangle anchored at `position` with the given extent.
    pub fn at(position: GridPosition, extent: Extent) -> Self {
        Self {
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + extent.width,
            max_y: position.y + extent.depth,
        }
    }

    /// The rotation-adjusted rectangle a space covers at its own position.
    pub fn of(space: &Space) -> Self {
        Self::at(space.position(), effective_extent(space))
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn depth(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Plan area.
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }

    /// Length of the rectangle's outline.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.depth())
    }
}
