//! Grid snapping.
//!
//! Plan coordinates are snapped to the nearest multiple of the active
//! pitch. Ties (exactly halfway between two grid lines) round away from
//! zero, the same rule for negative and positive inputs. Level heights
//! (`z`) never pass through here.

use crate::error::LayoutError;
use crate::geometry::GridPosition;
use std::fmt;

/// Snap `value` to the nearest multiple of `pitch`.
///
/// Returns [`LayoutError::InvalidArgument`] if `pitch` is not finite and
/// positive, or if `value` is not finite.
///
/// # Examples
///
/// ```
/// use floorplate_core::snap;
///
/// assert_eq!(snap(7.4, 5.0).unwrap(), 5.0);
/// assert_eq!(snap(7.5, 5.0).unwrap(), 10.0);
/// assert_eq!(snap(-2.5, 5.0).unwrap(), -5.0);
/// assert!(snap(1.0, 0.0).is_err());
/// ```
pub fn snap(value: f64, pitch: f64) -> Result<f64, LayoutError> {
    let pitch = Pitch::new(pitch)?;
    if !value.is_finite() {
        return Err(LayoutError::invalid(format!(
            "cannot snap non-finite value {value}"
        )));
    }
    Ok(pitch.snap(value))
}

/// A validated grid pitch in feet (finite, > 0).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pitch(f64);

impl Pitch {
    /// The pitches offered by the interaction layer's snap menu.
    pub const PRESETS: [Pitch; 8] = [
        Pitch(1.0),
        Pitch(2.5),
        Pitch(5.0),
        Pitch(7.5),
        Pitch(10.0),
        Pitch(15.0),
        Pitch(20.0),
        Pitch(30.0),
    ];

    /// Validate a pitch value.
    pub fn new(value: f64) -> Result<Self, LayoutError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "pitch must be finite and positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The pitch in feet.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Snap a finite value to this pitch.
    pub fn snap(self, value: f64) -> f64 {
        (value / self.0).round() * self.0
    }

    /// Snap `x` and `y`; `z` passes through untouched.
    pub fn snap_position(self, position: GridPosition) -> GridPosition {
        GridPosition {
            x: self.snap(position.x),
            y: self.snap(position.y),
            z: position.z,
        }
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}
