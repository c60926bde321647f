//! Placement controller configuration and validation.

use floorplate_core::Pitch;
use std::error::Error;
use std::fmt;

// ── LayoutConfig ───────────────────────────────────────────────────

/// Builder-input for a [`PlacementController`](crate::PlacementController).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Initial snap pitch in feet. Default: 1.0.
    pub pitch: f64,
    /// Largest footprint (in unit cells) a single space may cover.
    /// Placements beyond it are rejected before any cell is touched.
    /// Default: 1,000,000 (a 1000 ft x 1000 ft floor plate).
    pub max_footprint_cells: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pitch: 1.0,
            max_footprint_cells: 1_000_000,
        }
    }
}

impl LayoutConfig {
    /// Config with the given pitch and default limits.
    pub fn with_pitch(pitch: f64) -> Self {
        Self {
            pitch,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_pitch().map(|_| ())
    }

    /// Run [`validate`](Self::validate) and hand back the checked pitch.
    pub(crate) fn validated_pitch(&self) -> Result<Pitch, ConfigError> {
        let pitch =
            Pitch::new(self.pitch).map_err(|_| ConfigError::InvalidPitch { value: self.pitch })?;
        if self.max_footprint_cells == 0 {
            return Err(ConfigError::FootprintLimitZero);
        }
        Ok(pitch)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LayoutConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Pitch is NaN, infinite, zero, or negative.
    InvalidPitch {
        /// The invalid value.
        value: f64,
    },
    /// `max_footprint_cells` is zero, so nothing could ever be placed.
    FootprintLimitZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPitch { value } => {
                write!(f, "pitch must be finite and positive, got {value}")
            }
            Self::FootprintLimitZero => write!(f, "max_footprint_cells must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
