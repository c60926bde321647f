//! Error types for layout operations.
//!
//! Every condition here is an expected, recoverable rejection. A caller
//! must handle the `Err` before treating a layout change as applied.
//! Registry/index divergence is a defect and is never reported through
//! this type.

use crate::id::SpaceId;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// Errors returned by placement operations and argument validation.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// The requested footprint overlaps cells already occupied on the
    /// same level.
    Collision {
        /// The space whose placement was rejected.
        id: SpaceId,
        /// Distinct occupants of the overlapping cells. Never empty.
        conflicts: SmallVec<[SpaceId; 4]>,
    },
    /// The operation referenced an id that is not registered.
    NotFound {
        /// The missing id.
        id: SpaceId,
    },
    /// A space with this id is already registered.
    DuplicateId {
        /// The id that is already in use.
        id: SpaceId,
    },
    /// A rotation outside {0, 90, 180, 270} degrees.
    InvalidRotation {
        /// The rejected value, in degrees.
        degrees: i32,
    },
    /// Non-positive or non-finite pitch, dimension or coordinate, or a
    /// footprint that exceeds the configured cell limit.
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
}

impl LayoutError {
    /// Shorthand for building an [`InvalidArgument`](Self::InvalidArgument).
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// `true` for [`Collision`](Self::Collision).
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }

    /// `true` for [`NotFound`](Self::NotFound).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Occupants reported by a collision, empty for every other variant.
    pub fn conflicts(&self) -> &[SpaceId] {
        match self {
            Self::Collision { conflicts, .. } => conflicts,
            _ => &[],
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision { id, conflicts } => {
                write!(f, "space '{id}' collides with ")?;
                for (i, other) in conflicts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{other}'")?;
                }
                Ok(())
            }
            Self::NotFound { id } => write!(f, "space '{id}' not found"),
            Self::DuplicateId { id } => write!(f, "space '{id}' is already placed"),
            Self::InvalidRotation { degrees } => {
                write!(f, "rotation {degrees} is not one of 0, 90, 180, 270")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for LayoutError {}
