//! Core types for the Floorplate spatial layout engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the plain data the rest of the workspace operates on: space
//! identifiers, the [`Space`] description, plan geometry, grid snapping,
//! and the [`LayoutError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod grid;
pub mod id;
pub mod space;

pub use error::LayoutError;
pub use geometry::{effective_extent, extent_for, Extent, GridPosition, Rect, Rotation};
pub use grid::{snap, Pitch};
pub use id::SpaceId;
pub use space::Space;
