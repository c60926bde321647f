//! Placement state for the Floorplate layout engine.
//!
//! A [`PlacementController`] owns one [`SpaceRegistry`] and one
//! [`OccupancyIndex`] and is the only code path that mutates either.
//! Both are exposed to callers as read-only views; their mutating
//! methods are crate-private, so the registry and the index cannot be
//! driven out of step from outside this crate.
//!
//! # Atomicity
//!
//! Every mutating operation either fully applies or leaves the registry
//! and the index exactly as they were. Moves, rotations and resizes are
//! modelled as release-then-attempt with the original footprint restored
//! on rejection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod occupancy;
pub mod placement;
pub mod registry;

pub use cell::{cells_for, CellKey, Footprint, MAX_PLAN_COORDINATE};
pub use config::{ConfigError, LayoutConfig};
pub use occupancy::OccupancyIndex;
pub use placement::PlacementController;
pub use registry::SpaceRegistry;
