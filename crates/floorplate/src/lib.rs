//! Floorplate: the spatial layout engine of a space-planning tool.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Floorplate sub-crates. For most users, adding `floorplate` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use floorplate::prelude::*;
//!
//! let mut plan = PlacementController::new(LayoutConfig::with_pitch(5.0)).unwrap();
//!
//! let lobby = Space::new("lobby", 20.0, 10.0, 12.0).unwrap();
//! plan.place(lobby).unwrap();
//!
//! // Dropped at (21.3, 1.9): snaps to (20, 0), right against the lobby.
//! let office = Space::new("office", 10.0, 10.0, 9.0)
//!     .unwrap()
//!     .at(GridPosition::new(21.3, 1.9, 0.0));
//! let placed = plan.place(office).unwrap();
//! assert_eq!(placed.position(), GridPosition::new(20.0, 0.0, 0.0));
//!
//! let graph = adjacency(&plan.spaces());
//! assert!(graph.are_adjacent(&"lobby".into(), &"office".into()));
//!
//! // Turned to 10 x 20, the lobby still clears the office.
//! plan.rotate(&"lobby".into()).unwrap();
//! let bbox = bounding_box(&plan.spaces()).unwrap();
//! assert_eq!((bbox.width, bbox.depth), (30.0, 20.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `floorplate-core` | Ids, `Space`, geometry, snapping, errors |
//! | [`layout`] | `floorplate-layout` | Occupancy index, registry, placement controller |
//! | [`query`] | `floorplate-query` | Adjacency, bounding box, perimeter, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids and errors (`floorplate-core`).
pub use floorplate_core as types;

/// Placement state and the controller (`floorplate-layout`).
pub use floorplate_layout as layout;

/// Read-only spatial queries (`floorplate-query`).
pub use floorplate_query as query;

/// Commonly used types and functions.
pub mod prelude {
    pub use floorplate_core::{
        effective_extent, snap, GridPosition, LayoutError, Pitch, Rect, Rotation, Space, SpaceId,
    };
    pub use floorplate_layout::{
        ConfigError, LayoutConfig, OccupancyIndex, PlacementController, SpaceRegistry,
    };
    pub use floorplate_query::{
        adjacency, bounding_box, is_on_perimeter, layout_metrics, metrics_by_level,
        perimeter_spaces, AdjacencyGraph, BoundingBox, LayoutMetrics,
    };
}
