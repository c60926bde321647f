//! Read-only spatial queries over a list of spaces.
//!
//! Everything here is a pure function of its `&[Space]` argument: feed
//! it a controller's [`spaces()`] enumeration or any hand-built list.
//! Nothing is cached between calls.
//!
//! - [`adjacency()`]: symmetric edge-touching graph (and [`contacts`] with
//!   shared edge lengths).
//! - [`bounding_box`] / [`is_on_perimeter`]: overall extent and which
//!   spaces sit on its boundary.
//! - [`layout_metrics`] / [`metrics_by_level`]: area, exposed perimeter,
//!   compactness and fill ratio.
//!
//! [`spaces()`]: https://docs.rs/floorplate-layout/latest/floorplate_layout/struct.PlacementController.html#method.spaces

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod bounds;
pub mod metrics;

pub use adjacency::{adjacency, contact_between, contacts, AdjacencyGraph, Contact, Side};
pub use bounds::{bounding_box, is_on_perimeter, perimeter_spaces, BoundingBox};
pub use metrics::{layout_metrics, levels, metrics_by_level, Level, LayoutMetrics};
