//! Parallel 2D line-segment collision simulation core.
//!
//! A `World` holds a set of moving line segments confined to an axis-aligned
//! box. Each `step` rebuilds a quadtree index over the segments' swept
//! volumes, detects line-line and line-wall collisions in parallel, resolves
//! them in a deterministic canonical order, and advances positions.

pub mod api;
pub mod error;
pub mod events;
pub mod geometry;
pub mod quadtree;
pub mod rect;
pub mod resolver;
pub mod segment;
pub mod vec2;
pub mod world;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::WorldError;
pub use segment::{Parallelogram, Segment, SegmentId};
pub use vec2::Vec2;
pub use world::{World, WorldConfig};

/// Common imports for quick access to the core types.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::error::WorldError;
    pub use crate::geometry::Verdict;
    pub use crate::quadtree::SubdivisionPolicy;
    pub use crate::rect::Rect;
    pub use crate::segment::{Parallelogram, Segment, SegmentId};
    pub use crate::vec2::Vec2;
    pub use crate::world::{World, WorldConfig};
}
