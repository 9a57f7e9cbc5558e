//! Spatial index over swept segment parallelograms (spec.md §4.2).

pub mod arena;
pub mod build;
pub mod detect;

pub use arena::{Node, NodeId, NodeKind, Tree};
pub use build::{build, build_into, segment_overlaps_rect, SubdivisionPolicy};
pub use detect::detect;

#[cfg(test)]
mod tests;
