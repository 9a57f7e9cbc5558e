//! Quadtree construction (spec.md §4.2).
//!
//! Two subdivision policies are supported; `Overflow` is the default (better
//! pruning on skewed scenes), `DepthCapped` is kept for comparison/benchmarks
//! (see DESIGN.md's Open Question resolution).

use super::arena::{Node, NodeId, NodeKind, Tree};
use crate::geometry::{any_edge_crosses, point_in_parallelogram};
use crate::rect::Rect;
use crate::segment::{Parallelogram, Segment, SegmentId};

/// How a node decides whether to become a leaf or subdivide further.
#[derive(Clone, Copy, Debug)]
pub enum SubdivisionPolicy {
    /// Subdivide while more than `max_per_leaf` segments overlap the node.
    Overflow { max_per_leaf: usize },
    /// Subdivide unconditionally until `depth`, then always leaf.
    DepthCapped { depth: u32 },
}

impl Default for SubdivisionPolicy {
    fn default() -> Self {
        SubdivisionPolicy::Overflow { max_per_leaf: 128 }
    }
}

/// `isSegmentInNode`: does `para` (a segment's swept parallelogram) overlap
/// `rect`? Short-circuits on an AABB rejection before the exact corner/edge
/// tests.
pub fn segment_overlaps_rect(para: &Parallelogram, rect: &Rect) -> bool {
    let (lo, hi) = para.aabb();
    if !rect.aabb_overlap(lo, hi) {
        return false;
    }
    if para.corners.iter().any(|&c| rect.contains_point(c)) {
        return true;
    }
    if rect.corners().iter().any(|&c| point_in_parallelogram(c, para.corners)) {
        return true;
    }
    any_edge_crosses(&rect.edges(), &para.edges())
}

/// Build a fresh tree covering `bounds` from the segments whose id equals
/// their index in `segments` (the invariant `World` maintains).
pub fn build(bounds: Rect, policy: SubdivisionPolicy, segments: &[Segment]) -> Tree {
    let mut tree = Tree::default();
    build_into(&mut tree, bounds, policy, segments);
    tree
}

/// Rebuild `tree` in place: clears the node arena (keeping its allocation)
/// and repopulates it. Used every step so the per-step rebuild (spec.md
/// §4.2's "per-step refresh") does not reallocate the arena each time.
pub fn build_into(tree: &mut Tree, bounds: Rect, policy: SubdivisionPolicy, segments: &[Segment]) {
    tree.nodes.clear();
    if segments.is_empty() {
        tree.nodes.push(Node { rect: bounds, kind: NodeKind::Leaf(Vec::new()), depth: 0 });
        tree.root = Some(NodeId(0));
        return;
    }
    let all_ids: Vec<SegmentId> = segments.iter().map(|s| s.id).collect();
    let root = build_node(bounds, 0, policy, segments, &all_ids, &mut tree.nodes);
    tree.root = Some(root);
}

fn overlapping(rect: &Rect, segments: &[Segment], ids: &[SegmentId]) -> Vec<SegmentId> {
    ids.iter()
        .copied()
        .filter(|id| segment_overlaps_rect(segments[id.0 as usize].swept(), rect))
        .collect()
}

fn build_node(
    rect: Rect,
    depth: u32,
    policy: SubdivisionPolicy,
    segments: &[Segment],
    candidate_ids: &[SegmentId],
    nodes: &mut Vec<Node>,
) -> NodeId {
    let overlapping_ids = overlapping(&rect, segments, candidate_ids);
    let subdivide = match policy {
        SubdivisionPolicy::Overflow { max_per_leaf } => overlapping_ids.len() > max_per_leaf,
        SubdivisionPolicy::DepthCapped { depth: max_depth } => depth < max_depth,
    };
    if !subdivide {
        let id = NodeId(nodes.len());
        nodes.push(Node { rect, kind: NodeKind::Leaf(overlapping_ids), depth });
        return id;
    }
    let quads = rect.quadrants();
    let mut children = [NodeId(0); 4];
    for (i, q) in quads.into_iter().enumerate() {
        children[i] = build_node(q, depth + 1, policy, segments, &overlapping_ids, nodes);
    }
    let id = NodeId(nodes.len());
    nodes.push(Node { rect, kind: NodeKind::Internal(children), depth });
    id
}
