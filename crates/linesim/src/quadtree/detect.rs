//! Parallel collision detection over a built tree (spec.md §4.2, §5).
//!
//! Each leaf runs an O(k^2) pairwise scan over its segment list; internal
//! nodes fork their four children with `rayon::join` pairs (sequentially with
//! the `parallel` feature off) and merge the returned `EventList`s/
//! `PairCount`s in O(1) via the concat-tree.

use super::arena::{NodeId, NodeKind, Tree};
use crate::events::{Event, EventList, PairCount};
use crate::geometry::{classify, Verdict};
use crate::segment::Segment;

fn detect_leaf(segments: &[Segment], ids: &[crate::segment::SegmentId], dt: f64) -> (EventList, PairCount) {
    let mut events = EventList::default();
    let mut pairs = PairCount(0);
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (a, b) = if ids[i] < ids[j] { (ids[i], ids[j]) } else { (ids[j], ids[i]) };
            let l1 = &segments[a.0 as usize];
            let l2 = &segments[b.0 as usize];
            pairs = pairs.merge(PairCount(1));
            let verdict = classify(l1, l2, dt);
            if verdict != Verdict::NoIntersection {
                events.push(Event::new(a, b, verdict));
            }
        }
    }
    (events, pairs)
}

fn detect_node(tree: &Tree, node: NodeId, segments: &[Segment], dt: f64) -> (EventList, PairCount) {
    match &tree.nodes[node.0].kind {
        NodeKind::Leaf(ids) => detect_leaf(segments, ids, dt),
        NodeKind::Internal(children) => {
            let [a, b, c, d] = *children;
            #[cfg(feature = "parallel")]
            let ((ra, rb), (rc, rd)) = rayon::join(
                || rayon::join(|| detect_node(tree, a, segments, dt), || detect_node(tree, b, segments, dt)),
                || rayon::join(|| detect_node(tree, c, segments, dt), || detect_node(tree, d, segments, dt)),
            );
            #[cfg(not(feature = "parallel"))]
            let ((ra, rb), (rc, rd)) = (
                (detect_node(tree, a, segments, dt), detect_node(tree, b, segments, dt)),
                (detect_node(tree, c, segments, dt), detect_node(tree, d, segments, dt)),
            );
            let (ea, pa) = ra;
            let (eb, pb) = rb;
            let (ec, pc) = rc;
            let (ed, pd) = rd;
            let events = ea.merge(eb).merge(ec).merge(ed);
            let pairs = pa.merge(pb).merge(pc).merge(pd);
            (events, pairs)
        }
    }
}

/// Walk the whole tree and return every colliding pair (in concat-tree form,
/// not yet canonicalized) plus the total number of pairwise tests performed.
///
/// Duplicate events across leaves (a pair whose swept shapes straddle more
/// than one leaf) are expected and resolved by `events::canonical_order`, not
/// here — this pass never deduplicates.
pub fn detect(tree: &Tree, segments: &[Segment], dt: f64) -> (EventList, PairCount) {
    match tree.root {
        Some(root) => detect_node(tree, root, segments, dt),
        None => (EventList::default(), PairCount(0)),
    }
}
