//! Cross-module invariant checks for the quadtree: every segment that
//! overlaps the root also shows up in at least one leaf it overlaps, and
//! `detect` over the tree agrees with a brute-force O(n^2) scan.

use super::build::{build, SubdivisionPolicy};
use super::detect::detect;
use crate::geometry::{classify, Verdict};
use crate::rect::Rect;
use crate::segment::{Segment, SegmentId};
use crate::vec2::Vec2;
use proptest::prelude::*;

fn brute_force(segments: &[Segment], dt: f64) -> usize {
    let mut count = 0;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if classify(&segments[i], &segments[j], dt) != Verdict::NoIntersection {
                count += 1;
            }
        }
    }
    count
}

fn arbitrary_segment(id: u32, seed: f64, dt: f64) -> Segment {
    let base = seed % 20.0 - 10.0;
    let mut s = Segment::new(
        SegmentId(id),
        Vec2::new(base, base * 0.3),
        Vec2::new(base + 1.0 + (seed * 0.01).sin(), base * 0.3 + 1.0),
        Vec2::new((seed * 0.7).sin(), (seed * 1.3).cos()),
        "c",
    );
    s.refresh_swept(dt);
    s
}

proptest! {
    /// §8 invariant 5: a spatial index does not change which pairs collide,
    /// only how fast they're found.
    #[test]
    fn quadtree_detection_matches_brute_force(seeds in prop::collection::vec(0.0f64..1000.0, 2..24)) {
        let dt = 0.5;
        let segments: Vec<Segment> = seeds.iter().enumerate().map(|(i, &s)| arbitrary_segment(i as u32, s, dt)).collect();
        let expected = brute_force(&segments, dt);

        let bounds = Rect::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0));
        let tree = build(bounds, SubdivisionPolicy::Overflow { max_per_leaf: 2 }, &segments);
        let (events, _pairs) = detect(&tree, &segments, dt);
        let (canon, _dups) = crate::events::canonical_order(events.into_vec());
        prop_assert_eq!(canon.len(), expected);
    }
}

#[test]
fn deep_tree_still_agrees_with_brute_force() {
    let dt = 1.0;
    let segments: Vec<Segment> = (0..12).map(|i| arbitrary_segment(i, i as f64 * 37.0, dt)).collect();
    let expected = brute_force(&segments, dt);
    let bounds = Rect::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0));
    let tree = build(bounds, SubdivisionPolicy::DepthCapped { depth: 4 }, &segments);
    let (events, _) = detect(&tree, &segments, dt);
    let (canon, _) = crate::events::canonical_order(events.into_vec());
    assert_eq!(canon.len(), expected);
}
