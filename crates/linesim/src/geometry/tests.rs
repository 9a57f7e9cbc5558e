use super::*;
use crate::segment::SegmentId;
use crate::vec2::Vec2;
use proptest::prelude::*;

fn seg(id: u32, p1: (f64, f64), p2: (f64, f64), v: (f64, f64)) -> Segment {
    let mut s = Segment::new(
        SegmentId(id),
        Vec2::new(p1.0, p1.1),
        Vec2::new(p2.0, p2.1),
        Vec2::new(v.0, v.1),
        "c",
    );
    s.refresh_swept(0.5);
    s
}

#[test]
fn direction_sign_matches_left_right() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 0.0);
    let left = Vec2::new(0.5, 1.0);
    let right = Vec2::new(0.5, -1.0);
    assert!(direction(a, b, left) > 0.0);
    assert!(direction(a, b, right) < 0.0);
    assert_eq!(direction(a, b, Vec2::new(0.5, 0.0)), 0.0);
}

#[test]
fn intersect_lines_simple_cross() {
    let p1 = Vec2::new(0.0, 0.0);
    let p2 = Vec2::new(1.0, 1.0);
    let p3 = Vec2::new(0.0, 1.0);
    let p4 = Vec2::new(1.0, 0.0);
    assert!(intersect_lines(p1, p2, p3, p4));
}

#[test]
fn intersect_lines_disjoint() {
    let p1 = Vec2::new(0.0, 0.0);
    let p2 = Vec2::new(1.0, 0.0);
    let p3 = Vec2::new(0.0, 5.0);
    let p4 = Vec2::new(1.0, 5.0);
    assert!(!intersect_lines(p1, p2, p3, p4));
}

#[test]
fn shared_endpoint_stationary_counts_as_touching() {
    // boundary behavior: two segments sharing exactly one endpoint.
    let p1 = Vec2::new(0.0, 0.0);
    let p2 = Vec2::new(1.0, 0.0);
    let p3 = Vec2::new(1.0, 0.0);
    let p4 = Vec2::new(1.0, 1.0);
    assert!(intersect_lines(p1, p2, p3, p4));
}

#[test]
fn intersection_point_of_crossing_diagonals() {
    let p1 = Vec2::new(0.0, 0.0);
    let p2 = Vec2::new(1.0, 1.0);
    let p3 = Vec2::new(0.0, 1.0);
    let p4 = Vec2::new(1.0, 0.0);
    let q = intersection_point(p1, p2, p3, p4).unwrap();
    assert!((q - Vec2::new(0.5, 0.5)).norm() < 1e-12);
}

#[test]
fn intersection_point_none_for_parallel_lines() {
    let p1 = Vec2::new(0.0, 0.0);
    let p2 = Vec2::new(1.0, 0.0);
    let p3 = Vec2::new(0.0, 1.0);
    let p4 = Vec2::new(1.0, 1.0);
    assert!(intersection_point(p1, p2, p3, p4).is_none());
}

#[test]
fn point_in_aabb_closed_interval() {
    let ul = Vec2::new(0.0, 0.0);
    let lr = Vec2::new(1.0, 1.0);
    assert!(point_in_aabb(Vec2::new(0.0, 0.0), ul, lr));
    assert!(point_in_aabb(Vec2::new(1.0, 1.0), ul, lr));
    assert!(!point_in_aabb(Vec2::new(1.0001, 0.5), ul, lr));
}

#[test]
fn classify_already_intersected_for_current_overlap() {
    let a = seg(0, (0.4, 0.5), (0.6, 0.5), (0.0, 0.0));
    let b = seg(1, (0.5, 0.4), (0.5, 0.6), (0.0, 0.0));
    assert_eq!(classify(&a, &b, 0.5), Verdict::AlreadyIntersected);
}

#[test]
fn classify_no_intersection_when_far_apart_and_not_approaching() {
    let a = seg(0, (0.1, 0.1), (0.2, 0.1), (0.0, 0.0));
    let b = seg(1, (0.8, 0.8), (0.9, 0.8), (0.0, 0.0));
    assert_eq!(classify(&a, &b, 0.5), Verdict::NoIntersection);
}

#[test]
fn classify_head_on_sweep_picks_a_side() {
    // A moves right into B's body; B stationary to the right of A.
    let a = seg(0, (0.40, 0.5), (0.50, 0.5), (0.2, 0.0));
    let b = seg(1, (0.60, 0.5), (0.70, 0.5), (-0.2, 0.0));
    let v = classify(&a, &b, 0.5);
    assert!(matches!(v, Verdict::L1WithL2 | Verdict::L2WithL1));
}

proptest! {
    /// Invariant 8: `point_in_parallelogram` is invariant under the four
    /// corner rotations that preserve which corners pair up as opposite
    /// sides: identity, swap-within-each-pair, swap-the-pairs, and both.
    #[test]
    fn point_in_parallelogram_corner_rotation_invariant(
        p1x in -5.0..5.0f64, p1y in -5.0..5.0f64,
        p2x in -5.0..5.0f64, p2y in -5.0..5.0f64,
        p3x in -5.0..5.0f64, p3y in -5.0..5.0f64,
        p4x in -5.0..5.0f64, p4y in -5.0..5.0f64,
        qx in -5.0..5.0f64, qy in -5.0..5.0f64,
    ) {
        let p1 = Vec2::new(p1x, p1y);
        let p2 = Vec2::new(p2x, p2y);
        let p3 = Vec2::new(p3x, p3y);
        let p4 = Vec2::new(p4x, p4y);
        let q = Vec2::new(qx, qy);

        let base = point_in_parallelogram(q, [p1, p2, p3, p4]);
        let swap_pairs_internally = point_in_parallelogram(q, [p2, p1, p4, p3]);
        let swap_sides = point_in_parallelogram(q, [p3, p4, p1, p2]);
        let both = point_in_parallelogram(q, [p4, p3, p2, p1]);

        prop_assert_eq!(base, swap_pairs_internally);
        prop_assert_eq!(base, swap_sides);
        prop_assert_eq!(base, both);
    }

    /// Classifier must never panic for arbitrary well-formed, non-degenerate
    /// segments, and must respect the id(l1) < id(l2) precondition silently
    /// when it holds.
    #[test]
    fn classify_never_panics_on_arbitrary_segments(
        p1x in -5.0..5.0f64, p1y in -5.0..5.0f64,
        dx1 in 0.01..2.0f64, dy1 in 0.01..2.0f64,
        p2x in -5.0..5.0f64, p2y in -5.0..5.0f64,
        dx2 in 0.01..2.0f64, dy2 in 0.01..2.0f64,
        vx1 in -1.0..1.0f64, vy1 in -1.0..1.0f64,
        vx2 in -1.0..1.0f64, vy2 in -1.0..1.0f64,
    ) {
        let a = seg(0, (p1x, p1y), (p1x + dx1, p1y + dy1), (vx1, vy1));
        let b = seg(1, (p2x, p2y), (p2x + dx2, p2y + dy2), (vx2, vy2));
        let _ = classify(&a, &b, 0.5);
    }
}
