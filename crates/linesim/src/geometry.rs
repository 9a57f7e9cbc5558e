//! Exact intersection predicates and the broad/narrow-phase collision tests
//! (spec.md §4.1).
//!
//! Purpose
//! - `direction`/`on_segment`/`point_in_aabb`/`point_in_parallelogram` are the
//!   exact predicates everything else is built from.
//! - `intersect_lines` / `intersection_point` answer "do these two static
//!   segments meet" and "where".
//! - `broad_phase` is a cheap, over-inclusive admission test over one dt of
//!   motion; `classify` is the precise narrow-phase classifier that decides
//!   which of the two segments reaches the other's body first.
//!
//! References
//! - Code cross-refs: `segment::{Segment, Parallelogram}`, `vec2::{cross, angle}`.

use crate::segment::{Parallelogram, Segment};
use crate::vec2::{angle, cross, Vec2};

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Positive when `c` is left of `a->b`, negative when right, zero when
/// collinear.
#[inline]
pub fn direction(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    cross(c - a, b - a)
}

/// True iff `q` lies within the closed bounding box of segment `p..r`,
/// assuming `p`, `q`, `r` are already known to be collinear.
#[inline]
pub fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    q.x.min(r.x) <= p.x
        && p.x <= q.x.max(r.x)
        && q.y.min(r.y) <= p.y
        && p.y <= q.y.max(r.y)
}

/// Closed-interval containment of `p` in the axis-aligned box
/// `[upper_left, lower_right]` (components taken in either order).
#[inline]
pub fn point_in_aabb(p: Vec2, upper_left: Vec2, lower_right: Vec2) -> bool {
    let (lo_x, hi_x) = (upper_left.x.min(lower_right.x), upper_left.x.max(lower_right.x));
    let (lo_y, hi_y) = (upper_left.y.min(lower_right.y), upper_left.y.max(lower_right.y));
    lo_x <= p.x && p.x <= hi_x && lo_y <= p.y && p.y <= hi_y
}

/// True iff `q` lies inside the parallelogram with corners
/// `[p1, p2, p3, p4]`, where `(p1,p2)` and `(p3,p4)` are the two opposite
/// sides. Corner order is part of the contract — see
/// `Parallelogram::from_segment` for the convention used everywhere in this
/// crate.
#[inline]
pub fn point_in_parallelogram(q: Vec2, corners: [Vec2; 4]) -> bool {
    let [p1, p2, p3, p4] = corners;
    direction(p1, p2, q) * direction(p3, p4, q) < 0.0 && direction(p1, p3, q) * direction(p2, p4, q) < 0.0
}

fn aabb_of(p: Vec2, q: Vec2) -> (Vec2, Vec2) {
    (
        Vec2::new(p.x.min(q.x), p.y.min(q.y)),
        Vec2::new(p.x.max(q.x), p.y.max(q.y)),
    )
}

fn aabb_overlap(a: (Vec2, Vec2), b: (Vec2, Vec2)) -> bool {
    a.0.x <= b.1.x && b.0.x <= a.1.x && a.0.y <= b.1.y && b.0.y <= a.1.y
}

/// True iff segments `(p1,p2)` and `(p3,p4)` share at least one point.
///
/// AABB rejection first, then the standard straddle test; collinear grazing
/// contact (any `di == 0`) is resolved by `on_segment` rather than the strict
/// product test, so touching endpoints are classified correctly.
pub fn intersect_lines(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    if !aabb_overlap(aabb_of(p1, p2), aabb_of(p3, p4)) {
        return false;
    }
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);

    if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
        return true;
    }
    if d1 == 0.0 && on_segment(p1, p3, p4) {
        return true;
    }
    if d2 == 0.0 && on_segment(p2, p3, p4) {
        return true;
    }
    if d3 == 0.0 && on_segment(p3, p1, p2) {
        return true;
    }
    if d4 == 0.0 && on_segment(p4, p1, p2) {
        return true;
    }
    false
}

/// The point where lines `(p1,p2)` and `(p3,p4)` meet.
///
/// Undefined for parallel lines (the denominator is zero); only call this
/// when the two segments are already known to intersect (verdict
/// `AlreadyIntersected`), which guarantees non-parallel, overlapping lines.
pub fn intersection_point(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d12 = p2 - p1;
    let d34 = p4 - p3;
    let denom = d34.y * d12.x - d34.x * d12.y;
    if denom == 0.0 {
        return None;
    }
    let u = (d34.x * (p1.y - p3.y) - d34.y * (p1.x - p3.x)) / denom;
    Some(p1 + d12 * u)
}

/// Cheap, over-inclusive admission test: could `l1` and `l2` possibly
/// interact during `dt`, given `l2`'s motion relative to `l1`?
///
/// Works in `l1`'s reference frame: `l1` is held fixed and `l2` sweeps along
/// the parallelogram traced by the relative velocity `l2.velocity -
/// l1.velocity`. No classification, just a boolean.
pub fn broad_phase(l1: &Segment, l2: &Segment, dt: f64) -> bool {
    let rel_shift = (l2.velocity - l1.velocity) * dt;
    let rel = Parallelogram::from_segment(l2.p1, l2.p2, rel_shift);

    let l1_aabb = aabb_of(l1.p1, l1.p2);
    if aabb_overlap(l1_aabb, rel.aabb()) {
        return true;
    }
    if point_in_parallelogram(l1.p1, rel.corners) || point_in_parallelogram(l1.p2, rel.corners) {
        return true;
    }
    crosses_any_edge(l1.p1, l1.p2, &rel)
}

/// Tests `l1` against the trailing edge, side1, and the leading edge of
/// `para` — the same three edges `fastIntersect` tests, skipping side2.
fn crosses_any_edge(a: Vec2, b: Vec2, para: &Parallelogram) -> bool {
    let [trailing_edge, side1, _side2, leading_edge] = para.edges();
    intersect_lines(a, b, trailing_edge.0, trailing_edge.1)
        || intersect_lines(a, b, side1.0, side1.1)
        || intersect_lines(a, b, leading_edge.0, leading_edge.1)
}

/// True iff any edge in `edges_a` crosses any edge in `edges_b`. Used by the
/// quadtree's node-containment test to check a rectangle's four edges
/// against a swept parallelogram's four edges.
pub(crate) fn any_edge_crosses(edges_a: &[(Vec2, Vec2)], edges_b: &[(Vec2, Vec2)]) -> bool {
    edges_a
        .iter()
        .any(|&(a1, a2)| edges_b.iter().any(|&(b1, b2)| intersect_lines(a1, a2, b1, b2)))
}

/// Counts crossings against the leading edge and the two side edges (the
/// trailing edge is never tested here: it is always false by this point,
/// since the caller already ruled out `AlreadyIntersected`). Returns the
/// total count plus the two side-edge flags `s1`/`s2`, which are what the
/// angle tie-break below disambiguates on.
fn count_edge_crossings(a: Vec2, b: Vec2, para: &Parallelogram) -> (usize, bool, bool) {
    let [_trailing_edge, side1, side2, leading_edge] = para.edges();
    let leading = intersect_lines(a, b, leading_edge.0, leading_edge.1);
    let s1 = intersect_lines(a, b, side1.0, side1.1);
    let s2 = intersect_lines(a, b, side2.0, side2.1);
    let count = [leading, s1, s2].iter().filter(|x| **x).count();
    (count, s1, s2)
}

/// Which of the two intersection classes applies, or that there is none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The two segments already overlap before this step's motion.
    AlreadyIntersected,
    /// `l1`'s motion sweeps it into `l2`'s body; contact face is `l2`.
    L1WithL2,
    /// `l2`'s motion sweeps it into `l1`'s body; contact face is `l1`.
    L2WithL1,
    /// Broad phase admitted the pair but no contact occurs this step.
    NoIntersection,
}

/// Classify the interaction between `l1` and `l2` over one `dt`.
///
/// Precondition: `l1.id < l2.id` (PreconditionViolation if violated — this is
/// an internal-bug signal, never user input, so it asserts rather than
/// returning an error).
pub fn classify(l1: &Segment, l2: &Segment, dt: f64) -> Verdict {
    debug_assert!(l1.id < l2.id, "classify requires id(l1) < id(l2)");

    if intersect_lines(l1.p1, l1.p2, l2.p1, l2.p2) {
        return Verdict::AlreadyIntersected;
    }
    if !broad_phase(l1, l2, dt) {
        return Verdict::NoIntersection;
    }

    let l2_swept = l2.swept();
    if point_in_parallelogram(l1.p1, l2_swept.corners) && point_in_parallelogram(l1.p2, l2_swept.corners) {
        return Verdict::L1WithL2;
    }

    let (count, s1, s2) = count_edge_crossings(l1.p1, l1.p2, l2_swept);
    if count >= 2 {
        return Verdict::L2WithL1;
    }
    if count == 1 {
        let signed_angle = angle(l1.p2 - l1.p1, l2.p2 - l2.p1);
        let l2_leads = (s1 && signed_angle < 0.0) || (s2 && signed_angle > 0.0);
        if l2_leads {
            return Verdict::L2WithL1;
        }
    }
    // A lone leading-edge crossing, or a lone side crossing whose angle sign
    // doesn't favor l2, falls through to the default tie-break.
    Verdict::L1WithL2
}

#[cfg(test)]
mod tests;
