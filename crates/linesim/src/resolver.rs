//! Impulse resolver: turns a classified event into a velocity update
//! (spec.md §4.4).

use crate::geometry::{intersection_point, Verdict};
use crate::segment::Segment;
use crate::vec2::{normalize, orthogonal};

/// Apply the resolution for `verdict` between `l1` and `l2`.
///
/// Precondition: `id(l1) < id(l2)` (upheld by every call site: events are
/// only ever constructed with `a < b`).
pub fn resolve(l1: &mut Segment, l2: &mut Segment, verdict: Verdict) {
    match verdict {
        Verdict::AlreadyIntersected => unstick(l1, l2),
        Verdict::L1WithL2 => elastic_contact(l1, l2, ContactFace::L2),
        Verdict::L2WithL1 => elastic_contact(l1, l2, ContactFace::L1),
        Verdict::NoIntersection => {
            debug_assert!(false, "resolver called with NoIntersection verdict");
        }
    }
}

fn unstick(l1: &mut Segment, l2: &mut Segment) {
    let Some(q) = intersection_point(l1.p1, l1.p2, l2.p1, l2.p2) else {
        debug_assert!(false, "unstick requires a real intersection point");
        return;
    };
    for s in [&mut *l1, &mut *l2] {
        let speed = s.velocity.norm();
        let e = if (s.p1 - q).norm() >= (s.p2 - q).norm() { s.p1 } else { s.p2 };
        if let Some(dir) = normalize(e - q) {
            s.velocity = dir * speed;
        }
    }
}

enum ContactFace {
    /// Contact face is `l2`'s body (`l1` struck it): `Verdict::L1WithL2`.
    L2,
    /// Contact face is `l1`'s body: `Verdict::L2WithL1`.
    L1,
}

fn elastic_contact(l1: &mut Segment, l2: &mut Segment, face: ContactFace) {
    let face_seg = match face {
        ContactFace::L2 => l2.p2 - l2.p1,
        ContactFace::L1 => l1.p2 - l1.p1,
    };
    let Some(face_dir) = normalize(face_seg) else {
        debug_assert!(false, "elastic_contact requires a non-degenerate contact face");
        return;
    };
    let normal = orthogonal(face_dir);

    let m1 = l1.mass();
    let m2 = l2.mass();
    let total = m1 + m2;

    let v1_face = l1.velocity.dot(&face_dir);
    let v1_norm = l1.velocity.dot(&normal);
    let v2_face = l2.velocity.dot(&face_dir);
    let v2_norm = l2.velocity.dot(&normal);

    let new_v1_norm = (m1 - m2) / total * v1_norm + (2.0 * m2 / total) * v2_norm;
    let new_v2_norm = (2.0 * m1 / total) * v1_norm + (m2 - m1) / total * v2_norm;

    l1.velocity = face_dir * v1_face + normal * new_v1_norm;
    l2.velocity = face_dir * v2_face + normal * new_v2_norm;
}
