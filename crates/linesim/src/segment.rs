//! Segment record and swept-parallelogram cache (spec.md §3).
//!
//! Invariants
//! - `length` always equals `|p1 - p2|`; recomputed whenever endpoints change.
//! - `parallelogram` is refreshed whenever velocity or endpoints change, and
//!   before anything in the quadtree or broad/narrow phase reads it. Callers
//!   that mutate `velocity` or `p1`/`p2` directly must call `refresh_swept`
//!   before the next index build; `World` upholds this for all call sites it
//!   owns (resolver, wall-bounce, position-advance).

use crate::vec2::Vec2;

/// Stable identity used solely for canonical ordering (`id(a) < id(b)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub u32);

/// The swept parallelogram traced by a segment over one `dt`: corners
/// `{p1, p2, p2 + shift, p1 + shift}` where `shift = velocity * dt`.
///
/// Corner order is part of the contract for `geometry::point_in_parallelogram`
/// and for the quadtree's containment test: `[p1, p2, p1 + shift, p2 + shift]`
/// with `(corners[0], corners[1])` and `(corners[2], corners[3])` the two
/// "opposite sides" the point-in-parallelogram predicate expects.
#[derive(Clone, Copy, Debug)]
pub struct Parallelogram {
    pub corners: [Vec2; 4],
}

impl Parallelogram {
    #[inline]
    pub fn from_segment(p1: Vec2, p2: Vec2, shift: Vec2) -> Self {
        Self {
            corners: [p1, p2, p1 + shift, p2 + shift],
        }
    }

    /// The four edges, in the fixed order (trailing, side, side, leading)
    /// that `geometry::classify` and the quadtree containment test rely on.
    #[inline]
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners;
        [(c[0], c[1]), (c[0], c[2]), (c[1], c[3]), (c[2], c[3])]
    }

    /// Axis-aligned bounding box of the four corners.
    #[inline]
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let mut lo = self.corners[0];
        let mut hi = self.corners[0];
        for c in &self.corners[1..] {
            lo.x = lo.x.min(c.x);
            lo.y = lo.y.min(c.y);
            hi.x = hi.x.max(c.x);
            hi.y = hi.y.max(c.y);
        }
        (lo, hi)
    }
}

/// A moving line segment.
#[derive(Clone, Debug)]
pub struct Segment {
    pub id: SegmentId,
    pub p1: Vec2,
    pub p2: Vec2,
    pub velocity: Vec2,
    pub color: String,
    length: f64,
    parallelogram: Option<Parallelogram>,
}

impl Segment {
    /// Construct a segment and precompute its length. The swept parallelogram
    /// is left unset; call `refresh_swept` before the index is consulted.
    ///
    /// Panics (DegeneracySafety, spec.md §7) if `p1 == p2`: zero-length
    /// segments are forbidden at construction, never produced internally.
    pub fn new(id: SegmentId, p1: Vec2, p2: Vec2, velocity: Vec2, color: impl Into<String>) -> Self {
        let length = (p1 - p2).norm();
        assert!(
            length.is_finite() && length > 0.0,
            "zero-length segment is forbidden at construction"
        );
        Self {
            id,
            p1,
            p2,
            velocity,
            color: color.into(),
            length,
            parallelogram: None,
        }
    }

    /// Euclidean distance between the current endpoints; also the segment's
    /// mass in the mass-equals-length model.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.length
    }

    /// Recompute `length` from the current endpoints. Called by position
    /// advance, which mutates `p1`/`p2` directly.
    #[inline]
    pub fn refresh_length(&mut self) {
        self.length = (self.p1 - self.p2).norm();
    }

    /// Recompute the swept parallelogram from the current endpoints,
    /// velocity, and `dt`. Must be called after any velocity or endpoint
    /// change and before the parallelogram is read again.
    #[inline]
    pub fn refresh_swept(&mut self, dt: f64) {
        let shift = self.velocity * dt;
        self.parallelogram = Some(Parallelogram::from_segment(self.p1, self.p2, shift));
    }

    /// The cached swept parallelogram.
    ///
    /// Panics (PreconditionViolation, spec.md §7) if read before
    /// `refresh_swept` has ever been called.
    #[inline]
    pub fn swept(&self) -> &Parallelogram {
        self.parallelogram
            .as_ref()
            .expect("parallelogram queried before refresh_swept")
    }
}
