//! Axis-aligned rectangles: the simulation box and quadtree node bounds.

use crate::geometry::point_in_aabb;
use crate::vec2::Vec2;

/// An axis-aligned rectangle given by two opposite corners. Components are
/// taken in either order, matching `geometry::point_in_aabb`'s contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub upper_left: Vec2,
    pub lower_right: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(upper_left: Vec2, lower_right: Vec2) -> Self {
        Self { upper_left, lower_right }
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        point_in_aabb(p, self.upper_left, self.lower_right)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.upper_left.x.min(self.lower_right.x), self.upper_left.y.min(self.lower_right.y))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.upper_left.x.max(self.lower_right.x), self.upper_left.y.max(self.lower_right.y))
    }

    #[inline]
    pub fn centroid(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// The four corners in a fixed order, used for the quadtree's
    /// rect-corner-in-parallelogram containment check.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        let lo = self.min();
        let hi = self.max();
        [
            Vec2::new(lo.x, lo.y),
            Vec2::new(hi.x, lo.y),
            Vec2::new(lo.x, hi.y),
            Vec2::new(hi.x, hi.y),
        ]
    }

    /// The four boundary edges (top, left, right, bottom), built from
    /// `corners()`.
    #[inline]
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[0], c[2]), (c[1], c[3]), (c[2], c[3])]
    }

    #[inline]
    pub fn aabb_overlap(&self, lo: Vec2, hi: Vec2) -> bool {
        let (slo, shi) = (self.min(), self.max());
        slo.x <= hi.x && lo.x <= shi.x && slo.y <= hi.y && lo.y <= shi.y
    }

    /// Split into four children at the centroid, in fixed order
    /// `{UL, UR, LL, LR}`.
    pub fn quadrants(&self) -> [Rect; 4] {
        let lo = self.min();
        let hi = self.max();
        let c = self.centroid();
        [
            Rect::new(Vec2::new(lo.x, lo.y), Vec2::new(c.x, c.y)), // UL
            Rect::new(Vec2::new(c.x, lo.y), Vec2::new(hi.x, c.y)), // UR
            Rect::new(Vec2::new(lo.x, c.y), Vec2::new(c.x, hi.y)), // LL
            Rect::new(Vec2::new(c.x, c.y), Vec2::new(hi.x, hi.y)), // LR
        ]
    }
}
