//! 2D vector arithmetic primitives.
//!
//! Purpose
//! - Provide the small set of named operations the geometry and resolver code
//!   reason about directly: add/sub/scale/divide are just `nalgebra::Vector2`
//!   operator overloads, but `cross` (signed area / perp-dot), `orthogonal`
//!   (90° rotation) and `angle` (signed angle between two vectors) are not
//!   part of `nalgebra`'s API under those names, so we give them names that
//!   match the spec's glossary.
//!
//! References
//! - Code cross-refs: `geometry::direction` (built from `cross`), `resolver`
//!   (uses `orthogonal` for the contact normal).

use nalgebra::Vector2;

/// The single point/vector type used throughout the crate.
pub type Vec2 = Vector2<f64>;

/// Signed area of the parallelogram spanned by `a` and `b` (perp-dot product).
///
/// Positive when `b` is counter-clockwise from `a`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v` rotated 90° counter-clockwise.
///
/// Used as the contact normal direction; the sign convention (CCW, not CW)
/// must stay consistent everywhere it is used so that `resolver` and
/// `geometry` agree on which side is "outward".
#[inline]
pub fn orthogonal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Signed angle from `a` to `b`, in `(-pi, pi]`.
#[inline]
pub fn angle(a: Vec2, b: Vec2) -> f64 {
    cross(a, b).atan2(a.dot(&b))
}

/// `v` scaled to unit length. `None` for a (near-)zero vector.
///
/// The core forbids zero-length segments and zero-velocity collision
/// geometry at the call sites that need normalization (spec.md §7,
/// DegeneracySafety); this is the single place that guards against the
/// division.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.norm();
    if len <= 0.0 || !len.is_finite() {
        None
    } else {
        Some(v / len)
    }
}
