mod archimedean_spiral;

#[doc(inline)]
pub use archimedean_spiral::ArchimedeanSpiral;

use crate::geometry::primitives::Point;

/// Deterministic mapping from an angle (radians, unbounded) to a planar
/// offset from the origin.
///
/// The layouter walks a curve outward to enumerate candidate positions, so
/// implementations should be centrally expanding: the distance from the
/// origin must be monotonically non-decreasing in the angle (up to integer
/// rounding). Implementations are pure; the same angle always yields the
/// same point.
pub trait Curve {
    fn get_point(&self, angle: f64) -> Point;
}
