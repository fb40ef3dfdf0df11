//! Angle conversions and triangle normals.

use glam::Vec3;

/// Degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Unit normal of the triangle `(p1, p2, p3)`.
///
/// Counter-clockwise winding (seen from the front) gives a front-facing
/// normal. Degenerate triangles give NaN.
pub fn calc_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p1).normalize()
}
