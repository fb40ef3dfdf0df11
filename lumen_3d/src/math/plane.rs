/// Plane: an oriented half-space used by the frustum.
///
/// Stored as a unit normal and a signed offset so that
/// `distance(p) = normal · p + d`. Points on the side the normal faces
/// have a positive distance.

use glam::{Vec3, Vec4};

/// Oriented plane: unit normal plus signed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Default for Plane {
    /// The XZ plane, facing +Y.
    fn default() -> Self {
        Self { normal: Vec3::Y, d: 0.0 }
    }
}

impl Plane {
    /// Build a plane through three points.
    ///
    /// The winding decides the normal: it is `(p2 - p1) x (p0 - p1)`,
    /// normalized. Swapping any two points flips the plane.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let mut plane = Self::default();
        plane.set_points(p0, p1, p2);
        plane
    }

    /// Build a plane from `(A, B, C, D)` coefficients of `Ax + By + Cz + D = 0`.
    ///
    /// The coefficients are scaled so that the normal has unit length.
    /// A zero normal is kept as-is.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self { normal: normal / len, d: coefficients.w / len }
        } else {
            Self { normal, d: coefficients.w }
        }
    }

    /// Overwrite this plane with the one through three points.
    ///
    /// Collinear points yield a NaN normal.
    pub fn set_points(&mut self, p0: Vec3, p1: Vec3, p2: Vec3) {
        let aux1 = p0 - p1;
        let aux2 = p2 - p1;
        self.normal = aux2.cross(aux1).normalize();
        self.d = -self.normal.dot(p1);
    }

    /// Signed distance from the plane, positive on the normal side.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset.
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Plane as `(A, B, C, D)` coefficients.
    pub fn to_vec4(&self) -> Vec4 {
        self.normal.extend(self.d)
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
