/// Frustum: six bounding planes and eight corners of a view volume.
///
/// Every plane's normal points into the volume, so a point is inside when
/// its signed distance to all six planes is non-negative.
///
/// The camera builds its frustum analytically from its basis and shape
/// (`from_basis`). `from_view_projection` extracts the same volume from a
/// combined matrix and is handy when only matrices are available.

use glam::{Mat4, Vec3};
use crate::math::{Plane, AABB};
use super::projection::ViewShape;

/// Result of a frustum classification.
///
/// A point is either `Inside` or `Outside`; spheres and boxes may also
/// straddle a plane and report `Intersect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// Entirely outside at least one plane
    Outside,
    /// Crosses at least one plane
    Intersect,
    /// Entirely inside all planes
    Inside,
}

/// Frustum plane indices
pub const PLANE_TOP: usize = 0;
pub const PLANE_BOTTOM: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// The eight corners of a frustum.
///
/// Naming: `n`/`f` for near/far, `t`/`b` for top/bottom, `l`/`r` for left/right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrustumCorners {
    pub ntl: Vec3,
    pub ntr: Vec3,
    pub nbl: Vec3,
    pub nbr: Vec3,
    pub ftl: Vec3,
    pub ftr: Vec3,
    pub fbl: Vec3,
    pub fbr: Vec3,
}

impl FrustumCorners {
    /// Corners as an array: near (tl, tr, bl, br) then far (tl, tr, bl, br).
    pub fn to_array(&self) -> [Vec3; 8] {
        [self.ntl, self.ntr, self.nbl, self.nbr, self.ftl, self.ftr, self.fbl, self.fbr]
    }
}

/// Six frustum planes for culling plus the corners they were built from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frustum {
    /// Frustum planes: top, bottom, left, right, near, far
    pub planes: [Plane; 6],
    /// Corner points of the volume
    pub corners: FrustumCorners,
}

impl Frustum {
    /// Build the frustum of a camera frame.
    ///
    /// `u`, `v`, `n` are the camera's right, up and back axes (the view
    /// direction is `-n`). The point order per face is fixed so every
    /// normal faces inward; reordering any triple flips that plane.
    pub fn from_basis(eye: Vec3, u: Vec3, v: Vec3, n: Vec3, shape: &ViewShape) -> Self {
        let tang = (shape.fov.to_radians() * 0.5).tan();
        let nh = shape.near * tang;
        let nw = nh * shape.aspect;
        let fh = shape.far * tang;
        let fw = fh * shape.aspect;

        let nc = eye - n * shape.near;
        let fc = eye - n * shape.far;

        let corners = FrustumCorners {
            ntl: nc + v * nh - u * nw,
            ntr: nc + v * nh + u * nw,
            nbl: nc - v * nh - u * nw,
            nbr: nc - v * nh + u * nw,
            ftl: fc + v * fh - u * fw,
            ftr: fc + v * fh + u * fw,
            fbl: fc - v * fh - u * fw,
            fbr: fc - v * fh + u * fw,
        };

        Self { planes: Self::planes_from_corners(&corners), corners }
    }

    /// Extract the frustum from a view-projection matrix (OpenGL depth range).
    ///
    /// Planes come from the Gribb & Hartmann method; corners from
    /// unprojecting the NDC cube through the inverse matrix. Works for
    /// both perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [Plane::default(); 6];
        planes[PLANE_TOP] = Plane::from_coefficients(r3 - r1);
        planes[PLANE_BOTTOM] = Plane::from_coefficients(r3 + r1);
        planes[PLANE_LEFT] = Plane::from_coefficients(r3 + r0);
        planes[PLANE_RIGHT] = Plane::from_coefficients(r3 - r0);
        planes[PLANE_NEAR] = Plane::from_coefficients(r3 + r2);
        planes[PLANE_FAR] = Plane::from_coefficients(r3 - r2);

        let inverse = vp.inverse();
        let unproject = |x: f32, y: f32, z: f32| inverse.project_point3(Vec3::new(x, y, z));

        let corners = FrustumCorners {
            ntl: unproject(-1.0, 1.0, -1.0),
            ntr: unproject(1.0, 1.0, -1.0),
            nbl: unproject(-1.0, -1.0, -1.0),
            nbr: unproject(1.0, -1.0, -1.0),
            ftl: unproject(-1.0, 1.0, 1.0),
            ftr: unproject(1.0, 1.0, 1.0),
            fbl: unproject(-1.0, -1.0, 1.0),
            fbr: unproject(1.0, -1.0, 1.0),
        };

        Self { planes, corners }
    }

    fn planes_from_corners(c: &FrustumCorners) -> [Plane; 6] {
        let mut planes = [Plane::default(); 6];
        planes[PLANE_TOP].set_points(c.ntr, c.ntl, c.ftl);
        planes[PLANE_BOTTOM].set_points(c.nbl, c.nbr, c.fbr);
        planes[PLANE_LEFT].set_points(c.ntl, c.nbl, c.fbl);
        planes[PLANE_RIGHT].set_points(c.nbr, c.ntr, c.fbr);
        planes[PLANE_NEAR].set_points(c.ntl, c.ntr, c.nbr);
        planes[PLANE_FAR].set_points(c.ftr, c.ftl, c.fbl);
        planes
    }

    /// Plane by index (`PLANE_TOP` ... `PLANE_FAR`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    /// Classify a point: `Outside` if it is behind any plane, else `Inside`.
    pub fn classify_point(&self, point: Vec3) -> Intersection {
        if self.planes.iter().any(|plane| plane.distance(point) < 0.0) {
            Intersection::Outside
        } else {
            Intersection::Inside
        }
    }

    /// Classify a sphere.
    ///
    /// Returns `Outside` as soon as the sphere lies fully behind one plane.
    /// A sphere within `radius` of any plane is `Intersect`, but the scan
    /// continues since a later plane may still reject it. `radius` must be
    /// non-negative.
    pub fn classify_sphere(&self, center: Vec3, radius: f32) -> Intersection {
        let mut result = Intersection::Inside;

        for plane in &self.planes {
            let distance = plane.distance(center);
            if distance < -radius {
                return Intersection::Outside;
            } else if distance < radius {
                result = Intersection::Intersect;
            }
        }

        result
    }

    /// Classify an AABB (positive/negative vertex test).
    ///
    /// - If the p-vertex is outside any plane → `Outside` (early out)
    /// - If the n-vertex is outside any plane → at least `Intersect`
    /// - Otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> Intersection {
        let mut result = Intersection::Inside;

        for plane in &self.planes {
            let normal = plane.normal();

            if plane.distance(aabb.positive_vertex(normal)) < 0.0 {
                return Intersection::Outside;
            }
            if plane.distance(aabb.negative_vertex(normal)) < 0.0 {
                result = Intersection::Intersect;
            }
        }

        result
    }

    /// The twelve frustum edges as a line list (pairs of points).
    ///
    /// Order: the four side edges, the near rectangle, the far rectangle.
    pub fn line_list(&self) -> [Vec3; 24] {
        let c = &self.corners;
        [
            // sides
            c.ntl, c.ftl,
            c.ntr, c.ftr,
            c.nbl, c.fbl,
            c.nbr, c.fbr,
            // near plane
            c.ntr, c.ntl,
            c.nbr, c.nbl,
            c.ntr, c.nbr,
            c.ntl, c.nbl,
            // far plane
            c.ftr, c.ftl,
            c.fbr, c.fbl,
            c.ftr, c.fbr,
            c.ftl, c.fbl,
        ]
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
