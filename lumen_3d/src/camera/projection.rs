/// Projection: projection modes, shape parameters and matrix builders.
///
/// All matrices follow the OpenGL clip convention: right-handed view
/// space looking down -Z, NDC depth in [-1, 1].

use glam::{Mat4, Vec3, Vec4};
use crate::error::Error;
use crate::math::radians;

/// Smallest near plane distance accepted by the camera.
pub const CAMERA_NEAR_LIMIT: f32 = 0.00001;

/// Largest view angle (degrees) accepted by the camera.
///
/// A perspective frustum built at exactly this angle is degenerate
/// (`tan(90°)` overflows in f32) and does not bound a usable volume.
pub const MAX_VIEW_ANGLE: f32 = 180.0;

/// Projection mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// Box projection from `OrthoParams`
    Orthographic,
    /// Symmetric perspective frustum from fov/aspect/near/far
    Perspective,
    /// Experimental two-point projection from two reference points
    TwoPoint,
    /// Three-point projection (not implemented; rejected by the camera)
    ThreePoint,
}

/// Projection modes the camera can build a matrix for.
///
/// `ProjectionMode::ThreePoint` has no counterpart, so a camera can never
/// hold a mode it cannot build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Projection {
    Orthographic,
    Perspective,
    TwoPoint,
}

impl TryFrom<ProjectionMode> for Projection {
    type Error = Error;

    fn try_from(mode: ProjectionMode) -> Result<Self, Error> {
        match mode {
            ProjectionMode::Orthographic => Ok(Projection::Orthographic),
            ProjectionMode::Perspective => Ok(Projection::Perspective),
            ProjectionMode::TwoPoint => Ok(Projection::TwoPoint),
            ProjectionMode::ThreePoint => Err(Error::UnsupportedProjection(mode)),
        }
    }
}

impl From<Projection> for ProjectionMode {
    fn from(projection: Projection) -> Self {
        match projection {
            Projection::Orthographic => ProjectionMode::Orthographic,
            Projection::Perspective => ProjectionMode::Perspective,
            Projection::TwoPoint => ProjectionMode::TwoPoint,
        }
    }
}

/// Shape of the viewing volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewShape {
    /// Full vertical view angle in degrees
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near plane distance (positive)
    pub near: f32,
    /// Far plane distance (positive, beyond near)
    pub far: f32,
}

impl Default for ViewShape {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 720.0 / 576.0,
            near: 0.0001,
            far: 350.0,
        }
    }
}

/// Extents of an orthographic projection box.
///
/// `near` and `far` are distances in front of the eye; they are negated
/// into view-space Z when the matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoParams {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoParams {
    fn default() -> Self {
        Self {
            left: -3.0,
            right: 3.0,
            top: 3.0,
            bottom: -3.0,
            near: 1.0,
            far: 5.0,
        }
    }
}

/// Perspective matrix for a symmetric frustum.
///
/// View-space z = -near maps to NDC -1 and z = -far to NDC +1.
pub fn perspective(shape: &ViewShape) -> Mat4 {
    Mat4::perspective_rh_gl(radians(shape.fov), shape.aspect, shape.near, shape.far)
}

/// Orthographic box projection.
pub fn orthographic(params: &OrthoParams) -> Mat4 {
    let OrthoParams { left: l, right: r, top: t, bottom: b, .. } = *params;
    let nr = -params.near;
    let fr = -params.far;

    Mat4::from_cols(
        Vec4::new(2.0 / (r - l), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (t - b), 0.0, 0.0),
        Vec4::new(0.0, 0.0, 2.0 / (fr - nr), 0.0),
        Vec4::new(
            -((r + l) / (r - l)),
            -((t + b) / (t - b)),
            -((fr + nr) / (fr - nr)),
            1.0,
        ),
    )
}

/// Experimental two-point projection.
///
/// Shears W by the cosine and sine of the angle between the eye-to-point
/// vectors and pushes the near/far depth term into the X row. This is
/// not a complete two-point perspective derivation and is only kept as a
/// best-effort approximation.
pub fn two_point(eye: Vec3, points: [Vec3; 2], shape: &ViewShape) -> Mat4 {
    let v1 = eye - points[0];
    let v2 = eye - points[1];
    let angle = v1.angle_between(v2);
    let (sin, cos) = angle.sin_cos();

    crate::lumen_debug!(
        "lumen3d::Camera",
        "two-point projection: angle between reference vectors {:.3} deg",
        angle.to_degrees()
    );

    let near = shape.near;
    let far = shape.far;

    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, cos),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, sin),
        Vec4::new((-2.0 * far * near) / (far - near), 0.0, -1.0, 1.0),
    )
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
