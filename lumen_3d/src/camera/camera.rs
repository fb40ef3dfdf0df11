/// Camera: view frame, projection and frustum culling.
///
/// The camera owns its inputs (eye, look, up, shape, projection mode) and
/// an orthonormal basis derived from them:
///
/// - `n = normalize(eye - look)` (back)
/// - `u = normalize(up x n)` (right)
/// - `v = normalize(n x u)` (up)
///
/// Mutators only record inputs and mark the derived state dirty. The view
/// matrix, projection matrix and frustum are rebuilt on the next read, so
/// changing several properties in a row costs a single rebuild.

use std::cell::Cell;
use std::fmt;
use bitflags::bitflags;
use glam::{Mat3, Mat4, Vec3, Vec4};
use crate::error::{Error, Result};
use crate::math::{radians, AABB};
use crate::uniform::MatrixSink;
use crate::{lumen_bail, lumen_debug, lumen_warn};
use super::frustum::{Frustum, Intersection};
use super::projection::{
    self, OrthoParams, Projection, ProjectionMode, ViewShape,
    CAMERA_NEAR_LIMIT, MAX_VIEW_ANGLE,
};

const SOURCE: &str = "lumen3d::Camera";

bitflags! {
    /// Derived state waiting to be rebuilt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Dirty: u8 {
        const VIEW       = 1 << 0;
        const PROJECTION = 1 << 1;
        const FRUSTUM    = 1 << 2;
    }
}

/// Rotate the orthogonal pair `(a, b)` by `angle` degrees within their plane.
fn rotate_pair(a: Vec3, b: Vec3, angle: f32) -> (Vec3, Vec3) {
    let (s, c) = radians(angle).sin_cos();
    (c * a + s * b, -s * a + c * b)
}

/// Perspective / orthographic camera with frustum culling.
///
/// Single-owner value: not `Sync`, mutate it from one thread.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    u: Vec3,
    v: Vec3,
    n: Vec3,
    shape: ViewShape,
    projection: Projection,
    ortho: OrthoParams,
    two_point: [Vec3; 2],

    dirty: Cell<Dirty>,
    view_matrix: Cell<Mat4>,
    projection_matrix: Cell<Mat4>,
    frustum: Cell<Frustum>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Default camera: eye (5, 5, 5) looking at the origin with +Y up,
    /// 45° perspective, aspect 720/576, near 0.0001, far 350.
    pub fn new() -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            look: Vec3::ZERO,
            up: Vec3::Y,
            u: Vec3::X,
            v: Vec3::Y,
            n: Vec3::Z,
            shape: ViewShape::default(),
            projection: Projection::Perspective,
            ortho: OrthoParams::default(),
            two_point: [Vec3::ZERO; 2],
            dirty: Cell::new(Dirty::all()),
            view_matrix: Cell::new(Mat4::IDENTITY),
            projection_matrix: Cell::new(Mat4::IDENTITY),
            frustum: Cell::new(Frustum::default()),
        };
        camera.set(Vec3::splat(5.0), Vec3::ZERO, Vec3::Y);
        camera
    }

    /// Camera with the given frame and projection mode, default shape.
    ///
    /// # Errors
    ///
    /// `Error::UnsupportedProjection` for `ProjectionMode::ThreePoint`.
    pub fn with_view(eye: Vec3, look: Vec3, up: Vec3, mode: ProjectionMode) -> Result<Self> {
        let mut camera = Self::new();
        camera.change_projection_mode(mode)?;
        camera.set(eye, look, up);
        Ok(camera)
    }

    // ===== FRAME =====

    /// Set eye, look and up, and re-derive the basis.
    ///
    /// `up` does not need to be orthogonal to the view direction. `eye`
    /// equal to `look` (or `up` parallel to it) yields a NaN basis.
    pub fn set(&mut self, eye: Vec3, look: Vec3, up: Vec3) {
        self.eye = eye;
        self.look = look;
        self.up = up;
        self.derive_basis();
        self.invalidate_view();
    }

    /// Replace the eye position. The basis is kept as-is.
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
        self.invalidate_view();
    }

    /// Move the eye by `delta`. The basis is kept as-is.
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.invalidate_view();
    }

    /// Move eye and look together, then re-derive the basis.
    pub fn translate_both(&mut self, delta: Vec3) {
        self.eye += delta;
        self.look += delta;
        self.derive_basis();
        self.invalidate_view();
    }

    /// Move the eye only, then re-derive the basis (the camera keeps
    /// looking at the same point).
    pub fn move_eye(&mut self, delta: Vec3) {
        self.eye += delta;
        self.derive_basis();
        self.invalidate_view();
    }

    /// Move the look point only, then re-derive the basis.
    pub fn move_look(&mut self, delta: Vec3) {
        self.look += delta;
        self.derive_basis();
        self.invalidate_view();
    }

    /// Slide the eye along the camera's own axes.
    pub fn slide(&mut self, du: f32, dv: f32, dn: f32) {
        self.eye += du * self.u + dv * self.v + dn * self.n;
        self.invalidate_view();
    }

    // ===== LOCAL ROTATIONS =====

    /// Rotate (u, v) about the view axis. The angle is negated, so a
    /// positive roll turns the image clockwise on screen.
    pub fn roll(&mut self, angle: f32) {
        (self.u, self.v) = rotate_pair(self.u, self.v, -angle);
        self.orthonormalize();
        self.invalidate_view();
    }

    /// Rotate (n, v) about the camera's right axis.
    pub fn pitch(&mut self, angle: f32) {
        (self.n, self.v) = rotate_pair(self.n, self.v, angle);
        self.orthonormalize();
        self.invalidate_view();
    }

    /// Rotate (u, n) about the camera's up axis.
    pub fn yaw(&mut self, angle: f32) {
        (self.u, self.n) = rotate_pair(self.u, self.n, angle);
        self.orthonormalize();
        self.invalidate_view();
    }

    // ===== WORLD-AXIS ROTATIONS =====

    /// Rotate the whole basis about the world Y axis.
    ///
    /// Not equivalent to `yaw`: this turns around a fixed world axis,
    /// `yaw` around the camera's current up vector.
    pub fn normalized_yaw(&mut self, angle: f32) {
        self.rotate_basis(Mat3::from_rotation_y(radians(angle)));
    }

    /// Rotate the whole basis about the world X axis.
    pub fn normalized_pitch(&mut self, angle: f32) {
        self.rotate_basis(Mat3::from_rotation_x(radians(angle)));
    }

    /// Rotate the whole basis about the world Z axis.
    pub fn normalized_roll(&mut self, angle: f32) {
        self.rotate_basis(Mat3::from_rotation_z(radians(angle)));
    }

    // ===== SHAPE / PROJECTION =====

    /// Set view angle (degrees), aspect ratio, near/far distances and projection mode.
    ///
    /// A view angle above 180° is clamped to 180° and a near distance
    /// below `CAMERA_NEAR_LIMIT` is raised to it; both are logged. At the
    /// 180° clamp the perspective frustum is degenerate and culls nothing
    /// reliably.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedProjection` for `ProjectionMode::ThreePoint`
    /// - `Error::InvalidShape` if `view_angle` or `near` is NaN, or `far`
    ///   is not greater than the (clamped) `near`
    ///
    /// On error the camera is left unchanged.
    pub fn set_shape(
        &mut self,
        view_angle: f32,
        aspect: f32,
        near: f32,
        far: f32,
        mode: ProjectionMode,
    ) -> Result<()> {
        let projection = Self::supported(mode)?;

        let fov = Self::clamp_view_angle(view_angle)?;
        if near.is_nan() {
            lumen_bail!(SOURCE, Error::InvalidShape("near plane is NaN".to_string()));
        }
        let near = if near < CAMERA_NEAR_LIMIT {
            lumen_warn!(SOURCE, "near plane {} below limit, clamped to {}", near, CAMERA_NEAR_LIMIT);
            CAMERA_NEAR_LIMIT
        } else {
            near
        };
        if !(far > near) {
            lumen_bail!(SOURCE, Error::InvalidShape(format!(
                "far plane ({}) must be greater than near plane ({})", far, near
            )));
        }

        self.shape = ViewShape { fov, aspect, near, far };
        self.projection = projection;
        self.invalidate_shape();
        Ok(())
    }

    /// Change the aspect ratio (width / height).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.shape.aspect = aspect;
        self.invalidate_shape();
    }

    /// Change the view angle in degrees (clamped to 180°).
    ///
    /// # Errors
    ///
    /// `Error::InvalidShape` if `angle` is NaN; the camera is left unchanged.
    pub fn set_view_angle(&mut self, angle: f32) -> Result<()> {
        self.shape.fov = Self::clamp_view_angle(angle)?;
        self.invalidate_shape();
        Ok(())
    }

    /// Switch projection mode, keeping the current shape.
    ///
    /// # Errors
    ///
    /// `Error::UnsupportedProjection` for `ProjectionMode::ThreePoint`.
    pub fn change_projection_mode(&mut self, mode: ProjectionMode) -> Result<()> {
        self.projection = Self::supported(mode)?;
        self.dirty.set(self.dirty.get() | Dirty::PROJECTION);
        Ok(())
    }

    /// Set the orthographic box. `near` and `far` are distances in front of the eye.
    pub fn set_ortho_params(&mut self, left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) {
        self.ortho = OrthoParams { left, right, top, bottom, near, far };
        self.dirty.set(self.dirty.get() | Dirty::PROJECTION);
    }

    /// Set the two reference points of the two-point projection.
    pub fn set_two_point_points(&mut self, p1: Vec3, p2: Vec3) {
        self.two_point = [p1, p2];
        self.dirty.set(self.dirty.get() | Dirty::PROJECTION);
    }

    /// Rebuild view matrix, projection matrix and frustum now.
    ///
    /// Reads already rebuild whatever is stale; this forces a full rebuild
    /// from the current inputs. Calling it twice in a row gives identical results.
    pub fn update(&self) {
        self.dirty.set(Dirty::all());
        self.refresh();
    }

    // ===== GETTERS =====

    /// Eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at point.
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Up hint given to `set`.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right axis.
    pub fn u(&self) -> Vec3 {
        self.u
    }

    /// Up axis.
    pub fn v(&self) -> Vec3 {
        self.v
    }

    /// Back axis (the camera looks along `-n`).
    pub fn n(&self) -> Vec3 {
        self.n
    }

    pub fn fov(&self) -> f32 {
        self.shape.fov
    }

    pub fn aspect(&self) -> f32 {
        self.shape.aspect
    }

    pub fn near(&self) -> f32 {
        self.shape.near
    }

    pub fn far(&self) -> f32 {
        self.shape.far
    }

    /// All shape parameters.
    pub fn shape(&self) -> &ViewShape {
        &self.shape
    }

    /// Active projection mode.
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection.into()
    }

    /// Orthographic box used by `ProjectionMode::Orthographic`.
    pub fn ortho_params(&self) -> &OrthoParams {
        &self.ortho
    }

    /// Reference points used by `ProjectionMode::TwoPoint`.
    pub fn two_point_points(&self) -> [Vec3; 2] {
        self.two_point
    }

    /// View matrix (world to camera space).
    pub fn view_matrix(&self) -> Mat4 {
        self.refresh();
        self.view_matrix.get()
    }

    /// Projection matrix for the active mode.
    pub fn projection_matrix(&self) -> Mat4 {
        self.refresh();
        self.projection_matrix.get()
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.refresh();
        self.projection_matrix.get() * self.view_matrix.get()
    }

    /// Current frustum.
    pub fn frustum(&self) -> Frustum {
        self.refresh();
        self.frustum.get()
    }

    // ===== CULLING =====

    /// `Inside` unless the point is behind one of the six planes.
    pub fn is_point_in_frustum(&self, point: Vec3) -> Intersection {
        self.frustum().classify_point(point)
    }

    /// Classify a sphere (`radius >= 0`) against the frustum.
    pub fn is_sphere_in_frustum(&self, center: Vec3, radius: f32) -> Intersection {
        self.frustum().classify_sphere(center, radius)
    }

    /// Classify a world-space AABB against the frustum.
    pub fn is_aabb_in_frustum(&self, aabb: &AABB) -> Intersection {
        self.frustum().classify_aabb(aabb)
    }

    /// Frustum edges as a line list, for debug drawing.
    pub fn frustum_lines(&self) -> [Vec3; 24] {
        self.frustum().line_list()
    }

    // ===== UPLOAD =====

    /// Push view, projection and view-projection matrices into `sink`
    /// under the names "view", "projection" and "view_projection".
    pub fn write_matrices(&self, sink: &mut dyn MatrixSink) -> Result<()> {
        sink.set_matrix("view", &self.view_matrix())?;
        sink.set_matrix("projection", &self.projection_matrix())?;
        sink.set_matrix("view_projection", &self.view_projection_matrix())?;
        Ok(())
    }

    // ===== INTERNAL =====

    fn supported(mode: ProjectionMode) -> Result<Projection> {
        match Projection::try_from(mode) {
            Ok(projection) => Ok(projection),
            Err(err) => lumen_bail!(SOURCE, err),
        }
    }

    fn clamp_view_angle(angle: f32) -> Result<f32> {
        if angle.is_nan() {
            lumen_bail!(SOURCE, Error::InvalidShape("view angle is NaN".to_string()));
        }
        if angle > MAX_VIEW_ANGLE {
            lumen_warn!(SOURCE, "view angle {} clamped to {}", angle, MAX_VIEW_ANGLE);
            Ok(MAX_VIEW_ANGLE)
        } else {
            Ok(angle)
        }
    }

    fn derive_basis(&mut self) {
        self.n = (self.eye - self.look).normalize();
        self.u = self.up.cross(self.n).normalize();
        self.v = self.n.cross(self.u).normalize();
    }

    /// Gram-Schmidt anchored on n; removes drift left by repeated rotations.
    fn orthonormalize(&mut self) {
        self.n = self.n.normalize();
        self.u = self.v.cross(self.n).normalize();
        self.v = self.n.cross(self.u);
    }

    fn rotate_basis(&mut self, rotation: Mat3) {
        self.u = rotation * self.u;
        self.v = rotation * self.v;
        self.n = rotation * self.n;
        self.orthonormalize();
        self.invalidate_view();
    }

    fn invalidate_view(&mut self) {
        let mut dirty = self.dirty.get() | Dirty::VIEW | Dirty::FRUSTUM;
        // the two-point matrix depends on the eye position
        if self.projection == Projection::TwoPoint {
            dirty |= Dirty::PROJECTION;
        }
        self.dirty.set(dirty);
    }

    fn invalidate_shape(&mut self) {
        self.dirty.set(self.dirty.get() | Dirty::PROJECTION | Dirty::FRUSTUM);
    }

    fn refresh(&self) {
        let dirty = self.dirty.get();
        if dirty.is_empty() {
            return;
        }

        if dirty.contains(Dirty::VIEW) {
            self.view_matrix.set(self.build_view_matrix());
        }
        if dirty.contains(Dirty::PROJECTION) {
            self.projection_matrix.set(self.build_projection_matrix());
        }
        if dirty.contains(Dirty::FRUSTUM) {
            self.frustum.set(Frustum::from_basis(self.eye, self.u, self.v, self.n, &self.shape));
        }

        self.dirty.set(Dirty::empty());
    }

    fn build_view_matrix(&self) -> Mat4 {
        let (u, v, n) = (self.u, self.v, self.n);
        Mat4::from_cols(
            Vec4::new(u.x, v.x, n.x, 0.0),
            Vec4::new(u.y, v.y, n.y, 0.0),
            Vec4::new(u.z, v.z, n.z, 0.0),
            Vec4::new(-self.eye.dot(u), -self.eye.dot(v), -self.eye.dot(n), 1.0),
        )
    }

    fn build_projection_matrix(&self) -> Mat4 {
        lumen_debug!(SOURCE, "rebuilding {:?} projection", self.projection);
        match self.projection {
            Projection::Orthographic => projection::orthographic(&self.ortho),
            Projection::Perspective => projection::perspective(&self.shape),
            Projection::TwoPoint => projection::two_point(self.eye, self.two_point, &self.shape),
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eye [{}, {}, {}] look [{}, {}, {}] up [{}, {}, {}]",
            self.eye.x, self.eye.y, self.eye.z,
            self.look.x, self.look.y, self.look.z,
            self.up.x, self.up.y, self.up.z,
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
