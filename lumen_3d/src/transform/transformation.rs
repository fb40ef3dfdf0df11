/// Transformation: position, scale and Euler rotation with cached matrices.
///
/// The local matrix is `T * Rz * Ry * Rx * S`: scale first, then rotate
/// about X, Y and Z (degrees), then translate. Transpose and inverse are
/// kept alongside and recomputed after every mutation.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::math::radians;
use crate::uniform::{MatrixKind, MatrixSink};

/// Position / scale / rotation transform with cached matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    position: Vec3,
    scale: Vec3,
    /// Euler angles in degrees
    rotation: Vec3,

    matrix: Mat4,
    transpose: Mat4,
    inverse: Mat4,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformation {
    /// Identity transform.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            matrix: Mat4::IDENTITY,
            transpose: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }

    /// Transform from components.
    pub fn from_components(position: Vec3, scale: Vec3, rotation: Vec3) -> Self {
        let mut transform = Self { position, scale, rotation, ..Self::new() };
        transform.compute_matrices();
        transform
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.compute_matrices();
    }

    pub fn add_position(&mut self, delta: Vec3) {
        self.position += delta;
        self.compute_matrices();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.compute_matrices();
    }

    pub fn add_scale(&mut self, delta: Vec3) {
        self.scale += delta;
        self.compute_matrices();
    }

    /// Set Euler angles in degrees.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.compute_matrices();
    }

    pub fn add_rotation(&mut self, delta: Vec3) {
        self.rotation += delta;
        self.compute_matrices();
    }

    /// Back to identity.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace the matrix directly.
    ///
    /// Components are reset to identity values: they no longer describe the
    /// matrix, and any later component setter rebuilds it from scratch.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.position = Vec3::ZERO;
        self.scale = Vec3::ONE;
        self.rotation = Vec3::ZERO;
        self.matrix = matrix;
        self.transpose = matrix.transpose();
        self.inverse = matrix.inverse();
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Euler angles in degrees.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn transpose_matrix(&self) -> &Mat4 {
        &self.transpose
    }

    pub fn inverse_matrix(&self) -> &Mat4 {
        &self.inverse
    }

    /// Matrix selected by `kind`.
    pub fn matrix_of(&self, kind: MatrixKind) -> &Mat4 {
        match kind {
            MatrixKind::Normal => &self.matrix,
            MatrixKind::Transpose => &self.transpose,
            MatrixKind::Inverse => &self.inverse,
        }
    }

    // ===== COMPOSITION =====

    /// Compose `self` (parent) with `child`: the result applies `child`
    /// first, then `self`.
    ///
    /// The result only carries matrices; its components are identity values.
    pub fn then(&self, child: &Transformation) -> Transformation {
        let matrix = self.matrix * child.matrix;
        Self {
            matrix,
            transpose: matrix.transpose(),
            inverse: child.inverse * self.inverse,
            ..Self::new()
        }
    }

    /// Upload one of the matrices through `sink` under `name`.
    pub fn load_to(&self, sink: &mut dyn MatrixSink, name: &str, kind: MatrixKind) -> Result<()> {
        sink.set_matrix(name, self.matrix_of(kind))
    }

    // ===== INTERNAL =====

    fn compute_matrices(&mut self) {
        let rx = radians(self.rotation.x);
        let ry = radians(self.rotation.y);
        let rz = radians(self.rotation.z);

        let rotation = Mat4::from_rotation_z(rz) * Mat4::from_rotation_y(ry) * Mat4::from_rotation_x(rx);
        self.matrix = Mat4::from_translation(self.position) * rotation * Mat4::from_scale(self.scale);
        self.transpose = self.matrix.transpose();

        // inverse built from the parts; a zero scale component yields inf
        let inverse_rotation =
            Mat4::from_rotation_x(-rx) * Mat4::from_rotation_y(-ry) * Mat4::from_rotation_z(-rz);
        self.inverse = Mat4::from_scale(self.scale.recip())
            * inverse_rotation
            * Mat4::from_translation(-self.position);
    }
}

#[cfg(test)]
#[path = "transformation_tests.rs"]
mod tests;
