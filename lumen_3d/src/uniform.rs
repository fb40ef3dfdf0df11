//! Uniform seam: how matrices leave the crate.
//!
//! Nothing here talks to a GPU. `MatrixSink` is implemented by whatever
//! owns the shader program (a uniform table, a command recorder, a test
//! recorder); `CameraUniform` is a plain-old-data block ready to be copied
//! into a uniform buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use crate::camera::Camera;
use crate::error::Result;

/// Receiver for named matrix uploads.
pub trait MatrixSink {
    /// Upload `matrix` under the uniform name `name`.
    fn set_matrix(&mut self, name: &str, matrix: &Mat4) -> Result<()>;
}

/// Which of a transformation's matrices to upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixKind {
    #[default]
    Normal,
    Transpose,
    Inverse,
}

/// Per-frame camera data, std140-compatible (3 x mat4 + vec4 = 208 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    /// Eye position, w = 1
    pub eye: Vec4,
}

impl CameraUniform {
    /// Snapshot the camera's current matrices.
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            view_projection: camera.view_projection_matrix(),
            eye: camera.eye().extend(1.0),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
