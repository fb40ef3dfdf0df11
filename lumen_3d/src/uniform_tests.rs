use glam::{Mat4, Vec3, Vec4};
use crate::camera::Camera;
use super::*;

// ============================================================================
// CameraUniform
// ============================================================================

#[test]
fn test_camera_uniform_size() {
    assert_eq!(std::mem::size_of::<CameraUniform>(), 208);
}

#[test]
fn test_camera_uniform_from_camera() {
    let camera = Camera::new();
    let uniform = CameraUniform::from_camera(&camera);

    assert_eq!(uniform.view, camera.view_matrix());
    assert_eq!(uniform.projection, camera.projection_matrix());
    assert_eq!(uniform.view_projection, camera.view_projection_matrix());
    assert_eq!(uniform.eye, Vec4::new(5.0, 5.0, 5.0, 1.0));
}

#[test]
fn test_camera_uniform_bytes_layout() {
    let mut camera = Camera::new();
    camera.set_eye(Vec3::new(1.0, 2.0, 3.0));
    let uniform = CameraUniform::from_camera(&camera);
    let bytes = uniform.as_bytes();

    assert_eq!(bytes.len(), 208);
    // view first, column-major
    assert_eq!(&bytes[..64], bytemuck::bytes_of(&uniform.view));
    // eye last
    let eye: &[f32] = bytemuck::cast_slice(&bytes[192..]);
    assert_eq!(eye, &[1.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_camera_uniform_zeroed() {
    let uniform = CameraUniform::zeroed();
    assert_eq!(uniform.view, Mat4::ZERO);
    assert_eq!(uniform.eye, Vec4::ZERO);
}

// ============================================================================
// MatrixKind
// ============================================================================

#[test]
fn test_matrix_kind_default() {
    assert_eq!(MatrixKind::default(), MatrixKind::Normal);
    assert_ne!(MatrixKind::Transpose, MatrixKind::Inverse);
}
