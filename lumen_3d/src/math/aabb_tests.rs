use glam::{Mat4, Vec3};
use super::*;

#[test]
fn test_aabb_center_and_half_extents() {
    let aabb = AABB::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));

    assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
    assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_aabb_positive_negative_vertex() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(2.0));
    let normal = Vec3::new(1.0, -1.0, 0.0);

    assert_eq!(aabb.positive_vertex(normal), Vec3::new(2.0, -1.0, 2.0));
    assert_eq!(aabb.negative_vertex(normal), Vec3::new(-1.0, 2.0, -1.0));
}

#[test]
fn test_aabb_transformed_by_translation() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(10.0, 0.0, -5.0)));

    assert_eq!(moved.min, Vec3::new(9.0, -1.0, -6.0));
    assert_eq!(moved.max, Vec3::new(11.0, 1.0, -4.0));
}

#[test]
fn test_aabb_transformed_by_rotation_grows() {
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    let rotated = aabb.transformed(&Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4));

    let expected = std::f32::consts::SQRT_2;
    assert!((rotated.max.x - expected).abs() < 1e-5);
    assert!((rotated.min.z + expected).abs() < 1e-5);
    assert!((rotated.max.y - 1.0).abs() < 1e-6);
}
