//! Camera module: view frame, projections, and frustum culling.
//!
//! The camera is a plain value owned by the caller. Nothing in the crate
//! keeps a reference to it; hand its matrices to the renderer through
//! `Camera::write_matrices` or `CameraUniform`.

mod camera;
mod frustum;
pub(crate) mod projection;

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumCorners, Intersection,
    PLANE_TOP, PLANE_BOTTOM, PLANE_LEFT, PLANE_RIGHT, PLANE_NEAR, PLANE_FAR,
};
pub use projection::{
    ProjectionMode, ViewShape, OrthoParams,
    CAMERA_NEAR_LIMIT, MAX_VIEW_ANGLE,
    perspective, orthographic, two_point,
};
