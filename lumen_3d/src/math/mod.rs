//! Math module: planes, bounding boxes and angle helpers.
//!
//! Vector and matrix arithmetic comes from glam; this module only adds
//! the geometric primitives the camera needs on top of it.

mod plane;
mod aabb;
mod util;

pub use plane::Plane;
pub use aabb::AABB;
pub use util::{radians, degrees, calc_normal};
