//! Error types for Lumen3D
//!
//! This module defines the error type shared by the camera, the transform
//! stack and the matrix upload seam.

use std::fmt;
use crate::camera::ProjectionMode;

/// Result type for Lumen3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera shape parameters rejected (far plane not beyond near plane)
    InvalidShape(String),

    /// Projection mode with no implementation
    UnsupportedProjection(ProjectionMode),

    /// Transform stack is full (carries the maximum depth)
    StackOverflow(usize),

    /// Pop requested on an empty transform stack
    StackUnderflow,

    /// A matrix sink refused an upload
    Sink(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidShape(msg) => write!(f, "Invalid camera shape: {}", msg),
            Error::UnsupportedProjection(mode) => write!(f, "Unsupported projection mode: {:?}", mode),
            Error::StackOverflow(max) => write!(f, "Transform stack overflow (max depth {})", max),
            Error::StackUnderflow => write!(f, "Transform stack underflow"),
            Error::Sink(msg) => write!(f, "Matrix sink error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity and evaluate to it.
///
/// ```ignore
/// let err = lumen_err!("lumen3d::Camera", Error::StackUnderflow);
/// ```
#[macro_export]
macro_rules! lumen_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::lumen3d::Error = $err;
        $crate::lumen_error!($source, "{}", err);
        err
    }};
}

/// Log an error at ERROR severity and return it from the enclosing function.
#[macro_export]
macro_rules! lumen_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::lumen_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
