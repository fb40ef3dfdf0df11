/*!
# Lumen 3D

Camera and transformation core for OpenGL-style renderers.

This crate derives everything a renderer needs from a camera description,
without touching the GPU itself. Matrices leave the crate through the
`MatrixSink` trait or as a plain-old-data `CameraUniform` block.

## Architecture

- **Camera**: eye/look/up frame, orthonormal basis, view and projection matrices
- **Frustum**: six inward-facing planes for point, sphere and box culling
- **Transformation**: position/scale/rotation with cached matrix, transpose and inverse
- **TransformStack**: bounded push/pop stack of transformations
- **MatrixSink**: upload seam implemented by the caller's shader layer

Linear algebra is glam; it is re-exported at the crate root.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;
pub mod transform;
pub mod uniform;

// Main lumen3d namespace module
pub mod lumen3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Geometry helpers
    pub mod math {
        pub use crate::math::*;
    }

    // Transformations
    pub mod transform {
        pub use crate::transform::*;
    }

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Upload seam
    pub mod uniform {
        pub use crate::uniform::*;
    }
}

// Re-export math library at crate root
pub use glam;
