/// TransformStack: hierarchical transformation stack.
///
/// `current` is the transformation being edited, `global` a transformation
/// applied on top of everything (typically the scene's mouse rotation).
/// `push` saves `current` so a child can be edited, `pop` restores it.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::uniform::{MatrixKind, MatrixSink};
use crate::lumen_bail;
use super::Transformation;

const SOURCE: &str = "lumen3d::TransformStack";

/// Bounded stack of saved transformations.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Transformation,
    global: Transformation,
    saved: Vec<Transformation>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Maximum number of saved transformations.
    pub const MAX_DEPTH: usize = 40;

    pub fn new() -> Self {
        Self {
            current: Transformation::new(),
            global: Transformation::new(),
            saved: Vec::with_capacity(Self::MAX_DEPTH),
        }
    }

    /// Save `current` and start again from identity.
    ///
    /// # Errors
    ///
    /// `Error::StackOverflow` when `MAX_DEPTH` transformations are already saved.
    pub fn push(&mut self) -> Result<()> {
        self.save()?;
        self.current.reset();
        Ok(())
    }

    /// Save `current` and keep editing a copy of it.
    ///
    /// # Errors
    ///
    /// `Error::StackOverflow` when `MAX_DEPTH` transformations are already saved.
    pub fn push_and_copy(&mut self) -> Result<()> {
        self.save()
    }

    /// Restore the last saved transformation into `current`.
    ///
    /// # Errors
    ///
    /// `Error::StackUnderflow` when nothing was saved.
    pub fn pop(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(transform) => {
                self.current = transform;
                Ok(())
            }
            None => lumen_bail!(SOURCE, Error::StackUnderflow),
        }
    }

    /// Number of saved transformations.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    // ===== CURRENT / GLOBAL =====

    pub fn current(&self) -> &Transformation {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Transformation {
        &mut self.current
    }

    pub fn set_current(&mut self, transform: Transformation) {
        self.current = transform;
    }

    /// Replace `current` with a raw matrix.
    pub fn set_current_matrix(&mut self, matrix: Mat4) {
        self.current.set_matrix(matrix);
    }

    pub fn global(&self) -> &Transformation {
        &self.global
    }

    pub fn set_global(&mut self, transform: Transformation) {
        self.global = transform;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.current.set_position(position);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.current.set_scale(scale);
    }

    /// Euler angles in degrees.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.current.set_rotation(rotation);
    }

    /// `global` applied after `current`.
    pub fn current_and_global(&self) -> Transformation {
        self.global.then(&self.current)
    }

    /// Matrix of `current_and_global`.
    pub fn global_matrix(&self) -> Mat4 {
        *self.global.matrix() * *self.current.matrix()
    }

    // ===== UPLOAD =====

    pub fn load_current_to(&self, sink: &mut dyn MatrixSink, name: &str, kind: MatrixKind) -> Result<()> {
        self.current.load_to(sink, name, kind)
    }

    pub fn load_global_to(&self, sink: &mut dyn MatrixSink, name: &str, kind: MatrixKind) -> Result<()> {
        self.global.load_to(sink, name, kind)
    }

    pub fn load_current_and_global_to(
        &self,
        sink: &mut dyn MatrixSink,
        name: &str,
        kind: MatrixKind,
    ) -> Result<()> {
        self.current_and_global().load_to(sink, name, kind)
    }

    // ===== INTERNAL =====

    fn save(&mut self) -> Result<()> {
        if self.saved.len() >= Self::MAX_DEPTH {
            lumen_bail!(SOURCE, Error::StackOverflow(Self::MAX_DEPTH));
        }
        self.saved.push(self.current);
        Ok(())
    }
}

#[cfg(test)]
#[path = "transform_stack_tests.rs"]
mod tests;
