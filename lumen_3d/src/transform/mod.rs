//! Transform module: model transformations and the hierarchical stack.

mod transformation;
mod transform_stack;

pub use transformation::Transformation;
pub use transform_stack::TransformStack;
