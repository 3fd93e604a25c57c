use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::inplace_ops::{add, assign, fill};
use crate::tensor::Tensor;

/// In-place operations. They take `&self`: the geometry is immutable and the
/// storage is shared, so mutation goes through the buffer lock.
impl<R: Ring> Tensor<R> {
    /// Sets every element of this view to `value`.
    pub fn fill_(&self, value: R::Element) -> Result<(), RingTensorError> {
        fill::perform_fill_inplace(self, &value)
    }

    /// Copies `src` element-wise into this view. Shapes must match exactly.
    pub fn assign_(&self, src: &Tensor<R>) -> Result<(), RingTensorError> {
        assign::perform_assign_inplace(self, src)
    }

    /// Adds `other` element-wise into this view. Shapes must match exactly.
    pub fn add_(&self, other: &Tensor<R>) -> Result<(), RingTensorError> {
        add::perform_add_inplace(self, other)
    }
}

#[cfg(test)]
#[path = "inplace_methods_test.rs"]
mod tests;
