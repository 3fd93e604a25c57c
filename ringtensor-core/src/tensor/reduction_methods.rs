use crate::coefficient::Ring;
use crate::einsum;
use crate::error::RingTensorError;
use crate::ops::{concat, linalg, reduction, stack};
use crate::tensor::Tensor;

/// Reductions, products and joins. All of them allocate fresh storage.
impl<R: Ring> Tensor<R> {
    /// Sums over `axes`, removing them. Delegates to `ops::reduction::sum::sum_op`.
    pub fn sum(&self, axes: &[usize]) -> Result<Tensor<R>, RingTensorError> {
        reduction::sum_op(self, axes)
    }

    /// Sum of every element as a rank-0 tensor.
    pub fn sum_all(&self) -> Result<Tensor<R>, RingTensorError> {
        reduction::sum_all_op(self)
    }

    /// Sum along the `(axis1, axis2, offset)` diagonal.
    pub fn trace(&self, axis1: usize, axis2: usize, offset: isize) -> Result<Tensor<R>, RingTensorError> {
        reduction::trace_op(self, axis1, axis2, offset)
    }

    /// Contracts the last `r` axes of `self` with the first `r` axes of `other`.
    pub fn matmul(&self, other: &Tensor<R>, r: usize) -> Result<Tensor<R>, RingTensorError> {
        linalg::matmul_op(self, other, r)
    }

    pub fn outer(&self, other: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
        linalg::outer_op(self, other)
    }

    /// Same as [`Tensor::outer`].
    pub fn wedge(&self, other: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
        linalg::wedge_op(self, other)
    }

    /// Single-operand contraction, e.g. `m.einsum("ii->i")`.
    pub fn einsum(&self, expr: &str) -> Result<Tensor<R>, RingTensorError> {
        einsum::einsum(expr, &[self])
    }

    /// Joins `tensors` along an existing axis.
    pub fn concatenate(tensors: &[Tensor<R>], axis: usize) -> Result<Tensor<R>, RingTensorError> {
        concat::concat_op(tensors, axis)
    }

    /// Joins equally shaped `tensors` along a new axis inserted at `axis`.
    pub fn stack(tensors: &[Tensor<R>], axis: usize) -> Result<Tensor<R>, RingTensorError> {
        stack::stack_op(tensors, axis)
    }
}
