use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

use super::apply_binary_op;

/// Element-wise sum of two tensors of identical shape.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ.
pub fn add_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    apply_binary_op(a, b, "add", |ring, x, y| ring.add(x, y))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
