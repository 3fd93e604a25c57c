use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

use super::{apply_binary_op, apply_unary_op};

/// Element-wise (Hadamard) product of two tensors of identical shape.
pub fn mul_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    apply_binary_op(a, b, "mul", |ring, x, y| ring.mul(x, y))
}

/// Multiplies every element by the coefficient `factor` (on the left).
pub fn scale_op<R: Ring>(a: &Tensor<R>, factor: &R::Element) -> Result<Tensor<R>, RingTensorError> {
    apply_unary_op(a, |ring, x| ring.mul(factor, x))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
