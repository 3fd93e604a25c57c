use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

use super::apply_binary_op;

/// Element-wise difference `a - b` of two tensors of identical shape.
pub fn sub_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    apply_binary_op(a, b, "sub", |ring, x, y| ring.sub(x, y))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
