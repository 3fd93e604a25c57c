use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

use super::apply_unary_op;

/// Element-wise additive inverse.
pub fn neg_op<R: Ring>(a: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    apply_unary_op(a, |ring, x| ring.neg(x))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
