use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::ops::{arithmetic, comparison};
use crate::tensor::Tensor;

/// Element-wise arithmetic. All results own fresh storage.
impl<R: Ring> Tensor<R> {
    /// `self + other`; shapes must be identical.
    pub fn add(&self, other: &Tensor<R>) -> Result<Self, RingTensorError> {
        arithmetic::add_op(self, other)
    }

    /// `self - other`; shapes must be identical.
    pub fn sub(&self, other: &Tensor<R>) -> Result<Self, RingTensorError> {
        arithmetic::sub_op(self, other)
    }

    pub fn neg(&self) -> Result<Self, RingTensorError> {
        arithmetic::neg_op(self)
    }

    /// Hadamard product; shapes must be identical.
    pub fn mul(&self, other: &Tensor<R>) -> Result<Self, RingTensorError> {
        arithmetic::mul_op(self, other)
    }

    /// Multiplies every element by the coefficient `factor`.
    pub fn scale(&self, factor: &R::Element) -> Result<Self, RingTensorError> {
        arithmetic::scale_op(self, factor)
    }

    /// True when every element is zero in the tensor's model.
    pub fn is_zero(&self) -> Result<bool, RingTensorError> {
        comparison::is_zero_op(self)
    }

    /// Same shape and coefficient-equal elements.
    pub fn equals(&self, other: &Tensor<R>) -> Result<bool, RingTensorError> {
        comparison::equals_op(self, other)
    }
}
