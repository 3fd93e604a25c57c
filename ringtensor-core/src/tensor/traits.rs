// src/tensor/traits.rs

use std::sync::Arc;

use crate::coefficient::Ring;
use crate::tensor::Tensor;

impl<R: Ring> Clone for Tensor<R> {
    /// Shallow clone: a new handle to the same storage and geometry.
    /// Writes through one clone are visible through the other. Use
    /// [`Tensor::copy`] for an independent tensor.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl<R: Ring> PartialEq for Tensor<R> {
    /// Same shape and coefficient-equal elements, always decided by the
    /// model's `is_equal`, even for two handles of the same tensor. A
    /// poisoned buffer compares unequal.
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}
