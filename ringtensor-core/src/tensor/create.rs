// src/tensor/create.rs

use rand::Rng;

use crate::coefficient::{Ring, SampleElement};
use crate::error::RingTensorError;
use crate::tensor::iter_utils::NdIndexIter;
use crate::tensor::nested::NestedSeq;
use crate::tensor::utils::validate_positive_shape;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

impl<R: Ring> Tensor<R> {
    /// Creates a tensor from a flat row-major vector.
    ///
    /// # Errors
    /// - `InvalidShape` if any dimension is 0.
    /// - `TensorCreationError` if `data.len()` differs from the element count.
    pub fn from_vec(data: Vec<R::Element>, shape: Vec<usize>, ring: R) -> Result<Self, RingTensorError> {
        validate_positive_shape(&shape)?;
        Ok(Tensor::from_data(TensorData::new(data, shape, ring)?))
    }

    /// Builds a tensor by evaluating `f` once per logical index, in row-major
    /// order (last axis fastest).
    ///
    /// # Errors
    /// `InvalidShape` if any dimension is 0.
    pub fn from_fn<F>(shape: &[usize], ring: R, mut f: F) -> Result<Self, RingTensorError>
    where
        F: FnMut(&[usize]) -> R::Element,
    {
        Self::try_from_fn(shape, ring, |idx| Ok(f(idx)))
    }

    /// Like [`Tensor::from_fn`] with a fallible generator; the first error is
    /// returned and nothing is allocated for the caller.
    pub fn try_from_fn<F>(shape: &[usize], ring: R, mut f: F) -> Result<Self, RingTensorError>
    where
        F: FnMut(&[usize]) -> Result<R::Element, RingTensorError>,
    {
        validate_positive_shape(shape)?;
        let data = NdIndexIter::new(shape)
            .map(|idx| f(&idx))
            .collect::<Result<Vec<_>, _>>()?;
        Tensor::from_vec(data, shape.to_vec(), ring)
    }

    /// Creates a tensor from a nested sequence literal.
    ///
    /// # Errors
    /// `InvalidShape` for ragged or empty nesting.
    pub fn from_nested(seq: &NestedSeq<R::Element>, ring: R) -> Result<Self, RingTensorError> {
        let (shape, data) = seq.flatten()?;
        Tensor::from_vec(data, shape, ring)
    }

    /// Creates a rank-0 tensor holding `value`.
    pub fn scalar(value: R::Element, ring: R) -> Self {
        Tensor::from_data(TensorData {
            buffer: std::sync::Arc::new(crate::buffer::Buffer::new(vec![value])),
            ring,
            shape: vec![],
            strides: vec![],
            offset: 0,
        })
    }
}

impl<R: SampleElement> Tensor<R> {
    /// Creates a tensor of elements drawn from the model's sampler.
    pub fn random<G: Rng + ?Sized>(shape: &[usize], ring: R, rng: &mut G) -> Result<Self, RingTensorError> {
        let sampler = ring.clone();
        Tensor::from_fn(shape, ring, |_| sampler.sample(rng))
    }
}

/// Creates a new tensor of the given shape with every element set to `value`.
pub fn full<R: Ring>(shape: &[usize], value: R::Element, ring: R) -> Result<Tensor<R>, RingTensorError> {
    validate_positive_shape(shape)?;
    let numel = shape.iter().product();
    Tensor::from_vec(vec![value; numel], shape.to_vec(), ring)
}

/// Creates a new tensor filled with the model's zero.
pub fn zeros<R: Ring>(shape: &[usize], ring: R) -> Result<Tensor<R>, RingTensorError> {
    let zero = ring.zero();
    full(shape, zero, ring)
}

/// Creates a new tensor filled with the model's one.
pub fn ones<R: Ring>(shape: &[usize], ring: R) -> Result<Tensor<R>, RingTensorError> {
    let one = ring.one();
    full(shape, one, ring)
}

/// Creates a zero tensor with the shape and model of `tensor`.
pub fn zeros_like<R: Ring>(tensor: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    zeros(&tensor.shape(), tensor.ring().clone())
}

/// Creates the `n x n` identity matrix.
pub fn identity<R: Ring>(n: usize, ring: R) -> Result<Tensor<R>, RingTensorError> {
    let (zero, one) = (ring.zero(), ring.one());
    Tensor::from_fn(&[n, n], ring, |idx| if idx[0] == idx[1] { one.clone() } else { zero.clone() })
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
