use crate::coefficient::Ring;
use crate::einsum::{contract, ContractionSpec};
use crate::error::RingTensorError;
use crate::ops::reduction::utils::process_reduction_axes;
use crate::tensor::Tensor;

/// Sums `input` over `axes`, dropping them from the shape.
///
/// Each axis gets its own label; the reduced axes are simply left out of the
/// output labels, so the contraction engine does the summation. Duplicate
/// axes are ignored and an empty `axes` returns a copy.
///
/// # Errors
/// `RingTensorError::InvalidAxis` if an axis is out of range.
pub fn sum_op<R: Ring>(input: &Tensor<R>, axes: &[usize]) -> Result<Tensor<R>, RingTensorError> {
    let shape = input.shape();
    let axes = process_reduction_axes(shape.len(), axes)?;
    if axes.is_empty() {
        return input.copy();
    }
    let kept: Vec<usize> = (0..shape.len()).filter(|d| !axes.contains(d)).collect();
    let spec = ContractionSpec::new(vec![(0..shape.len()).collect()], kept, shape)?;
    contract(&[input], &spec)
}

/// Sums every element into a rank-0 tensor. The sum of a scalar is a copy of
/// it; the sum of an empty view is zero.
pub fn sum_all_op<R: Ring>(input: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    let axes: Vec<usize> = (0..input.rank()).collect();
    sum_op(input, &axes)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
