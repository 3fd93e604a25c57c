// src/ops/view/permute.rs

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

use super::utils::{permute_dims, validate_permutation};

/// Reorders the axes of `input` without moving data.
///
/// The output axis `k` is the input axis `dims[k]`:
/// `shape[k] = old_shape[dims[k]]`, `strides[k] = old_strides[dims[k]]`.
///
/// # Errors
/// `RankMismatch`, `InvalidAxis` or `InvalidPermutation` if `dims` is not a
/// permutation of `0..rank`.
pub(crate) fn permute_op<R: Ring>(input: &Tensor<R>, dims: &[usize]) -> Result<Tensor<R>, RingTensorError> {
    let td = input.read_data();
    validate_permutation(td.shape.len(), dims)?;

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        td.offset,
        permute_dims(&td.shape, dims),
        permute_dims(&td.strides, dims),
    )))
}

#[cfg(test)]
#[path = "permute_test.rs"]
mod tests;
