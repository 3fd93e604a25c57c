use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

use super::permute::permute_op;
use super::utils::validate_transpose_dims;

/// Swaps two axes. A thin wrapper over [`permute_op`].
pub(crate) fn transpose_op<R: Ring>(input: &Tensor<R>, dim1: usize, dim2: usize) -> Result<Tensor<R>, RingTensorError> {
    let rank = input.rank();
    validate_transpose_dims(rank, dim1, dim2)?;
    let mut dims: Vec<usize> = (0..rank).collect();
    dims.swap(dim1, dim2);
    permute_op(input, &dims)
}
