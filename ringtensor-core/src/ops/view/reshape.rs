use log::debug;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::utils::calculate_strides;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

use super::contiguous::copy_op;

/// Reinterprets `tensor` with `new_shape`, preserving row-major order.
///
/// A contiguous source yields a view over the same storage. Any other source
/// is first materialized into a contiguous copy, so the result no longer
/// aliases it.
///
/// # Errors
/// `ShapeMismatch` if the element counts differ.
pub(crate) fn reshape_op<R: Ring>(tensor: &Tensor<R>, new_shape: &[usize]) -> Result<Tensor<R>, RingTensorError> {
    let td = tensor.read_data();
    let original_numel = td.numel();
    let new_numel: usize = new_shape.iter().product();

    if original_numel != new_numel {
        return Err(RingTensorError::ShapeMismatch {
            expected: td.shape.clone(),
            actual: new_shape.to_vec(),
            operation: "reshape (numel mismatch)".to_string(),
        });
    }

    let source = if td.is_contiguous() {
        tensor.clone()
    } else {
        debug!(
            "reshape {:?} -> {:?}: source is not contiguous, materializing a copy",
            td.shape, new_shape
        );
        copy_op(tensor)?
    };

    let src = source.read_data();
    Ok(Tensor::from_data(TensorData::new_view(
        src.buffer.clone(),
        src.ring.clone(),
        src.offset,
        new_shape.to_vec(),
        calculate_strides(new_shape),
    )))
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
