use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Creates a view of the tensor with singleton dimensions expanded to match
/// the target shape. Does not copy data: broadcast axes get stride 0, so every
/// position along them reads (and writes) the same slot.
///
/// Leading axes may be added. Existing axes must either match the target
/// size or have size 1.
///
/// # Errors
/// `ShapeMismatch` if `target_shape` has a lower rank or an incompatible size.
pub(crate) fn expand_op<R: Ring>(tensor: &Tensor<R>, target_shape: &[usize]) -> Result<Tensor<R>, RingTensorError> {
    let td = tensor.read_data();
    let input_rank = td.shape.len();
    let target_rank = target_shape.len();
    let mismatch = || RingTensorError::ShapeMismatch {
        expected: td.shape.clone(),
        actual: target_shape.to_vec(),
        operation: "expand".to_string(),
    };

    if target_rank < input_rank {
        return Err(mismatch());
    }

    let lead = target_rank - input_rank;
    let mut new_strides = vec![0isize; target_rank];
    for i in 0..input_rank {
        let (dim, target) = (td.shape[i], target_shape[lead + i]);
        if dim == target {
            new_strides[lead + i] = td.strides[i];
        } else if dim != 1 {
            return Err(mismatch());
        }
    }

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        td.offset,
        target_shape.to_vec(),
        new_strides,
    )))
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
