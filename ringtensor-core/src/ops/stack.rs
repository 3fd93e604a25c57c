use log::debug;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::ops::concat::interleave_blocks;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Stacks equally shaped tensors along a new axis inserted at `axis`.
///
/// `axis` may equal the operands' rank (stack as the last axis). Data is
/// copied into one new buffer using the first operand's coefficient model.
///
/// # Errors
/// - `EmptyTensorList` for no operands.
/// - `InvalidAxis` if `axis` is greater than the operands' rank.
/// - `ShapeMismatch` if any operand's shape differs from the first.
pub fn stack_op<R: Ring>(tensors: &[Tensor<R>], axis: usize) -> Result<Tensor<R>, RingTensorError> {
    let first = tensors.first().ok_or(RingTensorError::EmptyTensorList)?;
    let first_shape = first.shape();
    let rank = first_shape.len();
    if axis > rank {
        return Err(RingTensorError::InvalidAxis { axis, rank: rank + 1 });
    }
    for tensor in tensors.iter().skip(1) {
        let shape = tensor.shape();
        if shape != first_shape {
            return Err(RingTensorError::ShapeMismatch {
                expected: first_shape,
                actual: shape,
                operation: format!("stack along axis {}", axis),
            });
        }
    }

    let outer: usize = first_shape[..axis].iter().product();
    let block: usize = first_shape[axis..].iter().product();
    let parts = tensors
        .iter()
        .map(|t| t.read_data().gather())
        .collect::<Result<Vec<_>, _>>()?;

    let mut output_shape = first_shape;
    output_shape.insert(axis, tensors.len());
    debug!(
        "stack: {} tensors at axis {} into shape {:?}",
        tensors.len(),
        axis,
        output_shape
    );
    let values = interleave_blocks(&parts, &vec![block; tensors.len()], outer);
    Ok(Tensor::from_data(TensorData::new(values, output_shape, first.ring().clone())?))
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod tests;
