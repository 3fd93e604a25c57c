use log::debug;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Interleaves row-major blocks: for each of `outer` rounds, appends the next
/// `block_sizes[k]` elements of every part `k` in turn.
pub(crate) fn interleave_blocks<E: Clone>(parts: &[Vec<E>], block_sizes: &[usize], outer: usize) -> Vec<E> {
    let total: usize = parts.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for o in 0..outer {
        for (part, &block) in parts.iter().zip(block_sizes.iter()) {
            out.extend_from_slice(&part[o * block..(o + 1) * block]);
        }
    }
    out
}

/// Joins tensors end to end along an existing `axis` into one new buffer.
///
/// All operands must share the rank and every dimension except `axis`. The
/// result uses the first operand's coefficient model.
///
/// # Errors
/// - `EmptyTensorList` for no operands.
/// - `InvalidAxis` if `axis` is not an axis of the operands.
/// - `ShapeMismatch` if ranks or non-joined dimensions disagree.
pub fn concat_op<R: Ring>(tensors: &[Tensor<R>], axis: usize) -> Result<Tensor<R>, RingTensorError> {
    let first = tensors.first().ok_or(RingTensorError::EmptyTensorList)?;
    let first_shape = first.shape();
    let rank = first_shape.len();
    if axis >= rank {
        return Err(RingTensorError::InvalidAxis { axis, rank });
    }

    let mut joined = 0;
    for tensor in tensors {
        let shape = tensor.shape();
        let compatible = shape.len() == rank
            && shape
                .iter()
                .zip(first_shape.iter())
                .enumerate()
                .all(|(d, (a, b))| d == axis || a == b);
        if !compatible {
            return Err(RingTensorError::ShapeMismatch {
                expected: first_shape.clone(),
                actual: shape,
                operation: format!("concatenate along axis {}", axis),
            });
        }
        joined += shape[axis];
    }

    let outer: usize = first_shape[..axis].iter().product();
    let inner: usize = first_shape[axis + 1..].iter().product();
    let parts = tensors
        .iter()
        .map(|t| t.read_data().gather())
        .collect::<Result<Vec<_>, _>>()?;
    let block_sizes: Vec<usize> = tensors.iter().map(|t| t.shape()[axis] * inner).collect();

    let mut output_shape = first_shape;
    output_shape[axis] = joined;
    debug!(
        "concatenate: {} tensors along axis {} into shape {:?}",
        tensors.len(),
        axis,
        output_shape
    );
    let values = interleave_blocks(&parts, &block_sizes, outer);
    Ok(Tensor::from_data(TensorData::new(values, output_shape, first.ring().clone())?))
}

#[cfg(test)]
#[path = "concat_test.rs"]
mod tests;
