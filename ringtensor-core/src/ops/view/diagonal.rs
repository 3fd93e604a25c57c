// src/ops/view/diagonal.rs

use log::trace;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

use super::utils::validate_axis;

/// Zero-copy view of the positions where `i[axis2] - i[axis1] == offset`.
///
/// Both axes are removed and replaced by one trailing axis whose stride is the
/// sum of theirs. For `offset >= 0` the view starts `offset` steps along
/// `axis2`; for a negative offset it starts `-offset` steps along `axis1`.
/// The trailing axis is empty when the offset runs past the matrix.
///
/// # Errors
/// `InvalidAxis` for an axis outside the rank, `DuplicateAxis` if
/// `axis1 == axis2`.
pub(crate) fn diagonal_op<R: Ring>(
    input: &Tensor<R>,
    axis1: usize,
    axis2: usize,
    offset: isize,
) -> Result<Tensor<R>, RingTensorError> {
    let td = input.read_data();
    let rank = td.shape.len();
    validate_axis(axis1, rank)?;
    validate_axis(axis2, rank)?;
    if axis1 == axis2 {
        return Err(RingTensorError::DuplicateAxis { axis: axis1 });
    }

    let (n1, n2) = (td.shape[axis1] as isize, td.shape[axis2] as isize);
    let (s1, s2) = (td.strides[axis1], td.strides[axis2]);
    let len = if offset >= 0 {
        n1.min(n2 - offset)
    } else {
        (n1 + offset).min(n2)
    }
    .max(0) as usize;

    let mut start = td.offset as isize;
    if len > 0 {
        start += if offset >= 0 { offset * s2 } else { -offset * s1 };
    }

    let (mut shape, mut strides) = keep_axes(&td.shape, &td.strides, &[axis1, axis2]);
    shape.push(len);
    strides.push(s1 + s2);

    trace!(
        "diagonal(axes {}, {}, offset {}): shape {:?} -> {:?}",
        axis1,
        axis2,
        offset,
        td.shape,
        shape
    );

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        start as usize,
        shape,
        strides,
    )))
}

/// Merges two or more axes into a single trailing diagonal axis (offset 0).
///
/// The merged axis has length `min` of the merged sizes and stride equal to
/// the sum of their strides.
///
/// # Errors
/// `InvalidAxis`, `DuplicateAxis`, or `RankMismatch` when fewer than two axes
/// are given.
pub(crate) fn diagonal_axes_op<R: Ring>(input: &Tensor<R>, axes: &[usize]) -> Result<Tensor<R>, RingTensorError> {
    let td = input.read_data();
    let rank = td.shape.len();
    if axes.len() < 2 {
        return Err(RingTensorError::RankMismatch {
            expected: 2,
            actual: axes.len(),
        });
    }
    let mut seen = vec![false; rank];
    for &axis in axes {
        validate_axis(axis, rank)?;
        if seen[axis] {
            return Err(RingTensorError::DuplicateAxis { axis });
        }
        seen[axis] = true;
    }

    let len = axes.iter().map(|&a| td.shape[a]).min().unwrap_or(0);
    let stride: isize = axes.iter().map(|&a| td.strides[a]).sum();
    let (mut shape, mut strides) = keep_axes(&td.shape, &td.strides, axes);
    shape.push(len);
    strides.push(stride);

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        td.offset,
        shape,
        strides,
    )))
}

/// Shape and strides of the axes not listed in `dropped`, in order.
fn keep_axes(shape: &[usize], strides: &[isize], dropped: &[usize]) -> (Vec<usize>, Vec<isize>) {
    shape
        .iter()
        .zip(strides.iter())
        .enumerate()
        .filter(|(axis, _)| !dropped.contains(axis))
        .map(|(_, (&d, &s))| (d, s))
        .unzip()
}

#[cfg(test)]
#[path = "diagonal_test.rs"]
mod tests;
