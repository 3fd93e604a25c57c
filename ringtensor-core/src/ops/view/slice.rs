// src/ops/view/slice.rs

use log::trace;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::utils::normalize_index;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

use super::utils::normalize_slice;

/// Represents the different ways to index or slice a tensor dimension.
///
/// This enum is used as input to the `slice` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceArg {
    /// Keep the whole axis (`:`).
    Full,
    /// Select a single position and drop the axis. Negative values count
    /// from the end.
    Index(isize),
    /// Python-style `start:stop:step`. Missing bounds default to the whole
    /// axis in the direction of `step`; `step` may be negative but not zero.
    Range {
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    },
    /// Represents the `...` ellipsis, expanding to the necessary number of
    /// full slices.
    Ellipsis,
    /// Inserts a new axis of size 1 (like `np.newaxis`).
    NewAxis,
}

impl SliceArg {
    /// `start:stop` with unit step.
    pub fn range(start: isize, stop: isize) -> Self {
        SliceArg::Range {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// `start:stop:step` with optional bounds.
    pub fn stepped(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        SliceArg::Range { start, stop, step }
    }

    /// `::-1`, the whole axis reversed.
    pub fn reversed() -> Self {
        SliceArg::Range {
            start: None,
            stop: None,
            step: -1,
        }
    }

    fn consumes_axis(&self) -> bool {
        !matches!(self, SliceArg::Ellipsis | SliceArg::NewAxis)
    }
}

/// Internal representation of a processed range for a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    /// First selected position in the original dimension.
    pub start: usize,
    /// Signed step between selected positions.
    pub step: isize,
    /// Number of positions selected (size of the dimension after slicing).
    pub size: usize,
}

/// Creates a view selecting part of `input` according to `args`.
///
/// Missing trailing selectors behave like [`SliceArg::Full`]. The view shares
/// storage with `input`; only offset, shape and strides change.
///
/// # Errors
/// - `SliceError` for more than one ellipsis or a zero step.
/// - `RankMismatch` if more axes are selected than the tensor has.
/// - `IndexOutOfBounds` for an `Index` outside `[-dim, dim)`.
pub(crate) fn slice_op<R: Ring>(input: &Tensor<R>, args: &[SliceArg]) -> Result<Tensor<R>, RingTensorError> {
    let td = input.read_data();
    let rank = td.shape.len();

    let ellipsis_count = args.iter().filter(|a| matches!(a, SliceArg::Ellipsis)).count();
    if ellipsis_count > 1 {
        return Err(RingTensorError::SliceError {
            message: "at most one ellipsis is allowed".to_string(),
        });
    }
    let consumed = args.iter().filter(|a| a.consumes_axis()).count();
    if consumed > rank {
        return Err(RingTensorError::RankMismatch {
            expected: rank,
            actual: consumed,
        });
    }

    // Expand the ellipsis (or the implicit trailing one) into full selectors.
    let mut expanded = Vec::with_capacity(args.len() + rank);
    for arg in args {
        if let SliceArg::Ellipsis = arg {
            expanded.extend(std::iter::repeat(SliceArg::Full).take(rank - consumed));
        } else {
            expanded.push(*arg);
        }
    }
    if ellipsis_count == 0 {
        expanded.extend(std::iter::repeat(SliceArg::Full).take(rank - consumed));
    }

    let mut new_shape = Vec::with_capacity(expanded.len());
    let mut new_strides = Vec::with_capacity(expanded.len());
    let mut offset = td.offset as isize;
    let mut axis = 0;

    for arg in expanded {
        match arg {
            SliceArg::Full => {
                new_shape.push(td.shape[axis]);
                new_strides.push(td.strides[axis]);
                axis += 1;
            }
            SliceArg::Index(i) => {
                let pos = normalize_index(i, td.shape[axis], &[i], &td.shape)?;
                offset += pos as isize * td.strides[axis];
                axis += 1;
            }
            SliceArg::Range { start, stop, step } => {
                let range = normalize_slice(start, stop, step, td.shape[axis])?;
                offset += range.start as isize * td.strides[axis];
                new_shape.push(range.size);
                new_strides.push(td.strides[axis] * range.step);
                axis += 1;
            }
            SliceArg::NewAxis => {
                new_shape.push(1);
                new_strides.push(0);
            }
            SliceArg::Ellipsis => {} // already expanded
        }
    }

    trace!(
        "slice: shape {:?} -> {:?}, strides {:?}, offset {}",
        td.shape,
        new_shape,
        new_strides,
        offset
    );

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        offset as usize,
        new_shape,
        new_strides,
    )))
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
