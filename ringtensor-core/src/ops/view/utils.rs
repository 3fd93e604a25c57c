use crate::error::RingTensorError;

use super::slice::SliceRange;

/// Validates that `axis` exists in a tensor of the given rank.
pub fn validate_axis(axis: usize, rank: usize) -> Result<(), RingTensorError> {
    if axis >= rank {
        return Err(RingTensorError::InvalidAxis { axis, rank });
    }
    Ok(())
}

/// Validates dimensions for transpose operation. Swapping an axis with
/// itself is allowed (no-op view).
pub fn validate_transpose_dims(rank: usize, dim1: usize, dim2: usize) -> Result<(), RingTensorError> {
    validate_axis(dim1, rank)?;
    validate_axis(dim2, rank)
}

/// Validates permutation axes.
pub fn validate_permutation(rank: usize, dims: &[usize]) -> Result<(), RingTensorError> {
    if dims.len() != rank {
        return Err(RingTensorError::RankMismatch {
            expected: rank,
            actual: dims.len(),
        });
    }
    let mut seen = vec![false; rank];
    for &axis in dims {
        validate_axis(axis, rank)?;
        if seen[axis] {
            return Err(RingTensorError::InvalidPermutation {
                dims: dims.to_vec(),
                rank,
            });
        }
        seen[axis] = true;
    }
    Ok(())
}

/// Calculates the new shape (or strides) after permutation.
pub fn permute_dims<T: Copy>(values: &[T], dims: &[usize]) -> Vec<T> {
    dims.iter().map(|&axis| values[axis]).collect()
}

/// Resolves `start:stop:step` against a dimension of size `dim_size` with
/// Python slice semantics: optional bounds, negative bounds counted from the
/// end, out-of-range bounds clamped, negative step walking backwards.
pub(crate) fn normalize_slice(
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    dim_size: usize,
) -> Result<SliceRange, RingTensorError> {
    if step == 0 {
        return Err(RingTensorError::SliceError {
            message: "Step cannot be zero".to_string(),
        });
    }
    let n = dim_size as isize;
    // Bounds clamp to [lower, upper]; for negative steps -1 means "before 0".
    let (lower, upper) = if step > 0 { (0, n) } else { (-1, n - 1) };
    let resolve = |bound: Option<isize>, default: isize| -> isize {
        match bound {
            None => default,
            Some(b) => {
                let b = if b < 0 { b + n } else { b };
                b.clamp(lower, upper)
            }
        }
    };
    let (start, stop) = if step > 0 {
        (resolve(start, 0), resolve(stop, n))
    } else {
        (resolve(start, n - 1), resolve(stop, -1))
    };

    // Bounds are already clamped to [-1, n], so the span cannot overflow.
    let span = if step > 0 { stop - start } else { start - stop };
    let size = if span > 0 {
        (span as usize - 1) / step.unsigned_abs() + 1
    } else {
        0
    };
    // With at most one selected position the step is never applied; keeping
    // only its sign stops the view stride from overflowing.
    let step = if size > 1 { step } else { step.signum() };

    Ok(SliceRange {
        start: if size > 0 { start as usize } else { 0 },
        step,
        size,
    })
}
