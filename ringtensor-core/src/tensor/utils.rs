use crate::error::RingTensorError;

/// Calculates row-major strides for a given shape.
/// Strides give the number of storage slots to skip in the flat buffer
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<isize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1isize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1] as isize;
    }
    strides
}

/// Converts a row-major linear index into multi-dimensional coordinates.
pub fn index_to_coord(index: usize, shape: &[usize]) -> Vec<usize> {
    let mut coord = vec![0; shape.len()];
    let mut remaining = index;
    for (c, &dim) in coord.iter_mut().zip(shape.iter()).rev() {
        if dim > 0 {
            *c = remaining % dim;
            remaining /= dim;
        }
    }
    coord
}

/// Normalizes a possibly negative index against a dimension of size `dim`.
///
/// `-1` refers to the last position. The result lies in `0..dim`.
///
/// # Errors
/// Returns `RingTensorError::IndexOutOfBounds` if `index` falls outside
/// `[-dim, dim)`. `full_index` and `shape` only feed the error report.
pub fn normalize_index(
    index: isize,
    dim: usize,
    full_index: &[isize],
    shape: &[usize],
) -> Result<usize, RingTensorError> {
    let dim_i = dim as isize;
    let normalized = if index < 0 { index + dim_i } else { index };
    if normalized < 0 || normalized >= dim_i {
        return Err(RingTensorError::IndexOutOfBounds {
            index: full_index.to_vec(),
            shape: shape.to_vec(),
        });
    }
    Ok(normalized as usize)
}

/// Normalizes a full index tuple against `shape`.
///
/// # Errors
/// `RankMismatch` on a wrong number of indices, `IndexOutOfBounds` otherwise.
pub fn normalize_indices(indices: &[isize], shape: &[usize]) -> Result<Vec<usize>, RingTensorError> {
    if indices.len() != shape.len() {
        return Err(RingTensorError::RankMismatch {
            expected: shape.len(),
            actual: indices.len(),
        });
    }
    indices
        .iter()
        .zip(shape.iter())
        .map(|(&i, &d)| normalize_index(i, d, indices, shape))
        .collect()
}

/// Rejects shapes with a zero dimension. Used by the public constructors;
/// views may still produce empty axes.
pub fn validate_positive_shape(shape: &[usize]) -> Result<(), RingTensorError> {
    if let Some(axis) = shape.iter().position(|&d| d == 0) {
        return Err(RingTensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: format!("dimension {} has size 0", axis),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
