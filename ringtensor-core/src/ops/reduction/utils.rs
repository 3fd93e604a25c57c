//! Utility functions for reduction operations.

use crate::error::RingTensorError;

/// Validates the axes of a reduction against the rank.
///
/// Returns the axes sorted with duplicates removed, or
/// `RingTensorError::InvalidAxis` for the first axis that is out of range.
pub(crate) fn process_reduction_axes(rank: usize, axes: &[usize]) -> Result<Vec<usize>, RingTensorError> {
    if let Some(&axis) = axes.iter().find(|&&a| a >= rank) {
        return Err(RingTensorError::InvalidAxis { axis, rank });
    }
    let mut processed = axes.to_vec();
    processed.sort_unstable();
    processed.dedup();
    Ok(processed)
}
