use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::ops::reduction::sum::sum_op;
use crate::ops::view::diagonal_op;
use crate::tensor::Tensor;

/// Sum along a diagonal: the diagonal view of `(axis1, axis2, offset)`
/// reduced over its merged (last) axis. The remaining axes are kept in order.
pub fn trace_op<R: Ring>(
    input: &Tensor<R>,
    axis1: usize,
    axis2: usize,
    offset: isize,
) -> Result<Tensor<R>, RingTensorError> {
    let diag = diagonal_op(input, axis1, axis2, offset)?;
    let last = diag.rank() - 1;
    sum_op(&diag, &[last])
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod tests;
