use crate::coefficient::Ring;
use crate::einsum::{contract, ContractionSpec};
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Generalized product: contracts the last `r` axes of `a` with the first `r`
/// axes of `b`.
///
/// The result has shape `a.shape[..ra - r] ++ b.shape[r..]`. `r = 1` on two
/// matrices is the ordinary matrix product and `r = 0` the outer product.
/// Products keep operand order (`a` element times `b` element).
///
/// # Errors
/// - `InvalidAxis` if `r` exceeds the rank of either operand.
/// - `ShapeMismatch` if the contracted sizes disagree.
pub fn matmul_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>, r: usize) -> Result<Tensor<R>, RingTensorError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    let (ra, rb) = (a_shape.len(), b_shape.len());
    if r > ra {
        return Err(RingTensorError::InvalidAxis { axis: r, rank: ra });
    }
    if r > rb {
        return Err(RingTensorError::InvalidAxis { axis: r, rank: rb });
    }
    if a_shape[ra - r..] != b_shape[..r] {
        return Err(RingTensorError::ShapeMismatch {
            expected: a_shape[ra - r..].to_vec(),
            actual: b_shape[..r].to_vec(),
            operation: format!("matmul (r = {})", r),
        });
    }

    // a: 0..ra, b: ra-r..ra-r+rb, so the shared axes meet on ra-r..ra.
    let mut a_labels: Vec<usize> = (0..ra).collect();
    let mut b_labels: Vec<usize> = (ra - r..ra - r + rb).collect();
    let output: Vec<usize> = (0..ra - r).chain(ra..ra - r + rb).collect();

    // Scalars take part as one-element vectors on a spare label that is
    // summed over a single term.
    let spare = ra - r + rb;
    let a_vec;
    let b_vec;
    let mut operand_a = a;
    let mut operand_b = b;
    if ra == 0 {
        a_vec = a.reshape(&[1])?;
        operand_a = &a_vec;
        a_labels = vec![spare];
    }
    if rb == 0 {
        b_vec = b.reshape(&[1])?;
        operand_b = &b_vec;
        b_labels = vec![spare];
    }

    let spec = ContractionSpec::from_tensors(&[operand_a, operand_b], &[a_labels, b_labels], &output)?;
    contract(&[operand_a, operand_b], &spec)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
