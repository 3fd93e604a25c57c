//! # Index contraction (`einsum`)
//!
//! Two layers:
//!
//! - [`compiler`]: turns an expression like `"ij,jk->ik"` into a
//!   [`ContractionSpec`], resolving label sizes from the operand shapes.
//! - [`engine`]: executes a `ContractionSpec` over any coefficient model.
//!
//! Matrix products, transposes, traces, diagonals, outer products and sums
//! are all special cases. Programmatic callers can skip the string layer
//! entirely with [`einsum_with_labels`].

pub mod compiler;
pub mod contraction;
pub mod engine;

pub use compiler::compile;
pub use contraction::ContractionSpec;
pub use engine::contract;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Evaluates an index-label expression over `tensors`.
///
/// ```
/// use ringtensor_core::coefficient::Integers;
/// use ringtensor_core::{einsum, Tensor};
///
/// let z = Integers::<i64>::new();
/// let m = Tensor::from_vec(vec![1, 2, 3, 4], vec![2, 2], z).unwrap();
/// let trace = einsum("ii", &[&m]).unwrap();
/// assert_eq!(trace.item().unwrap(), 5);
/// ```
pub fn einsum<R: Ring>(expr: &str, tensors: &[&Tensor<R>]) -> Result<Tensor<R>, RingTensorError> {
    let shapes: Vec<Vec<usize>> = tensors.iter().map(|t| t.shape()).collect();
    let shape_refs: Vec<&[usize]> = shapes.iter().map(|s| s.as_slice()).collect();
    let spec = compile(expr, &shape_refs)?;
    contract(tensors, &spec)
}

/// Contraction with integer label ids instead of an expression string; label
/// sizes are read off the tensors.
pub fn einsum_with_labels<R: Ring>(
    tensors: &[&Tensor<R>],
    inputs: &[Vec<usize>],
    output: &[usize],
) -> Result<Tensor<R>, RingTensorError> {
    let spec = ContractionSpec::from_tensors(tensors, inputs, output)?;
    contract(tensors, &spec)
}
