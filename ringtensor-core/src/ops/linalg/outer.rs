use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::ops::linalg::matmul::matmul_op;
use crate::tensor::Tensor;

/// Outer product: `out[i.., j..] = a[i..] * b[j..]`, shape `a.shape ++ b.shape`.
pub fn outer_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    matmul_op(a, b, 0)
}

/// Wedge product. No antisymmetrization is applied, so this is exactly the
/// outer product.
pub fn wedge_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    outer_op(a, b)
}
