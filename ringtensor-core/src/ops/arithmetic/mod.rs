//! Element-wise arithmetic. Operands must have identical shapes; every result
//! is a fresh contiguous tensor computed with the left operand's model.

pub mod add;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use mul::{mul_op, scale_op};
pub use neg::neg_op;
pub use sub::sub_op;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Applies `op` pairwise over two equally shaped tensors.
pub(crate) fn apply_binary_op<R, F>(
    a: &Tensor<R>,
    b: &Tensor<R>,
    op_name: &str,
    op: F,
) -> Result<Tensor<R>, RingTensorError>
where
    R: Ring,
    F: Fn(&R, &R::Element, &R::Element) -> R::Element,
{
    let a_td = a.read_data();
    let b_td = b.read_data();
    if a_td.shape != b_td.shape {
        return Err(RingTensorError::ShapeMismatch {
            expected: a_td.shape.clone(),
            actual: b_td.shape.clone(),
            operation: op_name.to_string(),
        });
    }
    let ring = &a_td.ring;
    let lhs = a_td.gather()?;
    let rhs = b_td.gather()?;
    let data = lhs.iter().zip(rhs.iter()).map(|(x, y)| op(ring, x, y)).collect();
    Ok(Tensor::from_data(TensorData::new(data, a_td.shape.clone(), ring.clone())?))
}

/// Applies `op` to every element.
pub(crate) fn apply_unary_op<R, F>(a: &Tensor<R>, op: F) -> Result<Tensor<R>, RingTensorError>
where
    R: Ring,
    F: Fn(&R, &R::Element) -> R::Element,
{
    let td = a.read_data();
    let ring = &td.ring;
    let data = td.gather()?.iter().map(|x| op(ring, x)).collect();
    Ok(Tensor::from_data(TensorData::new(data, td.shape.clone(), ring.clone())?))
}
