use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Whole-tensor equality: same shape and coefficient-equal elements
/// (compared with `a`'s model). Different shapes compare unequal rather than
/// failing.
pub fn equals_op<R: Ring>(a: &Tensor<R>, b: &Tensor<R>) -> Result<bool, RingTensorError> {
    let a_td = a.read_data();
    let b_td = b.read_data();
    if a_td.shape != b_td.shape {
        return Ok(false);
    }
    let ring = &a_td.ring;
    let lhs = a_td.gather()?;
    let rhs = b_td.gather()?;
    Ok(lhs.iter().zip(rhs.iter()).all(|(x, y)| ring.is_equal(x, y)))
}

/// True when every element is the model's zero. Vacuously true for empty
/// views.
pub fn is_zero_op<R: Ring>(a: &Tensor<R>) -> Result<bool, RingTensorError> {
    let td = a.read_data();
    let slots = td.buffer.read()?;
    Ok(td.offsets().all(|slot| td.ring.is_zero(&slots[slot])))
}

#[cfg(test)]
#[path = "equal_test.rs"]
mod tests;
