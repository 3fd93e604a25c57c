use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Writes `value` into every slot addressed by `tensor`.
pub(crate) fn perform_fill_inplace<R: Ring>(tensor: &Tensor<R>, value: &R::Element) -> Result<(), RingTensorError> {
    let td = tensor.read_data();
    let mut slots = td.buffer.write()?;
    for slot in td.offsets() {
        slots[slot] = value.clone();
    }
    Ok(())
}
