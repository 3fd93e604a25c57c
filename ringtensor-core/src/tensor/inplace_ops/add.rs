use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// `dst[i] = dst[i] + src[i]` for every logical index, using `dst`'s model.
pub(crate) fn perform_add_inplace<R: Ring>(dst: &Tensor<R>, src: &Tensor<R>) -> Result<(), RingTensorError> {
    let dst_td = dst.read_data();
    let src_td = src.read_data();
    if dst_td.shape != src_td.shape {
        return Err(RingTensorError::ShapeMismatch {
            expected: dst_td.shape.clone(),
            actual: src_td.shape.clone(),
            operation: "add_".to_string(),
        });
    }
    let values = src_td.gather()?;
    let ring = &dst_td.ring;
    let mut slots = dst_td.buffer.write()?;
    for (slot, value) in dst_td.offsets().zip(values.iter()) {
        slots[slot] = ring.add(&slots[slot], value);
    }
    Ok(())
}
