use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Copies the elements of `src` into the slots addressed by `dst`.
///
/// `src` is snapshotted before any write, so `src` and `dst` may overlap
/// (e.g. assigning a reversed view of a tensor to itself).
pub(crate) fn perform_assign_inplace<R: Ring>(dst: &Tensor<R>, src: &Tensor<R>) -> Result<(), RingTensorError> {
    let dst_td = dst.read_data();
    let src_td = src.read_data();
    if dst_td.shape != src_td.shape {
        return Err(RingTensorError::ShapeMismatch {
            expected: dst_td.shape.clone(),
            actual: src_td.shape.clone(),
            operation: "assign_".to_string(),
        });
    }
    let values = src_td.gather()?;
    let mut slots = dst_td.buffer.write()?;
    for (slot, value) in dst_td.offsets().zip(values) {
        slots[slot] = value;
    }
    Ok(())
}
