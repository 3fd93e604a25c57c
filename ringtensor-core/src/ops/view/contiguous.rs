use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Copies the logical elements of `input` into a fresh row-major buffer.
pub(crate) fn copy_op<R: Ring>(input: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    let td = input.read_data();
    let data = td.gather()?;
    Ok(Tensor::from_data(TensorData::new(data, td.shape.clone(), td.ring.clone())?))
}

/// Returns `input` itself when already contiguous, a row-major copy otherwise.
pub(crate) fn contiguous_op<R: Ring>(input: &Tensor<R>) -> Result<Tensor<R>, RingTensorError> {
    if input.is_contiguous() {
        Ok(input.clone())
    } else {
        copy_op(input)
    }
}
