use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Inserts an axis of size 1 at position `dim` (`0..=rank`).
///
/// The new axis never advances, so its stride is irrelevant and set to 0.
pub(crate) fn unsqueeze_op<R: Ring>(tensor: &Tensor<R>, dim: usize) -> Result<Tensor<R>, RingTensorError> {
    let td = tensor.read_data();
    let rank = td.shape.len();
    if dim > rank {
        return Err(RingTensorError::InvalidAxis { axis: dim, rank });
    }
    let mut shape = td.shape.clone();
    let mut strides = td.strides.clone();
    shape.insert(dim, 1);
    strides.insert(dim, 0);

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        td.offset,
        shape,
        strides,
    )))
}

/// Removes the size-1 axis `dim`, or every size-1 axis when `dim` is `None`.
///
/// # Errors
/// `InvalidAxis` if `dim` is out of range, `ShapeMismatch` if it is not of
/// size 1.
pub(crate) fn squeeze_op<R: Ring>(tensor: &Tensor<R>, dim: Option<usize>) -> Result<Tensor<R>, RingTensorError> {
    let td = tensor.read_data();
    let rank = td.shape.len();
    let keep: Vec<usize> = match dim {
        Some(d) => {
            if d >= rank {
                return Err(RingTensorError::InvalidAxis { axis: d, rank });
            }
            if td.shape[d] != 1 {
                let mut expected = td.shape.clone();
                expected[d] = 1;
                return Err(RingTensorError::ShapeMismatch {
                    expected,
                    actual: td.shape.clone(),
                    operation: format!("squeeze(dim={})", d),
                });
            }
            (0..rank).filter(|&a| a != d).collect()
        }
        None => (0..rank).filter(|&a| td.shape[a] != 1).collect(),
    };

    Ok(Tensor::from_data(TensorData::new_view(
        td.buffer.clone(),
        td.ring.clone(),
        td.offset,
        keep.iter().map(|&a| td.shape[a]).collect(),
        keep.iter().map(|&a| td.strides[a]).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::Integers;

    #[test]
    fn test_unsqueeze_squeeze_roundtrip() {
        let t = Tensor::from_vec((0..6i64).collect(), vec![2, 3], Integers::new()).unwrap();
        let u = t.unsqueeze(1).unwrap();
        assert_eq!(u.shape(), vec![2, 1, 3]);
        assert_eq!(u.get(&[1, 0, 2]).unwrap(), 5);
        let s = u.squeeze(Some(1)).unwrap();
        assert_eq!(s.shape(), vec![2, 3]);
        assert_eq!(s.to_vec().unwrap(), t.to_vec().unwrap());

        let all = t.unsqueeze(0).unwrap().unsqueeze(3).unwrap();
        assert_eq!(all.shape(), vec![1, 2, 3, 1]);
        assert_eq!(all.squeeze(None).unwrap().shape(), vec![2, 3]);
    }

    #[test]
    fn test_squeeze_errors() {
        let t = Tensor::from_vec((0..6i64).collect(), vec![2, 3], Integers::new()).unwrap();
        assert!(matches!(t.squeeze(Some(0)), Err(RingTensorError::ShapeMismatch { .. })));
        assert!(matches!(t.squeeze(Some(2)), Err(RingTensorError::InvalidAxis { .. })));
        assert!(matches!(t.unsqueeze(3), Err(RingTensorError::InvalidAxis { .. })));
    }
}
