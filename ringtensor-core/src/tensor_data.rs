// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::iter_utils::StridedOffsetIter;
use crate::tensor::utils::calculate_strides;

/// Internal storage and geometry for a Tensor.
///
/// Holds the shared element buffer, the coefficient model and the view
/// geometry (shape, signed strides, offset). The geometry is fixed once
/// constructed; only element values inside the buffer ever change, so the
/// `Tensor` wrapper keeps this struct in a plain `Arc`.
#[derive(Debug)]
pub struct TensorData<R: Ring> {
    /// Element storage, shared by every view derived from the same allocation.
    pub(crate) buffer: Arc<Buffer<R::Element>>,
    /// Coefficient model used for all arithmetic on this tensor.
    pub(crate) ring: R,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
    /// Signed step in storage slots per unit increment of each index.
    /// Negative for reversed axes, zero for broadcast axes.
    pub(crate) strides: Vec<isize>,
    /// Storage slot of the element at index `[0, 0, ..., 0]`.
    pub(crate) offset: usize,
}

impl<R: Ring> TensorData<R> {
    /// Creates a new `TensorData` owning `data` laid out contiguously in
    /// row-major order.
    ///
    /// # Errors
    /// Returns `RingTensorError::TensorCreationError` if the length of `data`
    /// does not match the number of elements described by `shape`.
    pub fn new(data: Vec<R::Element>, shape: Vec<usize>, ring: R) -> Result<Self, RingTensorError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(RingTensorError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let strides = calculate_strides(&shape);
        Ok(TensorData {
            buffer: Arc::new(Buffer::new(data)),
            ring,
            shape,
            strides,
            offset: 0,
        })
    }

    /// Creates a view over an existing buffer with new geometry.
    ///
    /// No element is copied. The caller guarantees that every logical index of
    /// `shape` addresses a valid slot of `buffer`.
    pub(crate) fn new_view(
        buffer: Arc<Buffer<R::Element>>,
        ring: R,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<isize>,
    ) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        TensorData {
            buffer,
            ring,
            shape,
            strides,
            offset,
        }
    }

    pub fn buffer(&self) -> &Arc<Buffer<R::Element>> {
        &self.buffer
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Storage slot for already-validated indices.
    pub fn get_offset(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(indices.len(), self.shape.len());
        let delta: isize = indices
            .iter()
            .zip(self.strides.iter())
            .map(|(&i, &s)| i as isize * s)
            .sum();
        (self.offset as isize + delta) as usize
    }

    /// Checks whether the view enumerates its storage row-major without gaps.
    ///
    /// Axes of size 1 are ignored since their stride is never used. The offset
    /// does not matter: a contiguous block may start anywhere.
    pub fn is_contiguous(&self) -> bool {
        let mut expected: isize = 1;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()).rev() {
            if dim == 1 {
                continue;
            }
            if stride != expected {
                return false;
            }
            expected *= dim as isize;
        }
        true
    }

    /// Storage slots of all logical elements, in row-major logical order.
    pub(crate) fn offsets(&self) -> StridedOffsetIter {
        StridedOffsetIter::new(&self.shape, &self.strides, self.offset)
    }

    /// Clones the logical elements into a row-major vector.
    pub(crate) fn gather(&self) -> Result<Vec<R::Element>, RingTensorError> {
        let slots = self.buffer.read()?;
        Ok(self.offsets().map(|o| slots[o].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::Integers;

    #[test]
    fn test_new_checks_length() {
        let err = TensorData::new(vec![1i64, 2, 3], vec![2, 2], Integers::new()).unwrap_err();
        assert_eq!(
            err,
            RingTensorError::TensorCreationError {
                data_len: 3,
                shape: vec![2, 2]
            }
        );
    }

    #[test]
    fn test_offsets_and_contiguity() {
        let td = TensorData::new((0..6i64).collect(), vec![2, 3], Integers::new()).unwrap();
        assert_eq!(td.strides, vec![3, 1]);
        assert!(td.is_contiguous());
        assert_eq!(td.get_offset(&[1, 2]), 5);

        // Reversed rows: offset 3, strides [-3, 1]
        let rev = TensorData::new_view(td.buffer.clone(), td.ring, 3, vec![2, 3], vec![-3, 1]);
        assert!(!rev.is_contiguous());
        assert_eq!(rev.gather().unwrap(), vec![3, 4, 5, 0, 1, 2]);
    }
}
