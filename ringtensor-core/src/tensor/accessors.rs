// src/tensor/accessors.rs
use std::sync::Arc;

use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::utils::normalize_indices;
use crate::tensor::Tensor;

impl<R: Ring> Tensor<R> {
    /// Returns a clone of the tensor's shape (dimensions).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns a clone of the tensor's (signed) strides.
    pub fn strides(&self) -> Vec<isize> {
        self.read_data().strides.clone()
    }

    /// Storage slot of the first logical element.
    pub fn offset(&self) -> usize {
        self.read_data().offset
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// The coefficient model of this tensor.
    pub fn ring(&self) -> &R {
        &self.read_data().ring
    }

    /// Checks if the tensor enumerates its storage in row-major order.
    pub fn is_contiguous(&self) -> bool {
        self.read_data().is_contiguous()
    }

    /// True when both tensors address the same storage buffer.
    pub fn shares_storage_with(&self, other: &Tensor<R>) -> bool {
        Arc::ptr_eq(&self.read_data().buffer, &other.read_data().buffer)
    }

    /// Reads one element. Negative indices count from the end of their axis.
    ///
    /// # Errors
    /// `RankMismatch` on a wrong number of indices, `IndexOutOfBounds` if an
    /// index lies outside `[-dim, dim)`.
    pub fn get(&self, indices: &[isize]) -> Result<R::Element, RingTensorError> {
        let td = self.read_data();
        let coords = normalize_indices(indices, &td.shape)?;
        let slot = td.get_offset(&coords);
        let slots = td.buffer.read()?;
        Ok(slots[slot].clone())
    }

    /// Writes one element. The write is visible through every view sharing
    /// this storage.
    ///
    /// # Errors
    /// Same as [`Tensor::get`].
    pub fn set(&self, indices: &[isize], value: R::Element) -> Result<(), RingTensorError> {
        let td = self.read_data();
        let coords = normalize_indices(indices, &td.shape)?;
        let slot = td.get_offset(&coords);
        let mut slots = td.buffer.write()?;
        slots[slot] = value;
        Ok(())
    }

    /// Extracts the single element of a one-element tensor.
    ///
    /// # Errors
    /// `ShapeMismatch` if the tensor holds more or fewer than one element.
    pub fn item(&self) -> Result<R::Element, RingTensorError> {
        let td = self.read_data();
        if td.numel() != 1 {
            return Err(RingTensorError::ShapeMismatch {
                expected: vec![],
                actual: td.shape.clone(),
                operation: "item()".to_string(),
            });
        }
        let slots = td.buffer.read()?;
        Ok(slots[td.offset].clone())
    }

    /// Logical contents in row-major order.
    pub fn to_vec(&self) -> Result<Vec<R::Element>, RingTensorError> {
        self.read_data().gather()
    }
}
