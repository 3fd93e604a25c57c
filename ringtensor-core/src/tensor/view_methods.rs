use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::ops::view::{self, SliceArg};
use crate::tensor::Tensor;

/// This `impl` block provides methods for creating views of a `Tensor` or
/// manipulating its shape and layout. Most of them return new `Tensor`
/// handles that share the underlying storage but have different geometry
/// (shape, strides, offset), so they may be non-contiguous.
impl<R: Ring> Tensor<R> {
    /// Creates a view of the tensor by slicing along its dimensions.
    ///
    /// See [`SliceArg`] for the per-axis selectors. Writes through the view
    /// are visible in `self` and vice versa.
    ///
    /// This method delegates to `ops::view::slice::slice_op`.
    ///
    /// # Example
    /// ```
    /// use ringtensor_core::coefficient::Integers;
    /// use ringtensor_core::ops::view::SliceArg;
    /// use ringtensor_core::Tensor;
    ///
    /// let t = Tensor::from_vec((0..12i64).collect(), vec![3, 4], Integers::new()).unwrap();
    /// // Rows 1.., every other column, reversed.
    /// let v = t.slice(&[SliceArg::range(1, 3), SliceArg::stepped(None, None, -2)]).unwrap();
    /// assert_eq!(v.shape(), vec![2, 2]);
    /// assert_eq!(v.to_vec().unwrap(), vec![7, 5, 11, 9]);
    ///
    /// v.set(&[0, 0], 70).unwrap();
    /// assert_eq!(t.get(&[1, 3]).unwrap(), 70);
    /// ```
    pub fn slice(&self, args: &[SliceArg]) -> Result<Self, RingTensorError> {
        view::slice_op(self, args)
    }

    /// Creates a view with two dimensions swapped.
    pub fn transpose(&self, dim1: usize, dim2: usize) -> Result<Self, RingTensorError> {
        view::transpose_op(self, dim1, dim2)
    }

    /// Creates a view with the dimensions reordered: axis `k` of the result is
    /// axis `dims[k]` of `self`.
    pub fn permute(&self, dims: &[usize]) -> Result<Self, RingTensorError> {
        view::permute_op(self, dims)
    }

    /// Changes the shape while keeping the row-major enumeration order.
    ///
    /// Returns a view when `self` is contiguous, otherwise reshapes a
    /// contiguous copy. Fails with `ShapeMismatch` if the element count
    /// changes.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, RingTensorError> {
        view::reshape_op(self, new_shape)
    }

    /// Returns `self` if contiguous, otherwise a contiguous copy.
    pub fn contiguous(&self) -> Result<Self, RingTensorError> {
        view::contiguous_op(self)
    }

    /// Always returns a fresh contiguous copy with its own storage.
    pub fn copy(&self) -> Result<Self, RingTensorError> {
        view::copy_op(self)
    }

    /// Creates a diagonal view over `axis1` and `axis2`.
    ///
    /// The two axes are removed and a trailing axis enumerating the positions
    /// with `i[axis2] - i[axis1] == offset` is appended.
    ///
    /// # Example
    /// ```
    /// use ringtensor_core::coefficient::Integers;
    /// use ringtensor_core::Tensor;
    ///
    /// let m = Tensor::from_vec((0..9i64).collect(), vec![3, 3], Integers::new()).unwrap();
    /// assert_eq!(m.diagonal(0, 1, 0).unwrap().to_vec().unwrap(), vec![0, 4, 8]);
    /// assert_eq!(m.diagonal(0, 1, 1).unwrap().to_vec().unwrap(), vec![1, 5]);
    /// ```
    pub fn diagonal(&self, axis1: usize, axis2: usize, offset: isize) -> Result<Self, RingTensorError> {
        view::diagonal_op(self, axis1, axis2, offset)
    }

    /// Merges two or more axes into one trailing diagonal axis.
    pub fn diagonal_axes(&self, axes: &[usize]) -> Result<Self, RingTensorError> {
        view::diagonal_axes_op(self, axes)
    }

    /// Broadcasts size-1 (or missing leading) axes to `target_shape` without
    /// copying.
    pub fn expand(&self, target_shape: &[usize]) -> Result<Self, RingTensorError> {
        view::expand_op(self, target_shape)
    }

    /// Inserts a size-1 axis at `dim`.
    pub fn unsqueeze(&self, dim: usize) -> Result<Self, RingTensorError> {
        view::unsqueeze_op(self, dim)
    }

    /// Removes the size-1 axis `dim`, or all size-1 axes for `None`.
    pub fn squeeze(&self, dim: Option<usize>) -> Result<Self, RingTensorError> {
        view::squeeze_op(self, dim)
    }
}
