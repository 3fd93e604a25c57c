// src/tensor/mod.rs

use std::sync::Arc;

use crate::coefficient::Ring;
use crate::tensor_data::TensorData;

mod accessors;
mod arithmetic_methods;
pub mod create;
mod debug;
mod inplace_methods;
mod inplace_ops;
pub mod iter_utils;
pub mod nested;
mod reduction_methods;
mod traits;
pub mod utils;
mod view_methods;

// Re-export creation functions to make them public
pub use create::{full, identity, ones, zeros};
pub use nested::NestedSeq;

/// A multi-dimensional array of coefficients from a ring `R`.
///
/// `Tensor` is a cheap handle around `Arc<TensorData<R>>`:
/// 1.  **Shared Ownership:** cloning a `Tensor` clones the handle, not the
///     elements.
/// 2.  **Views:** slicing, permuting, reshaping a contiguous tensor, taking a
///     diagonal or expanding all produce new handles that address the same
///     `Buffer` through different geometry. Writes through any of them are
///     visible through all of them.
///
/// The geometry of a tensor never changes after construction; only element
/// values do (through `set`, `fill`, `assign`).
pub struct Tensor<R: Ring> {
    pub(crate) data: Arc<TensorData<R>>,
}

impl<R: Ring> Tensor<R> {
    /// Wraps freshly built `TensorData` into a new tensor handle.
    pub(crate) fn from_data(data: TensorData<R>) -> Self {
        Tensor {
            data: Arc::new(data),
        }
    }

    /// Read access to the storage and geometry of this tensor.
    pub fn read_data(&self) -> &TensorData<R> {
        &self.data
    }
}
