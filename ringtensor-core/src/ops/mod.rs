//! # Tensor Operations Module (`ops`)
//!
//! The computations behind the methods on [`Tensor`](crate::tensor::Tensor),
//! grouped by what they do.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (named `xxx_op`)
//!   taking tensors by reference and returning a `Result`. `Tensor` methods
//!   are thin wrappers around them.
//! - **Coefficient arithmetic:** no operation touches element values except
//!   through the tensor's [`Ring`](crate::coefficient::Ring) model.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: element-wise add, sub, neg, mul and scale.
//! - [`comparison`]: whole-tensor equality and zero tests.
//! - [`linalg`]: matmul over `r` axes and outer (wedge) products.
//! - [`reduction`]: sum and trace.
//! - [`view`]: zero-copy views (slice, permute, reshape, diagonal, expand, ...).
//! - [`concat`] and [`stack`]: joining tensors into a new buffer.

pub mod arithmetic;
pub mod comparison;
pub mod concat;
pub mod linalg;
pub mod reduction;
pub mod stack;
pub mod view;
