// src/ops/view/mod.rs
//! View operations: new geometry over the same storage buffer.

pub mod contiguous;
pub mod diagonal;
pub mod expand;
pub mod permute;
pub mod reshape;
pub mod slice;
pub mod squeeze_unsqueeze;
pub mod transpose;

pub mod utils;

pub(crate) use contiguous::{contiguous_op, copy_op};
pub(crate) use diagonal::{diagonal_axes_op, diagonal_op};
pub(crate) use expand::expand_op;
pub(crate) use permute::permute_op;
pub(crate) use reshape::reshape_op;
pub(crate) use slice::slice_op;
pub(crate) use squeeze_unsqueeze::{squeeze_op, unsqueeze_op};
pub(crate) use transpose::transpose_op;

pub use slice::SliceArg;
