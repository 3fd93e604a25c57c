//! Tensors over arbitrary coefficient rings.
//!
//! A [`Tensor`] stores elements of a [`Ring`](coefficient::Ring) model and
//! supports zero-copy views, element-wise arithmetic, reductions and a
//! general index contraction ([`einsum`]).

pub mod buffer;
pub mod coefficient;
pub mod einsum;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use einsum::{compile, einsum, einsum_with_labels, ContractionSpec};
pub use ops::view::SliceArg;
pub use tensor::{NestedSeq, Tensor};
// Re-export traits required by public functions/structs
pub use num_traits;

pub mod error;
pub use error::RingTensorError;
