//! Reductions built on the contraction engine.

pub mod sum;
pub mod trace;
pub(crate) mod utils;

pub use sum::{sum_all_op, sum_op};
pub use trace::trace_op;
