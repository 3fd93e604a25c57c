//! Products expressed as contractions.

pub mod matmul;
pub mod outer;

pub use matmul::matmul_op;
pub use outer::{outer_op, wedge_op};
