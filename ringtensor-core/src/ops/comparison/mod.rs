pub mod equal;

pub use equal::{equals_op, is_zero_op};
