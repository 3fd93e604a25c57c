// src/tensor/debug.rs
use std::fmt;

use crate::coefficient::Ring;
use crate::tensor::Tensor;

impl<R: Ring> fmt::Debug for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, strides={:?}, offset={}, ring={:?}, data=",
            td.shape, td.strides, td.offset, td.ring
        )?;
        match td.gather() {
            Ok(values) => write!(f, "{:?})", values),
            Err(_) => write!(f, "<storage lock poisoned>)"),
        }
    }
}
