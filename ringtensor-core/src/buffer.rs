use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RingTensorError;

/// Flat, linearly addressed storage shared by a tensor and all of its views.
///
/// The buffer itself is always held behind an `Arc` by `TensorData`; the inner
/// `RwLock` lets any holder write element values while others keep reading
/// through their own geometry. The length never changes after creation.
#[derive(Debug)]
pub struct Buffer<E> {
    data: RwLock<Vec<E>>,
    len: usize,
}

impl<E: Clone + Debug> Buffer<E> {
    /// Wraps an owned vector of elements.
    pub fn new(data: Vec<E>) -> Self {
        let len = data.len();
        Buffer {
            data: RwLock::new(data),
            len,
        }
    }

    /// Number of storage slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Acquires a read lock on the raw slots.
    ///
    /// # Errors
    /// Returns `RingTensorError::LockError` if the lock was poisoned.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>, RingTensorError> {
        self.data.read().map_err(|_| RingTensorError::LockError {
            lock_type: "read".to_string(),
            reason: "storage buffer lock poisoned".to_string(),
        })
    }

    /// Acquires a write lock on the raw slots.
    ///
    /// # Errors
    /// Returns `RingTensorError::LockError` if the lock was poisoned.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>, RingTensorError> {
        self.data.write().map_err(|_| RingTensorError::LockError {
            lock_type: "write".to_string(),
            reason: "storage buffer lock poisoned".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_buffer_shared_write_visible() {
        let buffer = Arc::new(Buffer::new(vec![1i64, 2, 3]));
        let alias = Arc::clone(&buffer);
        alias.write().unwrap()[1] = 20;
        assert_eq!(*buffer.read().unwrap(), vec![1, 20, 3]);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_empty());
    }
}
