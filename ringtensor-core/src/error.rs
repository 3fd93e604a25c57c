use thiserror::Error;

/// Custom error type for the ringtensor crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RingTensorError {
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<isize>, shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Axis {axis} used more than once")]
    DuplicateAxis { axis: usize },

    #[error("Invalid permutation: dims {dims:?} are not a valid permutation for rank {rank}")]
    InvalidPermutation { dims: Vec<usize>, rank: usize },

    #[error("Slice error: {message}")]
    SliceError { message: String },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Cannot join an empty list of tensors")]
    EmptyTensorList,

    #[error("Label '{label}' bound to conflicting sizes {first} and {second}")]
    LabelSizeConflict {
        label: String,
        first: usize,
        second: usize,
    },

    #[error("Malformed contraction spec: {0}")]
    MalformedContractionSpec(String),

    #[error("Element is not invertible: {0}")]
    NotInvertible(String),

    #[error("Invalid modulus {0}: must be at least 2")]
    InvalidModulus(u64),

    #[error("Failed to acquire {lock_type} lock: {reason}")]
    LockError { lock_type: String, reason: String },
}
