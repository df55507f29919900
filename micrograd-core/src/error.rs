use thiserror::Error;

/// Custom error type for the micrograd engine and its collaborators.
#[derive(Error, Debug)]
pub enum MicrogradError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot build a network without any layer")]
    EmptyNetwork,

    #[error("Cannot compute a loss over an empty batch")]
    EmptyBatch,

    #[error("Invalid learning rate: {0} (must be finite and positive)")]
    InvalidLearningRate(f64),

    #[error("Parameter {label:?} is not a leaf value; only leaves can be optimized")]
    NonLeafParameter { label: Option<String> },

    #[error("Cannot overwrite the data of derived value {label:?}; build a new value instead")]
    NonLeafMutation { label: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
