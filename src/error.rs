// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input at position {position}: {token:?} is not an integer")]
    InvalidInput { position: usize, token: String },

    #[error("Overflow in {operation}: {detail}")]
    Overflow {
        operation: &'static str,
        detail: String,
    },

    #[error("Case {case} declares {declared} elements but contains {actual}")]
    LengthMismatch {
        case: usize,
        declared: usize,
        actual: usize,
    },

    #[error("Suite has {cases} cases but {expected} expected outputs")]
    CaseCountMismatch { cases: usize, expected: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
