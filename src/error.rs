use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("failed to load model artifact from {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },
    #[error("department encoding does not match training table: expected {expected:?}, found {found:?}")]
    EncoderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("unknown department: {0:?}")]
    UnknownCategory(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid {field} {value:?}: {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
