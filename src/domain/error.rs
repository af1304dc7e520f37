use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    EmptyInput,
    ValidationError(String),
    BackendError(String),
    TransportError(String),
    Timeout,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyInput => write!(f, "No endpoint text supplied"),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            AppError::TransportError(msg) => write!(f, "Transport error: {}", msg),
            AppError::Timeout => write!(f, "Backend request timed out"),
        }
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
