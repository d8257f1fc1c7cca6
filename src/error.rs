//! Error types for the context store.

use thiserror::Error;

/// Main error type for context store operations.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    #[error("Slice step must be nonzero")]
    InvalidStep,
}

/// Result type for context store operations.
pub type Result<T> = std::result::Result<T, ContextError>;
