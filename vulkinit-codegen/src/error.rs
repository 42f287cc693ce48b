//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Registry parsing error.
    #[error("registry parse error: {0}")]
    Parse(#[from] vulkinit_registry::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
