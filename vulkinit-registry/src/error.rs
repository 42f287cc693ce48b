//! Error types for registry parsing.

use thiserror::Error;

/// Error type for registry parsing operations.
///
/// Any variant here is fatal to a generation run: a half-parsed registry
/// cannot yield struct metadata safe to generate from. Irregularities in
/// individual declarations are handled by skipping the declaration instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid registry structure.
    #[error("invalid registry structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
