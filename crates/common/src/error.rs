//! Common errors

/// Error type for the shared utilities
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a valid hexadecimal quantity
    #[error("Parse error: {0}")]
    ParseError(String),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}
