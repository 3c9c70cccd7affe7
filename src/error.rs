//! Error types for console rendering.
//!
//! The printer normalizes its inputs instead of rejecting them, so the
//! only failure surface is the underlying write to the output sink.

use thiserror::Error;

/// Errors surfaced while rendering console output.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink rejected a write.
    #[error("failed to write console output")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_display() {
        let io = std::io::Error::other("sink gone");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "failed to write console output");
    }
}
