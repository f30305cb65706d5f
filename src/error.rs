//! Error types for the manualgen library.

use std::io;
use thiserror::Error;

/// Result type alias for manualgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or saving a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the ZIP package.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// An embedded image could not be decoded.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A block references a resource that was never added to the document.
    #[error("Missing resource: {0}")]
    MissingResource(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidImage("not a PNG".to_string());
        assert_eq!(err.to_string(), "Invalid image: not a PNG");

        let err = Error::MissingResource("image 7".to_string());
        assert_eq!(err.to_string(), "Missing resource: image 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
