// Chunk: docs/chunks/buffer_errors - Typed errors for buffer and editor operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::BufferId;

/// Errors from loading or editing a [`Buffer`](crate::Buffer).
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file is not valid UTF-8 (first bad byte at {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    #[error("offset {index} out of bounds for buffer of {count} characters")]
    OutOfBounds { index: usize, count: usize },
}

/// Errors from the [`Editor`](crate::Editor) registry.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no buffer with id {0}")]
    BufferNotFound(BufferId),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BufferError::OutOfBounds { index: 9, count: 3 };
        assert_eq!(
            err.to_string(),
            "offset 9 out of bounds for buffer of 3 characters"
        );

        let err = EditorError::BufferNotFound(BufferId(4));
        assert_eq!(err.to_string(), "no buffer with id #4");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = BufferError::Io {
            path: PathBuf::from("/tmp/missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.c"));
    }
}
