//! Object storage errors.

use thiserror::Error;

/// Errors that can occur when uploading to object storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Object storage answered with a non-2xx status.
    #[error("object storage rejected upload with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,

        /// Message extracted from the response body.
        message: String,
    },
}
