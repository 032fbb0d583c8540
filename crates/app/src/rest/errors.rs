//! Record store errors.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the record store.
#[derive(Debug, Error)]
pub enum RestError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("record store rejected request with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,

        /// Message extracted from the response body.
        message: String,
    },

    /// The store accepted a write but returned no representation.
    #[error("record store returned no rows")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Pull the human-readable message out of a PostgREST error body, falling
/// back to the raw body text.
pub(crate) fn extract_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message,
            details: Some(details),
        }) if !details.is_empty() => format!("{message} ({details})"),
        Ok(ErrorBody { message, .. }) => message,
        Err(_ignored) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_ignored) => body.trim().to_string(),
    }
}
