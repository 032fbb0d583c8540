//! Logging setup and request logging middleware.

use thiserror::Error;

mod logging;
mod request;

pub(crate) use logging::init_subscriber;
pub(crate) use request::{request_logging, set_slow_request_threshold_ms};

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
