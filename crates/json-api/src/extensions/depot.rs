//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(
                "{} missing from depot; is the state injected?",
                std::any::type_name::<T>()
            );

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_is_internal_error() {
        let depot = Depot::new();

        let error = depot.obtain_or_500::<String>().err();

        assert_eq!(
            error.map(|error| error.code),
            Some(salvo::http::StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
