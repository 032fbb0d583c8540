//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use precast_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidName => {
            StatusError::bad_request().brief("Product name is required")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Store(source) => {
            error!("record store request failed: {source}");

            StatusError::bad_gateway().brief("Record store unavailable")
        }
    }
}
