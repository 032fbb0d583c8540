//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use precast_app::domain::products::models::ProductId;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin token"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Record store unavailable"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(ProductId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use precast_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| id.as_str() == "p-1")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/products/p-1")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_twice_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/products/p-1")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
