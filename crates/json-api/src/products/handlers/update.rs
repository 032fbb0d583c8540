//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use precast_app::domain::products::models::{ProductId, ProductUpdate};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, UpdateProductRequest},
    },
    state::State,
};

/// Product Update Handler
///
/// Applies a partial update; fields left out of the body are untouched.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin token"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Record store unavailable"),
    ),
)]
#[tracing::instrument(
    name = "products.update.http",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::new(id.into_inner());
    let update = ProductUpdate::from(json.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(&id));

    if update.is_empty() {
        return Err(StatusError::bad_request().brief("No fields to update"));
    }

    let product = state
        .app
        .products
        .update_product(id, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use precast_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_product_partial() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|id, update| {
                id.as_str() == "p-1"
                    && *update
                        == ProductUpdate {
                            is_available: Some(false),
                            ..ProductUpdate::default()
                        }
            })
            .return_once(|_, _| {
                let mut product = make_product("p-1");

                product.base_price = Decimal::from(4500);
                product.is_available = false;

                Ok(product)
            });

        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_delete_product().never();

        let mut res = TestClient::patch("http://example.com/products/p-1")
            .json(&json!({ "is_available": false }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.is_available);
        assert_eq!(body.status, "Out of Stock");
        assert_eq!(body.base_price, Decimal::from(4500));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_empty_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let res = TestClient::patch("http://example.com/products/p-1")
            .json(&json!({}))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::patch("http://example.com/products/missing")
            .json(&json!({ "name": "Kerb Stone" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
