//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, newest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use precast_app::{
        domain::products::{MockProductsService, ProductsServiceError},
        rest::RestError,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(response.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_order() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product("newest"), make_product("oldest")]));

        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let ids: Vec<&str> = response
            .products
            .iter()
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(ids, ["newest", "oldest"]);
        assert!(
            response
                .products
                .iter()
                .all(|product| product.status == "In Stock"),
            "available products should be in stock"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_error_returns_502() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Store(RestError::EmptyResponse)));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
