//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    catalog::CatalogCache,
    products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductId, ProductUpdate},
        repository::ProductsRepository,
    },
};

/// [`ProductsService`] that writes through the repository and keeps the
/// catalog cache fresh.
#[derive(Clone)]
pub struct StoreProductsService {
    repository: Arc<dyn ProductsRepository>,
    catalog: Arc<CatalogCache>,
}

impl StoreProductsService {
    /// Service over `repository`, refreshing `catalog` after writes.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, catalog: Arc<CatalogCache>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

impl Debug for StoreProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreProductsService")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let products = self.catalog.products().await?;

        Ok(products.to_vec())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError> {
        self.repository
            .get_product(&id)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(name = "products.create", skip_all, fields(name = %product.name), err)]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::InvalidName);
        }

        let created = self.repository.create_product(&product).await?;

        info!(product_id = %created.id, "created product");

        self.catalog.invalidate().await;

        Ok(created)
    }

    #[tracing::instrument(name = "products.update", skip(self, update), err)]
    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if update
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ProductsServiceError::InvalidName);
        }

        let updated = self
            .repository
            .update_product(&id, &update)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        info!(product_id = %updated.id, "updated product");

        self.catalog.invalidate().await;

        Ok(updated)
    }

    #[tracing::instrument(name = "products.delete", skip(self), err)]
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(&id).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_id = %id, "deleted product");

        self.catalog.invalidate().await;

        Ok(())
    }
}

/// Product reads and writes used by the editor and the HTTP API.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError>;

    /// Creates a new product; the store assigns its id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Applies a partial update to the product with the given id.
    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Permanently deletes the product with the given id.
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            catalog::CatalogState,
            products::repository::{MockProductsRepository, RestProductsRepository},
        },
        rest::RestClient,
        test::{StubServer, TestContext, rejected},
    };

    use super::*;

    fn culvert() -> NewProduct {
        NewProduct {
            base_price: Decimal::from(4500),
            transport_cost: Decimal::from(800),
            ..NewProduct::named("Culvert Pipe 600mm")
        }
    }

    #[tokio::test]
    async fn create_product_assigns_fresh_id_and_defaults() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx.products.create_product(culvert()).await?;

        assert!(!product.id.as_str().is_empty());
        assert!(product.is_available);
        assert!(product.images.is_empty());
        assert_eq!(product.base_price, Decimal::from(4500));
        assert_eq!(product.transport_cost, Decimal::from(800));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_ids_are_unique() -> TestResult {
        let ctx = TestContext::new();

        let first = ctx.products.create_product(culvert()).await?;
        let second = ctx.products.create_product(culvert()).await?;

        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_empty_name_makes_no_call() {
        let ctx = TestContext::new();

        let result = ctx.products.create_product(NewProduct::named("  ")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidName)),
            "expected InvalidName, got {result:?}"
        );
        assert_eq!(ctx.store.write_calls(), 0);
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_untouched() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx.products.create_product(culvert()).await?;

        let updated = ctx
            .products
            .update_product(
                created.id.clone(),
                ProductUpdate {
                    is_available: Some(false),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.id, created.id);
        assert!(!updated.is_available);
        assert_eq!(updated.base_price, Decimal::from(4500));
        assert_eq!(updated.transport_cost, created.transport_cost);
        assert_eq!(updated.name, created.name);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .update_product(ProductId::new("missing"), ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_rejects_empty_name() -> TestResult {
        let ctx = TestContext::new();
        let created = ctx.products.create_product(culvert()).await?;

        let result = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: Some(String::new()),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidName)),
            "expected InvalidName, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_removes_it_from_catalog() -> TestResult {
        let ctx = TestContext::new();

        let kept = ctx.products.create_product(culvert()).await?;
        let removed = ctx
            .products
            .create_product(NewProduct::named("Kerb Stone"))
            .await?;

        ctx.products.delete_product(removed.id.clone()).await?;

        let products = ctx.products.list_products().await?;

        assert!(
            !products.iter().any(|p| p.id == removed.id),
            "deleted product should not appear in list"
        );
        assert!(products.iter().any(|p| p.id == kept.id));

        Ok(())
    }

    #[tokio::test]
    async fn second_delete_returns_not_found() -> TestResult {
        let ctx = TestContext::new();
        let created = ctx.products.create_product(culvert()).await?;

        ctx.products.delete_product(created.id.clone()).await?;

        let result = ctx.products.delete_product(created.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.products.get_product(ProductId::new("nope")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_newest_first() -> TestResult {
        let ctx = TestContext::new();

        let older = ctx.products.create_product(NewProduct::named("A")).await?;
        let newer = ctx.products.create_product(NewProduct::named("B")).await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![newer.id, older.id]);

        Ok(())
    }

    #[tokio::test]
    async fn writes_refresh_the_catalog() -> TestResult {
        let ctx = TestContext::new();

        assert!(ctx.products.list_products().await?.is_empty());

        let created = ctx.products.create_product(culvert()).await?;

        let state = ctx.catalog.state().await;

        assert!(
            state
                .products()
                .is_some_and(|products| products.iter().any(|p| p.id == created.id)),
            "catalog should observe the write, got {state:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_store_error() {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_create_product()
            .once()
            .return_once(|_| Err(rejected(500)));

        repository.expect_list_products().never();

        let repository: Arc<dyn ProductsRepository> = Arc::new(repository);
        let catalog = Arc::new(CatalogCache::new(Arc::clone(&repository)));
        let service = StoreProductsService::new(repository, Arc::clone(&catalog));

        let result = service.create_product(culvert()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::Store(_))),
            "expected Store error, got {result:?}"
        );
        assert_eq!(catalog.state().await, CatalogState::Loading);
    }

    #[tokio::test]
    async fn empty_store_representation_is_not_found() -> TestResult {
        let server = StubServer::start(vec![(200, "[]"), (200, "[]")]).await?;
        let repository: Arc<dyn ProductsRepository> = Arc::new(RestProductsRepository::new(
            RestClient::new(server.base_url(), "anon-key", server.client()),
            "products",
        ));
        let catalog = Arc::new(CatalogCache::new(Arc::clone(&repository)));
        let service = StoreProductsService::new(repository, Arc::clone(&catalog));

        let update = ProductUpdate {
            name: Some("Kerb Stone".to_string()),
            ..ProductUpdate::default()
        };

        let updated = service
            .update_product(ProductId::new("gone"), update)
            .await;
        let deleted = service.delete_product(ProductId::new("gone")).await;

        assert!(
            matches!(updated, Err(ProductsServiceError::NotFound)),
            "update of missing row: {updated:?}"
        );
        assert!(
            matches!(deleted, Err(ProductsServiceError::NotFound)),
            "delete of missing row: {deleted:?}"
        );
        assert_eq!(
            server.requests().await.len(),
            2,
            "no catalog refetch after a write that changed nothing"
        );
        assert_eq!(catalog.state().await, CatalogState::Loading);

        Ok(())
    }
}
