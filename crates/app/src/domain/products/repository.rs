//! Products Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::models::{NewProduct, Product, ProductId, ProductUpdate},
    rest::{QueryPair, RestClient, RestError, eq},
};

const ORDER_NEWEST_FIRST: &str = "created_at.desc";

/// Record store access for product rows.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, RestError>;

    /// A single product, `None` when the id is unknown.
    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, RestError>;

    /// Insert a product and return the stored row with its new id.
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RestError>;

    /// Apply a partial update, `None` when the id is unknown.
    async fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, RestError>;

    /// Delete a product and return the number of removed rows.
    async fn delete_product(&self, id: &ProductId) -> Result<usize, RestError>;
}

/// [`ProductsRepository`] backed by the record store's REST interface.
#[derive(Debug, Clone)]
pub struct RestProductsRepository {
    client: RestClient,
    table: String,
}

impl RestProductsRepository {
    /// Repository over `table`.
    #[must_use]
    pub fn new(client: RestClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }
}

fn by_id(id: &ProductId) -> [QueryPair; 1] {
    [("id", eq(id.as_str()))]
}

#[async_trait]
impl ProductsRepository for RestProductsRepository {
    async fn list_products(&self) -> Result<Vec<Product>, RestError> {
        self.client
            .select(
                &self.table,
                &[
                    ("select", "*".to_string()),
                    ("order", ORDER_NEWEST_FIRST.to_string()),
                ],
            )
            .await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, RestError> {
        let [filter] = by_id(id);

        let rows: Vec<Product> = self
            .client
            .select(&self.table, &[("select", "*".to_string()), filter])
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, RestError> {
        self.client.insert(&self.table, product).await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, RestError> {
        let rows: Vec<Product> = self.client.update(&self.table, &by_id(id), update).await?;

        Ok(rows.into_iter().next())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<usize, RestError> {
        let rows: Vec<Product> = self.client.delete(&self.table, &by_id(id)).await?;

        Ok(rows.len())
    }
}
