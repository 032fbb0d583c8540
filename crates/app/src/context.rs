//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    config::StoreConfig,
    domain::{
        catalog::CatalogCache,
        editor::{AdminEditor, Notifier},
        products::{
            ProductsService, StoreProductsService,
            repository::{ProductsRepository, RestProductsRepository},
        },
        uploads::ImageUploader,
    },
    rest::RestClient,
    storage::{BucketStorage, ObjectStorage},
};

/// Errors raised while wiring up the application.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The shared HTTP client could not be built.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Services shared by the CLI and the HTTP server.
#[derive(Clone)]
pub struct AppContext {
    /// Product reads and writes.
    pub products: Arc<dyn ProductsService>,

    /// Cached product list backing the landing page.
    pub catalog: Arc<CatalogCache>,

    /// Image uploads to the configured bucket.
    pub uploader: Arc<ImageUploader>,
}

impl AppContext {
    /// Build application context against the configured remote store.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, AppInitError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AppInitError::HttpClient)?;

        let client = RestClient::new(config.base_url(), &config.store_api_key, http.clone());

        let repository: Arc<dyn ProductsRepository> = Arc::new(RestProductsRepository::new(
            client,
            &config.products_table,
        ));

        let storage: Arc<dyn ObjectStorage> = Arc::new(BucketStorage::new(
            config.base_url(),
            &config.store_api_key,
            &config.images_bucket,
            http,
        ));

        let catalog = Arc::new(CatalogCache::new(Arc::clone(&repository)));

        Ok(Self {
            products: Arc::new(StoreProductsService::new(repository, Arc::clone(&catalog))),
            catalog,
            uploader: Arc::new(ImageUploader::new(storage, &config.upload_prefix)),
        })
    }

    /// A fresh editor session reporting through `notifier`.
    #[must_use]
    pub fn admin_editor(&self, notifier: Arc<dyn Notifier>) -> AdminEditor {
        AdminEditor::new(
            Arc::clone(&self.products),
            Arc::clone(&self.uploader),
            notifier,
        )
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("catalog", &self.catalog)
            .field("uploader", &self.uploader)
            .finish_non_exhaustive()
    }
}
