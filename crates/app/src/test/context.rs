//! Test context for service and editor tests.

use std::sync::Arc;

use crate::domain::{
    catalog::CatalogCache,
    editor::AdminEditor,
    products::{ProductsService, StoreProductsService, repository::ProductsRepository},
    uploads::ImageUploader,
};
use crate::storage::ObjectStorage;

use super::{MemoryProductsRepository, RecordingNotifier};

pub(crate) struct TestContext {
    pub store: Arc<MemoryProductsRepository>,
    pub catalog: Arc<CatalogCache>,
    pub products: StoreProductsService,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let store = Arc::new(MemoryProductsRepository::default());
        let repository: Arc<dyn ProductsRepository> = store.clone();
        let catalog = Arc::new(CatalogCache::new(Arc::clone(&repository)));

        Self {
            products: StoreProductsService::new(repository, Arc::clone(&catalog)),
            store,
            catalog,
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    /// Editor wired to this context's store and the given object storage.
    pub(crate) fn editor(&self, storage: impl ObjectStorage + 'static) -> AdminEditor {
        let products: Arc<dyn ProductsService> = Arc::new(self.products.clone());

        AdminEditor::new(
            products,
            Arc::new(ImageUploader::new(Arc::new(storage), "products")),
            self.notifier.clone(),
        )
    }
}
