//! Catalog cache.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    domain::products::{models::Product, repository::ProductsRepository},
    rest::RestError,
};

/// What readers of the catalog currently see.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// No successful fetch yet.
    Loading,

    /// Products from the most recent successful fetch.
    Ready(Arc<[Product]>),

    /// The latest fetch failed.
    Failed(String),
}

impl CatalogState {
    /// Products when the catalog is ready.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Ready(products) => Some(products.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug)]
struct Snapshot {
    state: CatalogState,

    /// Generation of the refresh that produced `state`.
    generation: u64,
}

/// Product list cache, refetched after every successful write.
///
/// Each refresh takes a generation when it starts. A result only lands when
/// no later refresh has landed first, so a slow fetch can never replace a
/// list fetched after it.
pub struct CatalogCache {
    repository: Arc<dyn ProductsRepository>,
    snapshot: RwLock<Snapshot>,
    generations: AtomicU64,
}

impl CatalogCache {
    /// Empty cache in the `Loading` state.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self {
            repository,
            snapshot: RwLock::new(Snapshot {
                state: CatalogState::Loading,
                generation: 0,
            }),
            generations: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> CatalogState {
        self.snapshot.read().await.state.clone()
    }

    /// Cached products, fetching them when the cache is not ready.
    ///
    /// # Errors
    ///
    /// Returns the store error when a fetch is needed and fails.
    pub async fn products(&self) -> Result<Arc<[Product]>, RestError> {
        if let CatalogState::Ready(products) = &self.snapshot.read().await.state {
            return Ok(Arc::clone(products));
        }

        self.refresh().await
    }

    /// Refetch the catalog. A failed fetch never leaves a partial list behind.
    ///
    /// # Errors
    ///
    /// Returns the store error when the fetch fails.
    pub async fn refresh(&self) -> Result<Arc<[Product]>, RestError> {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut snapshot = self.snapshot.write().await;

            if matches!(snapshot.state, CatalogState::Failed(_)) {
                snapshot.state = CatalogState::Loading;
            }
        }

        let fetched = self.repository.list_products().await;

        let mut snapshot = self.snapshot.write().await;

        if snapshot.generation > generation {
            debug!(generation, latest = snapshot.generation, "discarding stale catalog fetch");

            return match (fetched, &snapshot.state) {
                (Ok(_), CatalogState::Ready(products)) => Ok(Arc::clone(products)),
                (Ok(products), _) => Ok(products.into()),
                (Err(error), _) => Err(error),
            };
        }

        snapshot.generation = generation;

        match fetched {
            Ok(products) => {
                let products: Arc<[Product]> = products.into();

                debug!(count = products.len(), generation, "catalog refreshed");

                snapshot.state = CatalogState::Ready(Arc::clone(&products));

                Ok(products)
            }
            Err(error) => {
                snapshot.state = CatalogState::Failed(error.to_string());

                Err(error)
            }
        }
    }

    /// Refetch after a write. Failures are logged and left for the next read
    /// to retry.
    pub async fn invalidate(&self) {
        if let Err(error) = self.refresh().await {
            warn!("failed to refresh catalog after write: {error}");
        }
    }
}

impl Debug for CatalogCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogCache").finish_non_exhaustive()
    }
}
