//! Object storage

mod bucket;
mod errors;
pub mod paths;

use async_trait::async_trait;
use mockall::automock;

pub use bucket::BucketStorage;
pub use errors::StorageError;

/// Path-addressed blob storage that serves uploaded objects publicly.
#[automock]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload `bytes` to `path`. Paths are chosen by the caller and never reused.
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError>;

    /// Public URL of the object stored at `path`.
    fn public_url(&self, path: &str) -> String;
}
