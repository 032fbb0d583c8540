//! Image uploader.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{info, warn};

use crate::storage::{ObjectStorage, StorageError, paths::unique_object_path};

/// A local image waiting to be uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name, used for its extension.
    pub file_name: String,

    /// Declared MIME type.
    pub content_type: String,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl Debug for ImageFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A file that could not be uploaded.
#[derive(Debug)]
pub struct UploadFailure {
    /// Name of the file that was not stored.
    pub file_name: String,

    /// Why the store refused or could not be reached.
    pub error: StorageError,
}

impl UploadFailure {
    /// Message suitable for showing to the admin.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}: {}", self.file_name, self.error)
    }
}

/// Outcome of a batch upload.
#[derive(Debug, Default)]
pub struct UploadBatch {
    /// Public URLs of the files that were stored, in input order.
    pub urls: Vec<String>,

    /// Files that could not be stored, in input order.
    pub failures: Vec<UploadFailure>,
}

impl UploadBatch {
    fn record(mut self, outcome: Result<String, UploadFailure>) -> Self {
        match outcome {
            Ok(url) => self.urls.push(url),
            Err(failure) => self.failures.push(failure),
        }

        self
    }
}

/// Uploads product images to object storage, one file at a time.
pub struct ImageUploader {
    storage: Arc<dyn ObjectStorage>,
    prefix: String,
}

impl ImageUploader {
    /// Uploader writing under `prefix` in the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn ObjectStorage>, prefix: &str) -> Self {
        Self {
            storage,
            prefix: prefix.to_string(),
        }
    }

    /// Upload every file in order. A failed file is recorded and the batch
    /// carries on with the next one.
    pub async fn upload(&self, files: Vec<ImageFile>) -> UploadBatch {
        let total = files.len();
        let mut batch = UploadBatch::default();

        for file in files {
            batch = batch.record(self.upload_one(file).await);
        }

        info!(
            total,
            uploaded = batch.urls.len(),
            failed = batch.failures.len(),
            "image upload batch finished"
        );

        batch
    }

    async fn upload_one(&self, file: ImageFile) -> Result<String, UploadFailure> {
        let ImageFile {
            file_name,
            content_type,
            bytes,
        } = file;

        let path = unique_object_path(&self.prefix, &file_name, &content_type);

        match self.storage.upload(&path, &content_type, bytes).await {
            Ok(()) => Ok(self.storage.public_url(&path)),
            Err(error) => {
                warn!(file_name = %file_name, "image upload failed: {error}");

                Err(UploadFailure { file_name, error })
            }
        }
    }
}

impl Debug for ImageUploader {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ImageUploader")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
