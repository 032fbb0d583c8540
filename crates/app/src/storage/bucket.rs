//! Storage bucket HTTP client.

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::Deserialize;

use super::{ObjectStorage, StorageError};

/// Client for a single object storage bucket.
#[derive(Debug, Clone)]
pub struct BucketStorage {
    base_url: String,
    api_key: String,
    bucket: String,
    http: Client,
}

impl BucketStorage {
    /// Create a new client for `bucket`.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, bucket: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
            http,
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket)
    }
}

#[async_trait]
impl ObjectStorage for BucketStorage {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let response = self
            .http
            .post(self.object_url(path))
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(StorageError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&text),
            });
        }

        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }
}

#[derive(Debug, Deserialize)]
struct StorageErrorBody {
    message: String,
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<StorageErrorBody>(body)
        .map_or_else(|_ignored| body.trim().to_string(), |parsed| parsed.message)
}
