//! Remote Store Config

use std::time::Duration;

use clap::Args;

/// Record store and object storage settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.supabase.co`
    #[arg(long, env = "STORE_URL")]
    pub store_url: String,

    /// API key sent with every record store and object storage request
    #[arg(long, env = "STORE_API_KEY", hide_env_values = true)]
    pub store_api_key: String,

    /// Table holding product rows
    #[arg(long, env = "STORE_PRODUCTS_TABLE", default_value = "products")]
    pub products_table: String,

    /// Bucket receiving uploaded product images
    #[arg(long, env = "STORE_IMAGES_BUCKET", default_value = "images")]
    pub images_bucket: String,

    /// Path prefix for uploaded product images inside the bucket
    #[arg(long, env = "STORE_UPLOAD_PREFIX", default_value = "products")]
    pub upload_prefix: String,

    /// Request timeout for remote calls, in seconds
    #[arg(long, env = "STORE_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub timeout_seconds: u64,
}

impl StoreConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.store_url.trim_end_matches('/')
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slashes() {
        let config = StoreConfig {
            store_url: "https://example.supabase.co//".to_string(),
            store_api_key: "key".to_string(),
            products_table: "products".to_string(),
            images_bucket: "images".to_string(),
            upload_prefix: "products".to_string(),
            timeout_seconds: 3,
        };

        assert_eq!(config.base_url(), "https://example.supabase.co");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
