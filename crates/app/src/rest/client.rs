//! PostgREST HTTP client.

use reqwest::{Client, RequestBuilder, Response, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};

use super::errors::{RestError, extract_message};

const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// A single query string pair, e.g. `("id", "eq.42")`.
pub type QueryPair = (&'static str, String);

/// Build an equality filter value for a PostgREST query.
#[must_use]
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}

/// HTTP client for the record store's REST interface.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl RestClient {
    /// Create a new client. `base_url` is the project URL without the
    /// `/rest/v1` suffix.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    /// URL of the given table.
    #[must_use]
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Select rows from `table`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status or an undecodable body.
    pub async fn select<T>(&self, table: &str, query: &[QueryPair]) -> Result<Vec<T>, RestError>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(self.table_url(table)).query(query);

        read_rows(self.authorize(request).send().await?).await
    }

    /// Insert a row into `table` and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status, an undecodable body
    /// or when the store returns no row.
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.table_url(table))
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(body);

        read_rows(self.authorize(request).send().await?)
            .await?
            .into_iter()
            .next()
            .ok_or(RestError::EmptyResponse)
    }

    /// Patch the rows matching `filter` and return their new representation.
    ///
    /// An empty result means nothing matched the filter.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status or an undecodable body.
    pub async fn update<B, T>(
        &self,
        table: &str,
        filter: &[QueryPair],
        body: &B,
    ) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .patch(self.table_url(table))
            .query(filter)
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(body);

        read_rows(self.authorize(request).send().await?).await
    }

    /// Delete the rows matching `filter` and return what was removed.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status or an undecodable body.
    pub async fn delete<T>(&self, table: &str, filter: &[QueryPair]) -> Result<Vec<T>, RestError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .delete(self.table_url(table))
            .query(filter)
            .header(PREFER_HEADER, RETURN_REPRESENTATION);

        read_rows(self.authorize(request).send().await?).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }
}

async fn read_rows<T>(response: Response) -> Result<Vec<T>, RestError>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(RestError::Rejected {
            status: status.as_u16(),
            message: extract_message(&text),
        });
    }

    Ok(response.json().await?)
}
