//! # Currency Feed Client
//!
//! A typed Rust client for the `@fawazahmed0/currency-api` feed served from
//! jsDelivr. Implements the [`CurrencyFeed`] port.

use async_trait::async_trait;
use currency_types::{
    CountryDirectory, CurrencyCode, CurrencyDirectory, CurrencyFeed, ExchangeRateTable, FeedError,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Where the feed is published.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api/v1";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for FeedError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => FeedError::Http(e.to_string()),
            ClientError::Api { status, message } => FeedError::Api { status, message },
            ClientError::Json(e) => FeedError::Json(e.to_string()),
        }
    }
}

/// Currency feed client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    http: Client,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient {
    /// Creates a client bound to [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client bound to another copy of the feed.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `currencies.json`.
    pub async fn get_currencies(&self) -> Result<CurrencyDirectory, ClientError> {
        self.get("/currencies.json").await
    }

    /// Fetches `country.json`.
    pub async fn get_countries(&self) -> Result<CountryDirectory, ClientError> {
        self.get("/country.json").await
    }

    /// Fetches `currencies/{base}.json`.
    pub async fn get_exchange_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<ExchangeRateTable, ClientError> {
        self.get(&format!("/currencies/{}.json", base)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching feed document");
        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CurrencyFeed for FeedClient {
    async fn currencies(&self) -> Result<CurrencyDirectory, FeedError> {
        self.get_currencies().await.map_err(Into::into)
    }

    async fn countries(&self) -> Result<CountryDirectory, FeedError> {
        self.get_countries().await.map_err(Into::into)
    }

    async fn exchange_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateTable, FeedError> {
        self.get_exchange_rates(base).await.map_err(Into::into)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FeedClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = FeedClient::with_base_url("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_error_maps_to_feed_error() {
        let err = ClientError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(
            FeedError::from(err),
            FeedError::Api {
                status: 404,
                message: "Not Found".into()
            }
        );
    }
}
