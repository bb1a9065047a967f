//! Transport abstraction and per-request configuration

use crate::error::{Error, Result};
use crate::types::{format_timestamp, JsonValue, PageRequest};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Performs a single API request.
///
/// Paths are relative to the transport's base URL. Implementations must
/// fail with `Error::HttpStatus` on any non-2xx response and return
/// `Ok(None)` for `204 No Content`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and parse the JSON body
    async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Option<JsonValue>>;

    /// Issue a request and return the raw body bytes
    async fn request_raw(&self, method: Method, path: &str, config: RequestConfig)
        -> Result<Bytes>;
}

/// Configuration for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    /// Query parameters, in insertion order. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when the value is present and not empty
    #[must_use]
    pub fn query_non_empty(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.query(key, v),
            _ => self,
        }
    }

    /// Add a query parameter only when the value is non-zero
    #[must_use]
    pub fn query_non_zero(self, key: &str, value: u64) -> Self {
        if value == 0 {
            self
        } else {
            self.query(key, value)
        }
    }

    /// Add a timestamp filter when present
    #[must_use]
    pub fn query_timestamp(self, key: &str, value: Option<&DateTime<Utc>>) -> Self {
        match value {
            Some(ts) => self.query(key, format_timestamp(ts)),
            None => self,
        }
    }

    /// Add the `page` and `size` parameters
    #[must_use]
    pub fn page(self, page: PageRequest) -> Self {
        self.query("page", page.page).query("size", page.size)
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Value of the first query parameter with this key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Issue a request and decode the body into `T`
pub(crate) async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    method: Method,
    path: &str,
    config: RequestConfig,
) -> Result<T> {
    let value = transport
        .request(method.clone(), path, config)
        .await?
        .ok_or_else(|| Error::decode(format!("{method} {path}: expected a JSON body")))?;

    serde_json::from_value(value).map_err(|e| Error::decode(format!("{method} {path}: {e}")))
}

/// Issue a request whose body, if any, is not needed
pub(crate) async fn execute(
    transport: &dyn Transport,
    method: Method,
    path: &str,
    config: RequestConfig,
) -> Result<()> {
    transport.request(method, path, config).await.map(|_| ())
}
