//! reqwest-backed transport
//!
//! Attaches the bearer token and default headers, applies the per-request
//! timeout, and classifies the response:
//! - 2xx with a body is parsed as JSON
//! - 204 (or an empty 2xx body) is `None`
//! - anything else is `Error::HttpStatus` carrying the response text

use super::transport::{RequestConfig, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client implementing [`Transport`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().user_agent(config.user_agent()).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A client for a sub-path of the API.
    ///
    /// The connection pool is reused; the configuration is copied.
    #[must_use]
    pub fn with_namespace(&self, namespace: &str) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.with_namespace(namespace),
        }
    }

    /// A client with a different configuration sharing the connection pool
    #[must_use]
    pub fn with_config(&self, config: ClientConfig) -> Self {
        Self {
            client: self.client.clone(),
            config,
        }
    }

    /// Send a request and check its status
    async fn send(&self, method: Method, path: &str, config: RequestConfig) -> Result<Response> {
        let url = self.config.url(path);
        let timeout = config.timeout.unwrap_or(self.config.timeout());

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(self.config.api_key())
            .header(CONTENT_TYPE, "application/json")
            .timeout(timeout);

        for (key, value) in self.config.headers() {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| classify(e, timeout))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} failed with {}", method, url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("{} {} -> {}", method, url, status.as_u16());
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Option<JsonValue>> {
        let timeout = config.timeout.unwrap_or(self.config.timeout());
        let response = self.send(method.clone(), path, config).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await.map_err(|e| classify(e, timeout))?;
        if body.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| Error::decode(format!("{method} {path}: {e}")))
    }

    async fn request_raw(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Bytes> {
        let timeout = config.timeout.unwrap_or(self.config.timeout());
        let response = self.send(method, path, config).await?;
        response.bytes().await.map_err(|e| classify(e, timeout))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map a reqwest failure onto the client's error type
fn classify(e: reqwest::Error, timeout: Duration) -> Error {
    if e.is_timeout() {
        #[allow(clippy::cast_possible_truncation)]
        return Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        };
    }
    Error::Http(e)
}
