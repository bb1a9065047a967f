//! Client configuration
//!
//! The configuration is resolved once, when a client is built, and is
//! read-only afterwards. Derived clients (`with_options`, `with_namespace`)
//! get their own copy, so changing one never affects another.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "PHARIA_DATA_API_BASE_URL";

/// Environment variable holding the bearer token
pub const API_KEY_ENV: &str = "PHARIA_API_KEY";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Path prefix of the stable API
pub const V1_NAMESPACE: &str = "/api/v1";

/// Path prefix of the beta API
pub const BETA_NAMESPACE: &str = "/api/beta";

/// Resolved configuration shared by a client and its transport
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
    headers: BTreeMap<String, String>,
    user_agent: String,
}

impl ClientConfig {
    /// Create a config from explicit values
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    /// Create a config from `PHARIA_DATA_API_BASE_URL` and `PHARIA_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Default per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Extra headers sent with every request
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// User agent string
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Copy of this config with some options replaced.
    ///
    /// Options left as `None` keep the current value.
    #[must_use]
    pub fn with_options(
        &self,
        api_key: Option<String>,
        timeout: Option<Duration>,
        headers: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_key: api_key
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| self.api_key.clone()),
            timeout: timeout
                .filter(|t| !t.is_zero())
                .unwrap_or(self.timeout),
            headers: headers.unwrap_or_else(|| self.headers.clone()),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Copy of this config whose base URL is extended with `namespace`
    #[must_use]
    pub fn with_namespace(&self, namespace: &str) -> Self {
        let mut config = self.clone();
        config.base_url = format!(
            "{}/{}",
            self.base_url,
            namespace.trim_matches('/')
        );
        config
    }

    /// Build the full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
///
/// Values not set explicitly fall back to the environment.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    headers: BTreeMap<String, String>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the default request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the config, reading missing values from the process environment
    pub fn build(self) -> Result<ClientConfig> {
        self.build_with(|key| std::env::var(key).ok())
    }

    /// Build the config with a custom environment lookup
    pub fn build_with<F>(self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = self
            .base_url
            .filter(|u| !u.is_empty())
            .or_else(|| lookup(BASE_URL_ENV))
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "Either pass a base URL or set ${BASE_URL_ENV}"
                ))
            })?;

        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(API_KEY_ENV))
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::config(format!("Either pass an API key or set ${API_KEY_ENV}"))
            })?;

        Url::parse(&base_url)?;

        Ok(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            headers: self.headers,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("pharia-data/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}
