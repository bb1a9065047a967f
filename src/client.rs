//! Root client
//!
//! Owns the HTTP transport and hands out resource facades. The facades
//! are available both directly on the client and under the versioned
//! namespaces:
//!
//! ```rust,ignore
//! let client = Client::from_env()?;
//!
//! // Paths relative to the configured base URL
//! client.stages().get("stage-1").await?;
//!
//! // Paths under /api/v1 and /api/beta
//! client.v1().stages().get("stage-1").await?;
//! client.beta().search_stores().list(&Default::default()).await?;
//! ```

use crate::config::{ClientConfig, BETA_NAMESPACE, V1_NAMESPACE};
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{Connectors, Datasets, Files, Repositories, SearchStores, Stages};
use std::collections::BTreeMap;
use std::time::Duration;

/// Client for the data API
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client from a resolved configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client from `PHARIA_DATA_API_BASE_URL` and `PHARIA_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration of this client
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// The underlying transport
    pub fn transport(&self) -> &HttpClient {
        &self.http
    }

    /// Copy of this client with some options replaced
    #[must_use]
    pub fn with_options(
        &self,
        api_key: Option<String>,
        timeout: Option<Duration>,
        headers: Option<BTreeMap<String, String>>,
    ) -> Self {
        let config = self.config().with_options(api_key, timeout, headers);
        Self {
            http: self.http.with_config(config),
        }
    }

    /// Copy of this client rooted at a sub-path of the API
    #[must_use]
    pub fn with_namespace(&self, namespace: &str) -> Self {
        Self {
            http: self.http.with_namespace(namespace),
        }
    }

    /// Stable API, under `/api/v1`
    pub fn v1(&self) -> V1 {
        V1 {
            client: self.with_namespace(V1_NAMESPACE),
        }
    }

    /// Beta API, under `/api/beta`
    pub fn beta(&self) -> Beta {
        Beta {
            client: self.with_namespace(BETA_NAMESPACE),
        }
    }

    pub fn stages(&self) -> Stages<'_> {
        Stages::new(&self.http)
    }

    pub fn files(&self) -> Files<'_> {
        Files::new(&self.http)
    }

    pub fn repositories(&self) -> Repositories<'_> {
        Repositories::new(&self.http)
    }

    pub fn datasets(&self) -> Datasets<'_> {
        Datasets::new(&self.http)
    }

    pub fn connectors(&self) -> Connectors<'_> {
        Connectors::new(&self.http)
    }

    pub fn search_stores(&self) -> SearchStores<'_> {
        SearchStores::new(&self.http)
    }
}

/// Resources of the stable API
#[derive(Debug, Clone)]
pub struct V1 {
    client: Client,
}

impl V1 {
    /// Namespaced client backing these resources
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn stages(&self) -> Stages<'_> {
        self.client.stages()
    }

    pub fn files(&self) -> Files<'_> {
        self.client.files()
    }

    pub fn repositories(&self) -> Repositories<'_> {
        self.client.repositories()
    }

    pub fn datasets(&self) -> Datasets<'_> {
        self.client.datasets()
    }

    pub fn connectors(&self) -> Connectors<'_> {
        self.client.connectors()
    }
}

/// Resources of the beta API
#[derive(Debug, Clone)]
pub struct Beta {
    client: Client,
}

impl Beta {
    /// Namespaced client backing these resources
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn search_stores(&self) -> SearchStores<'_> {
        self.client.search_stores()
    }
}
