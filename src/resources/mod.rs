//! Resource facades
//!
//! One facade per resource type. Each operation normalizes its input,
//! issues exactly one request through the [`Transport`] and returns the
//! parsed response as is. Validation failures surface before the
//! transport is touched.
//!
//! Facades borrow the transport and are cheap to create; the client hands
//! them out on every call (`client.stages()`, `client.stages().instruct()`).

mod connectors;
mod datasets;
mod files;
mod repositories;
mod search_stores;
mod stages;

pub use connectors::{ConnectorListQuery, Connectors, RunListQuery};
pub use datasets::{DatapointRange, DatasetListQuery, Datasets};
pub use files::{FileListQuery, Files, DEFAULT_PRESIGNED_URL_TTL};
pub use repositories::Repositories;
pub use search_stores::{SearchStoreListQuery, SearchStoreVariant, SearchStores};
pub use stages::{SearchStages, StageImports, StageListQuery, Stages};

use crate::error::Result;
use crate::http::{execute, fetch, RequestConfig, Transport};
use crate::types::JsonValue;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Request helper shared by the facades
#[derive(Clone, Copy)]
pub(crate) struct Api<'a> {
    transport: &'a dyn Transport,
    timeout: Option<Duration>,
}

impl<'a> Api<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self {
            transport,
            timeout: None,
        }
    }

    pub(crate) fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    fn config(&self, config: RequestConfig) -> RequestConfig {
        match self.timeout {
            Some(timeout) if config.timeout.is_none() => config.timeout(timeout),
            _ => config,
        }
    }

    /// GET and decode
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        fetch(self.transport, Method::GET, path, self.config(config)).await
    }

    /// Send a JSON body and decode the response
    pub(crate) async fn send<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let config = RequestConfig::new().json(serde_json::to_value(body)?);
        fetch(self.transport, method, path, self.config(config)).await
    }

    /// Request whose response is passed through untyped; `None` on 204
    pub(crate) async fn value(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Option<JsonValue>> {
        self.transport
            .request(method, path, self.config(config))
            .await
    }

    /// DELETE, ignoring any body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        execute(
            self.transport,
            Method::DELETE,
            path,
            self.config(RequestConfig::new()),
        )
        .await
    }

    /// GET the raw body
    pub(crate) async fn raw(&self, path: &str) -> Result<Bytes> {
        self.transport
            .request_raw(Method::GET, path, self.config(RequestConfig::new()))
            .await
    }
}
