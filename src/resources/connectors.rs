//! `/connectors` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{Connector, ConnectorFileList, ConnectorList, CreateConnectorInput, RunList};
use crate::normalize::create_connector_to_api;
use crate::types::{ConnectorMode, PageRequest};
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

/// Filters for listing connectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorListQuery {
    pub page: PageRequest,
    pub stage_id: Option<String>,
    pub name: Option<String>,
    /// e.g. `sharepoint`, `google_drive`
    pub source_provider: Option<String>,
    pub connector_mode: Option<ConnectorMode>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl ConnectorListQuery {
    fn to_request(&self) -> RequestConfig {
        RequestConfig::new()
            .page(self.page)
            .query_non_empty("stageID", self.stage_id.as_deref())
            .query_non_empty("name", self.name.as_deref())
            .query_non_empty("sourceProvider", self.source_provider.as_deref())
            .query_non_empty("connectorMode", self.connector_mode.map(ConnectorMode::as_str))
            .query_timestamp("createdAfter", self.created_after.as_ref())
            .query_timestamp("createdBefore", self.created_before.as_ref())
    }
}

/// Filters for listing connector runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunListQuery {
    pub page: PageRequest,
    /// `PENDING`, `RUNNING`, `COMPLETED` or `FAILED`
    pub status: Option<String>,
}

/// Connector operations
#[derive(Clone, Copy)]
pub struct Connectors<'a> {
    api: Api<'a>,
}

impl<'a> Connectors<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            api: Api::new(transport),
        }
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            api: self.api.with_timeout(timeout),
        }
    }

    pub async fn list(&self, query: &ConnectorListQuery) -> Result<ConnectorList> {
        self.api.get("/connectors", query.to_request()).await
    }

    pub async fn create(&self, input: &CreateConnectorInput) -> Result<Connector> {
        let body = create_connector_to_api(input)?;
        debug!(name = %body.name, stage_id = %body.stage_id, "Creating connector");
        self.api.send(Method::POST, "/connectors", &body).await
    }

    pub async fn get(&self, connector_id: &str) -> Result<Connector> {
        self.api
            .get(&format!("/connectors/{connector_id}"), RequestConfig::new())
            .await
    }

    pub async fn delete(&self, connector_id: &str) -> Result<()> {
        debug!(connector_id, "Deleting connector");
        self.api
            .delete(&format!("/connectors/{connector_id}"))
            .await
    }

    /// Files seen by a connector
    pub async fn files(&self, connector_id: &str, page: PageRequest) -> Result<ConnectorFileList> {
        self.api
            .get(
                &format!("/connectors/{connector_id}/files"),
                RequestConfig::new().page(page),
            )
            .await
    }

    /// Transformation runs started by a connector
    pub async fn runs(&self, connector_id: &str, query: &RunListQuery) -> Result<RunList> {
        let config = RequestConfig::new()
            .page(query.page)
            .query_non_empty("status", query.status.as_deref());
        self.api
            .get(&format!("/connectors/{connector_id}/runs"), config)
            .await
    }
}
