//! `/repositories/{id}/datasets` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{CreateDatasetInput, Dataset, DatasetList, UpdateDatasetMetadataInput};
use crate::normalize::{create_dataset_to_api, update_dataset_metadata_to_api};
use crate::types::{JsonValue, PageRequest};
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

/// Filters for listing the datasets of a repository.
///
/// Note the API takes the date filters in snake_case here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetListQuery {
    pub page: PageRequest,
    /// Sent as one `label` parameter per entry
    pub labels: Vec<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl DatasetListQuery {
    fn to_request(&self) -> RequestConfig {
        let config = self
            .labels
            .iter()
            .fold(RequestConfig::new().page(self.page), |config, label| {
                config.query("label", label)
            });
        config
            .query_timestamp("created_after", self.created_after.as_ref())
            .query_timestamp("created_before", self.created_before.as_ref())
    }
}

/// Slice of datapoints to read; zero means unbounded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatapointRange {
    pub version: Option<String>,
    pub start: u64,
    pub end: u64,
}

/// Dataset operations
#[derive(Clone, Copy)]
pub struct Datasets<'a> {
    api: Api<'a>,
}

impl<'a> Datasets<'a> {
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

    pub async fn list(&self, repository_id: &str, query: &DatasetListQuery) -> Result<DatasetList> {
        self.api
            .get(
                &format!("/repositories/{repository_id}/datasets"),
                query.to_request(),
            )
            .await
    }

    pub async fn create(&self, repository_id: &str, input: &CreateDatasetInput) -> Result<Dataset> {
        let body = create_dataset_to_api(input);
        debug!(repository_id, "Creating dataset");
        self.api
            .send(
                Method::POST,
                &format!("/repositories/{repository_id}/datasets"),
                &body,
            )
            .await
    }

    /// Fetch a dataset, optionally at a specific version
    pub async fn get(
        &self,
        repository_id: &str,
        dataset_id: &str,
        version: Option<&str>,
    ) -> Result<Dataset> {
        self.api
            .get(
                &format!("/repositories/{repository_id}/datasets/{dataset_id}"),
                RequestConfig::new().query_non_empty("version", version),
            )
            .await
    }

    pub async fn update_metadata(
        &self,
        repository_id: &str,
        dataset_id: &str,
        input: &UpdateDatasetMetadataInput,
    ) -> Result<Dataset> {
        let body = update_dataset_metadata_to_api(input);
        debug!(repository_id, dataset_id, "Updating dataset metadata");
        self.api
            .send(
                Method::PATCH,
                &format!("/repositories/{repository_id}/datasets/{dataset_id}/metadata"),
                &body,
            )
            .await
    }

    pub async fn delete(&self, repository_id: &str, dataset_id: &str) -> Result<()> {
        debug!(repository_id, dataset_id, "Deleting dataset");
        self.api
            .delete(&format!("/repositories/{repository_id}/datasets/{dataset_id}"))
            .await
    }

    /// Read datapoints. Their shape depends on the repository media type,
    /// so they are returned as raw JSON.
    pub async fn datapoints(
        &self,
        repository_id: &str,
        dataset_id: &str,
        range: &DatapointRange,
    ) -> Result<Option<JsonValue>> {
        let config = RequestConfig::new()
            .query_non_empty("version", range.version.as_deref())
            .query_non_zero("start", range.start)
            .query_non_zero("end", range.end);

        self.api
            .value(
                Method::GET,
                &format!("/repositories/{repository_id}/datasets/{dataset_id}/datapoints"),
                config,
            )
            .await
    }

    /// Replace datapoints; the body is passed through untouched
    pub async fn update_datapoints(
        &self,
        repository_id: &str,
        dataset_id: &str,
        datapoints: &JsonValue,
    ) -> Result<Dataset> {
        debug!(repository_id, dataset_id, "Updating datapoints");
        self.api
            .send(
                Method::PUT,
                &format!("/repositories/{repository_id}/datasets/{dataset_id}/datapoints"),
                datapoints,
            )
            .await
    }
}
