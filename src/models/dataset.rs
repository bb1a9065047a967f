//! Dataset records

use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for creating a dataset; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateDatasetInput {
    pub name: Option<String>,
    pub metadata: Option<JsonObject>,
    pub labels: Option<Vec<String>>,
    pub total_datapoints: Option<u64>,
    pub license: Option<JsonObject>,
}

/// Input for updating dataset metadata; same fields as creation
pub type UpdateDatasetMetadataInput = CreateDatasetInput;

/// Wire body of dataset create and metadata update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_datapoints: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<JsonObject>,
}

/// A dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub dataset_id: String,
    pub repository_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub metadata: Option<JsonObject>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub total_datapoints: u64,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub license: Option<JsonObject>,
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Page of datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}
