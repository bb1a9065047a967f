//! Repository records

use crate::types::{JsonObject, MediaType, Modality};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for creating a repository
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateRepositoryInput {
    /// Required
    pub name: Option<String>,
    /// Required
    pub media_type: Option<MediaType>,
    /// Required
    pub modality: Option<Modality>,
    /// JSON schema of the datapoints
    pub schema: Option<JsonObject>,
    pub mutable: Option<bool>,
}

impl CreateRepositoryInput {
    /// Input with all required fields set
    pub fn new(name: impl Into<String>, media_type: MediaType, modality: Modality) -> Self {
        Self {
            name: Some(name.into()),
            media_type: Some(media_type),
            modality: Some(modality),
            ..Self::default()
        }
    }
}

/// Wire body of `POST /repositories`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub media_type: MediaType,
    pub modality: Modality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
}

/// A repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_id: String,
    pub name: String,
    pub media_type: String,
    pub modality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub schema: Option<JsonObject>,
}

/// Page of repositories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub repositories: Vec<Repository>,
}
