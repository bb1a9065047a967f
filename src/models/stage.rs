//! Stage records

use crate::strategy::{ChunkingStrategy, EmbeddingParams, EmbeddingStrategy};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Value objects
// ============================================================================

/// Rule attached to a stage: which transformation runs on ingested files
/// and where its output goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub name: String,
    pub transformation_name: String,
    /// e.g. `DataPlatform:Repository`, `DataPlatform:SearchStore`
    pub destination_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,
}

impl Trigger {
    /// Create a trigger without connector or repository
    pub fn new(
        name: impl Into<String>,
        transformation_name: impl Into<String>,
        destination_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            transformation_name: transformation_name.into(),
            destination_type: destination_type.into(),
            connector_type: None,
            repository_id: None,
        }
    }

    /// Set the connector type
    #[must_use]
    pub fn with_connector_type(mut self, connector_type: impl Into<String>) -> Self {
        self.connector_type = Some(connector_type.into());
        self
    }

    /// Set the target repository
    #[must_use]
    pub fn with_repository_id(mut self, repository_id: impl Into<String>) -> Self {
        self.repository_id = Some(repository_id.into());
        self
    }
}

/// How long files are kept in a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPolicy {
    /// Period in days
    pub retention_period: u32,
}

/// Search store attached to a stage at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSearchStoreConfig {
    pub chunking_strategy: ChunkingStrategy,
    pub embedding_strategy: EmbeddingStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

// ============================================================================
// Inputs
// ============================================================================

/// Input for creating a stage
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateStageInput {
    /// Required
    pub name: Option<String>,
    pub triggers: Option<Vec<Trigger>>,
    pub retention_policy: Option<RetentionPolicy>,
    pub search_store: Option<StageSearchStoreConfig>,
    pub access_policy: Option<String>,
}

impl CreateStageInput {
    /// Input with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Input for updating a stage; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateStageInput {
    pub triggers: Option<Vec<Trigger>>,
    pub access_policy: Option<String>,
    pub retention_policy: Option<RetentionPolicy>,
}

/// Input for creating a stage with an embedded search store.
///
/// The embedding variant is chosen by the accessor used
/// (`stages().instruct()`, `.semantic()`, `.vllm()`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchStageInput {
    /// Required
    pub name: Option<String>,
    #[serde(flatten)]
    pub embedding: EmbeddingParams,
    /// Extra triggers, appended after the search-store trigger
    pub triggers: Option<Vec<Trigger>>,
    pub retention_policy: Option<RetentionPolicy>,
    pub access_policy: Option<String>,
    /// Search store metadata
    pub metadata: Option<JsonObject>,
}

impl SearchStageInput {
    /// Input for the given stage name and embedding parameters
    pub fn new(name: impl Into<String>, embedding: EmbeddingParams) -> Self {
        Self {
            name: Some(name.into()),
            embedding,
            ..Self::default()
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Wire body of `POST /stages`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStageRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<Trigger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<RetentionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_store: Option<StageSearchStoreConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<String>,
}

/// Wire body of `PATCH /stages/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<Trigger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<RetentionPolicy>,
}

// ============================================================================
// Responses
// ============================================================================

/// Search store as reported on a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSearchStore {
    pub id: String,
    #[serde(default)]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default)]
    pub embedding_strategy: Option<EmbeddingStrategy>,
    #[serde(default)]
    pub metadata: Option<JsonObject>,
}

/// A stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub stage_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub retention_policy: Option<RetentionPolicy>,
    #[serde(default)]
    pub search_store: Option<StageSearchStore>,
    #[serde(default)]
    pub access_policy: Option<String>,
    #[serde(default)]
    pub files_count: u64,
}

/// Page of stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub stages: Vec<Stage>,
}
