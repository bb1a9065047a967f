//! Search store records

use super::stage::RetentionPolicy;
use crate::strategy::{ChunkingStrategy, EmbeddingParams, EmbeddingStrategy};
use crate::types::{JsonObject, MetadataFieldType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Inputs
// ============================================================================

/// Input for creating a search store
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateSearchStoreInput {
    pub name: Option<String>,
    /// Required
    pub embedding_strategy: Option<EmbeddingStrategy>,
    /// Required
    pub chunking_strategy: Option<ChunkingStrategy>,
    pub metadata: Option<JsonObject>,
    /// Metadata key to value type
    pub metadata_schema: Option<BTreeMap<String, MetadataFieldType>>,
    pub retention_policy: Option<RetentionPolicy>,
}

/// Input for updating a search store; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateSearchStoreInput {
    pub name: Option<String>,
    pub metadata: Option<JsonObject>,
    pub access_policy: Option<String>,
}

/// Input for the per-variant search store creates
/// (`search_stores().instruct()`, `.semantic()`, `.vllm()`).
///
/// Chunking defaults to 512 tokens with 128 overlap.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchStoreVariantInput {
    /// Required
    pub name: Option<String>,
    #[serde(flatten)]
    pub embedding: EmbeddingParams,
    pub metadata: Option<JsonObject>,
    pub retention_policy: Option<RetentionPolicy>,
}

impl SearchStoreVariantInput {
    /// Input for the given store name and embedding parameters
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

/// Wire body of `POST /search_stores`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSearchStoreRequest {
    pub embedding_strategy: EmbeddingStrategy,
    pub chunking_strategy: ChunkingStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_schema: Option<BTreeMap<String, MetadataFieldType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<RetentionPolicy>,
}

/// Wire body of `PATCH /search_stores/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSearchStoreRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// A search store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStore {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub chunking_strategy: ChunkingStrategy,
    pub embedding_strategy: EmbeddingStrategy,
    #[serde(default)]
    pub metadata: JsonObject,
    #[serde(default)]
    pub metadata_schema: BTreeMap<String, MetadataFieldType>,
    #[serde(default)]
    pub retention_policy: Option<RetentionPolicy>,
}

/// Page of search stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStoreList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub search_stores: Vec<SearchStore>,
}
