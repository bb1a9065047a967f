//! Transformation run records

use crate::strategy::ChunkingStrategy;
use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input or output object of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataObject {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Storage a run writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStorage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Structured run error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<JsonObject>,
}

/// A transformation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub run_id: String,
    /// `PENDING`, `RUNNING`, `COMPLETED` or `FAILED`
    pub status: String,
    pub transformation_id: String,
    pub transformation_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub input: Option<DataObject>,
    #[serde(default)]
    pub output: Option<DataObject>,
    #[serde(default)]
    pub document: Option<DataObject>,
    #[serde(default)]
    pub destination: Option<DataStorage>,
    #[serde(default)]
    pub parameters: JsonObject,
    #[serde(default)]
    pub metadata: JsonObject,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub errors_object: Vec<ErrorObject>,
    #[serde(default)]
    pub input_media_type: Option<String>,
    #[serde(default)]
    pub input_file_name: Option<String>,
    #[serde(default)]
    pub input_file_paths: Vec<String>,
    #[serde(default)]
    pub input_file_size: Option<u64>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub is_batch: bool,
    #[serde(default)]
    pub chunking_config: Option<ChunkingStrategy>,
    #[serde(default)]
    pub embedding_config: Option<JsonValue>,
}

/// Page of runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub runs: Vec<Run>,
}
