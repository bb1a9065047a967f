//! Stage file records

use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run that processed a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFileInfo {
    pub run_id: String,
    pub transformation_id: String,
}

/// A file stored in a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub file_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub stage_id: String,
    pub version: String,
    pub media_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    pub size: u64,
    #[serde(default)]
    pub metadata: Option<JsonObject>,
    #[serde(default)]
    pub run: Option<RunFileInfo>,
}

/// Page of files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub files: Vec<File>,
}

/// Time-limited download URL for a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrl {
    pub url: String,
    pub expires_at: DateTime<Utc>,
    pub object_key: String,
    pub media_type: String,
    pub size: u64,
}
