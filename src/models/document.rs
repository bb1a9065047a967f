//! Search store document records

use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One content part of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// `text` or `image`
    pub modality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64 encoded payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
}

impl Content {
    /// Text content
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            modality: "text".to_string(),
            text: Some(text.into()),
            bytes: None,
        }
    }
}

/// Input for creating a document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateDocumentInput {
    /// Required
    pub name: Option<String>,
    /// Required
    pub search_store_id: Option<String>,
    /// Required
    pub schema_version: Option<String>,
    /// Required
    pub contents: Option<Vec<Content>>,
    pub project_id: Option<String>,
    pub metadata: Option<JsonObject>,
}

/// Wire body for document creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub name: String,
    pub search_store_id: String,
    pub schema_version: String,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// A document, with its contents when the server includes them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub version: u64,
    #[serde(default)]
    pub metadata: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<Content>,
}
