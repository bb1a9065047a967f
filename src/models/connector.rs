//! Connector records
//!
//! Note the API mixes casings on connectors: `connectionId` and
//! `transformationContext` are camelCase while `connector_mode` and
//! `stage_id` stay snake_case on the wire.

use crate::types::{ConnectorMode, JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Value objects
// ============================================================================

/// Where a connector reads files from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source provider, e.g. `sharepoint` or `google_drive`
    #[serde(rename = "type")]
    pub provider: String,
    pub configuration: JsonObject,
}

impl SourceConfig {
    /// SharePoint folder source
    pub fn sharepoint(
        drive_id: impl Into<String>,
        folder_id: impl Into<String>,
        file_ids: Vec<String>,
    ) -> Self {
        Self::drive("sharepoint", drive_id.into(), folder_id.into(), file_ids)
    }

    /// Google Drive folder source
    pub fn google_drive(
        drive_id: impl Into<String>,
        folder_id: impl Into<String>,
        file_ids: Vec<String>,
    ) -> Self {
        Self::drive("google_drive", drive_id.into(), folder_id.into(), file_ids)
    }

    fn drive(provider: &str, drive_id: String, folder_id: String, file_ids: Vec<String>) -> Self {
        let mut configuration = JsonObject::new();
        configuration.insert("driveId".into(), drive_id.into());
        configuration.insert("folderId".into(), folder_id.into());
        configuration.insert("fileIds".into(), file_ids.into());
        Self {
            provider: provider.to_string(),
            configuration,
        }
    }
}

/// Where a connector delivers documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_store: Option<String>,
}

/// Destination as reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationOutput {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub configuration: JsonValue,
}

/// Parameters handed to the transformation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationContext {
    #[serde(default)]
    pub parameters: JsonObject,
}

// ============================================================================
// Input & request
// ============================================================================

/// Input for creating a connector
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateConnectorInput {
    /// Required
    pub connection_id: Option<String>,
    /// Required
    pub name: Option<String>,
    /// Required
    pub connector_mode: Option<ConnectorMode>,
    /// Required
    pub stage_id: Option<String>,
    /// Required
    pub source: Option<SourceConfig>,
    pub destination: Option<DestinationConfig>,
    pub transformation_context: Option<TransformationContext>,
}

/// Wire body of `POST /connectors`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateConnectorRequest {
    #[serde(rename = "connectionId")]
    pub connection_id: String,
    pub name: String,
    pub connector_mode: ConnectorMode,
    pub stage_id: String,
    pub source: SourceConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<DestinationConfig>,
    #[serde(
        rename = "transformationContext",
        skip_serializing_if = "Option::is_none"
    )]
    pub transformation_context: Option<TransformationContext>,
}

// ============================================================================
// Responses
// ============================================================================

/// A connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    #[serde(rename = "connectionId")]
    pub connection_id: String,
    pub name: String,
    pub provider: String,
    pub connector_mode: String,
    pub stage_id: String,
    #[serde(default)]
    pub source: JsonValue,
    #[serde(default)]
    pub destination: Option<DestinationOutput>,
    #[serde(rename = "transformationContext", default)]
    pub transformation_context: Option<TransformationContext>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// `CREATED`, `RUNNING`, `COMPLETED` or `FAILED`
    pub status: String,
}

/// Page of connectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

/// A file seen by a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorFile {
    pub connector_id: String,
    #[serde(default)]
    pub file_id: Option<String>,
    pub stage_id: String,
    pub media_type: String,
    pub name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Page of connector files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorFileList {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    #[serde(default)]
    pub files: Vec<ConnectorFile>,
}
