//! Common types used throughout the client
//!
//! Shared type aliases, the small closed vocabularies of the API, and the
//! pagination request that every list operation sends.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, used for free-form maps (metadata, schema, license)
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Media Type
// ============================================================================

/// Valid media types for repositories and files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jsonlines,
    Json,
    Csv,
    Pdf,
    Avro,
}

// ============================================================================
// Modality
// ============================================================================

/// Valid modalities for repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
}

// ============================================================================
// Connector Mode
// ============================================================================

/// How a connector moves files into its stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectorMode {
    Sync,
    Async,
}

impl ConnectorMode {
    /// Wire representation, also used as a list filter
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectorMode::Sync => "SYNC",
            ConnectorMode::Async => "ASYNC",
        }
    }
}

// ============================================================================
// Representation
// ============================================================================

/// Representation used by semantic embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Documents and queries are embedded differently
    Asymmetric,
    /// Documents and queries share one embedding
    Symmetric,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Asymmetric => f.write_str("asymmetric"),
            Representation::Symmetric => f.write_str("symmetric"),
        }
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asymmetric" => Ok(Representation::Asymmetric),
            "symmetric" => Ok(Representation::Symmetric),
            other => Err(format!(
                "unknown representation '{other}' (expected asymmetric or symmetric)"
            )),
        }
    }
}

// ============================================================================
// Metadata Field Type
// ============================================================================

/// Value type of a search store metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFieldType {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
}

// ============================================================================
// Pagination
// ============================================================================

/// Default page index
pub const DEFAULT_PAGE: u32 = 0;

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Page/size pair sent with every list request.
///
/// The client never walks pages on its own; callers advance `page`
/// themselves using the `total` returned in each list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Number of items per page
    pub size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// The request for the following page
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Render a timestamp filter the way the API expects it (RFC 3339, UTC)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
