//! `/stages/{id}/files` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{File, FileList, PresignedUrl};
use crate::types::{JsonObject, PageRequest};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

/// Default lifetime of a presigned URL, in seconds
pub const DEFAULT_PRESIGNED_URL_TTL: u64 = 3600;

/// Filters for listing the files of a stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileListQuery {
    pub page: PageRequest,
    pub name: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

/// File operations
#[derive(Clone, Copy)]
pub struct Files<'a> {
    api: Api<'a>,
}

impl<'a> Files<'a> {
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

    pub async fn list(&self, stage_id: &str, query: &FileListQuery) -> Result<FileList> {
        let config = RequestConfig::new()
            .page(query.page)
            .query_non_empty("name", query.name.as_deref())
            .query_timestamp("createdAfter", query.created_after.as_ref())
            .query_timestamp("createdBefore", query.created_before.as_ref());

        self.api
            .get(&format!("/stages/{stage_id}/files"), config)
            .await
    }

    /// Register a file in a stage. The body is passed through untouched.
    pub async fn create(&self, stage_id: &str, file: &JsonObject) -> Result<File> {
        debug!(stage_id, "Creating file");
        self.api
            .send(Method::POST, &format!("/stages/{stage_id}/files"), file)
            .await
    }

    /// Download the file content
    pub async fn get(&self, stage_id: &str, file_id: &str) -> Result<Bytes> {
        debug!(stage_id, file_id, "Downloading file");
        self.api
            .raw(&format!("/stages/{stage_id}/files/{file_id}"))
            .await
    }

    pub async fn update(&self, stage_id: &str, file_id: &str, file: &JsonObject) -> Result<File> {
        self.api
            .send(
                Method::PUT,
                &format!("/stages/{stage_id}/files/{file_id}"),
                file,
            )
            .await
    }

    pub async fn delete(&self, stage_id: &str, file_id: &str) -> Result<()> {
        debug!(stage_id, file_id, "Deleting file");
        self.api
            .delete(&format!("/stages/{stage_id}/files/{file_id}"))
            .await
    }

    /// Time-limited download URL, valid for `ttl` seconds
    /// (`DEFAULT_PRESIGNED_URL_TTL` when `None`)
    pub async fn presigned_url(
        &self,
        stage_id: &str,
        file_id: &str,
        ttl: Option<u64>,
    ) -> Result<PresignedUrl> {
        let config =
            RequestConfig::new().query("ttl", ttl.unwrap_or(DEFAULT_PRESIGNED_URL_TTL));
        self.api
            .get(
                &format!("/stages/{stage_id}/files/{file_id}/presigned-url"),
                config,
            )
            .await
    }
}
