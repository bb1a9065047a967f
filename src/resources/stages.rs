//! `/stages` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{
    CreateStageInput, SearchStageInput, Stage, StageList, UpdateStageInput,
};
use crate::normalize::{create_stage_to_api, search_stage_to_api, update_stage_to_api};
use crate::strategy::EmbeddingKind;
use crate::types::{JsonObject, JsonValue, PageRequest};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Filters for listing stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageListQuery {
    pub page: PageRequest,
    pub name: Option<String>,
    pub access_policy: Option<String>,
    /// Only stages that have a search store attached
    pub with_search_store: bool,
}

impl StageListQuery {
    fn to_request(&self) -> RequestConfig {
        let config = RequestConfig::new()
            .page(self.page)
            .query_non_empty("name", self.name.as_deref())
            .query_non_empty("accessPolicy", self.access_policy.as_deref());
        if self.with_search_store {
            config.query("withSearchStore", "true")
        } else {
            config
        }
    }
}

/// Stage operations
#[derive(Clone, Copy)]
pub struct Stages<'a> {
    api: Api<'a>,
}

impl<'a> Stages<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            api: Api::new(transport),
        }
    }

    /// Use this timeout for every call made through the facade
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            api: self.api.with_timeout(timeout),
        }
    }

    /// Stage creates with a search store of the given kind
    pub fn search(&self, kind: EmbeddingKind) -> SearchStages<'a> {
        SearchStages::new(self.api, kind)
    }

    /// Stage creates with an `instruct` search store
    pub fn instruct(&self) -> SearchStages<'a> {
        self.search(EmbeddingKind::Instruct)
    }

    /// Stage creates with a `semantic` search store
    pub fn semantic(&self) -> SearchStages<'a> {
        self.search(EmbeddingKind::Semantic)
    }

    /// Stage creates with a `vllm` search store
    pub fn vllm(&self) -> SearchStages<'a> {
        self.search(EmbeddingKind::Vllm)
    }

    /// Legacy import operations of one stage
    pub fn imports(&self, stage_id: impl Into<String>) -> StageImports<'a> {
        StageImports {
            api: self.api,
            stage_id: stage_id.into(),
        }
    }

    pub async fn list(&self, query: &StageListQuery) -> Result<StageList> {
        debug!(page = query.page.page, size = query.page.size, "Listing stages");
        self.api.get("/stages", query.to_request()).await
    }

    /// Create a stage. No triggers are added.
    pub async fn create(&self, input: &CreateStageInput) -> Result<Stage> {
        let body = create_stage_to_api(input)?;
        debug!(name = %body.name, "Creating stage");
        self.api.send(Method::POST, "/stages", &body).await
    }

    pub async fn get(&self, stage_id: &str) -> Result<Stage> {
        self.api
            .get(&format!("/stages/{stage_id}"), RequestConfig::new())
            .await
    }

    /// Replace the given fields of a stage
    pub async fn update(&self, stage_id: &str, input: &UpdateStageInput) -> Result<Stage> {
        let body = update_stage_to_api(input);
        debug!(stage_id, "Updating stage");
        self.api
            .send(Method::PATCH, &format!("/stages/{stage_id}"), &body)
            .await
    }

    pub async fn delete(&self, stage_id: &str) -> Result<()> {
        debug!(stage_id, "Deleting stage");
        self.api.delete(&format!("/stages/{stage_id}")).await
    }
}

/// Stage creation with an attached search store of one embedding kind.
///
/// The created stage always starts with the search-store trigger.
#[derive(Clone, Copy)]
pub struct SearchStages<'a> {
    api: Api<'a>,
    kind: EmbeddingKind,
}

impl<'a> SearchStages<'a> {
    fn new(api: Api<'a>, kind: EmbeddingKind) -> Self {
        Self { api, kind }
    }

    /// Embedding kind used by this accessor
    pub fn kind(&self) -> EmbeddingKind {
        self.kind
    }

    pub async fn create(&self, input: &SearchStageInput) -> Result<Stage> {
        let body = search_stage_to_api(self.kind, input)?;
        debug!(name = %body.name, kind = %self.kind, "Creating stage with search store");
        self.api.send(Method::POST, "/stages", &body).await
    }
}

/// Legacy import operations of a stage. Connectors replace these.
#[derive(Clone)]
pub struct StageImports<'a> {
    api: Api<'a>,
    stage_id: String,
}

impl StageImports<'_> {
    /// Start an import. `extra` keys are merged into the body.
    pub async fn create(
        &self,
        connection_id: &str,
        provider: &str,
        source: &JsonObject,
        extra: Option<&JsonObject>,
    ) -> Result<JsonValue> {
        let mut body = json!({
            "connectionId": connection_id,
            "provider": provider,
            "source": source,
        });
        if let (Some(map), Some(extra)) = (body.as_object_mut(), extra) {
            for (key, value) in extra {
                map.insert(key.clone(), value.clone());
            }
        }

        debug!(stage_id = %self.stage_id, provider, "Starting import");
        self.api
            .send(
                Method::POST,
                &format!("/stages/{}/imports", self.stage_id),
                &body,
            )
            .await
    }

    pub async fn get(&self, import_id: &str) -> Result<JsonValue> {
        self.api
            .get(
                &format!("/stages/{}/imports/{import_id}", self.stage_id),
                RequestConfig::new(),
            )
            .await
    }
}
