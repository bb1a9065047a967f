//! `/search_stores` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{
    CreateSearchStoreInput, SearchStore, SearchStoreList, SearchStoreVariantInput,
    UpdateSearchStoreInput,
};
use crate::normalize::{
    create_search_store_to_api, search_store_variant_to_api, update_search_store_to_api,
};
use crate::strategy::EmbeddingKind;
use crate::types::PageRequest;
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

/// Filters for listing search stores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStoreListQuery {
    pub page: PageRequest,
    pub name: Option<String>,
}

/// Search store operations
#[derive(Clone, Copy)]
pub struct SearchStores<'a> {
    api: Api<'a>,
}

impl<'a> SearchStores<'a> {
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

    /// Creates for the given embedding kind
    pub fn variant(&self, kind: EmbeddingKind) -> SearchStoreVariant<'a> {
        SearchStoreVariant::new(self.api, kind)
    }

    pub fn instruct(&self) -> SearchStoreVariant<'a> {
        self.variant(EmbeddingKind::Instruct)
    }

    pub fn semantic(&self) -> SearchStoreVariant<'a> {
        self.variant(EmbeddingKind::Semantic)
    }

    pub fn vllm(&self) -> SearchStoreVariant<'a> {
        self.variant(EmbeddingKind::Vllm)
    }

    pub async fn list(&self, query: &SearchStoreListQuery) -> Result<SearchStoreList> {
        let config = RequestConfig::new()
            .page(query.page)
            .query_non_empty("name", query.name.as_deref());
        self.api.get("/search_stores", config).await
    }

    /// Create a search store from fully built strategies
    pub async fn create(&self, input: &CreateSearchStoreInput) -> Result<SearchStore> {
        let body = create_search_store_to_api(input)?;
        debug!(kind = %body.embedding_strategy.kind(), "Creating search store");
        self.api.send(Method::POST, "/search_stores", &body).await
    }

    pub async fn get(&self, search_store_id: &str) -> Result<SearchStore> {
        self.api
            .get(
                &format!("/search_stores/{search_store_id}"),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        search_store_id: &str,
        input: &UpdateSearchStoreInput,
    ) -> Result<SearchStore> {
        let body = update_search_store_to_api(input);
        debug!(search_store_id, "Updating search store");
        self.api
            .send(
                Method::PATCH,
                &format!("/search_stores/{search_store_id}"),
                &body,
            )
            .await
    }

    pub async fn delete(&self, search_store_id: &str) -> Result<()> {
        debug!(search_store_id, "Deleting search store");
        self.api
            .delete(&format!("/search_stores/{search_store_id}"))
            .await
    }
}

/// Search store creation for one embedding kind, from flat parameters
#[derive(Clone, Copy)]
pub struct SearchStoreVariant<'a> {
    api: Api<'a>,
    kind: EmbeddingKind,
}

impl<'a> SearchStoreVariant<'a> {
    fn new(api: Api<'a>, kind: EmbeddingKind) -> Self {
        Self { api, kind }
    }

    pub fn kind(&self) -> EmbeddingKind {
        self.kind
    }

    pub async fn create(&self, input: &SearchStoreVariantInput) -> Result<SearchStore> {
        let body = search_store_variant_to_api(self.kind, input)?;
        debug!(kind = %self.kind, "Creating search store");
        self.api.send(Method::POST, "/search_stores", &body).await
    }
}
