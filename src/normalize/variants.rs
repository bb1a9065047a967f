//! Shaping of the per-embedding convenience creates

use super::{create_search_store_to_api, create_stage_to_api};
use crate::error::{require, Result};
use crate::models::{
    CreateSearchStoreInput, CreateSearchStoreRequest, CreateStageInput, CreateStageRequest,
    SearchStageInput, SearchStoreVariantInput, StageSearchStoreConfig,
};
use crate::strategy::{build_chunking, build_chunking_or_default, EmbeddingKind};
use crate::trigger::with_search_store_trigger;

/// Shape a stage creation with an attached search store of the given kind.
///
/// The search-store trigger is prepended to the caller's triggers.
/// Chunking parameters are required.
pub fn search_stage_to_api(
    kind: EmbeddingKind,
    input: &SearchStageInput,
) -> Result<CreateStageRequest> {
    let name = require(&input.name, "name")?;
    let embedding_strategy = kind.build(&input.embedding)?;
    let chunking_strategy = build_chunking(&input.embedding)?;

    let stage = CreateStageInput {
        name: Some(name),
        triggers: Some(with_search_store_trigger(input.triggers.as_deref())),
        retention_policy: input.retention_policy,
        search_store: Some(StageSearchStoreConfig {
            chunking_strategy,
            embedding_strategy,
            metadata: input.metadata.clone(),
        }),
        access_policy: input.access_policy.clone(),
    };

    create_stage_to_api(&stage)
}

/// Shape a search store creation of the given kind.
///
/// Chunking falls back to 512/128 tokens when not given.
pub fn search_store_variant_to_api(
    kind: EmbeddingKind,
    input: &SearchStoreVariantInput,
) -> Result<CreateSearchStoreRequest> {
    let name = require(&input.name, "name")?;

    let store = CreateSearchStoreInput {
        name: Some(name),
        embedding_strategy: Some(kind.build(&input.embedding)?),
        chunking_strategy: Some(build_chunking_or_default(&input.embedding)),
        metadata: input.metadata.clone(),
        metadata_schema: None,
        retention_policy: input.retention_policy,
    };

    create_search_store_to_api(&store)
}
