//! Tests for payload normalization

use super::*;
use crate::error::Error;
use crate::models::{
    Content, DestinationConfig, RetentionPolicy, SearchStageInput, SearchStoreVariantInput,
    SourceConfig, StageSearchStoreConfig, TransformationContext, Trigger,
};
use crate::strategy::{build_vllm, ChunkingStrategy, EmbeddingKind, EmbeddingParams};
use crate::trigger::{search_store_trigger, DESTINATION_REPOSITORY};
use crate::types::{ConnectorMode, JsonObject, MediaType, MetadataFieldType, Modality, Representation};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use test_case::test_case;

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn missing_field(err: Error) -> String {
    match err {
        Error::MissingRequiredField { field } => field,
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

fn user_trigger(name: &str) -> Trigger {
    Trigger::new(name, "text-extract", DESTINATION_REPOSITORY).with_repository_id("repo-1")
}

// ============================================================================
// Stages
// ============================================================================

#[test]
fn test_stage_create_name_only() {
    let body = create_stage_to_api(&CreateStageInput::named("S")).unwrap();
    assert_eq!(to_json(&body), json!({"name": "S"}));
}

#[test]
fn test_stage_create_all_fields() {
    let input = CreateStageInput {
        name: Some("S".into()),
        triggers: Some(vec![user_trigger("t")]),
        retention_policy: Some(RetentionPolicy { retention_period: 7 }),
        search_store: Some(StageSearchStoreConfig {
            chunking_strategy: ChunkingStrategy::new(256, 32),
            embedding_strategy: build_vllm(&EmbeddingParams::new("m")).unwrap(),
            metadata: None,
        }),
        access_policy: Some("private".into()),
    };

    let body = to_json(&create_stage_to_api(&input).unwrap());
    assert_eq!(
        keys(&body),
        vec!["accessPolicy", "name", "retentionPolicy", "searchStore", "triggers"]
    );
    assert_eq!(body["retentionPolicy"], json!({"retentionPeriod": 7}));
    assert_eq!(
        body["searchStore"],
        json!({
            "chunkingStrategy": {"maxChunkSizeTokens": 256, "chunkOverlapTokens": 32},
            "embeddingStrategy": {"type": "vllm", "config": {"model": "m"}}
        })
    );
}

#[test]
fn test_stage_create_injects_nothing() {
    let input = CreateStageInput {
        triggers: Some(vec![user_trigger("t")]),
        ..CreateStageInput::named("S")
    };
    let body = create_stage_to_api(&input).unwrap();
    assert_eq!(body.triggers, Some(vec![user_trigger("t")]));
}

#[test]
fn test_stage_create_requires_name() {
    let err = create_stage_to_api(&CreateStageInput::default()).unwrap_err();
    assert_eq!(missing_field(err), "name");
}

#[test]
fn test_stage_update_empty() {
    let body = update_stage_to_api(&UpdateStageInput::default());
    assert_eq!(to_json(&body), json!({}));
}

#[test]
fn test_stage_update_renames() {
    let input = UpdateStageInput {
        triggers: None,
        access_policy: Some("public".into()),
        retention_policy: Some(RetentionPolicy { retention_period: 30 }),
    };
    assert_eq!(
        to_json(&update_stage_to_api(&input)),
        json!({"accessPolicy": "public", "retentionPolicy": {"retentionPeriod": 30}})
    );
}

// ============================================================================
// Stage variants
// ============================================================================

fn instruct_stage() -> SearchStageInput {
    SearchStageInput::new(
        "S",
        EmbeddingParams::new("m")
            .instruction("d", "q")
            .hybrid_index("bm25")
            .chunking(512, 128),
    )
}

#[test]
fn test_instruct_stage_body() {
    let body = search_stage_to_api(EmbeddingKind::Instruct, &instruct_stage()).unwrap();
    assert_eq!(
        to_json(&body),
        json!({
            "name": "S",
            "triggers": [{
                "name": "search-store-trigger",
                "transformationName": "DocumentToText",
                "destinationType": "DataPlatform:SearchStore",
                "connectorType": "DataPlatform:SearchStore:CREATE"
            }],
            "searchStore": {
                "chunkingStrategy": {"maxChunkSizeTokens": 512, "chunkOverlapTokens": 128},
                "embeddingStrategy": {
                    "type": "instruct",
                    "config": {
                        "model": "m",
                        "instruction": {"document": "d", "query": "q"},
                        "hybridIndex": "bm25"
                    }
                }
            }
        })
    );
}

#[test]
fn test_semantic_stage_keeps_user_triggers_after_system() {
    let input = SearchStageInput {
        triggers: Some(vec![user_trigger("a"), user_trigger("b")]),
        access_policy: Some("private".into()),
        metadata: Some(object(json!({"team": "search"}))),
        ..SearchStageInput::new(
            "S",
            EmbeddingParams::new("m")
                .representation(Representation::Symmetric)
                .chunking(256, 0),
        )
    };

    let body = search_stage_to_api(EmbeddingKind::Semantic, &input).unwrap();
    assert_eq!(
        body.triggers,
        Some(vec![search_store_trigger(), user_trigger("a"), user_trigger("b")])
    );

    let json = to_json(&body);
    assert_eq!(json["accessPolicy"], "private");
    assert_eq!(json["searchStore"]["metadata"], json!({"team": "search"}));
    assert_eq!(
        json["searchStore"]["embeddingStrategy"],
        json!({"type": "semantic", "config": {"model": "m", "representation": "symmetric"}})
    );
}

#[test_case(EmbeddingKind::Instruct ; "instruct")]
#[test_case(EmbeddingKind::Semantic ; "semantic")]
#[test_case(EmbeddingKind::Vllm ; "vllm")]
fn test_stage_variant_requires_model(kind: EmbeddingKind) {
    let mut input = instruct_stage();
    input.embedding.embedding_model = None;
    input.embedding.representation = Some(Representation::Asymmetric);

    let err = search_stage_to_api(kind, &input).unwrap_err();
    assert_eq!(missing_field(err), "embedding_model");
}

#[test]
fn test_stage_variant_requires_chunking() {
    let mut input = instruct_stage();
    input.embedding.chunk_overlap_tokens = None;

    let err = search_stage_to_api(EmbeddingKind::Vllm, &input).unwrap_err();
    assert_eq!(missing_field(err), "chunk_overlap_tokens");
}

#[test]
fn test_stage_variant_requires_name() {
    let mut input = instruct_stage();
    input.name = None;

    let err = search_stage_to_api(EmbeddingKind::Instruct, &input).unwrap_err();
    assert_eq!(missing_field(err), "name");
}

#[test]
fn test_stage_variant_is_pure() {
    let input = SearchStageInput {
        triggers: Some(vec![user_trigger("a")]),
        ..instruct_stage()
    };
    let before = input.clone();

    let first = search_stage_to_api(EmbeddingKind::Instruct, &input).unwrap();
    let second = search_stage_to_api(EmbeddingKind::Instruct, &input).unwrap();

    assert_eq!(input, before);
    assert_eq!(first, second);
}

// ============================================================================
// Repositories & datasets
// ============================================================================

#[test]
fn test_repository_without_schema() {
    let input = CreateRepositoryInput::new("R", MediaType::Jsonlines, Modality::Text);
    let body = to_json(&create_repository_to_api(&input).unwrap());
    assert_eq!(body, json!({"name": "R", "mediaType": "jsonlines", "modality": "text"}));
    assert!(body.get("schema").is_none());
}

#[test]
fn test_repository_with_schema() {
    let input = CreateRepositoryInput {
        schema: Some(object(json!({"type": "object"}))),
        mutable: Some(false),
        ..CreateRepositoryInput::new("R", MediaType::Csv, Modality::Text)
    };
    let body = to_json(&create_repository_to_api(&input).unwrap());
    assert_eq!(body["schema"], json!({"type": "object"}));
    assert_eq!(body["mutable"], json!(false));
}

#[test_case("name" ; "name")]
#[test_case("media_type" ; "media type")]
#[test_case("modality" ; "modality")]
fn test_repository_required(field: &str) {
    let mut input = CreateRepositoryInput::new("R", MediaType::Pdf, Modality::Image);
    match field {
        "name" => input.name = None,
        "media_type" => input.media_type = None,
        _ => input.modality = None,
    }
    let err = create_repository_to_api(&input).unwrap_err();
    assert_eq!(missing_field(err), field);
}

#[test]
fn test_dataset_create_and_update_share_shape() {
    let input = CreateDatasetInput {
        name: Some("D".into()),
        labels: Some(vec!["train".into()]),
        total_datapoints: Some(10),
        ..CreateDatasetInput::default()
    };

    let create = to_json(&create_dataset_to_api(&input));
    let update = to_json(&update_dataset_metadata_to_api(&input));

    assert_eq!(
        create,
        json!({"name": "D", "labels": ["train"], "totalDatapoints": 10})
    );
    assert_eq!(create, update);
}

#[test]
fn test_dataset_empty() {
    let body = create_dataset_to_api(&CreateDatasetInput::default());
    assert_eq!(to_json(&body), json!({}));
}

// ============================================================================
// Connectors
// ============================================================================

fn connector_input() -> CreateConnectorInput {
    CreateConnectorInput {
        connection_id: Some("conn-1".into()),
        name: Some("drive".into()),
        connector_mode: Some(ConnectorMode::Sync),
        stage_id: Some("stage-1".into()),
        source: Some(SourceConfig::sharepoint("drv", "fld", vec!["f1".into()])),
        destination: None,
        transformation_context: None,
    }
}

#[test]
fn test_connector_mixed_casing() {
    let input = CreateConnectorInput {
        destination: Some(DestinationConfig {
            kind: "DataPlatform:SearchStore".into(),
            collection: None,
            namespace: None,
            search_store: Some("ss-1".into()),
        }),
        transformation_context: Some(TransformationContext {
            parameters: object(json!({"language": "de"})),
        }),
        ..connector_input()
    };

    let body = to_json(&create_connector_to_api(&input).unwrap());
    assert_eq!(
        body,
        json!({
            "connectionId": "conn-1",
            "name": "drive",
            "connector_mode": "SYNC",
            "stage_id": "stage-1",
            "source": {
                "type": "sharepoint",
                "configuration": {"driveId": "drv", "folderId": "fld", "fileIds": ["f1"]}
            },
            "destination": {"type": "DataPlatform:SearchStore", "searchStore": "ss-1"},
            "transformationContext": {"parameters": {"language": "de"}}
        })
    );
}

#[test]
fn test_connector_requires_source() {
    let input = CreateConnectorInput {
        source: None,
        ..connector_input()
    };
    let err = create_connector_to_api(&input).unwrap_err();
    assert_eq!(missing_field(err), "source");
}

// ============================================================================
// Search stores
// ============================================================================

#[test]
fn test_search_store_create() {
    let mut schema = BTreeMap::new();
    schema.insert("year".to_string(), MetadataFieldType::Integer);

    let input = CreateSearchStoreInput {
        name: Some("store".into()),
        embedding_strategy: Some(build_vllm(&EmbeddingParams::new("m")).unwrap()),
        chunking_strategy: Some(ChunkingStrategy::default()),
        metadata_schema: Some(schema),
        ..CreateSearchStoreInput::default()
    };

    assert_eq!(
        to_json(&create_search_store_to_api(&input).unwrap()),
        json!({
            "name": "store",
            "embeddingStrategy": {"type": "vllm", "config": {"model": "m"}},
            "chunkingStrategy": {"maxChunkSizeTokens": 512, "chunkOverlapTokens": 128},
            "metadataSchema": {"year": "integer"}
        })
    );
}

#[test]
fn test_search_store_requires_strategies() {
    let err = create_search_store_to_api(&CreateSearchStoreInput::default()).unwrap_err();
    assert_eq!(missing_field(err), "embedding_strategy");

    let input = CreateSearchStoreInput {
        embedding_strategy: Some(build_vllm(&EmbeddingParams::new("m")).unwrap()),
        ..CreateSearchStoreInput::default()
    };
    let err = create_search_store_to_api(&input).unwrap_err();
    assert_eq!(missing_field(err), "chunking_strategy");
}

#[test]
fn test_search_store_variant_defaults_chunking() {
    let input = SearchStoreVariantInput::new("store", EmbeddingParams::new("m").instruction("d", "q"));
    let body = search_store_variant_to_api(EmbeddingKind::Instruct, &input).unwrap();

    assert_eq!(body.chunking_strategy, ChunkingStrategy::new(512, 128));
    assert_eq!(body.embedding_strategy.kind(), EmbeddingKind::Instruct);
    assert_eq!(body.name.as_deref(), Some("store"));
}

#[test]
fn test_search_store_variant_explicit_chunking() {
    let input = SearchStoreVariantInput::new(
        "store",
        EmbeddingParams::new("m")
            .representation(Representation::Asymmetric)
            .chunking(1024, 64),
    );
    let body = search_store_variant_to_api(EmbeddingKind::Semantic, &input).unwrap();
    assert_eq!(body.chunking_strategy, ChunkingStrategy::new(1024, 64));
}

#[test]
fn test_search_store_variant_requires_name() {
    let input = SearchStoreVariantInput {
        embedding: EmbeddingParams::new("m"),
        ..SearchStoreVariantInput::default()
    };
    let err = search_store_variant_to_api(EmbeddingKind::Vllm, &input).unwrap_err();
    assert_eq!(missing_field(err), "name");
}

#[test]
fn test_search_store_update() {
    let input = UpdateSearchStoreInput {
        name: None,
        metadata: Some(object(json!({"a": 1}))),
        access_policy: Some("public".into()),
    };
    assert_eq!(
        to_json(&update_search_store_to_api(&input)),
        json!({"metadata": {"a": 1}, "accessPolicy": "public"})
    );
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn test_document_create() {
    let input = CreateDocumentInput {
        name: Some("doc".into()),
        search_store_id: Some("ss-1".into()),
        schema_version: Some("V1".into()),
        contents: Some(vec![Content::text("hello")]),
        project_id: None,
        metadata: None,
    };
    assert_eq!(
        to_json(&create_document_to_api(&input).unwrap()),
        json!({
            "name": "doc",
            "searchStoreId": "ss-1",
            "schemaVersion": "V1",
            "contents": [{"modality": "text", "text": "hello"}]
        })
    );
}

#[test]
fn test_document_requires_contents() {
    let input = CreateDocumentInput {
        name: Some("doc".into()),
        search_store_id: Some("ss-1".into()),
        schema_version: Some("V1".into()),
        ..CreateDocumentInput::default()
    };
    let err = create_document_to_api(&input).unwrap_err();
    assert_eq!(missing_field(err), "contents");
}

// ============================================================================
// Input decoding
// ============================================================================

#[test]
fn test_stage_input_from_snake_case_yaml() {
    let yaml = r#"
name: S
embedding_model: m
representation: asymmetric
max_chunk_size_tokens: 512
chunk_overlap_tokens: 128
retention_policy:
  retentionPeriod: 14
"#;
    let input: SearchStageInput = serde_yaml::from_str(yaml).unwrap();
    let body = to_json(&search_stage_to_api(EmbeddingKind::Semantic, &input).unwrap());

    assert_eq!(body["retentionPolicy"], json!({"retentionPeriod": 14}));
    assert_eq!(body["searchStore"]["embeddingStrategy"]["type"], "semantic");
}
