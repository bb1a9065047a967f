//! Payload normalization
//!
//! Pure functions turning convenience inputs into wire bodies:
//!
//! - required fields are always copied; a missing one fails with
//!   `Error::MissingRequiredField` before any request is made
//! - optional fields appear only when present in the input (never as `null`)
//! - nested values are cloned, so the returned body shares nothing with
//!   the input
//!
//! The variant helpers in [`variants`] build on these to shape the
//! instruct/semantic/vllm convenience creates.

mod variants;

pub use variants::{search_stage_to_api, search_store_variant_to_api};

use crate::error::{require, Result};
use crate::models::{
    CreateConnectorInput, CreateConnectorRequest, CreateDatasetInput, CreateDocumentInput,
    CreateDocumentRequest, CreateRepositoryInput, CreateRepositoryRequest, CreateSearchStoreInput,
    CreateSearchStoreRequest, CreateStageInput, CreateStageRequest, DatasetRequest,
    UpdateDatasetMetadataInput, UpdateSearchStoreInput, UpdateSearchStoreRequest,
    UpdateStageInput, UpdateStageRequest,
};

/// Shape a stage creation
pub fn create_stage_to_api(input: &CreateStageInput) -> Result<CreateStageRequest> {
    Ok(CreateStageRequest {
        name: require(&input.name, "name")?,
        triggers: input.triggers.clone(),
        retention_policy: input.retention_policy,
        search_store: input.search_store.clone(),
        access_policy: input.access_policy.clone(),
    })
}

/// Shape a stage update
pub fn update_stage_to_api(input: &UpdateStageInput) -> UpdateStageRequest {
    UpdateStageRequest {
        triggers: input.triggers.clone(),
        access_policy: input.access_policy.clone(),
        retention_policy: input.retention_policy,
    }
}

/// Shape a repository creation
pub fn create_repository_to_api(input: &CreateRepositoryInput) -> Result<CreateRepositoryRequest> {
    Ok(CreateRepositoryRequest {
        name: require(&input.name, "name")?,
        media_type: require(&input.media_type, "media_type")?,
        modality: require(&input.modality, "modality")?,
        schema: input.schema.clone(),
        mutable: input.mutable,
    })
}

/// Shape a dataset creation
pub fn create_dataset_to_api(input: &CreateDatasetInput) -> DatasetRequest {
    dataset_request(input)
}

/// Shape a dataset metadata update
pub fn update_dataset_metadata_to_api(input: &UpdateDatasetMetadataInput) -> DatasetRequest {
    dataset_request(input)
}

fn dataset_request(input: &CreateDatasetInput) -> DatasetRequest {
    DatasetRequest {
        name: input.name.clone(),
        metadata: input.metadata.clone(),
        labels: input.labels.clone(),
        total_datapoints: input.total_datapoints,
        license: input.license.clone(),
    }
}

/// Shape a connector creation
pub fn create_connector_to_api(input: &CreateConnectorInput) -> Result<CreateConnectorRequest> {
    Ok(CreateConnectorRequest {
        connection_id: require(&input.connection_id, "connection_id")?,
        name: require(&input.name, "name")?,
        connector_mode: require(&input.connector_mode, "connector_mode")?,
        stage_id: require(&input.stage_id, "stage_id")?,
        source: require(&input.source, "source")?,
        destination: input.destination.clone(),
        transformation_context: input.transformation_context.clone(),
    })
}

/// Shape a search store creation
pub fn create_search_store_to_api(
    input: &CreateSearchStoreInput,
) -> Result<CreateSearchStoreRequest> {
    Ok(CreateSearchStoreRequest {
        embedding_strategy: require(&input.embedding_strategy, "embedding_strategy")?,
        chunking_strategy: require(&input.chunking_strategy, "chunking_strategy")?,
        name: input.name.clone(),
        metadata: input.metadata.clone(),
        metadata_schema: input.metadata_schema.clone(),
        retention_policy: input.retention_policy,
    })
}

/// Shape a search store update
pub fn update_search_store_to_api(input: &UpdateSearchStoreInput) -> UpdateSearchStoreRequest {
    UpdateSearchStoreRequest {
        name: input.name.clone(),
        metadata: input.metadata.clone(),
        access_policy: input.access_policy.clone(),
    }
}

/// Shape a document creation
pub fn create_document_to_api(input: &CreateDocumentInput) -> Result<CreateDocumentRequest> {
    Ok(CreateDocumentRequest {
        name: require(&input.name, "name")?,
        search_store_id: require(&input.search_store_id, "search_store_id")?,
        schema_version: require(&input.schema_version, "schema_version")?,
        contents: require(&input.contents, "contents")?,
        project_id: input.project_id.clone(),
        metadata: input.metadata.clone(),
    })
}

#[cfg(test)]
mod tests;
