//! Typed records exchanged with the API
//!
//! Three kinds of types live here, per resource:
//!
//! - **Inputs** (`Create*Input`, `Update*Input`): convenience records in
//!   snake_case. Every field is optional at the type level; required ones
//!   are checked by the normalizers in [`crate::normalize`].
//! - **Requests** (`*Request`): the exact wire bodies. Required fields are
//!   plain values, optional ones are skipped when absent.
//! - **Responses**: snapshots returned by the server, in camelCase.

mod connector;
mod dataset;
mod document;
mod file;
mod repository;
mod run;
mod search_store;
mod stage;

pub use connector::{
    Connector, ConnectorFile, ConnectorFileList, ConnectorList, CreateConnectorInput,
    CreateConnectorRequest, DestinationConfig, DestinationOutput, SourceConfig,
    TransformationContext,
};
pub use dataset::{
    CreateDatasetInput, Dataset, DatasetList, DatasetRequest, UpdateDatasetMetadataInput,
};
pub use document::{Content, CreateDocumentInput, CreateDocumentRequest, Document};
pub use file::{File, FileList, PresignedUrl, RunFileInfo};
pub use repository::{CreateRepositoryInput, CreateRepositoryRequest, Repository, RepositoryList};
pub use run::{DataObject, DataStorage, ErrorObject, Run, RunList};
pub use search_store::{
    CreateSearchStoreInput, CreateSearchStoreRequest, SearchStore, SearchStoreList,
    SearchStoreVariantInput, UpdateSearchStoreInput, UpdateSearchStoreRequest,
};
pub use stage::{
    CreateStageInput, CreateStageRequest, RetentionPolicy, SearchStageInput, Stage, StageList,
    StageSearchStore, StageSearchStoreConfig, Trigger, UpdateStageInput, UpdateStageRequest,
};
