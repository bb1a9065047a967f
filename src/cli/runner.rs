//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, ConnectorCommand, DatasetCommand, FileCommand, InputArgs, ModeArg,
    Namespace, OutputFormat, PageArgs, RepositoryCommand, SearchStoreCommand, StageCommand,
};
use crate::client::Client;
use crate::config::{ClientConfig, BETA_NAMESPACE, V1_NAMESPACE};
use crate::error::Result;
use crate::models::{
    CreateConnectorInput, CreateDatasetInput, CreateRepositoryInput, CreateSearchStoreInput,
    CreateStageInput, SearchStageInput, SearchStoreVariantInput, UpdateSearchStoreInput,
    UpdateStageInput,
};
use crate::resources::{
    ConnectorListQuery, DatapointRange, DatasetListQuery, FileListQuery, RunListQuery,
    SearchStoreListQuery, StageListQuery,
};
use crate::types::{ConnectorMode, JsonObject, PageRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Read an input record from a YAML or JSON file
pub fn load_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn emit<T: Serialize>(value: &T) -> Result<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest::new(args.page, args.size)
    }
}

impl From<ModeArg> for ConnectorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sync => ConnectorMode::Sync,
            ModeArg::Async => ConnectorMode::Async,
        }
    }
}

impl InputArgs {
    fn load<T: DeserializeOwned>(&self) -> Result<T> {
        load_input(&self.input)
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Client configuration from flags, falling back to the environment
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut builder = ClientConfig::builder();
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }
        if let Some(key) = &self.cli.api_key {
            builder = builder.api_key(key);
        }
        if let Some(secs) = self.cli.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Client for the selected namespace
    pub fn client(&self) -> Result<Client> {
        let client = Client::new(self.client_config()?)?;
        Ok(match self.cli.namespace {
            Namespace::None => client,
            Namespace::V1 => client.with_namespace(V1_NAMESPACE),
            Namespace::Beta => client.with_namespace(BETA_NAMESPACE),
        })
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        if let Some(output) = self.execute(&client).await? {
            self.output_message(&output);
        }
        Ok(())
    }

    /// Execute the command against `client`, returning what should be printed
    pub async fn execute(&self, client: &Client) -> Result<Option<Value>> {
        match &self.cli.command {
            Commands::Stages(cmd) => self.stages(client, cmd).await,
            Commands::Files(cmd) => self.files(client, cmd).await,
            Commands::Repositories(cmd) => self.repositories(client, cmd).await,
            Commands::Datasets(cmd) => self.datasets(client, cmd).await,
            Commands::Connectors(cmd) => self.connectors(client, cmd).await,
            Commands::SearchStores(cmd) => self.search_stores(client, cmd).await,
        }
    }

    async fn stages(&self, client: &Client, cmd: &StageCommand) -> Result<Option<Value>> {
        let stages = client.stages();
        match cmd {
            StageCommand::List {
                page,
                name,
                access_policy,
                with_search_store,
            } => {
                let query = StageListQuery {
                    page: (*page).into(),
                    name: name.clone(),
                    access_policy: access_policy.clone(),
                    with_search_store: *with_search_store,
                };
                emit(&stages.list(&query).await?)
            }
            StageCommand::Get { stage_id } => emit(&stages.get(stage_id).await?),
            StageCommand::Create(input) => {
                let input: CreateStageInput = input.load()?;
                emit(&stages.create(&input).await?)
            }
            StageCommand::CreateSearch { kind, input } => {
                let input: SearchStageInput = input.load()?;
                emit(&stages.search((*kind).into()).create(&input).await?)
            }
            StageCommand::Update { stage_id, input } => {
                let input: UpdateStageInput = input.load()?;
                emit(&stages.update(stage_id, &input).await?)
            }
            StageCommand::Delete { stage_id } => {
                stages.delete(stage_id).await?;
                info!("Deleted stage {stage_id}");
                Ok(None)
            }
        }
    }

    async fn files(&self, client: &Client, cmd: &FileCommand) -> Result<Option<Value>> {
        let files = client.files();
        match cmd {
            FileCommand::List {
                stage_id,
                page,
                name,
                dates,
            } => {
                let query = FileListQuery {
                    page: (*page).into(),
                    name: name.clone(),
                    created_after: dates.created_after,
                    created_before: dates.created_before,
                };
                emit(&files.list(stage_id, &query).await?)
            }
            FileCommand::Get {
                stage_id,
                file_id,
                output,
            } => {
                let content = files.get(stage_id, file_id).await?;
                match output {
                    Some(path) => {
                        fs::write(path, &content)?;
                        info!("Wrote {} bytes to {}", content.len(), path.display());
                    }
                    None => std::io::stdout().write_all(&content)?,
                }
                Ok(None)
            }
            FileCommand::Create { stage_id, input } => {
                let file: JsonObject = input.load()?;
                emit(&files.create(stage_id, &file).await?)
            }
            FileCommand::Update {
                stage_id,
                file_id,
                input,
            } => {
                let file: JsonObject = input.load()?;
                emit(&files.update(stage_id, file_id, &file).await?)
            }
            FileCommand::Delete { stage_id, file_id } => {
                files.delete(stage_id, file_id).await?;
                info!("Deleted file {file_id}");
                Ok(None)
            }
            FileCommand::PresignedUrl {
                stage_id,
                file_id,
                ttl,
            } => emit(&files.presigned_url(stage_id, file_id, *ttl).await?),
        }
    }

    async fn repositories(
        &self,
        client: &Client,
        cmd: &RepositoryCommand,
    ) -> Result<Option<Value>> {
        let repositories = client.repositories();
        match cmd {
            RepositoryCommand::List { page } => emit(&repositories.list((*page).into()).await?),
            RepositoryCommand::Get { repository_id } => {
                emit(&repositories.get(repository_id).await?)
            }
            RepositoryCommand::Create(input) => {
                let input: CreateRepositoryInput = input.load()?;
                emit(&repositories.create(&input).await?)
            }
            RepositoryCommand::Delete { repository_id } => {
                repositories.delete(repository_id).await?;
                info!("Deleted repository {repository_id}");
                Ok(None)
            }
        }
    }

    async fn datasets(&self, client: &Client, cmd: &DatasetCommand) -> Result<Option<Value>> {
        let datasets = client.datasets();
        match cmd {
            DatasetCommand::List {
                repository_id,
                page,
                labels,
                dates,
            } => {
                let query = DatasetListQuery {
                    page: (*page).into(),
                    labels: labels.clone(),
                    created_after: dates.created_after,
                    created_before: dates.created_before,
                };
                emit(&datasets.list(repository_id, &query).await?)
            }
            DatasetCommand::Get {
                repository_id,
                dataset_id,
                version,
            } => emit(
                &datasets
                    .get(repository_id, dataset_id, version.as_deref())
                    .await?,
            ),
            DatasetCommand::Create {
                repository_id,
                input,
            } => {
                let input: CreateDatasetInput = input.load()?;
                emit(&datasets.create(repository_id, &input).await?)
            }
            DatasetCommand::UpdateMetadata {
                repository_id,
                dataset_id,
                input,
            } => {
                let input: CreateDatasetInput = input.load()?;
                emit(
                    &datasets
                        .update_metadata(repository_id, dataset_id, &input)
                        .await?,
                )
            }
            DatasetCommand::Delete {
                repository_id,
                dataset_id,
            } => {
                datasets.delete(repository_id, dataset_id).await?;
                info!("Deleted dataset {dataset_id}");
                Ok(None)
            }
            DatasetCommand::Datapoints {
                repository_id,
                dataset_id,
                version,
                start,
                end,
            } => {
                let range = DatapointRange {
                    version: version.clone(),
                    start: *start,
                    end: *end,
                };
                datasets.datapoints(repository_id, dataset_id, &range).await
            }
            DatasetCommand::UpdateDatapoints {
                repository_id,
                dataset_id,
                input,
            } => {
                let datapoints: Value = input.load()?;
                emit(
                    &datasets
                        .update_datapoints(repository_id, dataset_id, &datapoints)
                        .await?,
                )
            }
        }
    }

    async fn connectors(&self, client: &Client, cmd: &ConnectorCommand) -> Result<Option<Value>> {
        let connectors = client.connectors();
        match cmd {
            ConnectorCommand::List {
                page,
                stage_id,
                name,
                source_provider,
                connector_mode,
                dates,
            } => {
                let query = ConnectorListQuery {
                    page: (*page).into(),
                    stage_id: stage_id.clone(),
                    name: name.clone(),
                    source_provider: source_provider.clone(),
                    connector_mode: connector_mode.map(Into::into),
                    created_after: dates.created_after,
                    created_before: dates.created_before,
                };
                emit(&connectors.list(&query).await?)
            }
            ConnectorCommand::Get { connector_id } => emit(&connectors.get(connector_id).await?),
            ConnectorCommand::Create(input) => {
                let input: CreateConnectorInput = input.load()?;
                emit(&connectors.create(&input).await?)
            }
            ConnectorCommand::Delete { connector_id } => {
                connectors.delete(connector_id).await?;
                info!("Deleted connector {connector_id}");
                Ok(None)
            }
            ConnectorCommand::Files { connector_id, page } => {
                emit(&connectors.files(connector_id, (*page).into()).await?)
            }
            ConnectorCommand::Runs {
                connector_id,
                page,
                status,
            } => {
                let query = RunListQuery {
                    page: (*page).into(),
                    status: status.clone(),
                };
                emit(&connectors.runs(connector_id, &query).await?)
            }
        }
    }

    async fn search_stores(
        &self,
        client: &Client,
        cmd: &SearchStoreCommand,
    ) -> Result<Option<Value>> {
        let stores = client.search_stores();
        match cmd {
            SearchStoreCommand::List { page, name } => {
                let query = SearchStoreListQuery {
                    page: (*page).into(),
                    name: name.clone(),
                };
                emit(&stores.list(&query).await?)
            }
            SearchStoreCommand::Get { search_store_id } => {
                emit(&stores.get(search_store_id).await?)
            }
            SearchStoreCommand::Create(input) => {
                let input: CreateSearchStoreInput = input.load()?;
                emit(&stores.create(&input).await?)
            }
            SearchStoreCommand::CreateVariant { kind, input } => {
                let input: SearchStoreVariantInput = input.load()?;
                emit(&stores.variant((*kind).into()).create(&input).await?)
            }
            SearchStoreCommand::Update {
                search_store_id,
                input,
            } => {
                let input: UpdateSearchStoreInput = input.load()?;
                emit(&stores.update(search_store_id, &input).await?)
            }
            SearchStoreCommand::Delete { search_store_id } => {
                stores.delete(search_store_id).await?;
                info!("Deleted search store {search_store_id}");
                Ok(None)
            }
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
