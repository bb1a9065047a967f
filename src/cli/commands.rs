//! CLI commands and argument parsing

use crate::strategy::EmbeddingKind;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Pharia Data API
#[derive(Parser, Debug)]
#[command(name = "pharia-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (falls back to $PHARIA_DATA_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (falls back to $PHARIA_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// API namespace to prefix paths with
    #[arg(long, global = true, default_value = "none")]
    pub namespace: Namespace,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stages
    #[command(subcommand)]
    Stages(StageCommand),

    /// Manage the files of a stage
    #[command(subcommand)]
    Files(FileCommand),

    /// Manage repositories
    #[command(subcommand)]
    Repositories(RepositoryCommand),

    /// Manage the datasets of a repository
    #[command(subcommand)]
    Datasets(DatasetCommand),

    /// Manage connectors
    #[command(subcommand)]
    Connectors(ConnectorCommand),

    /// Manage search stores
    #[command(subcommand)]
    SearchStores(SearchStoreCommand),
}

// ============================================================================
// Shared arguments
// ============================================================================

/// Pagination flags
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page index
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Page size
    #[arg(long, default_value = "100")]
    pub size: u32,
}

/// Creation-date filters
#[derive(Args, Debug, Clone)]
pub struct DateArgs {
    /// Only items created after this time (RFC 3339)
    #[arg(long)]
    pub created_after: Option<DateTime<Utc>>,

    /// Only items created before this time (RFC 3339)
    #[arg(long)]
    pub created_before: Option<DateTime<Utc>>,
}

/// Input record file
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file (YAML or JSON)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
}

// ============================================================================
// Resources
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum StageCommand {
    /// List stages
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        access_policy: Option<String>,
        /// Only stages with a search store
        #[arg(long)]
        with_search_store: bool,
    },
    /// Show a stage
    Get { stage_id: String },
    /// Create a stage
    Create(InputArgs),
    /// Create a stage with an attached search store
    CreateSearch {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Update a stage
    Update {
        stage_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Delete a stage
    Delete { stage_id: String },
}

#[derive(Subcommand, Debug)]
pub enum FileCommand {
    /// List the files of a stage
    List {
        stage_id: String,
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        dates: DateArgs,
    },
    /// Download a file
    Get {
        stage_id: String,
        file_id: String,
        /// Write the content here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Register a file
    Create {
        stage_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Update a file
    Update {
        stage_id: String,
        file_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Delete a file
    Delete { stage_id: String, file_id: String },
    /// Print a presigned download URL
    PresignedUrl {
        stage_id: String,
        file_id: String,
        /// Lifetime in seconds
        #[arg(long)]
        ttl: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RepositoryCommand {
    /// List repositories
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a repository
    Get { repository_id: String },
    /// Create a repository
    Create(InputArgs),
    /// Delete a repository
    Delete { repository_id: String },
}

#[derive(Subcommand, Debug)]
pub enum DatasetCommand {
    /// List the datasets of a repository
    List {
        repository_id: String,
        #[command(flatten)]
        page: PageArgs,
        /// Label filter, repeatable
        #[arg(long = "label")]
        labels: Vec<String>,
        #[command(flatten)]
        dates: DateArgs,
    },
    /// Show a dataset
    Get {
        repository_id: String,
        dataset_id: String,
        #[arg(long)]
        version: Option<String>,
    },
    /// Create a dataset
    Create {
        repository_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Update dataset metadata
    UpdateMetadata {
        repository_id: String,
        dataset_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Delete a dataset
    Delete {
        repository_id: String,
        dataset_id: String,
    },
    /// Read datapoints
    Datapoints {
        repository_id: String,
        dataset_id: String,
        #[arg(long)]
        version: Option<String>,
        #[arg(long, default_value = "0")]
        start: u64,
        #[arg(long, default_value = "0")]
        end: u64,
    },
    /// Replace datapoints
    UpdateDatapoints {
        repository_id: String,
        dataset_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConnectorCommand {
    /// List connectors
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        stage_id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        source_provider: Option<String>,
        #[arg(long, value_enum)]
        connector_mode: Option<ModeArg>,
        #[command(flatten)]
        dates: DateArgs,
    },
    /// Show a connector
    Get { connector_id: String },
    /// Create a connector
    Create(InputArgs),
    /// Delete a connector
    Delete { connector_id: String },
    /// List the files seen by a connector
    Files {
        connector_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List the runs of a connector
    Runs {
        connector_id: String,
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchStoreCommand {
    /// List search stores
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
    },
    /// Show a search store
    Get { search_store_id: String },
    /// Create a search store from full strategies
    Create(InputArgs),
    /// Create a search store from flat embedding parameters
    CreateVariant {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Update a search store
    Update {
        search_store_id: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Delete a search store
    Delete { search_store_id: String },
}

// ============================================================================
// Value enums
// ============================================================================

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON
    Pretty,
}

/// Path prefix applied to every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Namespace {
    /// Paths relative to the base URL
    None,
    /// `/api/v1`
    V1,
    /// `/api/beta`
    Beta,
}

/// Embedding kind of a search store
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Instruct,
    Semantic,
    Vllm,
}

impl From<KindArg> for EmbeddingKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Instruct => EmbeddingKind::Instruct,
            KindArg::Semantic => EmbeddingKind::Semantic,
            KindArg::Vllm => EmbeddingKind::Vllm,
        }
    }
}

/// Connector mode filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Sync,
    Async,
}
