#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::unused_async)]

//! # Pharia Data client
//!
//! A typed async client for the Pharia Data API: stages, files,
//! repositories, datasets, connectors and search stores.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pharia_data::{Client, EmbeddingParams, Result, SearchStageInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // PHARIA_DATA_API_BASE_URL and PHARIA_API_KEY
//!     let client = Client::from_env()?;
//!
//!     let input = SearchStageInput::new(
//!         "documents",
//!         EmbeddingParams::new("pharia-1-embedding")
//!             .instruction("Represent the document", "Represent the query")
//!             .hybrid_index("bm25")
//!             .chunking(512, 128),
//!     );
//!     let stage = client.v1().stages().instruct().create(&input).await?;
//!     println!("{}", stage.stage_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Client ── v1() / beta() ── stages() files() search_stores() … │
//! └───────────────────────────────┬───────────────────────────────┘
//!                                 │
//! ┌──────────────┬────────────────┴──┬─────────────┬──────────────┐
//! │  normalize   │     strategy      │   trigger   │    models    │
//! ├──────────────┼───────────────────┼─────────────┼──────────────┤
//! │ input → wire │ instruct/semantic │ search-store│ inputs       │
//! │ omit absent  │ /vllm, chunking   │ trigger     │ requests     │
//! │              │                   │ first       │ responses    │
//! └──────────────┴───────────────────┴─────────────┴──────────────┘
//!                                 │
//!                    http::Transport (reqwest)
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and environment loading
pub mod config;

/// HTTP transport
pub mod http;

/// Embedding and chunking strategy builders
pub mod strategy;

/// Stage triggers
pub mod trigger;

/// Typed API records
pub mod models;

/// Input to wire payload normalization
pub mod normalize;

/// Resource facades
pub mod resources;

/// Root client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Beta, Client, V1};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, RequestConfig, Transport};
pub use models::*;
pub use strategy::{ChunkingStrategy, EmbeddingKind, EmbeddingParams, EmbeddingStrategy};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
