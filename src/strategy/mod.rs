//! Embedding and chunking strategies
//!
//! The API accepts an embedding strategy as a `{type, config}` pair whose
//! config shape depends on the type. [`EmbeddingStrategy`] models that as a
//! sum type, so a tag can never be paired with another variant's config.
//!
//! Callers usually don't assemble strategies by hand: the convenience
//! creates take a flat [`EmbeddingParams`] record and an [`EmbeddingKind`],
//! and [`EmbeddingKind::build`] produces the matching variant.

use crate::error::{require, Result};
use crate::types::Representation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default chunk size used by the search store convenience creates
pub const DEFAULT_MAX_CHUNK_SIZE_TOKENS: u32 = 512;

/// Default chunk overlap used by the search store convenience creates
pub const DEFAULT_CHUNK_OVERLAP_TOKENS: u32 = 128;

// ============================================================================
// Chunking
// ============================================================================

/// How documents are split into overlapping token windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingStrategy {
    /// Maximum chunk size in tokens
    pub max_chunk_size_tokens: u32,
    /// Tokens shared by consecutive chunks
    pub chunk_overlap_tokens: u32,
}

impl ChunkingStrategy {
    /// Create a chunking strategy
    pub fn new(max_chunk_size_tokens: u32, chunk_overlap_tokens: u32) -> Self {
        Self {
            max_chunk_size_tokens,
            chunk_overlap_tokens,
        }
    }

    /// Whether the overlap is smaller than the chunk.
    ///
    /// Not enforced: the server decides what it accepts.
    pub fn is_sane(&self) -> bool {
        self.max_chunk_size_tokens > 0 && self.chunk_overlap_tokens < self.max_chunk_size_tokens
    }
}

impl Default for ChunkingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_SIZE_TOKENS, DEFAULT_CHUNK_OVERLAP_TOKENS)
    }
}

// ============================================================================
// Embedding
// ============================================================================

/// Document/query instructions of an instruct embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub document: String,
    pub query: String,
}

/// Config of an `instruct` embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructConfig {
    pub model: String,
    pub instruction: Instruction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_index: Option<String>,
}

/// Config of a `semantic` embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticConfig {
    pub model: String,
    pub representation: Representation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_index: Option<String>,
}

/// Config of a `vllm` embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VllmConfig {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_index: Option<String>,
}

/// Embedding strategy, serialized as `{"type": ..., "config": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum EmbeddingStrategy {
    /// Instruction-tuned embedding model
    Instruct(InstructConfig),
    /// Semantic embedding model
    Semantic(SemanticConfig),
    /// Embedding model served by vLLM
    Vllm(VllmConfig),
}

impl EmbeddingStrategy {
    /// Which variant this is
    pub fn kind(&self) -> EmbeddingKind {
        match self {
            EmbeddingStrategy::Instruct(_) => EmbeddingKind::Instruct,
            EmbeddingStrategy::Semantic(_) => EmbeddingKind::Semantic,
            EmbeddingStrategy::Vllm(_) => EmbeddingKind::Vllm,
        }
    }

    /// Embedding model name
    pub fn model(&self) -> &str {
        match self {
            EmbeddingStrategy::Instruct(c) => &c.model,
            EmbeddingStrategy::Semantic(c) => &c.model,
            EmbeddingStrategy::Vllm(c) => &c.model,
        }
    }

    /// Hybrid index, if any
    pub fn hybrid_index(&self) -> Option<&str> {
        match self {
            EmbeddingStrategy::Instruct(c) => c.hybrid_index.as_deref(),
            EmbeddingStrategy::Semantic(c) => c.hybrid_index.as_deref(),
            EmbeddingStrategy::Vllm(c) => c.hybrid_index.as_deref(),
        }
    }
}

/// The three embedding variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingKind {
    Instruct,
    Semantic,
    Vllm,
}

impl EmbeddingKind {
    /// Wire tag of the variant
    pub fn as_str(self) -> &'static str {
        match self {
            EmbeddingKind::Instruct => "instruct",
            EmbeddingKind::Semantic => "semantic",
            EmbeddingKind::Vllm => "vllm",
        }
    }

    /// Build this variant's strategy from flat parameters
    pub fn build(self, params: &EmbeddingParams) -> Result<EmbeddingStrategy> {
        match self {
            EmbeddingKind::Instruct => build_instruct(params),
            EmbeddingKind::Semantic => build_semantic(params),
            EmbeddingKind::Vllm => build_vllm(params),
        }
    }
}

impl fmt::Display for EmbeddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Flat parameters
// ============================================================================

/// Flat, convenience-style parameters for the embedding builders.
///
/// Each variant reads only the fields it needs; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmbeddingParams {
    pub embedding_model: Option<String>,
    pub instruction_document: Option<String>,
    pub instruction_query: Option<String>,
    pub representation: Option<Representation>,
    pub hybrid_index: Option<String>,
    pub max_chunk_size_tokens: Option<u32>,
    pub chunk_overlap_tokens: Option<u32>,
}

impl EmbeddingParams {
    /// Parameters for the given embedding model
    pub fn new(embedding_model: impl Into<String>) -> Self {
        Self {
            embedding_model: Some(embedding_model.into()),
            ..Self::default()
        }
    }

    /// Set the document/query instructions (instruct)
    #[must_use]
    pub fn instruction(mut self, document: impl Into<String>, query: impl Into<String>) -> Self {
        self.instruction_document = Some(document.into());
        self.instruction_query = Some(query.into());
        self
    }

    /// Set the representation (semantic)
    #[must_use]
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = Some(representation);
        self
    }

    /// Set the hybrid index, e.g. `bm25`
    #[must_use]
    pub fn hybrid_index(mut self, index: impl Into<String>) -> Self {
        self.hybrid_index = Some(index.into());
        self
    }

    /// Set the chunking parameters
    #[must_use]
    pub fn chunking(mut self, max_chunk_size_tokens: u32, chunk_overlap_tokens: u32) -> Self {
        self.max_chunk_size_tokens = Some(max_chunk_size_tokens);
        self.chunk_overlap_tokens = Some(chunk_overlap_tokens);
        self
    }
}

/// Build an `instruct` strategy
pub fn build_instruct(params: &EmbeddingParams) -> Result<EmbeddingStrategy> {
    Ok(EmbeddingStrategy::Instruct(InstructConfig {
        model: require(&params.embedding_model, "embedding_model")?,
        instruction: Instruction {
            document: require(&params.instruction_document, "instruction_document")?,
            query: require(&params.instruction_query, "instruction_query")?,
        },
        hybrid_index: params.hybrid_index.clone(),
    }))
}

/// Build a `semantic` strategy
pub fn build_semantic(params: &EmbeddingParams) -> Result<EmbeddingStrategy> {
    Ok(EmbeddingStrategy::Semantic(SemanticConfig {
        model: require(&params.embedding_model, "embedding_model")?,
        representation: require(&params.representation, "representation")?,
        hybrid_index: params.hybrid_index.clone(),
    }))
}

/// Build a `vllm` strategy
pub fn build_vllm(params: &EmbeddingParams) -> Result<EmbeddingStrategy> {
    Ok(EmbeddingStrategy::Vllm(VllmConfig {
        model: require(&params.embedding_model, "embedding_model")?,
        hybrid_index: params.hybrid_index.clone(),
    }))
}

/// Build the chunking strategy; both token counts are required
pub fn build_chunking(params: &EmbeddingParams) -> Result<ChunkingStrategy> {
    Ok(ChunkingStrategy::new(
        require(&params.max_chunk_size_tokens, "max_chunk_size_tokens")?,
        require(&params.chunk_overlap_tokens, "chunk_overlap_tokens")?,
    ))
}

/// Build the chunking strategy, defaulting absent token counts to 512/128
pub fn build_chunking_or_default(params: &EmbeddingParams) -> ChunkingStrategy {
    ChunkingStrategy::new(
        params
            .max_chunk_size_tokens
            .unwrap_or(DEFAULT_MAX_CHUNK_SIZE_TOKENS),
        params
            .chunk_overlap_tokens
            .unwrap_or(DEFAULT_CHUNK_OVERLAP_TOKENS),
    )
}
