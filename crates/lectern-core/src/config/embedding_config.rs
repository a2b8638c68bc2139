use serde::{Deserialize, Serialize};

use super::defaults;

/// Dense-embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding model identifier.
    pub model: String,
    /// Expected dimensionality of returned vectors.
    pub dimensions: usize,
    /// Maximum query encodings kept in the in-process cache.
    pub encoding_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            encoding_cache_size: defaults::DEFAULT_ENCODING_CACHE_SIZE,
        }
    }
}
