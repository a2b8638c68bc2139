//! Query encoding: one dense embedding plus one sparse projection per query.

use std::sync::Arc;

use lectern_core::errors::LecternResult;
use lectern_core::models::VectorRepresentation;
use lectern_core::traits::{IDenseEmbedder, ISparseVectorizer};
use moka::sync::Cache;
use tracing::debug;

/// Encodes queries into the hybrid (dense + sparse) representation.
///
/// Encoding does not depend on the mixing weight, so one encoding per query
/// is produced and reused across every retrieval attempt. Encodings are
/// deterministic, which also makes repeat queries cacheable across
/// resolutions.
pub struct VectorEncoder {
    embedder: Arc<dyn IDenseEmbedder>,
    vectorizer: Arc<dyn ISparseVectorizer>,
    cache: Cache<String, VectorRepresentation>,
}

impl VectorEncoder {
    pub fn new(
        embedder: Arc<dyn IDenseEmbedder>,
        vectorizer: Arc<dyn ISparseVectorizer>,
        cache_size: u64,
    ) -> Self {
        Self {
            embedder,
            vectorizer,
            cache: Cache::new(cache_size),
        }
    }

    /// Encode a query.
    ///
    /// The embedding endpoint expects single-line input, so newlines are
    /// folded to spaces first. A remote embedding failure is fatal for the
    /// whole resolution; the outer cascade reuses the same encoding rather
    /// than re-encoding per attempt.
    pub fn encode(&self, query: &str) -> LecternResult<VectorRepresentation> {
        let normalized = query.replace('\n', " ");
        let key = blake3::hash(normalized.as_bytes()).to_hex().to_string();

        if let Some(cached) = self.cache.get(&key) {
            debug!(hash = %key, "encoding cache hit");
            return Ok(cached);
        }

        let dense = self.embedder.embed(&normalized)?;
        let sparse = self.vectorizer.transform(&normalized)?;
        debug!(
            dims = dense.len(),
            sparse_terms = sparse.len(),
            "query encoded"
        );

        let repr = VectorRepresentation { dense, sparse };
        self.cache.insert(key, repr.clone());
        Ok(repr)
    }
}
