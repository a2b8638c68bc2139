use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector-index subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Passages requested per search.
    pub top_k: usize,
    /// Index namespace holding the corpus chunks.
    pub namespace: String,
    /// Source label used in citation lines, e.g. the textbook name.
    pub source_label: String,
    /// Endpoint of the index service.
    pub index_host: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            namespace: defaults::DEFAULT_NAMESPACE.to_string(),
            source_label: defaults::DEFAULT_SOURCE_LABEL.to_string(),
            index_host: String::new(),
        }
    }
}
