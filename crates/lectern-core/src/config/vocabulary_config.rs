use serde::{Deserialize, Serialize};

use super::defaults;

/// Location of the fitted sparse-term vocabulary artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Path to the persisted vocabulary JSON.
    pub path: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_VOCABULARY_PATH.to_string(),
        }
    }
}
