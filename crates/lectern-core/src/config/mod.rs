//! Workspace configuration, loadable from TOML.

mod embedding_config;
mod resolver_config;
mod retrieval_config;
mod synthesis_config;
mod vocabulary_config;

pub mod defaults;

pub use embedding_config::EmbeddingConfig;
pub use resolver_config::ResolverConfig;
pub use retrieval_config::RetrievalConfig;
pub use synthesis_config::SynthesisConfig;
pub use vocabulary_config::VocabularyConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LecternError, LecternResult};

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    pub embedding: EmbeddingConfig,
    pub vocabulary: VocabularyConfig,
    pub retrieval: RetrievalConfig,
    pub synthesis: SynthesisConfig,
    pub resolver: ResolverConfig,
}

impl LecternConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> LecternResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LecternError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| LecternError::Config {
            reason: format!("cannot parse {}: {e}", path.display()),
        })
    }
}
