use serde::{Deserialize, Serialize};

use crate::constants::{ALPHA_BALANCED, ALPHA_DENSE_ONLY, ALPHA_SPARSE_ONLY};

use super::defaults;

/// Cascade engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mixing weights tried in order. Each must lie in [0, 1].
    pub alpha_schedule: Vec<f32>,
    /// Wall-clock budget per resolution in milliseconds. 0 disables.
    pub deadline_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            alpha_schedule: vec![ALPHA_DENSE_ONLY, ALPHA_BALANCED, ALPHA_SPARSE_ONLY],
            deadline_ms: defaults::DEFAULT_DEADLINE_MS,
        }
    }
}
