use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer-synthesis subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Completion model identifier.
    pub model: String,
    /// Sampling temperature. Grounded answering wants 0.
    pub temperature: f32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_COMPLETION_MODEL.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
