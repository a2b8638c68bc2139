//! Fitted TF-IDF vocabulary, loaded once from its persisted JSON artifact.
//!
//! The artifact is exported by the offline fitting pipeline: a map from
//! term to its column index and learned inverse-document-frequency weight.
//! Immutable after load; safe to share across concurrent resolutions.

use std::collections::HashMap;
use std::path::Path;

use lectern_core::errors::{EncodingError, LecternResult};
use lectern_core::models::SparseVector;
use lectern_core::traits::ISparseVectorizer;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One fitted vocabulary term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermEntry {
    /// Column index of the term in the fitted matrix.
    pub index: u32,
    /// Inverse-document-frequency weight learned at fit time.
    pub idf: f32,
}

/// Persisted form of the fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyArtifact {
    pub terms: HashMap<String, TermEntry>,
}

/// Pre-fitted TF-IDF vocabulary.
#[derive(Debug)]
pub struct TfIdfVocabulary {
    terms: HashMap<String, TermEntry>,
}

impl TfIdfVocabulary {
    /// Load the fitted artifact from disk.
    pub fn load(path: &Path) -> LecternResult<Self> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| EncodingError::VocabularyLoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let artifact: VocabularyArtifact =
            serde_json::from_str(&raw).map_err(|e| EncodingError::VocabularyLoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        info!(terms = artifact.terms.len(), path = %path.display(), "vocabulary loaded");
        Ok(Self::from_artifact(artifact))
    }

    /// Build a vocabulary from an in-memory artifact.
    pub fn from_artifact(artifact: VocabularyArtifact) -> Self {
        Self {
            terms: artifact.terms,
        }
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }
}

impl ISparseVectorizer for TfIdfVocabulary {
    fn transform(&self, text: &str) -> LecternResult<SparseVector> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return Ok(SparseVector::empty());
        }

        // Term counts over known terms only; unknown terms contribute nothing.
        let mut counts: HashMap<u32, (f32, f32)> = HashMap::new();
        for tok in &tokens {
            if let Some(entry) = self.terms.get(tok) {
                let slot = counts.entry(entry.index).or_insert((0.0, entry.idf));
                slot.0 += 1.0;
            }
        }
        if counts.is_empty() {
            return Ok(SparseVector::empty());
        }

        let mut weighted: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(index, (count, idf))| (index, count * idf))
            .collect();
        // Stable index order keeps the output deterministic.
        weighted.sort_by_key(|(index, _)| *index);

        // L2 normalize, matching the convention the artifact was fitted with.
        let norm: f32 = weighted.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        let (indices, values) = weighted
            .into_iter()
            .map(|(index, w)| (index, if norm > f32::EPSILON { w / norm } else { w }))
            .unzip();

        Ok(SparseVector::new(indices, values))
    }

    fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }
}
