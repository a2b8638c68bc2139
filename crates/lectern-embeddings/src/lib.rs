//! # lectern-embeddings
//!
//! Query encoding for hybrid retrieval: one dense embedding plus one
//! sparse vocabulary projection per query, and the convex-combination
//! scaling that weights them per retrieval attempt.

pub mod encoder;
pub mod scaler;
pub mod vocabulary;

pub use encoder::VectorEncoder;
pub use scaler::hybrid_scale;
pub use vocabulary::{TfIdfVocabulary, VocabularyArtifact};
