//! # lectern-core
//!
//! Foundation crate for the lectern question-answering engine.
//! Defines types, traits, errors, config, and prompt templates.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LecternConfig;
pub use errors::{LecternError, LecternResult};
pub use models::{
    AlphaSchedule, CandidateAnswer, HybridQuery, PromptTemplate, Resolution, ResolutionKind,
    RetrievedPassage, SparseVector, VectorRepresentation,
};
