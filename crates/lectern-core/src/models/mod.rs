//! Data model: vector representations, passages, answers, and templates.

mod answer;
mod passage;
mod prompt;
mod schedule;
mod vectors;

pub use answer::{CandidateAnswer, Resolution, ResolutionKind};
pub use passage::RetrievedPassage;
pub use prompt::PromptTemplate;
pub use schedule::AlphaSchedule;
pub use vectors::{HybridQuery, SparseVector, VectorRepresentation};
