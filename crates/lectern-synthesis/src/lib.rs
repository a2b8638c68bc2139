//! # lectern-synthesis
//!
//! Puts one retrieved passage to the completion model under a strict
//! answer-only-from-this-text contract and classifies the outcome as
//! grounded or ungrounded.

mod synthesizer;

pub use synthesizer::AnswerSynthesizer;
