/// Completion-service transport errors.
///
/// Distinct from an ungrounded answer: a failed completion call must not be
/// read as "this passage has no answer".
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("completion service unavailable: {reason}")]
    CompletionUnavailable { reason: String },
}
