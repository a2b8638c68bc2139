use crate::errors::LecternResult;

/// Remote chat-completion service.
pub trait ICompletionProvider: Send + Sync {
    /// Send one prompt and return the model's text output.
    fn complete(&self, prompt: &str, temperature: f32) -> LecternResult<String>;

    /// Identifier of the underlying completion model.
    fn model(&self) -> &str;
}
