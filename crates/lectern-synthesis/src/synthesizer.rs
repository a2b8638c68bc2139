use std::sync::Arc;

use lectern_core::errors::LecternResult;
use lectern_core::models::{CandidateAnswer, PromptTemplate, RetrievedPassage};
use lectern_core::traits::ICompletionProvider;
use tracing::debug;

/// Characters stripped alongside whitespace when testing for the
/// empty-answer sentinel. The model is instructed to return a literal
/// empty string; quoted emptiness counts too.
const SENTINEL_QUOTES: &[char] = &['\'', '"', '`'];

/// Asks the completion model to answer strictly from one passage.
pub struct AnswerSynthesizer {
    completion: Arc<dyn ICompletionProvider>,
    temperature: f32,
}

impl AnswerSynthesizer {
    pub fn new(completion: Arc<dyn ICompletionProvider>, temperature: f32) -> Self {
        Self {
            completion,
            temperature,
        }
    }

    /// Put one passage to the model and classify the outcome.
    ///
    /// A transport failure is an error, never an ungrounded verdict: the
    /// cascade must not advance past a transient failure and report a
    /// false negative.
    pub fn answer_from_passage(
        &self,
        passage: &RetrievedPassage,
        query: &str,
    ) -> LecternResult<CandidateAnswer> {
        if passage.text.trim().is_empty() {
            // Nothing to ground on; skip the completion call entirely.
            return Ok(CandidateAnswer {
                text: PromptTemplate::NoPassageAvailable { query }.render(),
                grounded: false,
                page_reference: None,
            });
        }

        let prompt = PromptTemplate::AnswerFromPassage {
            passage: &passage.text,
            query,
        }
        .render();
        let raw = self.completion.complete(&prompt, self.temperature)?;

        if is_empty_equivalent(&raw) {
            debug!(rank = passage.rank, "passage produced no answer");
            return Ok(CandidateAnswer {
                text: String::new(),
                grounded: false,
                page_reference: None,
            });
        }

        debug!(
            rank = passage.rank,
            chars = raw.len(),
            "grounded answer produced"
        );
        Ok(CandidateAnswer {
            text: format!("{}\n\n{}", raw.trim_end(), passage.page_reference),
            grounded: true,
            page_reference: Some(passage.page_reference.clone()),
        })
    }
}

/// Whether raw model output means "no answer found".
///
/// Trims whitespace and surrounding quote characters; anything that leaves
/// no content counts as the empty sentinel. Strictly wider than matching a
/// literal quote-string set, so a lone space or backtick-quoted emptiness
/// cannot slip through as a grounded answer.
fn is_empty_equivalent(raw: &str) -> bool {
    raw.trim().trim_matches(SENTINEL_QUOTES).trim().is_empty()
}
