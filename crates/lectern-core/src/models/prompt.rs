//! Prompt and message templates with structured interpolation fields.

/// The closed set of prompts and fixed messages the engine produces.
///
/// Each variant carries exactly the fields its text interpolates, so a
/// template can never be rendered with a missing field.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptTemplate<'a> {
    /// Strict grounding prompt: answer only from the supplied passage,
    /// explain the reasoning when an answer is found, flag partial evidence
    /// as inconclusive, and return an empty string when no answer exists.
    AnswerFromPassage { passage: &'a str, query: &'a str },
    /// Message used when a retrieved passage carries no text at all.
    NoPassageAvailable { query: &'a str },
    /// Fixed message returned once every retrieval attempt is exhausted.
    NoRelevantAnswer { query: &'a str },
}

impl PromptTemplate<'_> {
    /// Render the template to its final string form.
    pub fn render(&self) -> String {
        match self {
            PromptTemplate::AnswerFromPassage { passage, query } => format!(
                "You are a helpful assistant. Below is information retrieved from relevant \
                 sources. Use this information to answer the following question as accurately \
                 as possible.\n\n\
                 Retrieved Document:\n{passage}\n\n\
                 Question: {query}\n\n\
                 Answer the question using only the information from the document. Explain \
                 your line of thought on why that answer is correct if and only if you find \
                 the answer.\n\n\
                 If the information is insufficient but contains some clues about completely \
                 answering the question, explain your reasoning but end with the following \
                 statement:\nThe result is inconclusive.\n\n\
                 If the answer is not present at all, return an empty string. i.e. ''."
            ),
            PromptTemplate::NoPassageAvailable { query } => format!(
                "The source material is insufficient to answer your question: {query}."
            ),
            PromptTemplate::NoRelevantAnswer { query } => format!(
                "I could not find any relevant answers to your query from the source \
                 material.\nYour query:\n{query}"
            ),
        }
    }
}
