//! QueryResolver: drives the full resolution cascade.
//!
//! Encode once → search under the relaxing weighting schedule → synthesize
//! per passage in rank order → first grounded answer wins. Exhausting the
//! schedule is a successful outcome carrying the fixed not-found message.

use std::time::Instant;

use lectern_core::config::defaults;
use lectern_core::errors::{LecternError, LecternResult};
use lectern_core::models::{AlphaSchedule, PromptTemplate, Resolution, ResolutionKind};
use lectern_embeddings::{hybrid_scale, VectorEncoder};
use lectern_synthesis::AnswerSynthesizer;
use tracing::{debug, error, info, info_span};

use crate::client::RetrievalClient;

/// Orchestrates one query resolution end to end.
///
/// Stateless between queries; collaborators are shared read-only handles,
/// so independent resolutions may run concurrently on separate workers.
/// Within one resolution the steps are strictly sequential.
pub struct QueryResolver {
    encoder: VectorEncoder,
    client: RetrievalClient,
    synthesizer: AnswerSynthesizer,
    schedule: AlphaSchedule,
    top_k: usize,
    deadline_ms: u64,
}

impl QueryResolver {
    pub fn new(
        encoder: VectorEncoder,
        client: RetrievalClient,
        synthesizer: AnswerSynthesizer,
    ) -> Self {
        Self {
            encoder,
            client,
            synthesizer,
            schedule: AlphaSchedule::default(),
            top_k: defaults::DEFAULT_TOP_K,
            deadline_ms: defaults::DEFAULT_DEADLINE_MS,
        }
    }

    /// Replace the default weighting schedule.
    pub fn with_schedule(mut self, schedule: AlphaSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Passages requested per attempt.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Wall-clock budget across all attempts, in milliseconds. 0 disables.
    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    /// Resolve one query to a final answer.
    ///
    /// Returns a grounded answer from the first passage that yields one, or
    /// the fixed no-relevant-passage message once the schedule is
    /// exhausted. Transport failures at any step abort the resolution; they
    /// are never folded into a "not found" outcome, and a failed search
    /// never falls through to the next weighting attempt.
    pub fn resolve(&self, query: &str) -> LecternResult<Resolution> {
        let span = info_span!("lectern.resolve", query = %query);
        let _guard = span.enter();
        let started = Instant::now();

        // Encoding is weight-independent: once per resolution, reused by
        // every attempt.
        let encoded = self.encoder.encode(query)?;

        for alpha in self.schedule.iter() {
            self.check_deadline(started)?;

            let hybrid = hybrid_scale(&encoded.dense, &encoded.sparse, alpha)?;
            let passages = self.client.search(&hybrid, self.top_k)?;

            if passages.is_empty() {
                debug!(alpha, "no passages at this weighting");
                continue;
            }

            for passage in &passages {
                self.check_deadline(started)?;

                let candidate = self.synthesizer.answer_from_passage(passage, query)?;

                if candidate.grounded {
                    info!(alpha, rank = passage.rank, "grounded answer found");
                    return Ok(Resolution {
                        text: candidate.text,
                        kind: ResolutionKind::Grounded {
                            alpha,
                            rank: passage.rank,
                        },
                    });
                }

                // Classification is total: an ungrounded candidate carries
                // either no text or the blank-passage message. Anything
                // else is a logic fault, not a user-facing outcome.
                let blank_passage_text = PromptTemplate::NoPassageAvailable { query }.render();
                if !candidate.text.is_empty() && candidate.text != blank_passage_text {
                    error!(
                        alpha,
                        rank = passage.rank,
                        "ungrounded candidate carried unexpected text"
                    );
                    debug_assert!(false, "ungrounded candidate carried unexpected text");
                }

                debug!(alpha, rank = passage.rank, "passage ungrounded");
            }

            debug!(alpha, "all passages ungrounded at this weighting");
        }

        info!("schedule exhausted with no grounded answer");
        Ok(Resolution {
            text: PromptTemplate::NoRelevantAnswer { query }.render(),
            kind: ResolutionKind::Exhausted,
        })
    }

    fn check_deadline(&self, started: Instant) -> LecternResult<()> {
        if self.deadline_ms == 0 {
            return Ok(());
        }
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if elapsed_ms > self.deadline_ms {
            return Err(LecternError::DeadlineExceeded {
                elapsed_ms,
                budget_ms: self.deadline_ms,
            });
        }
        Ok(())
    }
}
