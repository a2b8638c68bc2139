//! Similarity-search client over the vector index.

use std::sync::Arc;

use lectern_core::errors::LecternResult;
use lectern_core::models::{HybridQuery, RetrievedPassage};
use lectern_core::traits::{IVectorIndex, IndexMatch};
use tracing::{debug, warn};

/// Metadata field holding the chunk text.
const FIELD_TEXT: &str = "chapter_text";
/// Metadata field holding the page number.
const FIELD_PAGE: &str = "page_number";

/// Issues hybrid similarity searches and shapes the raw matches into
/// passages.
pub struct RetrievalClient {
    index: Arc<dyn IVectorIndex>,
    namespace: String,
    source_label: String,
}

impl RetrievalClient {
    pub fn new(
        index: Arc<dyn IVectorIndex>,
        namespace: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            index,
            namespace: namespace.into(),
            source_label: source_label.into(),
        }
    }

    /// Run one search.
    ///
    /// Results keep the backend's descending-score order; callers must not
    /// re-sort. A match without usable metadata is dropped, not fatal, so
    /// partial result sets are valid. An empty result set is a valid
    /// non-error outcome meaning "no matches at this weighting".
    pub fn search(
        &self,
        query: &HybridQuery,
        top_k: usize,
    ) -> LecternResult<Vec<RetrievedPassage>> {
        // An empty sparse component is omitted from the request entirely;
        // the backend rejects empty index/value lists.
        let sparse = (!query.sparse.is_empty()).then_some(&query.sparse);

        let matches = self
            .index
            .query(&query.dense, sparse, top_k, &self.namespace)?;
        debug!(
            alpha = query.alpha,
            matches = matches.len(),
            "index query returned"
        );

        let mut passages = Vec::with_capacity(matches.len());
        for (rank, m) in matches.into_iter().enumerate() {
            match self.passage_from_match(&m, rank) {
                Some(p) => passages.push(p),
                None => warn!(id = %m.id, rank, "match missing text or page metadata, dropped"),
            }
        }
        Ok(passages)
    }

    fn passage_from_match(&self, m: &IndexMatch, rank: usize) -> Option<RetrievedPassage> {
        let metadata = m.metadata.as_ref()?;
        let text = metadata.get(FIELD_TEXT)?.as_str()?.to_string();
        let page = metadata.get(FIELD_PAGE)?.as_f64()?;
        Some(RetrievedPassage {
            text,
            page_reference: format!("Reference: {}, page {}", self.source_label, page as i64),
            rank,
            score: m.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::models::SparseVector;
    use serde_json::json;

    use super::*;

    /// Index stub that returns a canned match list.
    struct CannedIndex {
        matches: Vec<IndexMatch>,
    }

    impl IVectorIndex for CannedIndex {
        fn query(
            &self,
            _dense: &[f32],
            _sparse: Option<&SparseVector>,
            _top_k: usize,
            _namespace: &str,
        ) -> LecternResult<Vec<IndexMatch>> {
            Ok(self.matches.clone())
        }
    }

    fn hybrid() -> HybridQuery {
        HybridQuery {
            alpha: 1.0,
            dense: vec![1.0, 0.0],
            sparse: SparseVector::empty(),
        }
    }

    fn good_match(id: &str, score: f32, text: &str, page: u32) -> IndexMatch {
        IndexMatch {
            id: id.to_string(),
            score,
            metadata: Some(json!({ "chapter_text": text, "page_number": page })),
        }
    }

    #[test]
    fn formats_page_reference_from_metadata() {
        let client = RetrievalClient::new(
            Arc::new(CannedIndex {
                matches: vec![good_match("a", 0.9, "Chunk one.", 42)],
            }),
            "textbook",
            "Babok",
        );
        let passages = client.search(&hybrid(), 3).unwrap();
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "Chunk one.");
        assert_eq!(passages[0].page_reference, "Reference: Babok, page 42");
        assert_eq!(passages[0].rank, 0);
    }

    #[test]
    fn keeps_backend_order_and_assigns_ranks() {
        let client = RetrievalClient::new(
            Arc::new(CannedIndex {
                matches: vec![
                    good_match("a", 0.9, "First.", 1),
                    good_match("b", 0.7, "Second.", 2),
                    good_match("c", 0.5, "Third.", 3),
                ],
            }),
            "textbook",
            "Textbook",
        );
        let passages = client.search(&hybrid(), 3).unwrap();
        let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["First.", "Second.", "Third."]);
        let ranks: Vec<usize> = passages.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn drops_matches_with_missing_metadata() {
        let client = RetrievalClient::new(
            Arc::new(CannedIndex {
                matches: vec![
                    good_match("a", 0.9, "Kept.", 1),
                    IndexMatch {
                        id: "b".into(),
                        score: 0.8,
                        metadata: Some(json!({ "chapter_text": "no page here" })),
                    },
                    IndexMatch {
                        id: "c".into(),
                        score: 0.7,
                        metadata: None,
                    },
                    good_match("d", 0.6, "Also kept.", 4),
                ],
            }),
            "textbook",
            "Textbook",
        );
        let passages = client.search(&hybrid(), 4).unwrap();
        let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Kept.", "Also kept."]);
    }

    #[test]
    fn empty_result_set_is_ok() {
        let client = RetrievalClient::new(
            Arc::new(CannedIndex { matches: vec![] }),
            "textbook",
            "Textbook",
        );
        let passages = client.search(&hybrid(), 3).unwrap();
        assert!(passages.is_empty());
    }

    #[test]
    fn fractional_page_numbers_truncate() {
        let client = RetrievalClient::new(
            Arc::new(CannedIndex {
                matches: vec![IndexMatch {
                    id: "a".into(),
                    score: 0.9,
                    metadata: Some(json!({ "chapter_text": "t", "page_number": 17.0 })),
                }],
            }),
            "textbook",
            "Textbook",
        );
        let passages = client.search(&hybrid(), 1).unwrap();
        assert_eq!(passages[0].page_reference, "Reference: Textbook, page 17");
    }
}
