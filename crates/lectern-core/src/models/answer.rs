/// The synthesizer's verdict on a single passage.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAnswer {
    /// Answer text. Grounded answers end with a citation line.
    pub text: String,
    /// Whether the model produced substantive content from the passage.
    pub grounded: bool,
    /// Citation of the passage the answer was derived from.
    pub page_reference: Option<String>,
}

/// Terminal outcome of one resolution.
///
/// At most one grounded answer is produced per query; answers from two
/// passages are never mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Text delivered to the caller: a grounded answer or the fixed
    /// no-relevant-passage message.
    pub text: String,
    pub kind: ResolutionKind,
}

/// How a resolution terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionKind {
    /// A passage produced a grounded answer at the given weighting.
    Grounded { alpha: f32, rank: usize },
    /// Every weighting attempt came back empty or ungrounded. This is an
    /// expected business outcome, not a failure.
    Exhausted,
}
