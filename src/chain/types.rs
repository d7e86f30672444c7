use serde::{Deserialize, Serialize};

/// One reasoning increment in a chain of thought.
///
/// Extracted from a model completion by [`super::extract_steps`]. Extra
/// fields in a fragment are ignored during deserialization; a fragment
/// missing any of the four fields, or with a non-numeric `confidence`,
/// fails deserialization and is discarded by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStep {
    /// The model's stated reasoning at this step.
    pub thought: String,
    /// Facts the model cited in support of the thought.
    pub supporting_facts: Vec<String>,
    /// Self-reported confidence, semantically in [0, 1]. The extractor does
    /// not clamp or validate the range.
    pub confidence: f64,
    /// Directions the model suggested exploring next.
    pub next_steps: Vec<String>,
}

/// Metadata attached to a [`ReasoningChain`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainMetadata {
    /// Number of steps in the chain at the time metadata was produced.
    pub num_steps: usize,
    /// Mean of step confidences, 0 when the chain has no steps. Absent when
    /// the chain came from a caller that did not supply it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_confidence: Option<f64>,
    /// Model or deployment identifier that produced the completion.
    pub model: String,
    /// Finish reason reported by the model API, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The full structured trace of a model's step-by-step answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningChain {
    /// The original question.
    pub question: String,
    /// Steps in the order they appeared in the completion.
    pub steps: Vec<ThoughtStep>,
    /// Text following the "Final Answer:" marker, empty if none was found.
    pub final_answer: String,
    /// Metadata attached by the pipeline (or by the caller).
    pub metadata: ChainMetadata,
}

/// Derived, read-only summary of a [`ReasoningChain`].
///
/// Produced by [`super::analyze`]. When the chain has zero steps, `error`
/// is set and the remaining fields hold zero/empty defaults; callers must
/// check `error` rather than expect a failure to be raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainAnalysis {
    /// Number of steps in the chain.
    pub chain_length: usize,
    /// Copied from the chain's metadata, not recomputed from the steps.
    /// Absent when the chain's metadata did not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_confidence: Option<f64>,
    /// Total count of supporting facts across all steps.
    pub fact_usage: usize,
    /// Average number of suggested next steps per step.
    pub branching_factor: f64,
    /// 1-based positions of steps with confidence below the threshold.
    pub low_confidence_steps: Vec<usize>,
    /// Passthrough of the chain metadata's finish reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Set instead of the metrics when the chain has zero steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChainMetadata {
    /// Build metadata for a freshly extracted set of steps.
    ///
    /// `average_confidence` is the mean of the step confidences, or 0 when
    /// `steps` is empty.
    pub fn from_steps(
        steps: &[ThoughtStep],
        model: impl Into<String>,
        finish_reason: Option<String>,
    ) -> Self {
        let average_confidence = if steps.is_empty() {
            0.0
        } else {
            steps.iter().map(|s| s.confidence).sum::<f64>() / steps.len() as f64
        };

        Self {
            num_steps: steps.len(),
            average_confidence: Some(average_confidence),
            model: model.into(),
            finish_reason,
        }
    }
}
