use super::types::{ChainAnalysis, ReasoningChain};

/// Confidence threshold below which a step is flagged as low-confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Error message reported when a chain has zero steps.
pub const EMPTY_CHAIN_ERROR: &str = "No reasoning steps found in the chain";

/// Compute a [`ChainAnalysis`] from a reasoning chain.
///
/// Pure and deterministic; the chain is not mutated. A chain with zero
/// steps yields an analysis with `error` set and zero/empty metrics rather
/// than a failure.
///
/// `average_confidence` is copied from the chain's metadata rather than
/// recomputed from the steps. A caller-supplied chain whose metadata is
/// stale relative to its steps will therefore report the stale value;
/// absent metadata is passed through as absent.
pub fn analyze(chain: &ReasoningChain) -> ChainAnalysis {
    if chain.steps.is_empty() {
        return ChainAnalysis {
            chain_length: 0,
            average_confidence: Some(0.0),
            fact_usage: 0,
            branching_factor: 0.0,
            low_confidence_steps: Vec::new(),
            finish_reason: None,
            error: Some(EMPTY_CHAIN_ERROR.to_string()),
        };
    }

    let chain_length = chain.steps.len();

    let fact_usage = chain
        .steps
        .iter()
        .map(|step| step.supporting_facts.len())
        .sum();

    let next_step_total: usize = chain.steps.iter().map(|step| step.next_steps.len()).sum();

    let low_confidence_steps = chain
        .steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.confidence < LOW_CONFIDENCE_THRESHOLD)
        .map(|(index, _)| index + 1)
        .collect();

    ChainAnalysis {
        chain_length,
        average_confidence: chain.metadata.average_confidence,
        fact_usage,
        // chain_length > 0 here, so the division is safe.
        branching_factor: next_step_total as f64 / chain_length as f64,
        low_confidence_steps,
        finish_reason: chain.metadata.finish_reason.clone(),
        error: None,
    }
}
