//! Centralized prompt definitions for chain-of-thought reasoning
//!
//! This module contains the prompts used to elicit structured reasoning
//! from the model. Centralizing prompts makes them easier to maintain,
//! test, and version.

/// System prompt for chain-of-thought reasoning.
pub const COT_SYSTEM_PROMPT: &str =
    "You are a helpful AI that thinks through problems step by step.";

/// User prompt template for eliciting a structured reasoning chain.
///
/// The `{question}` placeholder is substituted by [`cot_prompt`]. Each step
/// the model emits is expected to follow the flat JSON schema below; the
/// extractor in [`crate::chain::extract`] recognizes exactly that shape.
pub const COT_PROMPT_TEMPLATE: &str = r#"
Question: {question}

Please help me solve this step by step. For each step:
1. Share your thought process
2. List any relevant facts you're using
3. Rate your confidence (0-1)
4. Suggest next steps to explore

Structure each step as JSON:
{
    "thought": "your current thought",
    "supporting_facts": ["fact1", "fact2"],
    "confidence": 0.XX,
    "next_steps": ["step1", "step2"]
}

After your chain of thought, provide a final answer starting with "Final Answer:"

Think it through step by step:
"#;

/// Render the chain-of-thought prompt for a question.
pub fn cot_prompt(question: &str) -> String {
    COT_PROMPT_TEMPLATE.replace("{question}", question)
}
