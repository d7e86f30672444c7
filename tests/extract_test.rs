//! Integration tests for reasoning step and final answer extraction.
//!
//! Exercises the flat-brace scanner against noisy, partially structured
//! completions: prose around fragments, malformed fragments, nested
//! objects, and final-answer marker variants.

use pretty_assertions::assert_eq;

use cot_reasoner::chain::{extract, extract_final_answer, extract_steps, ThoughtStep};

fn valid_fragment(thought: &str, confidence: f64) -> String {
    format!(
        r#"{{"thought": "{}", "supporting_facts": ["fact"], "confidence": {}, "next_steps": ["next"]}}"#,
        thought, confidence
    )
}

#[test]
fn test_extract_steps_plain_prose_yields_nothing() {
    let steps = extract_steps("Let me think about this. The answer is probably 42.");
    assert!(steps.is_empty());
}

#[test]
fn test_extract_steps_empty_input() {
    assert!(extract_steps("").is_empty());
}

#[test]
fn test_extract_steps_single_fragment_in_prose() {
    let text = format!(
        "Let me work through this.\n{}\nThat seems solid.",
        valid_fragment("First, consider the premise", 0.85)
    );

    let steps = extract_steps(&text);
    assert_eq!(
        steps,
        vec![ThoughtStep {
            thought: "First, consider the premise".to_string(),
            supporting_facts: vec!["fact".to_string()],
            confidence: 0.85,
            next_steps: vec!["next".to_string()],
        }]
    );
}

#[test]
fn test_extract_steps_missing_confidence_rejected() {
    let text = r#"{"thought":"x","supporting_facts":[],"next_steps":[]}"#;
    assert!(extract_steps(text).is_empty());
}

#[test]
fn test_extract_steps_missing_thought_rejected() {
    let text = r#"{"supporting_facts":[],"confidence":0.9,"next_steps":[]}"#;
    assert!(extract_steps(text).is_empty());
}

#[test]
fn test_extract_steps_non_numeric_confidence_rejected() {
    let text = r#"{"thought":"x","supporting_facts":[],"confidence":"high","next_steps":[]}"#;
    assert!(extract_steps(text).is_empty());
}

#[test]
fn test_extract_steps_non_list_facts_rejected() {
    let text = r#"{"thought":"x","supporting_facts":"fact","confidence":0.9,"next_steps":[]}"#;
    assert!(extract_steps(text).is_empty());
}

#[test]
fn test_extract_steps_skips_invalid_preserves_order() {
    let text = format!(
        "{}\nsome interleaved prose\n{}\n{}",
        valid_fragment("first", 0.9),
        r#"{"thought":"broken","supporting_facts":[]}"#,
        valid_fragment("third", 0.6)
    );

    let steps = extract_steps(&text);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].thought, "first");
    assert_eq!(steps[1].thought, "third");
}

#[test]
fn test_extract_steps_keeps_duplicates() {
    let fragment = valid_fragment("repeated", 0.8);
    let text = format!("{}\n{}", fragment, fragment);

    let steps = extract_steps(&text);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0], steps[1]);
}

#[test]
fn test_extract_steps_nested_object_breaks_fragment() {
    // A nested object value resets the scanner, so neither the outer
    // fragment nor the inner (wrong-shaped) span survives.
    let text = r#"{"thought":"x","supporting_facts":[],"confidence":0.9,"next_steps":[],"meta":{"a":1}}"#;
    assert!(extract_steps(text).is_empty());
}

#[test]
fn test_extract_steps_extra_flat_fields_ignored() {
    let text = r#"{"thought":"x","supporting_facts":[],"confidence":0.9,"next_steps":[],"note":"extra"}"#;
    let steps = extract_steps(text);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].thought, "x");
}

#[test]
fn test_extract_steps_multiline_fragment() {
    let text = "{\n  \"thought\": \"spread over lines\",\n  \"supporting_facts\": [],\n  \"confidence\": 0.75,\n  \"next_steps\": []\n}";
    let steps = extract_steps(text);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].thought, "spread over lines");
}

// Final answer extraction

#[test]
fn test_final_answer_basic() {
    let text = "...reasoning...\nFinal Answer: Paris\nmore text";
    assert_eq!(extract_final_answer(text), "Paris");
}

#[test]
fn test_final_answer_case_insensitive() {
    assert_eq!(extract_final_answer("final answer: 42"), "42");
    assert_eq!(extract_final_answer("FINAL ANSWER: 42"), "42");
}

#[test]
fn test_final_answer_absent() {
    assert_eq!(extract_final_answer("no marker here"), "");
    assert_eq!(extract_final_answer(""), "");
}

#[test]
fn test_final_answer_first_occurrence_wins() {
    let text = "Final Answer: first\nFinal Answer: second";
    assert_eq!(extract_final_answer(text), "first");
}

#[test]
fn test_final_answer_trims_whitespace() {
    assert_eq!(extract_final_answer("Final Answer:    spaced   "), "spaced");
    assert_eq!(extract_final_answer("Final Answer:\tPolaris\r"), "Polaris");
}

#[test]
fn test_final_answer_same_line_only() {
    let text = "Final Answer:\nParis";
    assert_eq!(extract_final_answer(text), "");
}

#[test]
fn test_final_answer_at_end_of_text() {
    assert_eq!(extract_final_answer("steps...\nFinal Answer: done"), "done");
}

// Combined extraction

#[test]
fn test_extract_steps_and_answer_together() {
    let text = format!(
        "Working it out:\n{}\n{}\nFinal Answer: Paris\n",
        valid_fragment("narrow down the candidates", 0.9),
        valid_fragment("confirm against known capitals", 0.95)
    );

    let (steps, final_answer) = extract(&text);
    assert_eq!(steps.len(), 2);
    assert_eq!(final_answer, "Paris");
}

#[test]
fn test_extract_tolerates_fully_unstructured_output() {
    let (steps, final_answer) = extract("The model rambled with no structure at all.");
    assert!(steps.is_empty());
    assert_eq!(final_answer, "");
}
