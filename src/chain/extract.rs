use tracing::debug;

use super::types::ThoughtStep;

/// Marker preceding the final answer in a completion. Matched
/// case-insensitively.
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Extract reasoning steps and the final answer from a raw completion.
///
/// Convenience wrapper combining [`extract_steps`] and
/// [`extract_final_answer`]. Never fails: noisy or entirely unstructured
/// input yields an empty step list and/or an empty answer string.
pub fn extract(raw: &str) -> (Vec<ThoughtStep>, String) {
    (extract_steps(raw), extract_final_answer(raw))
}

/// Extract all well-formed thought steps from a raw completion.
///
/// Scans the text for flat object literals (a `{`, no intervening braces,
/// then `}`) in order of appearance and attempts to deserialize each as a
/// [`ThoughtStep`]. Fragments that do not parse, or that lack any of the
/// required fields, are logged at debug level and skipped; steps are never
/// deduplicated or reordered.
///
/// Known limitation: a step containing a nested object value introduces an
/// inner brace pair, so the outer fragment is never matched as a whole and
/// that step is lost. String-typed arrays (`supporting_facts`,
/// `next_steps`) contain no braces and are unaffected.
pub fn extract_steps(raw: &str) -> Vec<ThoughtStep> {
    let mut steps = Vec::new();

    for fragment in flat_object_spans(raw) {
        match serde_json::from_str::<ThoughtStep>(fragment) {
            Ok(step) => steps.push(step),
            Err(e) => {
                debug!(error = %e, fragment, "Discarding malformed thought step fragment");
            }
        }
    }

    steps
}

/// Extract the final answer from a raw completion.
///
/// Finds the first case-insensitive occurrence of [`FINAL_ANSWER_MARKER`]
/// and returns the trimmed remainder of that line, or an empty string when
/// the marker is absent.
pub fn extract_final_answer(raw: &str) -> String {
    let needle = FINAL_ANSWER_MARKER.as_bytes();

    let pos = raw
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle));

    match pos {
        // The marker is pure ASCII, so the slice boundary is safe.
        Some(p) => {
            let rest = &raw[p + needle.len()..];
            rest.split('\n').next().unwrap_or_default().trim().to_string()
        }
        None => String::new(),
    }
}

/// Find all flat `{...}` spans in left-to-right order.
///
/// Equivalent to the pattern `\{[^{}]*\}`: an opening brace resets the
/// candidate start, so for nested braces only the innermost flat span is
/// produced. Brace bytes cannot occur inside multi-byte UTF-8 sequences,
/// making byte-offset slicing valid.
fn flat_object_spans(raw: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, byte) in raw.bytes().enumerate() {
        match byte {
            b'{' => start = Some(i),
            b'}' => {
                if let Some(s) = start.take() {
                    spans.push(&raw[s..=i]);
                }
            }
            _ => {}
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object_spans_simple() {
        let spans = flat_object_spans(r#"before {"a": 1} after"#);
        assert_eq!(spans, vec![r#"{"a": 1}"#]);
    }

    #[test]
    fn test_flat_object_spans_nested_yields_innermost() {
        let spans = flat_object_spans(r#"{"outer": {"inner": 1}}"#);
        assert_eq!(spans, vec![r#"{"inner": 1}"#]);
    }

    #[test]
    fn test_flat_object_spans_unbalanced() {
        assert!(flat_object_spans("{ never closed").is_empty());
        assert!(flat_object_spans("} { ").is_empty());
        assert_eq!(flat_object_spans("{a}b}"), vec!["{a}"]);
    }

    #[test]
    fn test_flat_object_spans_multibyte_text() {
        let spans = flat_object_spans("préambule {\"clé\": \"café\"} fin");
        assert_eq!(spans, vec!["{\"clé\": \"café\"}"]);
    }
}
