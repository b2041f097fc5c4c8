//! Custom assertions for detector output.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use pii_detector::{EntityLabel, EntitySpan};

/// Asserts the span invariants: offsets inside the input and text equal to
/// the input slice.
///
/// # Panics
/// Panics on the first span that violates either rule.
pub fn assert_spans_valid(input: &str, spans: &[EntitySpan]) {
    for span in spans {
        assert!(
            span.start <= span.end && span.end <= input.len(),
            "Span {:?} has offsets outside input of length {}",
            span,
            input.len()
        );
        assert_eq!(
            input.get(span.start..span.end),
            Some(span.text.as_str()),
            "Span {:?} text does not match the input slice",
            span
        );
    }
}

/// Asserts that spans are sorted non-decreasingly by start offset.
pub fn assert_sorted(spans: &[EntitySpan]) {
    for pair in spans.windows(2) {
        assert!(
            pair[0].start <= pair[1].start,
            "Spans out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that a span with exactly this text and label was found.
pub fn assert_has_span(spans: &[EntitySpan], label: EntityLabel, text: &str) {
    assert!(
        spans.iter().any(|s| s.label == label && s.text == text),
        "Expected {} span '{}' in {:?}",
        label,
        text,
        spans
    );
}

/// Returns the spans carrying `label`.
pub fn with_label(spans: &[EntitySpan], label: EntityLabel) -> Vec<&EntitySpan> {
    spans.iter().filter(|s| s.label == label).collect()
}
