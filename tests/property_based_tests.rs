//! Property-based tests for the detector.
//!
//! Runs the detector over a wide range of degenerate and adversarial inputs
//! and checks the invariants every result must satisfy: offsets inside the
//! input, span text equal to the input slice, and non-decreasing start order.

use pii_detector::{CatalogPreset, DetectorConfig, PersonFilter, PiiDetector};

mod common;
use common::*;

fn inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "\n\r\t".to_string(),
        "a".to_string(),
        "@".to_string(),
        "+353".to_string(),
        "Dr.".to_string(),
        "Dr. ".to_string(),
        ". Dr".to_string(),
        "St".to_string(),
        "Mr Mr Mr".to_string(),
        "🔢📱☎️ Seán Ó Briain 📧 seán@example.ie".to_string(),
        "ÀÉÎÕÜ ñ ß Ωmega".to_string(),
        "\u{0}\u{1}\u{7f} binary-ish \u{fffd}".to_string(),
        "1".repeat(1000),
        "A".repeat(1000),
        "Sarah ".repeat(500),
        "(".repeat(200),
        "@.".repeat(500),
        SAMPLE_TEXT.to_string(),
        SAMPLE_TEXT.repeat(20),
        "Contact Sarah Murphy\nat sarah@test.ie\n\n087 1234567".to_string(),
        "D02X285D02X285 1234567A1234567A".to_string(),
        "15 March 2024 March 15, 2024 2024-03-15 15/03/2024".to_string(),
        "O'Brien-Kelly's Ltd. St. Stephen's Green, D02 X285".to_string(),
    ]
}

fn detectors() -> Vec<PiiDetector> {
    let mut detectors = Vec::new();
    for catalog in [CatalogPreset::Regional, CatalogPreset::Generic] {
        for person_filter in [
            PersonFilter::StreetSuffix,
            PersonFilter::Substring,
            PersonFilter::Disabled,
        ] {
            let config = DetectorConfig {
                catalog,
                person_filter,
                ..Default::default()
            };
            detectors.push(PiiDetector::from_config(&config).expect("bundled model loads"));
        }
    }
    detectors
}

#[test]
fn test_spans_always_slice_the_input() {
    for detector in detectors() {
        for input in inputs() {
            let spans = detector.detect(&input);
            assert_spans_valid(&input, &spans);
        }
    }
}

#[test]
fn test_spans_always_sorted() {
    for detector in detectors() {
        for input in inputs() {
            assert_sorted(&detector.detect(&input));
        }
    }
}

#[test]
fn test_detection_is_deterministic() {
    let detector = default_detector();
    for input in inputs() {
        assert_eq!(detector.detect(&input), detector.detect(&input));
    }
}

#[test]
fn test_detector_is_reusable_across_threads() {
    let detector = std::sync::Arc::new(default_detector());
    let expected = detector.detect(SAMPLE_TEXT);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = std::sync::Arc::clone(&detector);
            std::thread::spawn(move || detector.detect(SAMPLE_TEXT))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}

#[test]
fn test_street_suffix_never_reports_st_as_person() {
    let detector = default_detector();
    for input in inputs() {
        for span in detector.detect(&input) {
            if span.label == pii_detector::EntityLabel::Person {
                assert!(
                    !span
                        .text
                        .split_whitespace()
                        .any(|w| w.trim_end_matches('.').eq_ignore_ascii_case("st")),
                    "PERSON span contains a street token: {:?}",
                    span
                );
            }
        }
    }
}
