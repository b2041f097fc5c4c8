//! Eircode (Irish postal code) domain logic.

use super::{EntityLabel, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Eircode matcher.
///
/// A routing key of one letter and two digits, an optional space, then a
/// four-character unique identifier: `D02 X285`, `V96F6C7`.
#[derive(Debug, Clone)]
pub struct EircodeMatcher;

impl EircodeMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b[A-Z]\d{2}\s?[A-Z0-9]{4}\b").expect("Valid Eircode regex")
        });
        &PATTERN
    }
}

impl Default for EircodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for EircodeMatcher {
    fn label(&self) -> EntityLabel {
        EntityLabel::Eircode
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
