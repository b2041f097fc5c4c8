//! National identity number domain logic.

use super::{EntityLabel, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Irish Personal Public Service (PPS) number matcher.
///
/// Seven digits followed by one or two upper-case letters, e.g. `1234567A`
/// or `1234567FA`. The check character is not validated.
#[derive(Debug, Clone)]
pub struct PpsNumberMatcher;

impl PpsNumberMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b\d{7}[A-Z]{1,2}\b").expect("Valid PPS number regex"));
        &PATTERN
    }
}

impl Default for PpsNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for PpsNumberMatcher {
    fn label(&self) -> EntityLabel {
        EntityLabel::PpsNumber
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
