//! Post-filter for PERSON spans that are really street names.

use serde::{Deserialize, Serialize};

/// How PERSON spans are screened for street-name fragments (`Main St`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonFilter {
    /// Drop a span when one of its words is `St`, `St.` or `Street`,
    /// ignoring case. Names such as `Stella` or `Esther` are kept.
    #[default]
    StreetSuffix,

    /// Drop a span whose lower-cased text contains `st` or `street` anywhere.
    ///
    /// Matches the legacy behaviour exactly, including its false drops of
    /// ordinary names (`Stephen`, `Christine`).
    Substring,

    /// Keep every PERSON span.
    Disabled,
}

impl PersonFilter {
    /// Returns true if a PERSON span with this text should be discarded.
    pub fn rejects(&self, text: &str) -> bool {
        match self {
            Self::StreetSuffix => text.split_whitespace().any(is_street_word),
            Self::Substring => {
                let lower = text.to_lowercase();
                lower.contains("st") || lower.contains("street")
            }
            Self::Disabled => false,
        }
    }
}

fn is_street_word(word: &str) -> bool {
    let word = word.trim_end_matches(|c: char| c == '.' || c == ',');
    word.eq_ignore_ascii_case("st") || word.eq_ignore_ascii_case("street")
}
