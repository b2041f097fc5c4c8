//! Phone number domain logic.
//!
//! Two mutually exclusive patterns are supported. A catalog carries exactly
//! one of them.

use super::{EntityLabel, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which phone number shape to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneVariant {
    /// Irish numbering:
    /// - 087 123 4567
    /// - 0871234567
    /// - +353 86 765 4321
    /// - 01 234 5678
    #[default]
    Regional,

    /// Generic 3-3-4 grouping:
    /// - (555) 234-5678
    /// - 555.234.5678
    /// - +1 555 234 5678
    Generic,
}

/// Phone number pattern matcher.
#[derive(Debug, Clone)]
pub struct PhoneNumberMatcher {
    variant: PhoneVariant,
}

impl PhoneNumberMatcher {
    pub fn new(variant: PhoneVariant) -> Self {
        Self { variant }
    }

    pub fn regional() -> Self {
        Self::new(PhoneVariant::Regional)
    }

    pub fn generic() -> Self {
        Self::new(PhoneVariant::Generic)
    }

    pub fn variant(&self) -> PhoneVariant {
        self.variant
    }

    /// Irish mobile (083-089) and landline (01, 021-029) numbers with an
    /// optional `+353` or trunk `0` prefix.
    fn regional_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?:\+353\s?|\b0|\b)(?:8[356789]|1|2[1-9])\s?\d{3}\s?\d{4}\b")
                .expect("Valid regional phone regex")
        });
        &PATTERN
    }

    fn generic_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?:\+\d{1,3}[-.\s]?|\b\d{1,3}[-.\s])?(?:\(\d{3}\)\s?|\b\d{3}[-.\s]?)\d{3}[-.\s]?\d{4}\b",
            )
            .expect("Valid generic phone regex")
        });
        &PATTERN
    }
}

impl Default for PhoneNumberMatcher {
    fn default() -> Self {
        Self::regional()
    }
}

impl PatternMatcher for PhoneNumberMatcher {
    fn label(&self) -> EntityLabel {
        EntityLabel::Phone
    }

    fn pattern(&self) -> &Regex {
        match self.variant {
            PhoneVariant::Regional => Self::regional_regex(),
            PhoneVariant::Generic => Self::generic_regex(),
        }
    }
}
