//! Domain models and pattern matching for regional identifiers.
//!
//! Each identifier kind (e-mail, phone, PPS number, Eircode) lives in its own
//! module behind the [`PatternMatcher`] trait. [`catalog`] assembles them into
//! the ordered list the detector runs.

pub mod catalog;
pub mod eircode;
pub mod email;
pub mod identity;
pub mod phone;
pub mod span;

pub use catalog::{CatalogPreset, PatternCatalog, PatternEntry};
pub use eircode::EircodeMatcher;
pub use email::EmailMatcher;
pub use identity::PpsNumberMatcher;
pub use phone::{PhoneNumberMatcher, PhoneVariant};
pub use span::{EntityLabel, EntitySpan};

use regex::Regex;

/// Trait for regex-backed identifier matchers.
pub trait PatternMatcher: Send + Sync {
    /// Label attached to every span this matcher emits.
    fn label(&self) -> EntityLabel;

    fn pattern(&self) -> &Regex;

    /// All non-overlapping matches, leftmost-first.
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// All matches as spans carrying this matcher's label.
    fn find_spans(&self, text: &str) -> Vec<EntitySpan> {
        let label = self.label();
        self.pattern()
            .find_iter(text)
            .map(|m| EntitySpan {
                text: m.as_str().to_string(),
                label: label.clone(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}
