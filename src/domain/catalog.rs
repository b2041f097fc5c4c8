//! Ordered catalog of (pattern, label) entries.
//!
//! The catalog is plain data: the detector walks it in declaration order and
//! keeps every match. Locale-specific catalogs are built by pushing different
//! entries, the merge step never changes.

use super::{
    EircodeMatcher, EmailMatcher, EntityLabel, EntitySpan, PatternMatcher, PhoneNumberMatcher,
    PhoneVariant, PpsNumberMatcher,
};
use crate::error::{DetectorError, DetectorResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Built-in catalog configurations.
///
/// Both presets carry EMAIL, PHONE, PPS_NUMBER and EIRCODE in that order and
/// differ only in the phone pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPreset {
    /// Irish phone numbering
    #[default]
    Regional,
    /// 3-3-4 phone grouping with optional country code and area parentheses
    Generic,
}

impl CatalogPreset {
    pub fn phone_variant(self) -> PhoneVariant {
        match self {
            Self::Regional => PhoneVariant::Regional,
            Self::Generic => PhoneVariant::Generic,
        }
    }
}

/// A single compiled catalog entry.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    label: EntityLabel,
    regex: Regex,
}

impl PatternEntry {
    /// Compiles `pattern` into an entry. Empty patterns are rejected since
    /// they match at every offset.
    pub fn new(pattern: &str, label: EntityLabel) -> DetectorResult<Self> {
        if pattern.is_empty() {
            return Err(DetectorError::InvalidInput {
                parameter: "pattern".to_string(),
                reason: format!("empty pattern for label {label}"),
            });
        }
        let regex = Regex::new(pattern).map_err(|e| DetectorError::PatternError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { label, regex })
    }

    /// Captures the pattern and label of an existing matcher.
    pub fn from_matcher(matcher: &dyn PatternMatcher) -> Self {
        Self {
            label: matcher.label(),
            regex: matcher.pattern().clone(),
        }
    }
}

impl PatternMatcher for PatternEntry {
    fn label(&self) -> EntityLabel {
        self.label.clone()
    }

    fn pattern(&self) -> &Regex {
        &self.regex
    }
}

/// Ordered, extensible list of pattern entries.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    entries: Vec<PatternEntry>,
}

impl PatternCatalog {
    /// A catalog with no entries. The detector then reports NER spans only.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_preset(preset: CatalogPreset) -> Self {
        let phone = PhoneNumberMatcher::new(preset.phone_variant());
        Self::empty()
            .with_matcher(&EmailMatcher::new())
            .with_matcher(&phone)
            .with_matcher(&PpsNumberMatcher::new())
            .with_matcher(&EircodeMatcher::new())
    }

    /// EMAIL, Irish PHONE, PPS_NUMBER, EIRCODE.
    pub fn regional() -> Self {
        Self::from_preset(CatalogPreset::Regional)
    }

    /// EMAIL, generic PHONE, PPS_NUMBER, EIRCODE.
    pub fn generic() -> Self {
        Self::from_preset(CatalogPreset::Generic)
    }

    /// Appends an already compiled entry.
    pub fn push(&mut self, entry: PatternEntry) {
        self.entries.push(entry);
    }

    pub fn with_matcher(mut self, matcher: &dyn PatternMatcher) -> Self {
        self.push(PatternEntry::from_matcher(matcher));
        self
    }

    /// Compiles and appends a custom pattern.
    pub fn with_pattern(mut self, pattern: &str, label: EntityLabel) -> DetectorResult<Self> {
        self.push(PatternEntry::new(pattern, label)?);
        Ok(self)
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every entry over `text`, in catalog order, keeping all matches.
    ///
    /// Matches of one entry are non-overlapping with each other; matches of
    /// different entries may overlap freely.
    pub fn find_all(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        for entry in &self.entries {
            let found = entry.find_spans(text);
            trace!(label = %entry.label, matches = found.len(), "pattern entry applied");
            spans.extend(found);
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(catalog: &PatternCatalog) -> Vec<String> {
        catalog
            .entries()
            .iter()
            .map(|e| e.label().to_string())
            .collect()
    }

    #[test]
    fn test_preset_order() {
        let expected = vec!["EMAIL", "PHONE", "PPS_NUMBER", "EIRCODE"];
        assert_eq!(labels(&PatternCatalog::regional()), expected);
        assert_eq!(labels(&PatternCatalog::generic()), expected);
    }

    #[test]
    fn test_presets_differ_in_phone_pattern_only() {
        let regional = PatternCatalog::regional();
        let generic = PatternCatalog::generic();
        for (i, (a, b)) in regional.entries().iter().zip(generic.entries()).enumerate() {
            if i == 1 {
                assert_ne!(a.pattern().as_str(), b.pattern().as_str());
            } else {
                assert_eq!(a.pattern().as_str(), b.pattern().as_str());
            }
        }
    }

    #[test]
    fn test_find_all_keeps_catalog_order() {
        let catalog = PatternCatalog::regional();
        let text = "D02 X285 then sarah@test.ie";
        let spans = catalog.find_all(text);
        assert_eq!(spans.len(), 2);
        // EMAIL comes first in the catalog even though it is later in the text
        assert_eq!(spans[0].label, EntityLabel::Email);
        assert_eq!(spans[1].label, EntityLabel::Eircode);
    }

    #[test]
    fn test_custom_pattern() {
        let catalog = PatternCatalog::empty()
            .with_pattern(r"\bIE\d{2}[A-Z]{4}\d{14}\b", EntityLabel::from_name("IBAN"))
            .unwrap();
        let spans = catalog.find_all("Pay IE29AIBK93115212345678 now");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label.as_str(), "IBAN");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = PatternCatalog::empty()
            .with_pattern("[unclosed", EntityLabel::Email)
            .unwrap_err();
        match err {
            DetectorError::PatternError { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = PatternEntry::new("", EntityLabel::Email).unwrap_err();
        assert!(matches!(err, DetectorError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_catalog_finds_nothing() {
        let catalog = PatternCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.find_all("sarah@test.ie").is_empty());
    }
}
