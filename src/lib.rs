//! PII span detection for free-form text.
//!
//! This library finds personally identifiable information by combining a
//! named-entity recognition model with deterministic patterns for Irish
//! identifiers. It is meant to run ahead of redaction, compliance scanning
//! or data-loss-prevention steps.
//!
//! # Features
//!
//! - **NER spans**: PERSON, ORG, GPE and DATE from a pluggable model
//! - **Street filter**: PERSON spans that are really street names are dropped
//! - **Identifier patterns**: e-mail, phone (Irish or generic), PPS number, Eircode
//! - **Configurable catalog**: ordered (pattern, label) list, extendable per locale
//!
//! # Architecture
//!
//! - [`domain`]: span types and regex matchers for each identifier kind
//! - [`ner`]: the model capability trait and the bundled lexicon model
//! - [`detection`]: the detector that merges both sources
//! - [`error`]: construction-time errors
//!
//! # Quick Start
//!
//! ```
//! use pii_detector::{EntityLabel, PiiDetector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = PiiDetector::with_default_model()?;
//! let spans = detector.detect("Contact Sarah Murphy at sarah@test.ie. PPS: 1234567A");
//!
//! assert!(spans.iter().any(|s| s.label == EntityLabel::Email && s.text == "sarah@test.ie"));
//! assert!(spans.iter().any(|s| s.label == EntityLabel::PpsNumber));
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Generic phone numbers
//!
//! ```
//! use pii_detector::{EntityLabel, LexiconModel, PatternCatalog, PiiDetector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = LexiconModel::builtin()?;
//! let detector = PiiDetector::new(Box::new(model), PatternCatalog::generic());
//!
//! let spans = detector.detect("Call (555) 234-5678");
//! assert_eq!(spans[0].label, EntityLabel::Phone);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern matching only
//!
//! ```
//! use pii_detector::domain::{EircodeMatcher, PatternMatcher};
//!
//! let matcher = EircodeMatcher::new();
//! assert_eq!(matcher.extract_all("D02 X285, Dublin"), vec!["D02 X285"]);
//! ```

pub mod detection;
pub mod domain;
pub mod error;
pub mod ner;

pub use detection::{DetectorConfig, PersonFilter, PiiDetector};
pub use domain::{
    CatalogPreset, EntityLabel, EntitySpan, PatternCatalog, PatternEntry, PatternMatcher,
    PhoneVariant,
};
pub use error::{DetectorError, DetectorResult};
pub use ner::{LexiconModel, ModelSource, NerEntity, NerModel, DEFAULT_MODEL};
