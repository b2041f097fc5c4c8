//! The entity detector: NER output and pattern matches merged into one list.
//!
//! [`PiiDetector`] owns an immutable model handle and pattern catalog. Each
//! call to [`PiiDetector::detect`] runs the model once, keeps the allowed
//! labels, screens PERSON spans, runs every catalog entry, then stable-sorts
//! everything by start offset. Nothing is deduplicated.

pub mod filter;

pub use filter::PersonFilter;

use crate::domain::{CatalogPreset, EntityLabel, EntitySpan, PatternCatalog};
use crate::error::DetectorResult;
use crate::ner::{self, ModelSource, NerModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Construction-time settings for [`PiiDetector::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub model: ModelSource,
    pub catalog: CatalogPreset,
    pub person_filter: PersonFilter,
}

/// PII detector combining a NER model with a pattern catalog.
///
/// Safe to share across threads: the model is `Send + Sync` and the catalog
/// is read-only after construction.
pub struct PiiDetector {
    model: Box<dyn NerModel>,
    catalog: PatternCatalog,
    person_filter: PersonFilter,
    ner_labels: Vec<EntityLabel>,
}

impl PiiDetector {
    /// Creates a detector around an already loaded model.
    pub fn new(model: Box<dyn NerModel>, catalog: PatternCatalog) -> Self {
        Self {
            model,
            catalog,
            person_filter: PersonFilter::default(),
            ner_labels: EntityLabel::NER_DEFAULTS.to_vec(),
        }
    }

    /// Loads the bundled model with the regional catalog.
    pub fn with_default_model() -> DetectorResult<Self> {
        Self::from_config(&DetectorConfig::default())
    }

    /// Loads the configured model. Fails if the model cannot be loaded.
    pub fn from_config(config: &DetectorConfig) -> DetectorResult<Self> {
        let model = ner::load_source(&config.model)?;
        let catalog = PatternCatalog::from_preset(config.catalog);
        Ok(Self::new(model, catalog).with_person_filter(config.person_filter))
    }

    pub fn with_person_filter(mut self, filter: PersonFilter) -> Self {
        self.person_filter = filter;
        self
    }

    /// Replaces the set of NER labels kept in the output.
    pub fn with_ner_labels(mut self, labels: impl IntoIterator<Item = EntityLabel>) -> Self {
        self.ner_labels = labels.into_iter().collect();
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn person_filter(&self) -> PersonFilter {
        self.person_filter
    }

    /// Detects PII spans in `text`, sorted by start offset.
    ///
    /// Spans with equal start keep their discovery order: NER spans first,
    /// then pattern spans in catalog order.
    pub fn detect(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = self.recognize(text);
        let ner_count = spans.len();

        spans.extend(self.catalog.find_all(text));
        debug!(
            model = self.model.name(),
            ner = ner_count,
            patterns = spans.len() - ner_count,
            "detection complete"
        );

        // stable: ties keep concatenation order
        spans.sort_by_key(|span| span.start);
        spans
    }

    /// Runs the model and keeps allowed, well-formed spans.
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        for entity in self.model.recognize(text) {
            let label = EntityLabel::from_name(&entity.label);
            if !self.ner_labels.contains(&label) {
                continue;
            }
            if label == EntityLabel::Person && self.person_filter.rejects(&entity.text) {
                debug!(text = %entity.text, "dropping street-like PERSON span");
                continue;
            }

            match EntitySpan::from_input(text, label, entity.start, entity.end) {
                Some(span) if span.text == entity.text => spans.push(span),
                _ => warn!(
                    model = self.model.name(),
                    start = entity.start,
                    end = entity.end,
                    "model returned a span that does not match the input, ignoring"
                ),
            }
        }

        spans
    }
}
