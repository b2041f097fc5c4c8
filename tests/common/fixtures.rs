//! Test fixtures: scripted NER models and sample texts.

use pii_detector::{NerEntity, NerModel, PatternCatalog, PiiDetector};

/// The sample document used throughout the documentation.
pub const SAMPLE_TEXT: &str = "Contact Sarah Murphy at sarah@test.ie or 087 1234567. PPS: 1234567A. Address: D02X285, V96 F6C7 Dublin";

/// NER model that replays a fixed list of entities, whatever the input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModel {
    entities: Vec<NerEntity>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity located by searching `text` inside `input`.
    ///
    /// # Panics
    /// Panics if `text` does not occur in `input`.
    pub fn with(mut self, input: &str, text: &str, label: &str) -> Self {
        let start = input
            .find(text)
            .unwrap_or_else(|| panic!("'{}' not found in '{}'", text, input));
        self.entities
            .push(NerEntity::new(text, label, start, start + text.len()));
        self
    }

    /// Adds an entity with explicit offsets.
    pub fn with_raw(mut self, text: &str, label: &str, start: usize, end: usize) -> Self {
        self.entities.push(NerEntity::new(text, label, start, end));
        self
    }
}

impl NerModel for ScriptedModel {
    fn recognize(&self, _text: &str) -> Vec<NerEntity> {
        self.entities.clone()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Detector over a scripted model with the regional catalog.
pub fn scripted_detector(model: ScriptedModel) -> PiiDetector {
    PiiDetector::new(Box::new(model), PatternCatalog::regional())
}

/// Detector over the bundled model with the regional catalog.
pub fn default_detector() -> PiiDetector {
    PiiDetector::with_default_model().expect("bundled model loads")
}
