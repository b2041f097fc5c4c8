//! Named-entity recognition collaborator.
//!
//! The detector treats the NER model as a black box behind [`NerModel`]:
//! text goes in, labelled spans with byte offsets come out. Loading a model
//! is a one-time, fallible step; recognition never fails.
//!
//! [`LexiconModel`] is the bundled adapter. Any other implementation (a
//! wrapper around an ONNX runtime, a fake in tests) can be injected into
//! [`PiiDetector::new`](crate::PiiDetector::new).

pub mod lexicon;
pub mod tokenizer;

pub use lexicon::{Lexicon, LexiconModel};

use crate::error::{DetectorError, DetectorResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier of the bundled English (Irish locale) model.
pub const DEFAULT_MODEL: &str = "en_ie_lexicon_sm";

/// One entity as reported by a model, using the model's native label set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerEntity {
    pub text: String,
    /// Native label, e.g. `PERSON`, `GPE`, `CARDINAL`
    pub label: String,
    /// Byte offset into the input, inclusive
    pub start: usize,
    /// Byte offset into the input, exclusive
    pub end: usize,
}

impl NerEntity {
    pub fn new(text: impl Into<String>, label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }
}

/// Capability interface for NER backends.
///
/// Implementations must be read-only after construction.
pub trait NerModel: Send + Sync {
    /// Labels spans of `text`. Offsets are byte offsets into `text`.
    fn recognize(&self, text: &str) -> Vec<NerEntity>;

    /// Model identifier, for logging.
    fn name(&self) -> &str;
}

/// Where a detector obtains its model from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    /// A model registered under a fixed identifier
    Builtin(String),
    /// A lexicon file on disk
    Path(PathBuf),
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::Builtin(DEFAULT_MODEL.to_string())
    }
}

/// Loads a registered model by identifier.
pub fn load_model(name: &str) -> DetectorResult<Box<dyn NerModel>> {
    match name {
        DEFAULT_MODEL => Ok(Box::new(LexiconModel::builtin()?)),
        _ => Err(DetectorError::UnknownModel {
            model: name.to_string(),
        }),
    }
}

/// Loads a model from any [`ModelSource`].
pub fn load_source(source: &ModelSource) -> DetectorResult<Box<dyn NerModel>> {
    match source {
        ModelSource::Builtin(name) => load_model(name),
        ModelSource::Path(path) => Ok(Box::new(LexiconModel::from_path(path)?)),
    }
}
