//! Error types for the PII detection library.
//!
//! Detection itself never fails: every error in this module is raised while
//! constructing a detector (loading a model, compiling a pattern catalog).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for detector construction.
pub type DetectorResult<T> = Result<T, DetectorError>;

/// Error type for all construction-time failures.
///
/// Variants carry enough context (model name, offending pattern, path) to
/// be reported directly to an operator without further wrapping.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The NER model resource exists but could not be loaded
    #[error("Failed to load NER model '{model}': {reason}")]
    ModelLoad { model: String, reason: String },

    /// No adapter is registered under the requested model identifier
    #[error("Unknown NER model '{model}'")]
    UnknownModel { model: String },

    /// A catalog pattern failed to compile
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Error occurred while reading a model resource from disk
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl From<regex::Error> for DetectorError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DetectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::ModelLoad {
            model: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
