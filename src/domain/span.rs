//! Entity spans and their category labels.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Category tag attached to a detected span.
///
/// The first four variants come from the NER model, the next four from the
/// pattern catalog. `Custom` covers labels of user-supplied catalog entries
/// and model labels outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// Person name
    Person,
    /// Organisation
    Org,
    /// Geopolitical location (city, county, country)
    Gpe,
    /// Date or relative date expression
    Date,
    /// E-mail address
    Email,
    /// Phone number
    Phone,
    /// Irish Personal Public Service number
    PpsNumber,
    /// Irish postal code
    Eircode,
    /// Any other label
    Custom(String),
}

impl EntityLabel {
    /// Labels kept from NER output by default.
    pub const NER_DEFAULTS: [EntityLabel; 4] = [
        EntityLabel::Person,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Date,
    ];

    /// Canonical upper-case name (e.g. `"PPS_NUMBER"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Date => "DATE",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::PpsNumber => "PPS_NUMBER",
            Self::Eircode => "EIRCODE",
            Self::Custom(name) => name,
        }
    }

    /// Maps a label name onto a variant. Unknown names become `Custom`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "PERSON" => Self::Person,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "DATE" => Self::Date,
            "EMAIL" => Self::Email,
            "PHONE" => Self::Phone,
            "PPS_NUMBER" => Self::PpsNumber,
            "EIRCODE" => Self::Eircode,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EntityLabel {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

/// A detected PII span.
///
/// `start` and `end` are byte offsets into the input, so
/// `&input[span.start..span.end] == span.text` always holds for spans
/// returned by the detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Exact substring matched
    pub text: String,
    /// Category tag
    pub label: EntityLabel,
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl EntitySpan {
    /// Builds a span by slicing `input`. Returns `None` when the range is out
    /// of bounds or does not fall on char boundaries.
    pub fn from_input(input: &str, label: EntityLabel, start: usize, end: usize) -> Option<Self> {
        if start > end {
            return None;
        }
        input.get(start..end).map(|text| Self {
            text: text.to_string(),
            label,
            start,
            end,
        })
    }

    /// Byte range of the span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the two spans share at least one byte.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Converts the byte range into code-point offsets within `input`.
    ///
    /// A `start` inside a multi-byte character, or past the end of `input`,
    /// counts only the characters that end at or before it.
    pub fn char_range(&self, input: &str) -> Range<usize> {
        let start = input
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= self.start)
            .count();
        let width = self.text.chars().count();
        start..start + width
    }
}
