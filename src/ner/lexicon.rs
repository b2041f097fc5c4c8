//! Lexicon-driven English NER model.
//!
//! The model combines three sources of evidence:
//!
//! - **Gazetteers** of first names, places and organisations
//! - **Token shape**: runs of capitalised words are entity candidates
//! - **Date expressions**, recognised with a single regex
//!
//! Native labels follow the usual English NER label set: `PERSON`, `ORG`,
//! `GPE`, `FAC` (streets and buildings), `DATE` and `CARDINAL`.
//!
//! The lexicon is JSON. The bundled one is compiled into the binary and
//! parsed at load time, so a corrupt resource is reported the same way as a
//! missing file on disk.

use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::tokenizer::{tokenize, Token};
use super::{NerEntity, NerModel, DEFAULT_MODEL};
use crate::error::{DetectorError, DetectorResult};

const BUILTIN_LEXICON: &str = include_str!("data/en_ie_lexicon_sm.json");

/// Serialized form of a lexicon. All word lists are matched lower-case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Model identifier reported by [`NerModel::name`]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_names: Vec<String>,
    /// Places, single or multi-word (`"new york"`)
    #[serde(default)]
    pub locations: Vec<String>,
    /// Organisations, single or multi-word
    #[serde(default)]
    pub organizations: Vec<String>,
    /// Final words that make a capitalised run an organisation (`Ltd`, `Council`)
    #[serde(default)]
    pub org_suffixes: Vec<String>,
    /// Final words that make a capitalised run a street (`St`, `Road`)
    #[serde(default)]
    pub street_suffixes: Vec<String>,
    /// Honorifics preceding a person name
    #[serde(default)]
    pub titles: Vec<String>,
    /// Capitalised words that never start an entity (`Contact`, `The`)
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl Lexicon {
    fn word_count(&self) -> usize {
        self.first_names.len()
            + self.locations.len()
            + self.organizations.len()
            + self.org_suffixes.len()
            + self.street_suffixes.len()
    }
}

fn lowered(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

/// Matches date expressions: `15 March 2024`, `March 15th, 2024`,
/// `2024-03-15`, `15/03/2024`, weekday names, `today`.
fn date_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        let months = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";
        let full_months =
            "January|February|March|April|June|July|August|September|October|November|December";
        let pattern = [
            format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{months})\.?(?:,?\s+\d{{4}})?\b"),
            format!(r"\b(?:{months})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s+\d{{4}})?\b"),
            format!(r"\b(?:{months})\s+\d{{4}}\b"),
            r"\b\d{4}-\d{2}-\d{2}\b".to_string(),
            r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(),
            r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b".to_string(),
            format!(r"\b(?:{full_months})\b"),
            r"\b(?:[Yy]esterday|[Tt]oday|[Tt]omorrow)\b".to_string(),
            r"\b(?:19|20)\d{2}\b".to_string(),
        ]
        .join("|");
        Regex::new(&pattern).expect("Valid date regex")
    });
    &PATTERN
}

/// Rule-based NER model backed by a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconModel {
    name: String,
    first_names: HashSet<String>,
    locations: HashSet<String>,
    organizations: HashSet<String>,
    org_suffixes: HashSet<String>,
    street_suffixes: HashSet<String>,
    titles: HashSet<String>,
    stop_words: HashSet<String>,
}

impl LexiconModel {
    /// Loads the bundled model.
    pub fn builtin() -> DetectorResult<Self> {
        Self::from_json(DEFAULT_MODEL, BUILTIN_LEXICON)
    }

    /// Loads a lexicon file from disk.
    pub fn from_path(path: &Path) -> DetectorResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| DetectorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&path.display().to_string(), &json)
    }

    /// Parses a JSON lexicon. `model` names the resource in error messages and
    /// becomes the model name when the lexicon does not carry one.
    pub fn from_json(model: &str, json: &str) -> DetectorResult<Self> {
        let mut lexicon: Lexicon =
            serde_json::from_str(json).map_err(|e| DetectorError::ModelLoad {
                model: model.to_string(),
                reason: e.to_string(),
            })?;

        if lexicon.word_count() == 0 {
            return Err(DetectorError::ModelLoad {
                model: model.to_string(),
                reason: "lexicon contains no entries".to_string(),
            });
        }
        if lexicon.name.is_empty() {
            lexicon.name = model.to_string();
        }

        let model = Self::from_lexicon(lexicon);
        info!(
            model = %model.name,
            first_names = model.first_names.len(),
            locations = model.locations.len(),
            organizations = model.organizations.len(),
            "NER model loaded"
        );
        Ok(model)
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self {
            name: lexicon.name,
            first_names: lowered(lexicon.first_names),
            locations: lowered(lexicon.locations),
            organizations: lowered(lexicon.organizations),
            org_suffixes: lowered(lexicon.org_suffixes),
            street_suffixes: lowered(lexicon.street_suffixes),
            titles: lowered(lexicon.titles),
            stop_words: lowered(lexicon.stop_words),
        }
    }

    fn is_title(&self, token: &Token<'_>) -> bool {
        self.titles.contains(&token.text.to_lowercase())
    }

    /// True when the run starting at token `i` follows a title, with or
    /// without an abbreviation dot (`Dr Sarah`, `Dr. Sarah`).
    fn follows_title(&self, tokens: &[Token<'_>], i: usize) -> bool {
        let mut j = i;
        if j > 0 && tokens[j - 1].text == "." {
            j -= 1;
        }
        j > 0 && self.is_title(&tokens[j - 1])
    }

    /// Labels a run of capitalised tokens. Returns token ranges relative to
    /// `run`, each with its native label.
    ///
    /// A run ending in a street suffix is a street only when it is preceded by
    /// a house number or does not look like a name (`12 Mary Lane` is FAC,
    /// `Mary Lane` is PERSON).
    fn classify(
        &self,
        run: &[Token<'_>],
        mut after_title: bool,
        after_number: bool,
    ) -> Vec<(Range<usize>, &'static str)> {
        let mut first = 0;
        while first < run.len() {
            let word = run[first].text.to_lowercase();
            if self.titles.contains(&word) {
                after_title = true;
            } else if self.stop_words.contains(&word) {
                after_title = false;
            } else {
                break;
            }
            first += 1;
        }

        let words = &run[first..];
        if words.is_empty() {
            return Vec::new();
        }

        let lower: Vec<String> = words.iter().map(|t| t.text.to_lowercase()).collect();
        let phrase = lower.join(" ");
        let last = &lower[lower.len() - 1];
        let whole = first..run.len();

        let named = after_title || self.first_names.contains(&lower[0]);
        if words.len() >= 2 && self.street_suffixes.contains(last) && (after_number || !named) {
            return vec![(whole, "FAC")];
        }
        if self.organizations.contains(&phrase)
            || (words.len() >= 2 && self.org_suffixes.contains(last))
        {
            return vec![(whole, "ORG")];
        }
        if self.locations.contains(&phrase) {
            return vec![(whole, "GPE")];
        }

        // "Sarah Murphy Dublin": peel the trailing place off
        if words.len() >= 2 && self.locations.contains(last) {
            let split = run.len() - 1;
            let mut labelled: Vec<_> = self
                .classify(&words[..words.len() - 1], after_title, after_number)
                .into_iter()
                .map(|(r, label)| (r.start + first..r.end + first, label))
                .collect();
            labelled.push((split..run.len(), "GPE"));
            return labelled;
        }

        if after_title {
            return vec![(whole, "PERSON")];
        }
        if let Some(k) = lower.iter().position(|w| self.first_names.contains(w)) {
            return vec![(first + k..run.len(), "PERSON")];
        }
        if words.len() == 1 && words[0].is_acronym() {
            return vec![(whole, "ORG")];
        }

        Vec::new()
    }
}

impl NerModel for LexiconModel {
    fn recognize(&self, text: &str) -> Vec<NerEntity> {
        let dates: Vec<Range<usize>> = date_regex().find_iter(text).map(|m| m.range()).collect();
        let in_date =
            |t: &Token<'_>| dates.iter().any(|r| t.start < r.end && r.start < t.end);

        let mut entities: Vec<NerEntity> = dates
            .iter()
            .map(|r| NerEntity::new(&text[r.clone()], "DATE", r.start, r.end))
            .collect();

        let tokens = tokenize(text);
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if in_date(token) {
                i += 1;
                continue;
            }
            if token.is_number() {
                entities.push(NerEntity::new(token.text, "CARDINAL", token.start, token.end));
                i += 1;
                continue;
            }
            if !token.is_capitalized() {
                i += 1;
                continue;
            }

            // Extend over capitalised words on the same line
            let mut j = i + 1;
            while j < tokens.len()
                && tokens[j].is_capitalized()
                && !in_date(&tokens[j])
                && !text[tokens[j - 1].end..tokens[j].start].contains('\n')
            {
                j += 1;
            }

            let run = &tokens[i..j];
            let after_title = self.follows_title(&tokens, i);
            let after_number = i > 0 && tokens[i - 1].is_number();
            for (range, label) in self.classify(run, after_title, after_number) {
                let start = run[range.start].start;
                let end = run[range.end - 1].end;
                entities.push(NerEntity::new(&text[start..end], label, start, end));
            }
            i = j;
        }

        entities.sort_by_key(|e| e.start);
        entities
    }

    fn name(&self) -> &str {
        &self.name
    }
}
