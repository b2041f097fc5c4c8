//! Offset-preserving word tokenizer.
//!
//! Words are runs of alphanumeric characters, with apostrophes and hyphens
//! allowed inside a word (`O'Brien`, `Mary-Kate`). Every other
//! non-whitespace character becomes a single-character token. Offsets are
//! byte offsets into the original text.

/// A token extracted from the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Inclusive byte offset
    pub start: usize,
    /// Exclusive byte offset
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_alphanumeric)
    }

    /// Alphabetic word whose first letter is upper-case (`Dublin`, `O'Brien`, `HSE`).
    pub fn is_capitalized(&self) -> bool {
        let mut chars = self.text.chars();
        chars.next().is_some_and(char::is_uppercase)
            && chars.all(|c| c.is_alphabetic() || c == '\'' || c == '\u{2019}' || c == '-')
    }

    /// Entirely ASCII digits.
    pub fn is_number(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    /// All letters upper-case, at least two of them (`HSE`, `RTE`).
    pub fn is_acronym(&self) -> bool {
        self.text.chars().count() >= 2 && self.text.chars().all(|c| c.is_uppercase())
    }
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Splits `text` into tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch.is_alphanumeric() {
            word_start.get_or_insert(pos);
            continue;
        }

        // Joiner inside a word, followed by another letter or digit
        if is_joiner(ch)
            && word_start.is_some()
            && chars.peek().is_some_and(|(_, next)| next.is_alphanumeric())
        {
            continue;
        }

        if let Some(start) = word_start.take() {
            tokens.push(Token {
                text: &text[start..pos],
                start,
                end: pos,
            });
        }

        if !ch.is_whitespace() {
            let end = pos + ch.len_utf8();
            tokens.push(Token {
                text: &text[pos..end],
                start: pos,
                end,
            });
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token {
            text: &text[start..],
            start,
            end: text.len(),
        });
    }

    tokens
}
