//! E-mail address matching.

use super::{EntityLabel, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// E-mail address matcher.
///
/// Matches the usual `local@domain.tld` shape with a top-level domain of at
/// least two letters. No attempt is made to validate the address.
#[derive(Debug, Clone)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Valid email regex")
        });
        &PATTERN
    }
}

impl Default for EmailMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for EmailMatcher {
    fn label(&self) -> EntityLabel {
        EntityLabel::Email
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_extraction() {
        let matcher = EmailMatcher::new();
        let text = "Write to sarah@test.ie or j.o'neill+hr@council.gov.ie today";
        let found = matcher.extract_all(text);
        assert_eq!(found, vec!["sarah@test.ie", "neill+hr@council.gov.ie"]);
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        let matcher = EmailMatcher::new();
        assert!(matcher.extract_all("user@host.c").is_empty());
        assert!(matcher.extract_all("user@host").is_empty());
        assert_eq!(matcher.extract_all("user@host.co"), vec!["user@host.co"]);
    }

    #[test]
    fn test_pipe_is_not_a_tld_character() {
        let matcher = EmailMatcher::new();
        assert_eq!(matcher.extract_all("a@b.i|e"), Vec::<&str>::new());
    }

    #[test]
    fn test_email_span_offsets() {
        let text = "Contact me at test@example.com";
        let spans = EmailMatcher::new().find_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 14);
        assert_eq!(spans[0].end, text.len());
        assert_eq!(&text[spans[0].start..spans[0].end], "test@example.com");
    }
}
