//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A slice of the input phrase as seen by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Starts with a letter and runs up to the next separator
    Word(&'a str),
    /// Run of non-letters copied to the output unchanged
    Gap(&'a str),
}

impl<'a> Segment<'a> {
    /// Raw text of the segment
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Gap(s) => *s,
        }
    }

    /// Check if the segment is a word
    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation request
///
/// `text` is optional so that a missing phrase coming from JSON or another
/// caller can be rejected the same way as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub words_translated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_accessors() {
        let word = Segment::Word("hello");
        let gap = Segment::Gap(", ");

        assert!(word.is_word());
        assert!(!gap.is_word());
        assert_eq!(word.as_str(), "hello");
        assert_eq!(gap.to_string(), ", ");
    }

    #[test]
    fn test_request_deserialize_null_text() {
        let request: TranslationRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert!(request.text.is_none());

        let request: TranslationRequest = serde_json::from_str(r#"{"text": "pig"}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("pig"));
    }
}
