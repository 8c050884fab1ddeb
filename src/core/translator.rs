//! English to Pig Latin translation
//!
//! Rules:
//! - a word starting with a vowel keeps its letters and gets `yay` appended;
//! - a word starting with consonants has everything before its first vowel
//!   moved to the end, followed by `ay`;
//! - a word that started with a capital letter starts with a capital letter
//!   in the translation too, every other letter is lower-cased.
//!
//! ```
//! assert_eq!(piglatin::translate("Smile").unwrap(), "Ilesmay");
//! assert_eq!(piglatin::translate("Eat").unwrap(), "Eatyay");
//! ```

use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{Segment, TranslationRequest, TranslationResult};
use crate::core::rules::{self, CONSONANT_SUFFIX, VOWEL_SUFFIX};

/// Translate a phrase to Pig Latin
///
/// Fails with [`TranslationError::InvalidArgument`] when the phrase is empty
/// or whitespace-only.
pub fn translate(phrase: &str) -> Result<String> {
    translate_with_stats(phrase).map(|result| result.translation)
}

/// Translate a phrase that may be absent
pub fn translate_optional(phrase: Option<&str>) -> Result<String> {
    match phrase {
        Some(phrase) => translate(phrase),
        None => Err(TranslationError::invalid_argument(
            "source phrase cannot be null",
        )),
    }
}

/// Translate a request, reporting how many words were rewritten
pub fn translate_request(request: &TranslationRequest) -> Result<TranslationResult> {
    match request.text.as_deref() {
        Some(text) => translate_with_stats(text),
        None => Err(TranslationError::invalid_argument(
            "source phrase cannot be null",
        )),
    }
}

fn translate_with_stats(phrase: &str) -> Result<TranslationResult> {
    if phrase.trim().is_empty() {
        return Err(TranslationError::invalid_argument(
            "source phrase cannot be empty or whitespace",
        ));
    }

    let mut translation = String::with_capacity(phrase.len() + phrase.len() / 2);
    let mut words_translated = 0;

    for segment in segments(phrase) {
        match segment {
            Segment::Word(word) => {
                translation.push_str(&translate_word(word));
                words_translated += 1;
            }
            Segment::Gap(gap) => translation.push_str(gap),
        }
    }

    debug!("Translated {} words", words_translated);

    Ok(TranslationResult {
        translation,
        words_translated,
    })
}

/// Rewrite a single word
///
/// `word` is expected to start with a letter; anything else up to the next
/// separator travels with it.
pub fn translate_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let vowel_index = rules::find_vowel_index(&lower);

    let mut result = String::with_capacity(lower.len() + VOWEL_SUFFIX.len());
    if vowel_index == 0 {
        result.push_str(&lower);
        result.push_str(VOWEL_SUFFIX);
    } else {
        // No vowel puts the index at the end, so the whole word is the cluster
        result.push_str(&lower[vowel_index..]);
        result.push_str(&lower[..vowel_index]);
        result.push_str(CONSONANT_SUFFIX);
    }

    if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        if let Some(first) = result.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
    }

    result
}

/// Split a phrase into words and the gaps between them
pub fn segments(phrase: &str) -> Segments<'_> {
    Segments { rest: phrase }
}

/// Iterator over the [`Segment`]s of a phrase
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        let (segment, rest) = if rules::is_letter(first) {
            let (word, rest) = self.rest.split_at(rules::find_separator_index(self.rest));
            (Segment::Word(word), rest)
        } else {
            let end = self.rest.find(rules::is_letter).unwrap_or(self.rest.len());
            let (gap, rest) = self.rest.split_at(end);
            (Segment::Gap(gap), rest)
        };

        self.rest = rest;
        Some(segment)
    }
}
