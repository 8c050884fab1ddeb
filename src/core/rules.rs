//! Fixed character classes used by the translator

/// Characters that end a word and are copied to the output verbatim
pub const SEPARATORS: [char; 6] = [' ', '-', '?', '.', ',', '!'];

/// Lower-case vowels; words are lower-cased before lookup
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Suffix for words starting with a vowel
pub const VOWEL_SUFFIX: &str = "yay";

/// Suffix for words starting with a consonant cluster
pub const CONSONANT_SUFFIX: &str = "ay";

/// Check if a character starts a word
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character is one of the fixed separators
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Check if a character is a vowel, ignoring case
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Byte index of the first separator in `source`, or its length if there is none
pub fn find_separator_index(source: &str) -> usize {
    source.find(is_separator).unwrap_or(source.len())
}

/// Byte index of the first vowel in `source`, or its length if there is none
pub fn find_vowel_index(source: &str) -> usize {
    source
        .char_indices()
        .find(|(_, c)| is_vowel(*c))
        .map(|(i, _)| i)
        .unwrap_or(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_index() {
        assert_eq!(find_separator_index("hello world"), 5);
        assert_eq!(find_separator_index("well-known"), 4);
        assert_eq!(find_separator_index("what?"), 4);
        assert_eq!(find_separator_index("plain"), 5);
        // Apostrophes and digits do not end a word
        assert_eq!(find_separator_index("don't stop"), 5);
        assert_eq!(find_separator_index("abc123"), 6);
    }

    #[test]
    fn test_vowel_index() {
        assert_eq!(find_vowel_index("apple"), 0);
        assert_eq!(find_vowel_index("smile"), 2);
        assert_eq!(find_vowel_index("Glove"), 2);
        assert_eq!(find_vowel_index("rhythm"), 6);
        assert_eq!(find_vowel_index(""), 0);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('1'));
        assert!(!is_letter('é'));

        assert!(is_separator('!'));
        assert!(!is_separator('\''));
        assert!(!is_separator('\t'));

        assert!(is_vowel('E'));
        assert!(!is_vowel('y'));
    }
}
