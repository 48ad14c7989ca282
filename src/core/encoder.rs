use crate::core::keypad::KeypadMap;

/// Turns a desired word into the digit string that dials it.
pub struct WordEncoder {
    keypad: KeypadMap,
}

impl WordEncoder {
    pub fn new() -> Self {
        Self {
            keypad: KeypadMap::new(),
        }
    }

    /// Encodes a search term. Case does not matter, numerals keep their own
    /// digit, and characters with no key assignment (punctuation,
    /// whitespace) are skipped rather than substituted. An empty term
    /// encodes to an empty string.
    pub fn encode(&self, term: &str) -> String {
        term.chars()
            .filter_map(|c| self.keypad.digit_for_char(c))
            .collect()
    }

    /// Same encoding, but numerals are dropped along with punctuation. Some
    /// callers want a purely alphabetic reading of the term.
    pub fn encode_letters_only(&self, term: &str) -> String {
        term.chars()
            .filter_map(|c| self.keypad.digit_for_letter(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_literal_words() {
        let encoder = WordEncoder::new();
        assert_eq!(encoder.encode("peach"), "73224");
        assert_eq!(encoder.encode("plum"), "7586");
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        let encoder = WordEncoder::new();
        assert_eq!(encoder.encode("Peach"), "73224");
        assert_eq!(encoder.encode("PEACH"), "73224");
    }

    #[test]
    fn test_encode_skips_unmapped_characters() {
        let encoder = WordEncoder::new();
        assert_eq!(encoder.encode("pe ach"), "73224");
        assert_eq!(encoder.encode("peach."), "73224");
    }

    #[test]
    fn test_encode_passes_numerals_through() {
        let encoder = WordEncoder::new();
        assert_eq!(encoder.encode("peach1"), "732241");
        assert_eq!(encoder.encode_letters_only("peach1"), "73224");
    }

    #[test]
    fn test_encode_empty_is_empty() {
        let encoder = WordEncoder::new();
        assert_eq!(encoder.encode(""), "");
        assert_eq!(encoder.encode("!?"), "");
    }
}
