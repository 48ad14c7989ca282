// File: src/core/matcher.rs
use crate::core::encoder::WordEncoder;
use crate::error::FinderError;

/// Scans an ordered pool of candidate numbers for one that advertises a
/// desired word or digit tail.
pub struct AvailabilityMatcher {
    encoder: WordEncoder,
}

impl AvailabilityMatcher {
    pub fn new() -> Self {
        Self {
            encoder: WordEncoder::new(),
        }
    }

    /// Returns the first pool entry whose digits end with the word's
    /// encoding, or None when nothing in the pool matches. The scan stops at
    /// the first hit.
    pub fn find_by_word<S: AsRef<str>>(
        &self,
        word: &str,
        pool: &[S],
    ) -> Result<Option<String>, FinderError> {
        let suffix = self.encoder.encode(word);
        self.find_by_suffix(&suffix, pool)
    }

    /// Same scan for a caller-resolved digit tail. The test is ends-with;
    /// target digits buried mid-number do not count. An empty tail would
    /// match every entry, so it is rejected instead of returning the first
    /// one.
    pub fn find_by_suffix<S: AsRef<str>>(
        &self,
        suffix: &str,
        pool: &[S],
    ) -> Result<Option<String>, FinderError> {
        if suffix.is_empty() {
            return Err(FinderError::InvalidQuery(
                "empty target suffix".to_string(),
            ));
        }
        Ok(pool
            .iter()
            .map(|entry| entry.as_ref())
            .find(|entry| entry.ends_with(suffix))
            .map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_number_ending_with_word() {
        let matcher = AvailabilityMatcher::new();
        let pool = ["18002278779", "18004444364"];
        assert_eq!(
            matcher.find_by_word("puppy", &pool).unwrap(),
            Some("18002278779".to_string())
        );
        assert_eq!(
            matcher.find_by_word("dog", &pool).unwrap(),
            Some("18004444364".to_string())
        );
    }

    #[test]
    fn test_reports_not_found() {
        let matcher = AvailabilityMatcher::new();
        let pool = ["18007777777", "18008888888"];
        assert_eq!(matcher.find_by_word("puppy", &pool).unwrap(), None);
        assert_eq!(matcher.find_by_word("dog", &pool).unwrap(), None);
        let empty: [&str; 0] = [];
        assert_eq!(matcher.find_by_word("dog", &empty).unwrap(), None);
    }

    #[test]
    fn test_match_is_suffix_exact_not_substring() {
        let matcher = AvailabilityMatcher::new();
        // "puppy" dials 78779, present here only mid-number
        let pool = ["18078779000"];
        assert_eq!(matcher.find_by_word("puppy", &pool).unwrap(), None);
    }

    #[test]
    fn test_empty_suffix_is_rejected() {
        let matcher = AvailabilityMatcher::new();
        let pool = ["18002278779"];
        assert!(matches!(
            matcher.find_by_suffix("", &pool),
            Err(FinderError::InvalidQuery(_))
        ));
        // an all-punctuation word encodes to nothing and must fail the same way
        assert!(matches!(
            matcher.find_by_word("!!", &pool),
            Err(FinderError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_find_by_suffix_directly() {
        let matcher = AvailabilityMatcher::new();
        let pool = ["18002278779", "18004444364"];
        assert_eq!(
            matcher.find_by_suffix("4364", &pool).unwrap(),
            Some("18004444364".to_string())
        );
        assert_eq!(matcher.find_by_suffix("99999", &pool).unwrap(), None);
    }
}
