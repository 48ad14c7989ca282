// File: src/lexicon.rs
use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::error::FinderError;
use crate::persistence::{load_compiled, save_compiled};

/// Boolean membership test for "is this string a word", kept behind a trait
/// so the engine has no dependency on any particular lexicon. Implementors
/// must be shareable across worker threads; decodes of separate numbers are
/// independent and a host may fan them out.
pub trait DictionaryOracle: Send + Sync {
    fn is_valid_word(&self, candidate: &str, locale: &str) -> Result<bool, FinderError>;
}

/// A dictionary backed by a plain one-word-per-line wordlist.
pub struct WordlistDictionary {
    pub(crate) words: HashSet<String>,
    pub(crate) locale: String,
}

impl WordlistDictionary {
    /// Load from a file path. A missing or unreadable wordlist means no
    /// decode can be answered, hence the error category.
    pub fn from_file(path: &Path, locale: &str) -> Result<Self, FinderError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FinderError::DictionaryUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::from_str(&content, locale))
    }

    /// Load from string content. Each line holds one word; blank lines and
    /// lines starting with '#' are ignored.
    pub fn from_str(content: &str, locale: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();
        Self {
            words,
            locale: locale.to_string(),
        }
    }

    /// Prefer a compiled cache; fall back to parsing the plain-text source
    /// and leave a fresh cache behind for next time. A cache that cannot be
    /// written only costs the next startup a re-parse.
    pub fn from_cache_or_source(
        cache: &Path,
        source: &Path,
        locale: &str,
    ) -> Result<Self, FinderError> {
        if let Ok(dictionary) = load_compiled(cache) {
            if dictionary.locale == locale {
                return Ok(dictionary);
            }
        }
        let dictionary = Self::from_file(source, locale)?;
        if let Err(e) = save_compiled(&dictionary, cache) {
            warn!(cache = %cache.display(), error = %e, "could not write lexicon cache");
        }
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl DictionaryOracle for WordlistDictionary {
    /// Case-insensitive membership. Asking about a locale other than the one
    /// loaded is not a "no", it is a question this oracle cannot answer.
    fn is_valid_word(&self, candidate: &str, locale: &str) -> Result<bool, FinderError> {
        if locale != self.locale {
            return Err(FinderError::DictionaryUnavailable(format!(
                "loaded locale {} cannot answer for {}",
                self.locale, locale
            )));
        }
        Ok(self.words.contains(&candidate.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_skips_blanks_and_comments() {
        let dictionary = WordlistDictionary::from_str("hello\nworld\n# comment\n\ntest", "en_US");
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_valid_word("hello", "en_US").unwrap());
        assert!(!dictionary.is_valid_word("comment", "en_US").unwrap());
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let dictionary = WordlistDictionary::from_str("Peach", "en_US");
        assert!(dictionary.is_valid_word("peach", "en_US").unwrap());
        assert!(dictionary.is_valid_word("PEACH", "en_US").unwrap());
    }

    #[test]
    fn test_wrong_locale_is_unavailable_not_false() {
        let dictionary = WordlistDictionary::from_str("peach", "en_US");
        assert!(matches!(
            dictionary.is_valid_word("peach", "fr_FR"),
            Err(FinderError::DictionaryUnavailable(_))
        ));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let missing = Path::new("no/such/wordlist.txt");
        assert!(matches!(
            WordlistDictionary::from_file(missing, "en_US"),
            Err(FinderError::DictionaryUnavailable(_))
        ));
    }
}
