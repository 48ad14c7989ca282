use std::sync::Arc;

use crate::core::decoder::WordDecoder;
use crate::core::encoder::WordEncoder;
use crate::core::matcher::AvailabilityMatcher;
use crate::core::types::DigitSequence;
use crate::error::FinderError;
use crate::lexicon::DictionaryOracle;

/// Locale used when the host does not name one.
pub const DEFAULT_LOCALE: &str = "en_US";

/// The finder engine ties the encoder, decoder and matcher together behind
/// one handle the presentation layer can hold. The dictionary oracle is
/// injected at construction, so tests can substitute a fake one.
pub struct FinderEngine {
    encoder: WordEncoder,
    decoder: WordDecoder,
    matcher: AvailabilityMatcher,
}

impl FinderEngine {
    pub fn new(oracle: Arc<dyn DictionaryOracle>) -> Self {
        Self::with_locale(oracle, DEFAULT_LOCALE)
    }

    pub fn with_locale(oracle: Arc<dyn DictionaryOracle>, locale: &str) -> Self {
        Self {
            encoder: WordEncoder::new(),
            decoder: WordDecoder::new(oracle, locale),
            matcher: AvailabilityMatcher::new(),
        }
    }

    /// Every word the trailing digits of a full 11-character number can
    /// spell, distinct and in first-found order.
    pub fn words_for_number(&self, phone_num: &str) -> Result<Vec<String>, FinderError> {
        let sequence = DigitSequence::prepare(phone_num)?;
        self.decoder.decode(&sequence)
    }

    /// Same search for an already-prepared digit sequence.
    pub fn words_for_digits(&self, sequence: &DigitSequence) -> Result<Vec<String>, FinderError> {
        self.decoder.decode(sequence)
    }

    /// The digit string a desired word dials.
    pub fn number_for_word(&self, word: &str) -> String {
        self.encoder.encode(word)
    }

    /// First pool entry advertising the word, or None when the pool has no
    /// number ending with the word's digits.
    pub fn search_pool_for_word<S: AsRef<str>>(
        &self,
        word: &str,
        pool: &[S],
    ) -> Result<Option<String>, FinderError> {
        self.matcher.find_by_word(word, pool)
    }

    /// First pool entry ending with an already-resolved digit tail.
    pub fn search_pool_for_suffix<S: AsRef<str>>(
        &self,
        suffix: &str,
        pool: &[S],
    ) -> Result<Option<String>, FinderError> {
        self.matcher.find_by_suffix(suffix, pool)
    }
}
