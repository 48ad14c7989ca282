// File: src/core/decoder.rs
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::core::keypad::KeypadMap;
use crate::core::types::{DigitSequence, MIN_WORD_LEN};
use crate::error::FinderError;
use crate::lexicon::DictionaryOracle;

/// Expands a digit sequence into every dictionary word its trailing digits
/// can spell.
///
/// The search walks the Cartesian product of the per-position letter sets
/// (at most 4^7 = 16384 full-length candidates), then checks each
/// candidate's suffixes of length 3 and up against the oracle. Advertisers
/// usually spell a word with only the last few digits of a number, so the
/// shorter suffixes matter as much as the full span.
pub struct WordDecoder {
    keypad: KeypadMap,
    oracle: Arc<dyn DictionaryOracle>,
    locale: String,
}

impl WordDecoder {
    pub fn new(oracle: Arc<dyn DictionaryOracle>, locale: &str) -> Self {
        Self {
            keypad: KeypadMap::new(),
            oracle,
            locale: locale.to_string(),
        }
    }

    /// Distinct words in first-found order. If the oracle cannot answer, the
    /// whole decode fails; a partial solution set would silently
    /// under-report matches.
    pub fn decode(&self, sequence: &DigitSequence) -> Result<Vec<String>, FinderError> {
        self.decode_digits(sequence.digits())
    }

    fn decode_digits(&self, digits: &[char]) -> Result<Vec<String>, FinderError> {
        let sets: Vec<Vec<char>> = digits
            .iter()
            .map(|&digit| self.candidate_letters(digit))
            .collect();

        let mut solutions: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = 0usize;
        for candidate in CartesianWords::new(&sets) {
            candidates += 1;
            if candidate.len() < MIN_WORD_LEN {
                continue;
            }
            for start in 0..=candidate.len() - MIN_WORD_LEN {
                let tail = &candidate[start..];
                if self.oracle.is_valid_word(tail, &self.locale)? && !seen.contains(tail) {
                    seen.insert(tail.to_string());
                    solutions.push(tail.to_string());
                }
            }
        }
        debug!(candidates, words = solutions.len(), "decode finished");
        Ok(solutions)
    }

    /// Letters a position can take. '0' and '1' carry no letters, so they
    /// stand for themselves instead of acting as wildcards.
    fn candidate_letters(&self, digit: char) -> Vec<char> {
        let letters = self.keypad.letters(digit);
        if letters.is_empty() {
            vec![digit]
        } else {
            letters.to_vec()
        }
    }
}

/// Iterator over every string formed by picking one character from each set,
/// in set order. The number of positions is whatever the caller supplies;
/// nothing here assumes seven digits.
struct CartesianWords<'a> {
    sets: &'a [Vec<char>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> CartesianWords<'a> {
    fn new(sets: &'a [Vec<char>]) -> Self {
        Self {
            sets,
            indices: vec![0; sets.len()],
            done: sets.iter().any(|set| set.is_empty()),
        }
    }
}

impl Iterator for CartesianWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let word: String = self
            .indices
            .iter()
            .zip(self.sets)
            .map(|(&i, set)| set[i])
            .collect();

        // Advance like an odometer, rightmost position fastest.
        self.done = true;
        for pos in (0..self.sets.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                self.done = false;
                break;
            }
            self.indices[pos] = 0;
        }
        Some(word)
    }
}
