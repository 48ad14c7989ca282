// File: src/suggest.rs
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::types::{MAX_WORD_LEN, MIN_WORD_LEN};

// Suggestion replies arrive as prose wrapping a quoted list, so anything
// between quotes is taken as a suggested word. Unlike an earlier revision of
// this scraper, a final list element without a trailing comma still counts.
static QUOTED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["'](\w+)["']"#).unwrap());

#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The service could not be reached or refused the request.
    #[error("suggestion service unavailable: {0}")]
    Unavailable(String),

    /// The reply parsed to no words at all.
    #[error("no usable words in the service reply")]
    EmptyReply,
}

/// Proposes marketing words from a free-text description of the caller's
/// organization. Implementations own their transport; the rest of the
/// program only ever sees the word list.
pub trait SuggestionService {
    fn suggest_words(&self, description: &str) -> Result<Vec<String>, SuggestionError>;
}

/// Pulls the quoted words out of a free-text service reply, in reply order.
pub fn extract_word_list(reply: &str) -> Vec<String> {
    QUOTED_WORD
        .captures_iter(reply)
        .map(|capture| capture[1].to_string())
        .collect()
}

/// Keeps only words a toll-free tail can actually advertise: long enough to
/// read as a word, short enough to fit the seven trailing digits.
pub fn filter_spellable(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.chars().count()))
        .collect()
}

/// Offline stand-in that replays a canned reply regardless of the
/// description. Useful wherever the real transport is out of reach, and in
/// tests.
pub struct ScriptedSuggestions {
    reply: String,
}

impl ScriptedSuggestions {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl Default for ScriptedSuggestions {
    fn default() -> Self {
        Self::new(CANNED_REPLY)
    }
}

const CANNED_REPLY: &str = r#"Sure! Here is a list of words that can be spelled using the last 4-7 digits of a 1-800 number:

words = [
    "FAST",
    "TAXI",
    "RIDE",
    "CALL",
    "CAB",
    "DRIVE",
    "LIMO",
    "CARS",
    "MOVE",
    "RUSH",
    "SPEEDY"
]"#;

impl SuggestionService for ScriptedSuggestions {
    fn suggest_words(&self, _description: &str) -> Result<Vec<String>, SuggestionError> {
        let words = extract_word_list(&self.reply);
        if words.is_empty() {
            return Err(SuggestionError::EmptyReply);
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_quoted_words_from_prose() {
        let reply = "Here you go: [\"FAST\", \"TAXI\", 'ride']";
        assert_eq!(extract_word_list(reply), vec!["FAST", "TAXI", "ride"]);
    }

    #[test]
    fn test_last_element_without_comma_is_kept() {
        let reply = "[\"CAB\",\n\"MOVE\"]";
        assert_eq!(extract_word_list(reply), vec!["CAB", "MOVE"]);
    }

    #[test]
    fn test_filter_spellable_drops_unusable_lengths() {
        let words = vec![
            "go".to_string(),
            "cab".to_string(),
            "drivers".to_string(),
            "speediest".to_string(),
        ];
        assert_eq!(filter_spellable(words), vec!["cab", "drivers"]);
    }

    #[test]
    fn test_scripted_service_replays_reply() {
        let service = ScriptedSuggestions::default();
        let words = service.suggest_words("a speedy taxi company").unwrap();
        assert!(words.contains(&"TAXI".to_string()));
        assert!(words.len() >= 10);
    }

    #[test]
    fn test_scripted_service_with_wordless_reply_errors() {
        let service = ScriptedSuggestions::new("no list here, sorry");
        assert!(matches!(
            service.suggest_words("anything"),
            Err(SuggestionError::EmptyReply)
        ));
    }
}
