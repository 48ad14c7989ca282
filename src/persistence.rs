// File: src/persistence.rs
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::lexicon::WordlistDictionary;

/// The on-disk snapshot of a compiled wordlist.
#[derive(serde::Serialize, serde::Deserialize)]
struct CompiledLexicon {
    locale: String,
    words: HashSet<String>,
}

/// Writes the snapshot through a named temp file in the target directory, so
/// a crash mid-write never leaves a truncated cache behind.
pub fn save_compiled(dictionary: &WordlistDictionary, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let snapshot = CompiledLexicon {
        locale: dictionary.locale.clone(),
        words: dictionary.words.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &snapshot)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_compiled(path: &Path) -> Result<WordlistDictionary, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: CompiledLexicon = bincode::deserialize_from(reader)?;
    Ok(WordlistDictionary {
        words: snapshot.words,
        locale: snapshot.locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("lexicon.bin");

        let dictionary = WordlistDictionary::from_str("alpha\nbeta\ngamma", "en_US");
        save_compiled(&dictionary, &cache).unwrap();

        let loaded = load_compiled(&cache).unwrap();
        assert_eq!(loaded.locale(), "en_US");
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.words, dictionary.words);
    }

    #[test]
    fn test_load_missing_cache_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_compiled(&dir.path().join("absent.bin")).is_err());
    }
}
