use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use log::{debug, info, warn};

use crate::services::dictionary::Dictionary;

/// Load words from a plain text file (one word per line), lowercased.
/// Lines holding anything other than letters are skipped.
pub fn load_words<P: AsRef<Path>>(file_path: P) -> io::Result<HashSet<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut words = HashSet::new();
    let mut skipped = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.chars().all(char::is_alphabetic) {
            words.insert(word.to_lowercase());
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!("Skipped {} entries with non-letter characters.", skipped);
    }
    Ok(words)
}

/// Load the main word list and apply insertions and deletions from `share_dir`.
/// A missing main list yields an empty dictionary.
pub fn load_filtered_words<P: AsRef<Path>>(share_dir: P) -> Dictionary {
    let share_dir = share_dir.as_ref();

    let valid_path = share_dir.join("words.txt");
    let custom_path = share_dir.join("insertions.txt");
    let censored_path = share_dir.join("deletions.txt");

    let mut words = load_words(&valid_path).unwrap_or_else(|e| {
        warn!("Failed to load word list at {}: {}. No words loaded.", valid_path.display(), e);
        HashSet::new()
    });

    if let Ok(custom) = load_words(&custom_path) {
        info!("Inserted {} words into the word list.", custom.len());
        words.extend(custom);
    }

    if let Ok(censored) = load_words(&censored_path) {
        info!("Deleted {} words from the word list.", censored.len());
        for word in censored {
            words.remove(&word);
        }
    }

    info!("Total valid words: {}", words.len());
    Dictionary::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_words_normalises() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "Bat\n  banana \n\nshoe\ndon't\ndog\n").unwrap();

        let words = load_words(&path).unwrap();
        let expected: HashSet<String> =
            ["bat", "banana", "shoe", "dog"].iter().map(|w| w.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_load_words_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_words(dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_load_filtered_words_applies_insertions_and_deletions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("words.txt"), "bat\nbanana\nshoe\n").unwrap();
        fs::write(dir.path().join("insertions.txt"), "dog\n").unwrap();
        fs::write(dir.path().join("deletions.txt"), "banana\n").unwrap();

        let dict = load_filtered_words(dir.path());
        assert_eq!(dict.sorted_words(), &["bat", "dog", "shoe"]);
    }

    #[test]
    fn test_load_filtered_words_without_word_list_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("insertions.txt"), "dog\n").unwrap();

        // insertions still apply on top of an empty base list
        let dict = load_filtered_words(dir.path());
        assert_eq!(dict.sorted_words(), &["dog"]);

        let empty = TempDir::new().unwrap();
        assert!(load_filtered_words(empty.path()).is_empty());
    }
}
