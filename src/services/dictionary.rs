use std::collections::HashSet;

/// Read-only word list with O(1) membership and a sorted view for
/// neighbour lookups.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    sorted: Vec<String>,
}

impl Dictionary {
    /// Build from already-normalised (lowercase) words.
    pub fn new(words: HashSet<String>) -> Self {
        let mut sorted: Vec<String> = words.iter().cloned().collect();
        sorted.sort_unstable();
        Dictionary { words, sorted }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary::new(words.into_iter().map(Into::into).collect())
    }

    /// Case-sensitive: callers pass lowercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in ascending order.
    pub fn sorted_words(&self) -> &[String] {
        &self.sorted
    }

    /// The words immediately before and after `word` in sorted order,
    /// skipping `word` itself if it is present.
    pub fn neighbors(&self, word: &str) -> (Option<&str>, Option<&str>) {
        let below = self.sorted.partition_point(|w| w.as_str() < word);
        let above = self.sorted.partition_point(|w| w.as_str() <= word);

        let predecessor = below.checked_sub(1).map(|i| self.sorted[i].as_str());
        let successor = self.sorted.get(above).map(String::as_str);
        (predecessor, successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["bat", "banana", "shoe", "dog"])
    }

    #[test]
    fn test_membership() {
        let dict = sample();
        assert!(dict.contains("banana"));
        assert!(!dict.contains("apple"));
        assert_eq!(dict.len(), 4);
        assert!(Dictionary::default().is_empty());
    }

    #[test]
    fn test_sorted_words() {
        assert_eq!(sample().sorted_words(), &["banana", "bat", "dog", "shoe"]);
    }

    #[test]
    fn test_neighbors() {
        let dict = sample();
        assert_eq!(dict.neighbors("ban"), (None, Some("banana")));
        assert_eq!(dict.neighbors("cat"), (Some("bat"), Some("dog")));
        assert_eq!(dict.neighbors("zoo"), (Some("shoe"), None));
    }

    #[test]
    fn test_neighbors_skip_the_word_itself() {
        assert_eq!(sample().neighbors("dog"), (Some("bat"), Some("shoe")));
    }

    #[test]
    fn test_neighbors_of_empty_dictionary() {
        assert_eq!(Dictionary::default().neighbors("dog"), (None, None));
    }
}
