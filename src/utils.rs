use std::collections::HashMap;

/// A multiset of letters (letter -> count).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
}

impl LetterCounts {
    /// Count the alphabetic characters of `text`. Blanks and anything else are ignored.
    pub fn from_letters(text: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in text.chars() {
            if ch.is_alphabetic() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
        LetterCounts { counts }
    }

    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, counting repeats.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of different letters.
    pub fn distinct(&self) -> usize {
        self.counts.values().filter(|&&count| count > 0).count()
    }

    /// Letter-wise minimum of both multisets.
    pub fn intersection(&self, other: &LetterCounts) -> LetterCounts {
        let counts = self
            .counts
            .iter()
            .filter_map(|(&ch, &count)| {
                let shared = count.min(other.get(ch));
                (shared > 0).then_some((ch, shared))
            })
            .collect();
        LetterCounts { counts }
    }

    /// Letter-wise saturating subtraction: what `self` has beyond `other`.
    pub fn difference(&self, other: &LetterCounts) -> LetterCounts {
        let counts = self
            .counts
            .iter()
            .filter_map(|(&ch, &count)| {
                let extra = count.saturating_sub(other.get(ch));
                (extra > 0).then_some((ch, extra))
            })
            .collect();
        LetterCounts { counts }
    }

    /// Every letter repeated by its count, alphabetically.
    pub fn elements(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .counts
            .iter()
            .flat_map(|(&ch, &count)| std::iter::repeat(ch).take(count))
            .collect();
        letters.sort_unstable();
        letters
    }
}

/// Letters of `word` not covered by `held`, in the order they appear in the word.
pub fn letters_missing(word: &str, held: &LetterCounts) -> Vec<char> {
    let mut used: HashMap<char, usize> = HashMap::new();
    let mut missing = Vec::new();

    for ch in word.chars() {
        let seen = used.entry(ch).or_insert(0);
        *seen += 1;
        if *seen > held.get(ch) {
            missing.push(ch);
        }
    }

    missing
}

/// Check if a word can be formed using only the available letters,
/// with each wildcard standing in for one missing letter. No two wildcards
/// stand in for the same letter.
pub fn contains_only_letters(word: &str, letters: &LetterCounts, wildcards: usize) -> bool {
    let deficit = LetterCounts::from_letters(word).difference(letters);
    let non_letters = word.chars().filter(|ch| !ch.is_alphabetic()).count();

    non_letters == 0 && deficit.len() <= wildcards && deficit.len() == deficit.distinct()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(text: &str) -> LetterCounts {
        LetterCounts::from_letters(text)
    }

    #[test]
    fn test_from_letters_ignores_blanks() {
        let letters = counts("ze ra");
        assert_eq!(letters.len(), 4);
        assert_eq!(letters.get('z'), 1);
        assert_eq!(letters.get('b'), 0);
        assert!(counts("  ").is_empty());
    }

    #[test]
    fn test_intersection_takes_minimum() {
        let shared = counts("hello").intersection(&counts("lolly"));
        assert_eq!(shared.elements(), vec!['l', 'l', 'o']);

        let none = counts("abc").intersection(&counts("xyz"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_difference_saturates() {
        let extra = counts("zebra").difference(&counts("ebr"));
        assert_eq!(extra.elements(), vec!['a', 'z']);

        let nothing = counts("ab").difference(&counts("aabbcc"));
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_letters_missing_keeps_word_order() {
        assert_eq!(letters_missing("zebra", &counts("ebr")), vec!['z', 'a']);
        assert_eq!(letters_missing("banana", &counts("ban")), vec!['a', 'n', 'a']);
        assert!(letters_missing("dog", &counts("godly")).is_empty());
    }

    #[test]
    fn test_contains_only_letters() {
        // Word can be formed from available letters
        assert!(contains_only_letters("hello", &counts("helloworld"), 0));
        assert!(contains_only_letters("hello", &counts("ollhe"), 0));

        // Word cannot be formed - missing letters
        assert!(!contains_only_letters("hello", &counts("hel"), 0));
        assert!(!contains_only_letters("hello", &counts("xyz"), 0));
    }

    #[test]
    fn test_contains_only_letters_duplicates() {
        assert!(contains_only_letters("aardvark", &counts("aardvarkxyz"), 0));

        // Needs 2 l's, only 1 available
        assert!(!contains_only_letters("hello", &counts("hewoxrld"), 0));
        assert!(!contains_only_letters("llll", &counts("ll"), 0));
    }

    #[test]
    fn test_contains_only_letters_with_wildcards() {
        assert!(contains_only_letters("hello", &counts("helo"), 1));
        assert!(contains_only_letters("llll", &counts("lll"), 2));
        assert!(!contains_only_letters("llll", &counts("ll"), 1));
        assert!(contains_only_letters("zebra", &counts(""), 5));
    }

    #[test]
    fn test_wildcards_never_repeat_a_letter() {
        assert!(!contains_only_letters("llll", &counts("ll"), 2));
        assert!(!contains_only_letters("ee", &counts(""), 2));
        assert!(contains_only_letters("ed", &counts(""), 2));
    }

    #[test]
    fn test_distinct() {
        assert_eq!(counts("banana").distinct(), 3);
        assert_eq!(counts("").distinct(), 0);
    }
}
