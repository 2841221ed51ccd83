use std::collections::HashSet;
use log::debug;

use crate::services::dictionary::Dictionary;
use crate::services::scoring::ALPHABET;

/// One strategy of the alternative-word search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// Swap each adjacent pair of letters: bird -> ibrd, brid, brdi.
    Swap,
    /// Drop one letter: bird -> ird, brd, bid, bir.
    Remove,
    /// Insert a letter into each gap: bird -> ?bird, b?ird, ..., bird?.
    Add,
    /// Replace one letter: bird -> ?ird, b?rd, bi?d, bir?.
    Substitute,
    /// The alphabetically closest words on either side.
    Nearest,
}

/// Quickest and most likely edits go first.
pub const SEARCH_ORDER: [SearchStep; 5] = [
    SearchStep::Swap,
    SearchStep::Remove,
    SearchStep::Add,
    SearchStep::Substitute,
    SearchStep::Nearest,
];

/// Alternatives found so far and how many more may be taken.
struct Found<'w> {
    word: &'w str,
    words: Vec<String>,
    seen: HashSet<String>,
    limit: usize,
}

impl<'w> Found<'w> {
    fn new(word: &'w str, limit: usize) -> Self {
        Found { word, words: Vec::new(), seen: HashSet::new(), limit }
    }

    fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.words.len())
    }

    fn is_spent(&self) -> bool {
        self.remaining() == 0
    }

    /// Record a dictionary hit unless it is the query or already found.
    /// Returns true once the budget is spent.
    fn take(&mut self, candidate: String) -> bool {
        if candidate != self.word && !self.seen.contains(&candidate) {
            self.seen.insert(candidate.clone());
            self.words.push(candidate);
        }
        self.is_spent()
    }
}

/// Suggests real words a single edit away from an arbitrary string.
/// Borrows the dictionary; never modifies it.
pub struct FuzzyMatcher<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        FuzzyMatcher { dictionary }
    }

    /// Up to `limit` dictionary words close to `word`, excluding `word`
    /// itself, in search order. Without a limit every step runs to the end.
    pub fn alternatives(&self, word: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or_else(|| self.dictionary.len());
        let mut found = Found::new(word, limit);

        for step in SEARCH_ORDER {
            if found.is_spent() {
                break;
            }
            self.run_step(step, word, &mut found);
        }

        debug!("{} alternatives for '{}'", found.words.len(), word);
        found.words
    }

    /// Every match a single step yields for `word`, in that step's order.
    pub fn search(&self, step: SearchStep, word: &str) -> Vec<String> {
        let mut found = Found::new(word, usize::MAX);
        self.run_step(step, word, &mut found);
        found.words
    }

    fn run_step(&self, step: SearchStep, word: &str, found: &mut Found) {
        let letters: Vec<char> = word.chars().collect();
        match step {
            SearchStep::Swap => self.by_swapping(&letters, found),
            SearchStep::Remove => self.by_removing(&letters, found),
            SearchStep::Add => self.by_adding(&letters, found),
            SearchStep::Substitute => self.by_substituting(&letters, found),
            SearchStep::Nearest => self.by_searching(word, found),
        }
    }

    /// Offer `candidate` if it is a real word. Returns true once the budget is spent.
    fn check(&self, candidate: String, found: &mut Found) -> bool {
        if self.dictionary.contains(&candidate) {
            found.take(candidate)
        } else {
            found.is_spent()
        }
    }

    fn by_swapping(&self, letters: &[char], found: &mut Found) {
        for i in 0..letters.len().saturating_sub(1) {
            let mut swapped = letters.to_vec();
            swapped.swap(i, i + 1);
            if self.check(swapped.into_iter().collect(), found) {
                return;
            }
        }
    }

    fn by_removing(&self, letters: &[char], found: &mut Found) {
        for i in 0..letters.len() {
            let shorter = letters[..i].iter().chain(&letters[i + 1..]).collect();
            if self.check(shorter, found) {
                return;
            }
        }
    }

    fn by_adding(&self, letters: &[char], found: &mut Found) {
        for i in 0..=letters.len() {
            for letter in ALPHABET {
                let longer = letters[..i]
                    .iter()
                    .copied()
                    .chain(std::iter::once(letter))
                    .chain(letters[i..].iter().copied())
                    .collect();
                if self.check(longer, found) {
                    return;
                }
            }
        }
    }

    fn by_substituting(&self, letters: &[char], found: &mut Found) {
        for i in 0..letters.len() {
            for letter in ALPHABET {
                if letter == letters[i] {
                    continue;
                }
                let mut changed = letters.to_vec();
                changed[i] = letter;
                if self.check(changed.into_iter().collect(), found) {
                    return;
                }
            }
        }
    }

    fn by_searching(&self, word: &str, found: &mut Found) {
        let (before, after) = self.dictionary.neighbors(word);
        for neighbor in [before, after].into_iter().flatten() {
            if found.take(neighbor.to_string()) {
                return;
            }
        }
    }
}
