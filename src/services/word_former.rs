use std::collections::{BTreeSet, HashSet};
use itertools::Itertools;
use log::debug;

use crate::models::WordScore;
use crate::services::dictionary::Dictionary;
use crate::services::rack::Rack;
use crate::services::scoring::{score, ALPHABET};

/// Shortest playable word.
pub const MIN_WORD_LEN: usize = 2;

/// Finds every dictionary word that can be laid down from a rack.
pub struct WordFormer<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordFormer<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        WordFormer { dictionary }
    }

    /// All words formable from a subset (of at least two tiles) of the rack.
    ///
    /// Each blank is tried as every letter, with the blanks of one rack taking
    /// distinct letters. Subsets with the same letters are permuted only once.
    pub fn form_words(&self, rack: &Rack) -> BTreeSet<String> {
        let candidates = blank_fillings(rack);

        let mut subsets: HashSet<Vec<char>> = HashSet::new();
        for candidate in &candidates {
            for size in MIN_WORD_LEN..=candidate.len() {
                for mut combo in candidate.iter().copied().combinations(size) {
                    combo.sort_unstable();
                    subsets.insert(combo);
                }
            }
        }

        let mut found = BTreeSet::new();
        for subset in &subsets {
            for permutation in subset.iter().permutations(subset.len()) {
                let word: String = permutation.into_iter().collect();
                if self.dictionary.contains(&word) {
                    found.insert(word);
                }
            }
        }

        debug!(
            "Rack '{}': {} blank fillings, {} letter subsets, {} words",
            rack,
            candidates.len(),
            subsets.len(),
            found.len()
        );
        found
    }

    /// The `n` best makeable words, scored only on the letters actually held.
    /// Ties go to the alphabetically first word.
    pub fn top_words(&self, rack: &Rack, n: usize) -> Vec<WordScore> {
        rank_words(rack, self.form_words(rack), n)
    }
}

/// Score `words` against the letters held on `rack` and keep the best `n`.
pub fn rank_words<I>(rack: &Rack, words: I, n: usize) -> Vec<WordScore>
where
    I: IntoIterator<Item = String>,
{
    let held = rack.letter_counts();
    let mut scored: Vec<WordScore> = words
        .into_iter()
        .map(|word| {
            let score = score(&word, Some(&held));
            WordScore { word, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    scored.truncate(n);
    scored
}

/// The rack's letters with each blank replaced, once per distinct combination of letters.
fn blank_fillings(rack: &Rack) -> Vec<Vec<char>> {
    let letters = rack.letters().to_vec();
    if !rack.has_blanks() {
        return vec![letters];
    }

    ALPHABET
        .iter()
        .copied()
        .combinations(rack.blank_count())
        .map(|fill| letters.iter().copied().chain(fill).collect())
        .collect()
}
