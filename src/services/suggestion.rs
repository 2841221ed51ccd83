use std::collections::BTreeSet;
use log::debug;

use crate::models::{ScoreRange, Suggestion};
use crate::services::dictionary::Dictionary;
use crate::services::fuzzy::FuzzyMatcher;
use crate::services::rack::{Rack, MAX_TILES};
use crate::services::scoring::{letter_value, letters_value, score};
use crate::services::word_former::{WordFormer, MIN_WORD_LEN};
use crate::utils::letters_missing;

/// Proposes words worth drawing towards: not makeable now, but one edit
/// away from something that is.
pub struct SuggestionRanker<'a> {
    former: WordFormer<'a>,
    matcher: FuzzyMatcher<'a>,
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        SuggestionRanker {
            former: WordFormer::new(dictionary),
            matcher: FuzzyMatcher::new(dictionary),
        }
    }

    /// The `n` suggestions with the best possible score.
    pub fn suggest(&self, rack: &Rack, n: usize) -> Vec<Suggestion> {
        let makeable = self.former.form_words(rack);
        self.suggest_from(rack, &makeable, n)
    }

    /// Like [`suggest`](Self::suggest), for callers that already hold the rack's makeable words.
    pub fn suggest_from(&self, rack: &Rack, makeable: &BTreeSet<String>, n: usize) -> Vec<Suggestion> {
        let pool: BTreeSet<String> = makeable
            .iter()
            .flat_map(|word| self.matcher.alternatives(word, None))
            .filter(|alt| !makeable.contains(alt))
            .filter(|alt| (MIN_WORD_LEN..=MAX_TILES).contains(&alt.chars().count()))
            .collect();

        let mut suggestions: Vec<Suggestion> =
            pool.iter().map(|word| describe_suggestion(rack, word)).collect();

        // ties stay alphabetical: the pool is sorted and the sort is stable
        suggestions.sort_by(|a, b| b.score_range.high.cmp(&a.score_range.high));
        suggestions.truncate(n);

        debug!(
            "Rack '{}': {} makeable words, {} candidates, {} suggestions",
            rack,
            makeable.len(),
            pool.len(),
            suggestions.len()
        );
        suggestions
    }
}

/// Letters needed for `word` beyond the rack, and what the word could score.
pub fn describe_suggestion(rack: &Rack, word: &str) -> Suggestion {
    let letters_needed = letters_missing(word, &rack.letter_counts());
    let covered = rack.blank_count().min(blank_candidates(&letters_needed).len());
    let draws_required = letters_needed.len() - covered;
    let score_range = score_range(word, &letters_needed, rack.blank_count());

    Suggestion {
        word: word.to_string(),
        letters_needed,
        draws_required,
        score_range,
    }
}

/// The needed letters a blank could stand in for, cheapest first. Each letter
/// appears once: no two blanks stand for the same letter.
fn blank_candidates(letters_needed: &[char]) -> Vec<char> {
    let mut by_value = letters_needed.to_vec();
    by_value.sort_by_key(|&c| (letter_value(c), c));
    by_value.dedup();
    by_value
}

/// Score bracket for `word` when `blanks` blanks may stand in for some of
/// `letters_needed`. Blanks covering the cheapest letters give the high end,
/// covering the dearest the low end.
///
/// Both ends are below `score(word, None)` as soon as a blank covers anything,
/// and they meet whenever the covered letters are worth the same.
pub fn score_range(word: &str, letters_needed: &[char], blanks: usize) -> ScoreRange {
    let full = score(word, None);
    if blanks == 0 {
        return ScoreRange::exact(full);
    }

    let candidates = blank_candidates(letters_needed);
    let covered = blanks.min(candidates.len());
    let cheapest = &candidates[..covered];
    let dearest = &candidates[candidates.len() - covered..];

    ScoreRange {
        low: full.saturating_sub(letters_value(dearest)),
        high: full.saturating_sub(letters_value(cheapest)),
    }
}
