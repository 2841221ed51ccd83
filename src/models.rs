use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::services::dictionary::Dictionary;

/// Application state shared across all handlers
pub struct AppState {
    pub dictionary: Dictionary,
    pub default_count: usize,
}

/// A makeable word and its value given the held tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub score: u32,
}

/// Best and worst case score of a suggestion. Equal ends when no blanks are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub low: u32,
    pub high: u32,
}

impl ScoreRange {
    pub fn exact(score: u32) -> Self {
        ScoreRange { low: score, high: score }
    }

    pub fn is_exact(&self) -> bool {
        self.low == self.high
    }
}

/// A word one edit away from something makeable, with what it takes to get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    /// Letters not on the rack, in the order they appear in the word.
    pub letters_needed: Vec<char>,
    /// How many of `letters_needed` must still be drawn once blanks are used.
    pub draws_required: usize,
    pub score_range: ScoreRange,
}

#[derive(Serialize, Deserialize)]
pub struct WordsResponse {
    pub tiles: String,
    pub words: Vec<WordScore>,
}

#[derive(Serialize, Deserialize)]
pub struct SuggestResponse {
    pub tiles: String,
    pub words: Vec<WordScore>,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Serialize, Deserialize)]
pub struct WordCheckResponse {
    pub word: String,
    pub valid: bool,
    pub alternatives: Vec<String>,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub letter_values: BTreeMap<char, u32>,
    pub max_tiles: usize,
    pub max_blanks: usize,
    pub word_count: usize,
}

#[derive(Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}
