//! Scrabble rack solver.
//!
//! Given up to seven tiles (blanks included) and a word list, `rackd` finds
//! every playable word, scores it, and suggests words one edit away that are
//! worth drawing towards.

pub mod error;
pub mod handlers;
pub mod models;
pub mod output;
pub mod services;
pub mod utils;

pub use crate::error::RackError;
pub use crate::models::{ScoreRange, Suggestion, WordScore};
pub use crate::services::dictionary::Dictionary;
pub use crate::services::fuzzy::{FuzzyMatcher, SearchStep};
pub use crate::services::rack::Rack;
pub use crate::services::suggestion::SuggestionRanker;
pub use crate::services::word_former::WordFormer;
