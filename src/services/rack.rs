use std::fmt;

use crate::error::RackError;
use crate::services::word_former::MIN_WORD_LEN;
use crate::utils::{contains_only_letters, LetterCounts};

/// Most tiles a player can hold.
pub const MAX_TILES: usize = 7;
/// Blanks in a standard tile set.
pub const MAX_BLANKS: usize = 2;
/// Canonical blank marker.
pub const BLANK: char = ' ';
/// URL-friendly alias for a blank.
pub const BLANK_ALIAS: char = '_';

/// A validated set of tiles: letters (lowercase, in input order) plus blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    /// Tiles as given, lowercased, with every blank written as `BLANK`.
    tiles: String,
    letters: Vec<char>,
    blanks: usize,
}

impl Rack {
    /// Validate a raw tile string. Uppercase letters are folded to lowercase
    /// and `_` is read as a blank.
    pub fn parse(tiles: &str) -> Result<Rack, RackError> {
        let len = tiles.chars().count();
        if len > MAX_TILES {
            return Err(RackError::TooManyTiles { len, max: MAX_TILES });
        }

        let mut normalised = String::with_capacity(len);
        let mut letters = Vec::with_capacity(len);
        let mut blanks = 0;
        for ch in tiles.chars() {
            match ch {
                BLANK | BLANK_ALIAS => {
                    blanks += 1;
                    normalised.push(BLANK);
                }
                c if c.is_ascii_alphabetic() => {
                    let c = c.to_ascii_lowercase();
                    letters.push(c);
                    normalised.push(c);
                }
                c => return Err(RackError::InvalidCharacter(c)),
            }
        }

        if blanks > MAX_BLANKS {
            return Err(RackError::TooManyBlanks { count: blanks, max: MAX_BLANKS });
        }

        Ok(Rack { tiles: normalised, letters, blanks })
    }

    /// The non-blank tiles.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn blank_count(&self) -> usize {
        self.blanks
    }

    pub fn has_blanks(&self) -> bool {
        self.blanks > 0
    }

    pub fn len(&self) -> usize {
        self.letters.len() + self.blanks
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Multiset of the held letters, blanks excluded.
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.letters.iter().collect::<String>())
    }

    /// Whether `word` is playable from the rack: at least two letters, each
    /// one held or supplied by a blank. Two blanks never stand for the same
    /// letter, matching the fillings tried when forming words.
    pub fn can_form(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LEN
            && contains_only_letters(word, &self.letter_counts(), self.blanks)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tiles)
    }
}
