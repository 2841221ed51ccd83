use crate::utils::LetterCounts;

/// Letters in the order the standard tile values are listed.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Point value of a single tile. Blanks, and anything that isn't a-z, are worth 0.
pub fn letter_value(letter: char) -> u32 {
    match letter {
        'a' | 'e' | 'i' | 'l' | 'n' | 'o' | 'r' | 's' | 't' | 'u' => 1,
        'd' | 'g' => 2,
        'b' | 'c' | 'm' | 'p' => 3,
        'f' | 'h' | 'v' | 'w' | 'y' => 4,
        'k' => 5,
        'j' | 'x' => 8,
        'q' | 'z' => 10,
        _ => 0,
    }
}

/// Scrabble value of `word`.
///
/// With `available` supplied, only the letters the word shares with it count
/// (a letter scores as many times as it appears in both). That is how letters
/// supplied by blank tiles drop out of a rack's score.
pub fn score(word: &str, available: Option<&LetterCounts>) -> u32 {
    match available {
        Some(letters) => LetterCounts::from_letters(word)
            .intersection(letters)
            .elements()
            .into_iter()
            .map(letter_value)
            .sum(),
        None => word.chars().map(letter_value).sum(),
    }
}

/// Sum of the values of `letters`.
pub fn letters_value(letters: &[char]) -> u32 {
    letters.iter().copied().map(letter_value).sum()
}
