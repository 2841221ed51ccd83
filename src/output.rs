//! Plain-text rendering of results for the command line.

use crate::models::{Suggestion, WordScore};
use crate::services::rack::Rack;

pub fn describe_word(word: &WordScore) -> String {
    format!("- {} ({} points)", word.word, word.score)
}

pub fn describe_suggestion(rack: &Rack, suggestion: &Suggestion) -> String {
    let mut line = format!("- {}. You need", suggestion.word);

    // with blanks only some of the listed letters have to be drawn
    if rack.has_blanks() {
        line.push_str(&format!(" {} of", suggestion.draws_required));
    }
    let letters: Vec<String> = suggestion.letters_needed.iter().map(char::to_string).collect();
    line.push_str(&format!(" these letter(s): [{}]", letters.join(",")));

    let range = suggestion.score_range;
    line.push_str(&format!(", for a total score of {}", range.low));
    if !range.is_exact() {
        line.push_str(&format!(" to {}", range.high));
    }
    line
}

/// The full report: makeable words, then suggestions if they were asked for.
pub fn render(rack: &Rack, words: &[WordScore], suggestions: Option<&[Suggestion]>) -> String {
    let mut out = format!("Letters: '{}'\n", rack);
    out.push_str("\nWith these letters you can make:\n");
    out.push_str(&words.iter().map(describe_word).collect::<Vec<_>>().join("\n"));

    match suggestions {
        Some(list) if !list.is_empty() => {
            out.push_str("\n\nPerhaps you should try going for:\n");
            let lines: Vec<String> = list.iter().map(|s| describe_suggestion(rack, s)).collect();
            out.push_str(&lines.join("\n"));
        }
        Some(_) => out.push_str("\nNo idea what to go for."),
        None => {}
    }
    out
}
