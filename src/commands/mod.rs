//! Command implementations
//!
//! Each command is an `impl Engine` block that validates its two inputs, runs the
//! configured search and writes a textual rendering through the engine's writer.
//!
//! - `diff`: the minimal edit script
//! - `trace`: every step record of the search
//! - `snake`: the middle snake of the whole problem

pub mod diff;
pub mod snake;
pub mod trace;

use crate::artifacts::tagged::TaggedString;
use colored::Colorize;

/// A character as it is shown on one output line, with control characters escaped
pub(crate) fn printable(char: char) -> String {
    if char.is_control() {
        char.escape_default().to_string()
    } else {
        char.to_string()
    }
}

/// Renders a tagged string with kept characters bracketed, insertions green and deletions red
pub(crate) fn render_tagged(tagged: &TaggedString) -> String {
    tagged
        .chars()
        .iter()
        .map(|tagged| {
            if tagged.is_kept() {
                format!("[{}]", printable(tagged.char)).normal().to_string()
            } else if tagged.is_inserted() {
                format!("+{}", printable(tagged.char)).green().to_string()
            } else {
                format!("-{}", printable(tagged.char)).red().to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::printable;
    use rstest::rstest;

    #[rstest]
    #[case('a', "a")]
    #[case('é', "é")]
    #[case('\n', "\\n")]
    #[case('\t', "\\t")]
    #[case('\r', "\\r")]
    fn control_characters_are_escaped(#[case] char: char, #[case] shown: &str) {
        assert_eq!(printable(char), shown);
    }
}
