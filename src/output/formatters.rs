//! Formatting utilities for terminal output

use crate::core::{Clue, Clues, LetterAggregate};
use colored::{Color, ColoredString, Colorize};

/// On-screen keyboard rows; `B` is backspace and `E` is enter
pub const KEYBOARD_LAYOUT: &str = "qwertyuiop-asdfghjkl-BzxcvbnmE";

/// Tile colour for a clue; `None` for untouched cells
#[must_use]
pub const fn clue_color(clue: Option<Clue>, color_blind: bool) -> Option<Color> {
    match (clue, color_blind) {
        (None, _) => None,
        (Some(Clue::Absent), _) => Some(Color::BrightBlack),
        (Some(Clue::Elsewhere), false) => Some(Color::Yellow),
        (Some(Clue::Elsewhere), true) => Some(Color::Blue),
        (Some(Clue::Correct), false) => Some(Color::Green),
        (Some(Clue::Correct), true) => Some(Color::TrueColor {
            r: 245,
            g: 121,
            b: 58,
        }),
    }
}

fn tile(label: &str, clue: Option<Clue>, color_blind: bool) -> ColoredString {
    match clue_color(clue, color_blind) {
        Some(color) => label.black().bold().on_color(color),
        None => label.bold(),
    }
}

/// Format a clue row as coloured letter tiles
#[must_use]
pub fn format_clue_row(clues: &Clues, color_blind: bool) -> String {
    clues
        .iter()
        .map(|cell| {
            let label = format!(" {} ", char::from(cell.letter).to_ascii_uppercase());
            tile(&label, cell.clue, color_blind).to_string()
        })
        .collect()
}

/// Format the keyboard rows tinted with the best clue seen per letter
#[must_use]
pub fn format_keyboard(aggregate: &LetterAggregate, color_blind: bool) -> Vec<String> {
    KEYBOARD_LAYOUT
        .split('-')
        .map(|row| {
            row.bytes()
                .filter(u8::is_ascii_lowercase)
                .map(|key| {
                    let label = format!(" {} ", char::from(key).to_ascii_uppercase());
                    tile(&label, aggregate.get(key), color_blind).to_string()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn clue_colors_follow_palette() {
        assert_eq!(clue_color(None, false), None);
        assert_eq!(clue_color(Some(Clue::Correct), false), Some(Color::Green));
        assert_eq!(clue_color(Some(Clue::Elsewhere), true), Some(Color::Blue));
        assert_ne!(
            clue_color(Some(Clue::Correct), true),
            clue_color(Some(Clue::Correct), false)
        );
    }

    #[test]
    fn clue_row_shows_uppercase_letters() {
        let clues = Clues::calculate(&Word::new("north").unwrap(), &Word::new("bleak").unwrap());
        let row = format_clue_row(&clues, false);
        for label in [" N ", " O ", " R ", " T ", " H "] {
            assert!(row.contains(label), "{label} missing from {row:?}");
        }
    }

    #[test]
    fn keyboard_has_three_letter_rows() {
        let rows = format_keyboard(&LetterAggregate::default(), false);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" Q ") && rows[0].contains(" P "));
        assert!(rows[1].contains(" A ") && rows[1].contains(" L "));
        assert!(rows[2].contains(" Z ") && rows[2].contains(" M "));
        assert!(!rows[2].contains(" E "));
    }
}
