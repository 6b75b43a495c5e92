//! Strict-mode overwrite rewriting.
//!
//! In strict mode the fractional part has a fixed width: edits right of the
//! decimal separator never change the text length. This module turns the
//! host's already-applied insert/delete into the equivalent fixed-width
//! overwrite, producing the candidate text plus the caret the overwrite
//! implies. Edits left of the separator (and anything it does not
//! recognize) fall through to the normal pipeline.

use crate::surface::{EditIntent, EditKind};
use crate::text::find_sub;

/// A rewritten edit: candidate text and the caret to use if it is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrictOutcome {
    pub text: String,
    pub caret: usize,
}

/// Rewrite an edit against the current display, if strict rules apply.
///
/// `prefix_len`/`suffix_len` delimit the display's numeric body for the
/// current frame. Only collapsed-selection edits touching the separator or
/// the fractional digits are rewritten:
///
/// * insert of one character over a fractional digit: overwrite it, caret
///   moves past it;
/// * insert just past the last fractional digit: nothing changes, caret
///   pins there instead of advancing into the suffix;
/// * backspace/delete of a fractional digit: the digit becomes `0`;
/// * backspace/delete of the separator itself: the separator stays.
pub fn rewrite(
    intent: &EditIntent,
    display: &str,
    prefix_len: usize,
    suffix_len: usize,
    decimal_separator: &str,
) -> Option<StrictOutcome> {
    if intent.start != intent.end {
        return None;
    }
    let body_end = display.len().checked_sub(suffix_len)?;
    let body = display.get(prefix_len..body_end)?;

    let sep_pos = prefix_len + find_sub(body, decimal_separator)?;
    let sep_end = sep_pos + decimal_separator.len();
    let frac_end = sep_end
        + display.as_bytes()[sep_end..body_end]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

    match intent.kind {
        EditKind::Insert | EditKind::Composition => {
            let inserted_len = intent.inserted_len(display.len());
            if inserted_len == 0 {
                return None;
            }
            let inserted = intent.text.get(intent.start..intent.start + inserted_len)?;
            if inserted.chars().count() != 1 {
                return None;
            }
            let at = intent.start;
            if at < sep_end {
                return None;
            }
            if at < frac_end {
                let mut text = String::with_capacity(display.len());
                text.push_str(&display[..at]);
                text.push_str(inserted);
                text.push_str(&display[at + 1..]);
                Some(StrictOutcome {
                    text,
                    caret: at + inserted_len,
                })
            } else {
                // Would overwrite past the fractional digits: pin instead.
                Some(StrictOutcome {
                    text: display.to_string(),
                    caret: frac_end,
                })
            }
        }
        EditKind::DeleteBackward => {
            let deleted = display.len().checked_sub(intent.text.len())?;
            if deleted == 0 {
                return None;
            }
            let at = intent.start.checked_sub(deleted)?;
            if at < sep_pos || at >= frac_end {
                return None;
            }
            if at >= sep_end {
                Some(StrictOutcome {
                    text: zero_digit(display, at),
                    caret: at,
                })
            } else {
                // The separator itself: reinstate it.
                Some(StrictOutcome {
                    text: display.to_string(),
                    caret: at,
                })
            }
        }
        EditKind::DeleteForward => {
            let at = intent.start;
            if at < sep_pos || at >= frac_end {
                return None;
            }
            if at >= sep_end {
                Some(StrictOutcome {
                    text: zero_digit(display, at),
                    caret: at + 1,
                })
            } else {
                Some(StrictOutcome {
                    text: display.to_string(),
                    caret: at,
                })
            }
        }
    }
}

fn zero_digit(display: &str, at: usize) -> String {
    let mut text = String::with_capacity(display.len());
    text.push_str(&display[..at]);
    text.push('0');
    text.push_str(&display[at + 1..]);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{EditIntent, EditKind};

    // "$1,234,567.89": separator at 10, fractional digits at 11..13.
    const DISPLAY: &str = "$1,234,567.89";

    fn insert(at: usize, text: &str) -> EditIntent {
        EditIntent::new(EditKind::Insert, at, at, text)
    }

    #[test]
    fn insert_overwrites_a_fractional_digit() {
        let intent = insert(11, "$1,234,567.189");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, "$1,234,567.19");
        assert_eq!(out.caret, 12);
    }

    #[test]
    fn insert_past_the_last_digit_pins_the_caret() {
        let intent = insert(13, "$1,234,567.891");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, DISPLAY);
        assert_eq!(out.caret, 13);
    }

    #[test]
    fn insert_into_the_integer_part_is_not_rewritten() {
        let intent = insert(1, "$91,234,567.89");
        assert_eq!(rewrite(&intent, DISPLAY, 1, 0, "."), None);
    }

    #[test]
    fn insert_with_a_selection_is_not_rewritten() {
        let intent = EditIntent::new(EditKind::Insert, 11, 12, "$1,234,567.19");
        assert_eq!(rewrite(&intent, DISPLAY, 1, 0, "."), None);
    }

    #[test]
    fn backspace_zeroes_the_digit_left_of_the_caret() {
        // Backspace at 13 deleted the digit at 12.
        let intent = EditIntent::new(EditKind::DeleteBackward, 13, 13, "$1,234,567.8");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, "$1,234,567.80");
        assert_eq!(out.caret, 12);
    }

    #[test]
    fn backspace_cannot_remove_the_separator() {
        // Backspace at 11 deleted the separator at 10.
        let intent = EditIntent::new(EditKind::DeleteBackward, 11, 11, "$1,234,56789");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, DISPLAY);
        assert_eq!(out.caret, 10);
    }

    #[test]
    fn backspace_in_the_integer_part_is_not_rewritten() {
        let intent = EditIntent::new(EditKind::DeleteBackward, 4, 4, "$1,24,567.89");
        assert_eq!(rewrite(&intent, DISPLAY, 1, 0, "."), None);
    }

    #[test]
    fn delete_zeroes_the_digit_at_the_caret() {
        let intent = EditIntent::new(EditKind::DeleteForward, 12, 12, "$1,234,567.8");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, "$1,234,567.80");
        assert_eq!(out.caret, 13);
    }

    #[test]
    fn delete_cannot_remove_the_separator() {
        let intent = EditIntent::new(EditKind::DeleteForward, 10, 10, "$1,234,56789");
        let out = rewrite(&intent, DISPLAY, 1, 0, ".").unwrap();
        assert_eq!(out.text, DISPLAY);
        assert_eq!(out.caret, 10);
    }

    #[test]
    fn edits_against_a_suffix_fall_through() {
        // "$123.45 USD": suffix starts at 7; deleting inside it is not a
        // strict concern.
        let display = "$123.45 USD";
        let intent = EditIntent::new(EditKind::DeleteForward, 7, 7, "$123.45USD");
        assert_eq!(rewrite(&intent, display, 1, 4, "."), None);
    }

    #[test]
    fn display_without_a_separator_falls_through() {
        let intent = insert(3, "$9400");
        assert_eq!(rewrite(&intent, "$400", 1, 0, "."), None);
    }
}
