//! Caret reconciliation.
//!
//! The host applies an edit, which leaves its caret at a position implied
//! by that raw edit (the *baseline*). Reconciliation then replaces the text
//! with the canonical rendering; the rules here move the baseline by the
//! resulting length delta and apply the documented corrections, keeping the
//! caret anchored to the digit the user was editing.

use crate::surface::{EditIntent, EditKind};
use crate::text::{clamp_to_char_boundary, prev_char_boundary};

/// The caret position implied by the host's already-applied edit.
pub fn baseline(intent: &EditIntent, previous_len: usize) -> usize {
    match intent.kind {
        EditKind::Insert | EditKind::Composition => {
            intent.start + intent.inserted_len(previous_len)
        }
        EditKind::DeleteBackward => {
            if intent.start == intent.end {
                let deleted = previous_len.saturating_sub(intent.text.len());
                intent.start.saturating_sub(deleted)
            } else {
                intent.start
            }
        }
        EditKind::DeleteForward => intent.start,
    }
}

/// Caret for an accepted edit.
///
/// Base rule: baseline plus the length delta between the final text and the
/// edited candidate. Corrections, in order: a delete-forward whose caret
/// lands inside the prefix region advances by the group separator's length
/// (a grouping shift pulled the text past the affix); a boundary-clamped
/// value steps the caret back one character; the result clamps into the
/// final text.
pub fn reconcile_accepted(
    baseline: usize,
    kind: EditKind,
    edited_len: usize,
    final_text: &str,
    prefix_len: usize,
    group_separator_len: usize,
    clamped: bool,
) -> usize {
    let mut caret = baseline as isize + final_text.len() as isize - edited_len as isize;
    if kind == EditKind::DeleteForward && caret < prefix_len as isize {
        caret += group_separator_len as isize;
    }
    let mut caret = caret.clamp(0, final_text.len() as isize) as usize;
    if clamped {
        caret = prev_char_boundary(final_text, caret);
    }
    clamp_to_char_boundary(final_text, caret)
}

/// Caret for a rejected edit: the previous text is restored, so the delta
/// runs against the rejected candidate; a delete-forward additionally steps
/// back one character (the character it expected to remove is still there).
pub fn reconcile_rejected(
    baseline: usize,
    kind: EditKind,
    edited_len: usize,
    restored_text: &str,
) -> usize {
    let caret = baseline as isize + restored_text.len() as isize - edited_len as isize;
    let mut caret = caret.clamp(0, restored_text.len() as isize) as usize;
    if kind == EditKind::DeleteForward {
        caret = prev_char_boundary(restored_text, caret);
    }
    clamp_to_char_boundary(restored_text, caret)
}
