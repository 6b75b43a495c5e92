//! Host-surface contract.
//!
//! The engine is UI-agnostic: it never sees raw key or pointer events. The
//! host captures its own events, lets its text widget apply the edit, and
//! hands the engine an [`EditIntent`] describing what happened. After
//! reconciliation the engine pushes the final text and caret back through
//! [`TextSurface`]. Hosts translate between byte offsets and their own
//! selection representation at this boundary.

/// Classification of one user edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    /// Typed or pasted text replacing the selection.
    Insert,
    /// Backspace: the selection, or the character before a collapsed caret.
    DeleteBackward,
    /// Delete: the selection, or the character after a collapsed caret.
    DeleteForward,
    /// Text committed by an input method editor.
    Composition,
}

impl EditKind {
    /// Insert-like kinds contribute new characters to the text.
    #[inline]
    pub(crate) fn is_insert(self) -> bool {
        matches!(self, EditKind::Insert | EditKind::Composition)
    }
}

/// One user edit, delivered after the host already applied it.
///
/// `start`/`end` are the pre-edit selection as byte offsets into the
/// previous display text (`start <= end`; equal for a collapsed caret).
/// `text` is the surface content after the edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditIntent {
    pub kind: EditKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl EditIntent {
    /// Build an intent; a reversed selection is normalized.
    pub fn new(kind: EditKind, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            start: start.min(end),
            end: start.max(end),
            text: text.into(),
        }
    }

    /// Byte length of the text the edit inserted, derived from the length
    /// difference against the previous display.
    pub(crate) fn inserted_len(&self, previous_len: usize) -> usize {
        (self.text.len() + (self.end - self.start)).saturating_sub(previous_len)
    }
}

/// The text widget the engine is mounted on.
///
/// Implementations only need to accept state pushes; event capture and
/// selection translation stay on the host side.
pub trait TextSurface {
    /// Force the given text and caret position onto the widget.
    fn set_content(&mut self, text: &str, caret: usize);

    /// Reflect the engine's disabled state. Optional.
    fn set_disabled(&mut self, _disabled: bool) {}
}

/// Plain in-memory surface.
///
/// Useful for headless hosts and tests; it just records whatever the engine
/// pushes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferSurface {
    text: String,
    caret: usize,
    disabled: bool,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text last pushed by the engine.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caret last pushed by the engine.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl TextSurface for BufferSurface {
    fn set_content(&mut self, text: &str, caret: usize) {
        self.text.clear();
        self.text.push_str(text);
        self.caret = caret;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_normalizes_reversed_selection() {
        let intent = EditIntent::new(EditKind::Insert, 5, 2, "abc");
        assert_eq!((intent.start, intent.end), (2, 5));
    }

    #[test]
    fn inserted_len_accounts_for_replaced_selection() {
        // "$0.00" with [1, 2) replaced by "1" -> "$1.00"
        let intent = EditIntent::new(EditKind::Insert, 1, 2, "$1.00");
        assert_eq!(intent.inserted_len(5), 1);

        // plain insertion at a collapsed caret
        let intent = EditIntent::new(EditKind::Insert, 1, 1, "$40.00");
        assert_eq!(intent.inserted_len(5), 1);
    }

    #[test]
    fn buffer_surface_records_pushes() {
        let mut surface = BufferSurface::new();
        surface.set_content("$0.00", 1);
        assert_eq!(surface.text(), "$0.00");
        assert_eq!(surface.caret(), 1);
        surface.set_disabled(true);
        assert!(surface.is_disabled());
    }
}
