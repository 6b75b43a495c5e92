//! Shared harness: a bench that plays the host role, applying keystrokes
//! to the engine's current text the way a text widget would before
//! reporting them.

use input_mask::{
    BufferSurface, EditIntent, EditKind, FormatterOptions, MaskedInput, prev_char_boundary,
};

pub struct Bench {
    pub input: MaskedInput<BufferSurface>,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Self {
        Self::with(None, None)
    }

    pub fn with(initial: Option<&str>, options: Option<FormatterOptions>) -> Self {
        Self {
            input: MaskedInput::new(BufferSurface::new(), initial, options).unwrap(),
        }
    }

    /// Type characters one keystroke at a time. The first lands on the
    /// given selection; each following one lands at the caret the engine
    /// pushed back, like a user typing continuously.
    pub fn type_str(&mut self, s: &str, start: usize, end: usize) {
        let mut selection = (start, end);
        for ch in s.chars() {
            let text = self.input.text();
            let mut raw = String::with_capacity(text.len() + ch.len_utf8());
            raw.push_str(&text[..selection.0]);
            raw.push(ch);
            raw.push_str(&text[selection.1..]);
            self.input
                .handle_edit(EditIntent::new(EditKind::Insert, selection.0, selection.1, raw));
            let caret = self.caret();
            selection = (caret, caret);
        }
    }

    /// One backspace keystroke against the given selection.
    pub fn backspace(&mut self, start: usize, end: usize) {
        let text = self.input.text();
        let raw = if start == end {
            let cut = prev_char_boundary(text, start);
            format!("{}{}", &text[..cut], &text[start..])
        } else {
            format!("{}{}", &text[..start], &text[end..])
        };
        self.input
            .handle_edit(EditIntent::new(EditKind::DeleteBackward, start, end, raw));
    }

    /// Repeated backspaces, each landing at the caret the engine pushed.
    pub fn backspaces(&mut self, times: usize, start: usize, end: usize) {
        self.backspace(start, end);
        for _ in 1..times {
            let caret = self.caret();
            self.backspace(caret, caret);
        }
    }

    /// One forward-delete keystroke against the given selection.
    pub fn delete(&mut self, start: usize, end: usize) {
        let text = self.input.text();
        let raw = if start == end {
            if start >= text.len() {
                text.to_string()
            } else {
                let next = text[start..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| start + i)
                    .unwrap_or(text.len());
                format!("{}{}", &text[..start], &text[next..])
            }
        } else {
            format!("{}{}", &text[..start], &text[end..])
        };
        self.input
            .handle_edit(EditIntent::new(EditKind::DeleteForward, start, end, raw));
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn caret(&self) -> usize {
        self.input.surface().caret()
    }

    pub fn value(&self) -> String {
        self.input.value()
    }

    pub fn formatted(&self) -> String {
        self.input.formatted_value()
    }

    /// Assert the displayed text, held value, and canonical rendering at
    /// once.
    pub fn assert_state(&self, text: &str, value: &str, formatted: &str) {
        assert_eq!(self.text(), text, "displayed text");
        assert_eq!(self.value(), value, "held value");
        assert_eq!(self.formatted(), formatted, "formatted value");
    }

    pub fn assert_caret(&self, caret: usize) {
        assert_eq!(self.caret(), caret, "caret position");
    }
}
