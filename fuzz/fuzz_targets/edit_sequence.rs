#![no_main]

use input_mask::{Amount, BufferSurface, EditIntent, EditKind, MaskedInput};
use libfuzzer_sys::fuzz_target;

// Drive random edit sequences against a default engine. The display, the
// held value, and the caret must stay consistent after every keystroke:
// the value remains canonical and the caret stays inside the text. The
// default config is pure ASCII, so arbitrary byte positions are valid
// offsets.
fuzz_target!(|data: &[u8]| {
    let Ok(mut input) = MaskedInput::new(BufferSurface::new(), None, None) else {
        return;
    };

    for chunk in data.chunks_exact(3) {
        let (op, pos, ch) = (chunk[0], chunk[1], chunk[2]);
        let text = input.text().to_string();
        let pos = pos as usize % (text.len() + 1);
        match op % 3 {
            0 => {
                let ch = char::from(b' ' + ch % 95);
                let mut raw = String::with_capacity(text.len() + 1);
                raw.push_str(&text[..pos]);
                raw.push(ch);
                raw.push_str(&text[pos..]);
                input.handle_edit(EditIntent::new(EditKind::Insert, pos, pos, raw));
            }
            1 => {
                if pos > 0 {
                    let raw = format!("{}{}", &text[..pos - 1], &text[pos..]);
                    input.handle_edit(EditIntent::new(EditKind::DeleteBackward, pos, pos, raw));
                }
            }
            _ => {
                if pos < text.len() {
                    let raw = format!("{}{}", &text[..pos], &text[pos + 1..]);
                    input.handle_edit(EditIntent::new(EditKind::DeleteForward, pos, pos, raw));
                }
            }
        }

        let value = input.value();
        let parsed = Amount::parse(&value).expect("held value must stay canonical");
        assert_eq!(parsed.to_string(), value);
        assert!(input.surface().caret() <= input.surface().text().len());
        assert_eq!(input.surface().text(), input.text());
    }
});
