//! Validation of unframed, ungrouped numeric bodies.
//!
//! The validator is a pure function of the formatter snapshot, the current
//! scale, and the strict flag. The engine builds one instance and reuses it
//! for every keystroke, rebuilding only when `format`, `set_value`, or a
//! strict-mode toggle replaces one of those inputs.

use std::borrow::Cow;

use crate::config::FormatterConfig;
use crate::text::find_sub;

/// Accepts or rejects an ungrouped numeric body for one (scale, mode).
///
/// Accepted shapes, `p` being the scale and `sep` the decimal separator:
///
/// * `p == 0`: digits with no leading zero, or exactly `0`.
/// * `p > 0`, non-strict: `0` | `0 sep d{0,p}` | nonzero-leading digits |
///   nonzero-leading digits `sep d{0,p}`.
/// * `p > 0`, strict: `(0 | nonzero-leading digits) sep d{p}`; partial
///   fractional input is not permitted.
#[derive(Clone, Debug)]
pub struct NumericValidator {
    decimal_separator: String,
    scale: u32,
    strict: bool,
}

impl NumericValidator {
    pub fn new(config: &FormatterConfig, scale: u32, strict: bool) -> Self {
        Self {
            decimal_separator: config.decimal_separator.clone(),
            scale,
            strict,
        }
    }

    /// Normalize a body before checking it:
    ///
    /// 1. an empty body becomes `0`;
    /// 2. a body starting with the decimal separator gains an implicit
    ///    leading zero;
    /// 3. a lone leading zero directly followed by a nonzero digit is
    ///    dropped (typing over the placeholder zero replaces it).
    pub fn normalize<'a>(&self, body: &'a str) -> Cow<'a, str> {
        if body.is_empty() {
            return Cow::Owned("0".to_string());
        }
        if body.starts_with(self.decimal_separator.as_str()) {
            return Cow::Owned(format!("0{body}"));
        }
        let mut bytes = body.bytes();
        if bytes.next() == Some(b'0') && matches!(bytes.next(), Some(b'1'..=b'9')) {
            return Cow::Borrowed(&body[1..]);
        }
        Cow::Borrowed(body)
    }

    /// Test a normalized, ungrouped body against the active pattern.
    pub fn check(&self, body: &str) -> bool {
        let (int_part, frac_part) = match self.split_raw(body) {
            Some(parts) => parts,
            None => return false,
        };

        if int_part.is_empty() || !all_digits(int_part) {
            return false;
        }
        if int_part.len() > 1 && int_part.starts_with('0') {
            return false;
        }

        if self.scale == 0 {
            return frac_part.is_none();
        }
        match frac_part {
            None => !self.strict,
            Some(frac) => {
                if self.strict {
                    frac.len() == self.scale as usize && all_digits(frac)
                } else {
                    // The separator may stand alone mid-edit.
                    frac.is_empty()
                        || (frac.len() <= self.scale as usize && all_digits(frac))
                }
            }
        }
    }

    /// Split a checked body into integer and fractional digits (the
    /// fractional half is empty when no separator is present).
    pub fn split<'a>(&self, body: &'a str) -> (&'a str, &'a str) {
        match self.split_raw(body) {
            Some((int_part, Some(frac))) => (int_part, frac),
            _ => (body, ""),
        }
    }

    // Splits at the first decimal separator; None when a second separator
    // occurs in the fractional half.
    fn split_raw<'a>(&self, body: &'a str) -> Option<(&'a str, Option<&'a str>)> {
        let sep = self.decimal_separator.as_str();
        match find_sub(body, sep) {
            None => Some((body, None)),
            Some(i) => {
                let frac = &body[i + sep.len()..];
                if find_sub(frac, sep).is_some() {
                    return None;
                }
                Some((&body[..i], Some(frac)))
            }
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
