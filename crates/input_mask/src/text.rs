//! UTF-8 text utilities for caret handling.
//!
//! Caret offsets are byte indices into the canonical display string.
//! Reconciliation adjusts them with whole-token deltas (affix lengths,
//! group-separator lengths), but single-step adjustments and host-supplied
//! offsets can land inside a multi-byte character; these helpers snap such
//! offsets back onto valid boundaries.

use memchr::memchr;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// An index beyond the string clamps to `s.len()`; an index inside a
/// multi-byte character moves back to that character's start.
///
/// # Examples
///
/// ```
/// use input_mask::clamp_to_char_boundary;
///
/// let s = "€0"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 0);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 100), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The previous character boundary before `i`, or 0 at the start.
pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// Separators and signs are almost always a single byte; that case takes
/// the memchr fast path. Empty needles never match.
pub fn find_sub(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    if needle.len() == 1 {
        return memchr(needle.as_bytes()[0], haystack.as_bytes());
    }
    haystack.find(needle)
}
