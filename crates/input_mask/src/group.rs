//! Group-separator insertion and removal for unframed numeric bodies.

use std::borrow::Cow;

use crate::config::FormatterConfig;
use crate::text::find_sub;

/// Insert group separators into the integer part of an unframed body.
///
/// The fractional part (decimal separator included) is copied verbatim; a
/// separator goes before every `group_size`-th digit counted from the right
/// end of the integer part, never before the first digit. A no-op when
/// grouping is disabled.
pub fn group_body(body: &str, config: &FormatterConfig) -> String {
    if !config.grouping_enabled() {
        return body.to_string();
    }

    let (int_part, rest) = match find_sub(body, &config.decimal_separator) {
        Some(i) => body.split_at(i),
        None => (body, ""),
    };

    let size = config.group_size as usize;
    let n = int_part.len();
    let mut out = String::with_capacity(body.len() + config.group_separator.len() * (n / size));
    for (i, ch) in int_part.char_indices() {
        if i > 0 && (n - i) % size == 0 {
            out.push_str(&config.group_separator);
        }
        out.push(ch);
    }
    out.push_str(rest);
    out
}

/// Remove every occurrence of the group separator from a body.
///
/// Borrows when there is nothing to remove, which is the common case while
/// the integer part is still short.
pub fn ungroup_body<'a>(body: &'a str, group_separator: &str) -> Cow<'a, str> {
    if group_separator.is_empty() || find_sub(body, group_separator).is_none() {
        return Cow::Borrowed(body);
    }
    Cow::Owned(body.replace(group_separator, ""))
}
