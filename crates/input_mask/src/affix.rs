//! Affix frame resolution: which sign's prefix/suffix encloses an edited
//! text, and detection of sign-toggling insertions.

use crate::config::FormatterConfig;
use crate::surface::EditIntent;

/// Prefix/suffix frames for both polarities, derived once per config.
#[derive(Clone, Debug)]
pub struct Affixes {
    positive: (String, String),
    negative: (String, String),
}

impl Affixes {
    pub fn of(config: &FormatterConfig) -> Self {
        Self {
            positive: (config.prefix(false), config.suffix(false)),
            negative: (config.prefix(true), config.suffix(true)),
        }
    }

    #[inline]
    pub fn prefix(&self, negative: bool) -> &str {
        if negative { &self.negative.0 } else { &self.positive.0 }
    }

    #[inline]
    pub fn suffix(&self, negative: bool) -> &str {
        if negative { &self.negative.1 } else { &self.positive.1 }
    }
}

/// A resolved frame around an unframed numeric body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameMatch {
    pub negative: bool,
    pub prefix_len: usize,
    pub suffix_len: usize,
}

impl FrameMatch {
    /// The enclosed body of `text` (which must be the text this frame was
    /// matched against).
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.prefix_len..text.len() - self.suffix_len]
    }
}

/// Resolve which frame encloses `text`.
///
/// Both frames are tested independently. When both fit textually (empty
/// affixes trivially fit), a negative match is authoritative if the
/// positive sign is the empty string; otherwise the frame matching the
/// current display sign wins.
pub fn match_frame(
    text: &str,
    affixes: &Affixes,
    positive_sign_empty: bool,
    display_negative: bool,
) -> Option<FrameMatch> {
    let fits = |prefix: &str, suffix: &str| {
        text.len() >= prefix.len() + suffix.len()
            && text.starts_with(prefix)
            && text.ends_with(suffix)
    };

    let positive = fits(&affixes.positive.0, &affixes.positive.1);
    let negative = fits(&affixes.negative.0, &affixes.negative.1);

    let pick_negative = match (positive, negative) {
        (false, false) => return None,
        (true, false) => false,
        (false, true) => true,
        (true, true) => positive_sign_empty || display_negative,
    };

    let (prefix, suffix) = if pick_negative {
        (&affixes.negative.0, &affixes.negative.1)
    } else {
        (&affixes.positive.0, &affixes.positive.1)
    };
    Some(FrameMatch {
        negative: pick_negative,
        prefix_len: prefix.len(),
        suffix_len: suffix.len(),
    })
}

/// Detect an insertion that only adds a sign character.
///
/// When the framing of an edited text fails, the edit may still be a
/// request to set the value's sign: a one-sign insertion whose removal
/// reproduces the previous display exactly. Returns the requested polarity.
pub fn sign_toggle(
    intent: &EditIntent,
    previous: &str,
    config: &FormatterConfig,
) -> Option<bool> {
    if !intent.kind.is_insert() {
        return None;
    }
    let inserted_len = intent.inserted_len(previous.len());
    if inserted_len == 0 {
        return None;
    }
    let end = intent.start.checked_add(inserted_len)?;
    let inserted = intent.text.get(intent.start..end)?;

    let requested = if !config.negative_sign.is_empty() && inserted == config.negative_sign {
        true
    } else if !config.positive_sign.is_empty() && inserted == config.positive_sign {
        false
    } else {
        return None;
    };

    let remainder_matches = previous.len() + inserted_len == intent.text.len()
        && previous.get(..intent.start) == intent.text.get(..intent.start)
        && previous.get(intent.start..) == intent.text.get(end..);
    if !remainder_matches {
        return None;
    }
    Some(requested)
}
