//! The reconciliation engine.
//!
//! [`MaskedInput`] owns the value, the formatter snapshot, and the mounted
//! surface. Every edit runs one synchronous pass: a pure decide phase
//! (accept/reject, canonical text, caret, value) followed by an apply phase
//! (swap state, push to the surface, fire exactly one callback). Edits are
//! processed strictly in arrival order; there are no suspension points.

use amount_core::Amount;

use crate::affix::{self, Affixes};
use crate::caret;
use crate::config::{FormatterConfig, FormatterOptions};
use crate::error::{ConfigError, InitError, ValueError};
use crate::group;
use crate::strict;
use crate::surface::{EditIntent, TextSurface};
use crate::text::{clamp_to_char_boundary, prev_char_boundary};
use crate::validate::NumericValidator;

/// A masked numeric input bound to a text surface.
///
/// The displayed text always re-parses to the current value; disallowed
/// keystrokes are rolled back with an intuitive caret position instead of
/// surfacing as errors.
///
/// # Examples
///
/// ```
/// use input_mask::{BufferSurface, EditIntent, EditKind, MaskedInput};
///
/// let mut input = MaskedInput::new(BufferSurface::new(), None, None).unwrap();
/// assert_eq!(input.text(), "$0.00");
///
/// // The host applies a keystroke, then reports it.
/// input.handle_edit(EditIntent::new(EditKind::Insert, 1, 1, "$40.00"));
/// assert_eq!(input.text(), "$40.00");
/// assert_eq!(input.value(), "40.00");
/// ```
pub struct MaskedInput<S: TextSurface> {
    surface: S,
    config: FormatterConfig,
    affixes: Affixes,
    validator: NumericValidator,
    value: Amount,
    display: String,
    display_negative: bool,
    min: Option<Amount>,
    max: Option<Amount>,
    strict: bool,
    negative_zero_allowed: bool,
    disabled: bool,
    reconciling: bool,
    valid_callback: Option<Box<dyn FnMut()>>,
    invalid_callback: Option<Box<dyn FnMut()>>,
}

// Outcome of the decide phase for an accepted edit.
struct Accepted {
    value: Amount,
    negative_display: bool,
    text: String,
    // A sign toggle places the caret explicitly instead of by delta.
    caret_at: Option<usize>,
}

impl<S: TextSurface> MaskedInput<S> {
    /// Bind a new engine to `surface`.
    ///
    /// `initial` is a canonical decimal string (default `"0.00"`); its
    /// fractional digit count fixes the scale. `options` are resolved
    /// against defaults. The initial formatted text is pushed onto the
    /// surface before this returns.
    pub fn new(
        surface: S,
        initial: Option<&str>,
        options: Option<FormatterOptions>,
    ) -> Result<Self, InitError> {
        let config = FormatterConfig::resolve(options.unwrap_or_default())?;
        let value = Amount::parse(initial.unwrap_or("0.00")).map_err(ValueError::from)?;
        let affixes = Affixes::of(&config);
        let validator = NumericValidator::new(&config, value.scale(), false);

        let mut engine = Self {
            surface,
            config,
            affixes,
            validator,
            value,
            display: String::new(),
            display_negative: false,
            min: None,
            max: None,
            strict: false,
            negative_zero_allowed: false,
            disabled: false,
            reconciling: false,
            valid_callback: None,
            invalid_callback: None,
        };
        engine.display_negative = engine.frame_sign_for(&engine.value);
        engine.refresh_display();
        Ok(engine)
    }

    // =========================================================================
    // Edit reconciliation
    // =========================================================================

    /// Reconcile one host edit.
    ///
    /// Exactly one of the valid/invalid callbacks fires per call, except
    /// when the edit leaves the text unchanged or the engine is disabled
    /// (both are silent no-ops from the callbacks' perspective).
    pub fn handle_edit(&mut self, intent: EditIntent) {
        if intent.text == self.display {
            return;
        }
        if self.reconciling {
            log::warn!(target: "mask.reconcile", "reentrant edit dropped");
            return;
        }
        self.reconciling = true;
        self.reconcile(intent);
        self.reconciling = false;
    }

    fn reconcile(&mut self, intent: EditIntent) {
        let previous_len = self.display.len();
        let base = caret::baseline(&intent, previous_len);

        if self.disabled {
            let caret = (base as isize + previous_len as isize - intent.text.len() as isize)
                .clamp(0, previous_len as isize) as usize;
            let caret = clamp_to_char_boundary(&self.display, caret);
            self.push_display(caret);
            return;
        }

        // Strict mode may rewrite the candidate and pin the caret.
        let mut candidate = intent.text.clone();
        let mut strict_caret = None;
        if self.strict && self.value.scale() > 0 {
            let prefix_len = self.affixes.prefix(self.display_negative).len();
            let suffix_len = self.affixes.suffix(self.display_negative).len();
            if let Some(out) = strict::rewrite(
                &intent,
                &self.display,
                prefix_len,
                suffix_len,
                &self.config.decimal_separator,
            ) {
                candidate = out.text;
                strict_caret = Some(out.caret);
            }
        }

        match self.decide(&candidate, &intent) {
            Some(accepted) => self.apply_accept(accepted, &intent, base, candidate.len(), strict_caret),
            None => self.apply_reject(&intent, base, candidate.len()),
        }
    }

    // Pure decide phase: no state changes, no callbacks.
    fn decide(&self, candidate: &str, intent: &EditIntent) -> Option<Accepted> {
        if let Some(frame) = affix::match_frame(
            candidate,
            &self.affixes,
            self.config.positive_sign.is_empty(),
            self.display_negative,
        ) {
            let body = frame.body(candidate);
            let ungrouped = group::ungroup_body(body, &self.config.group_separator);
            let normalized = self.validator.normalize(&ungrouped);
            if self.validator.check(&normalized) {
                let (int_digits, frac_digits) = self.validator.split(&normalized);
                if let Ok(value) =
                    Amount::from_digits(frame.negative, int_digits, frac_digits, self.value.scale())
                {
                    // Exact zero keeps positive framing unless negative zero
                    // is explicitly allowed. An empty negative sign makes
                    // the frames textually identical, so nothing to reject.
                    let negative_zero = value.is_zero()
                        && frame.negative
                        && !self.config.negative_sign.is_empty();
                    if !negative_zero || self.negative_zero_allowed {
                        let grouped = group::group_body(&normalized, &self.config);
                        let prefix = self.affixes.prefix(frame.negative);
                        let suffix = self.affixes.suffix(frame.negative);
                        let mut text =
                            String::with_capacity(prefix.len() + grouped.len() + suffix.len());
                        text.push_str(prefix);
                        text.push_str(&grouped);
                        text.push_str(suffix);
                        return Some(Accepted {
                            value,
                            negative_display: frame.negative,
                            text,
                            caret_at: None,
                        });
                    }
                }
            }
        }

        // Framing failed: the edit may still be a sign toggle. Evaluated
        // against the raw intent, not a strict rewrite.
        let requested = affix::sign_toggle(intent, &self.display, &self.config)?;
        if requested == self.display_negative {
            return None;
        }
        if self.value.is_zero() && requested && !self.negative_zero_allowed {
            return None;
        }
        let value = if requested == self.value.is_negative() {
            self.value
        } else {
            self.value.negated()
        };
        let text = self.render(&value, requested);
        let caret = self.affixes.prefix(requested).len();
        Some(Accepted {
            value,
            negative_display: requested,
            text,
            caret_at: Some(caret),
        })
    }

    fn apply_accept(
        &mut self,
        mut accepted: Accepted,
        intent: &EditIntent,
        base: usize,
        candidate_len: usize,
        strict_caret: Option<usize>,
    ) {
        let mut clamped = false;
        if let Some(bounded) = self.bounded(&accepted.value) {
            log::debug!(
                target: "mask.bounds",
                "clamped {} to {}", accepted.value, bounded
            );
            accepted.negative_display = self.frame_sign_for(&bounded);
            accepted.text = self.render(&bounded, accepted.negative_display);
            accepted.value = bounded;
            clamped = true;
        }

        let caret = match accepted.caret_at.or(strict_caret) {
            Some(at) => {
                let at = clamp_to_char_boundary(&accepted.text, at);
                if clamped {
                    prev_char_boundary(&accepted.text, at)
                } else {
                    at
                }
            }
            None => caret::reconcile_accepted(
                base,
                intent.kind,
                candidate_len,
                &accepted.text,
                self.affixes.prefix(accepted.negative_display).len(),
                self.config.group_separator.len(),
                clamped,
            ),
        };

        self.value = accepted.value;
        self.display_negative = accepted.negative_display;
        self.display = accepted.text;
        log::trace!(
            target: "mask.reconcile",
            "accepted {:?} -> {:?} (caret {caret})", intent.kind, self.display
        );
        self.push_display(caret);
        if let Some(callback) = self.valid_callback.as_mut() {
            callback();
        }
    }

    fn apply_reject(&mut self, intent: &EditIntent, base: usize, candidate_len: usize) {
        let caret = caret::reconcile_rejected(base, intent.kind, candidate_len, &self.display);
        log::trace!(
            target: "mask.reconcile",
            "rejected {:?}, restored {:?} (caret {caret})", intent.kind, self.display
        );
        self.push_display(caret);
        if let Some(callback) = self.invalid_callback.as_mut() {
            callback();
        }
    }

    // =========================================================================
    // Value operations
    // =========================================================================

    /// Replace the value from a canonical decimal string.
    ///
    /// The string's fractional digit count becomes the new scale. Bounds
    /// whose scale no longer matches are cleared silently; the new value is
    /// then clamped into the remaining bounds.
    pub fn set_value(&mut self, value: &str) -> Result<(), ValueError> {
        let value = Amount::parse(value)?;
        self.install(value);
        Ok(())
    }

    /// The current value as a canonical decimal string, zero-padded to the
    /// scale. Never renders negative zero.
    pub fn value(&self) -> String {
        self.value.to_string()
    }

    /// The current value.
    pub fn amount(&self) -> &Amount {
        &self.value
    }

    /// The canonical display string for the current value. Unlike
    /// [`MaskedInput::text`], this is always the full rendering, even while
    /// the surface shows a partial fraction mid-edit.
    pub fn formatted_value(&self) -> String {
        self.render(&self.value, self.frame_sign_for(&self.value))
    }

    /// The text currently forced onto the surface.
    pub fn text(&self) -> &str {
        &self.display
    }

    /// Add a canonical decimal string to the value, then reformat and
    /// reclamp. No state changes on error.
    pub fn add(&mut self, delta: &str) -> Result<(), ValueError> {
        self.add_amount(&Amount::parse(delta)?)
    }

    /// Subtract a canonical decimal string; see [`MaskedInput::add`].
    pub fn subtract(&mut self, delta: &str) -> Result<(), ValueError> {
        self.subtract_amount(&Amount::parse(delta)?)
    }

    /// Add an amount to the value, then reformat and reclamp.
    pub fn add_amount(&mut self, delta: &Amount) -> Result<(), ValueError> {
        let value = self
            .value
            .checked_add(delta)
            .ok_or(ValueError::OutOfRange)?;
        self.install(value);
        Ok(())
    }

    /// Subtract an amount from the value, then reformat and reclamp.
    pub fn subtract_amount(&mut self, delta: &Amount) -> Result<(), ValueError> {
        let value = self
            .value
            .checked_sub(delta)
            .ok_or(ValueError::OutOfRange)?;
        self.install(value);
        Ok(())
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the formatter configuration and reformat the display.
    ///
    /// Options are resolved against defaults and validated before any state
    /// changes; a failed call leaves the engine untouched.
    pub fn format(&mut self, options: FormatterOptions) -> Result<(), ConfigError> {
        let config = FormatterConfig::resolve(options)?;
        self.affixes = Affixes::of(&config);
        self.validator = NumericValidator::new(&config, self.value.scale(), self.strict);
        self.config = config;
        self.refresh_display();
        Ok(())
    }

    /// The active formatter snapshot.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Set or clear the lower bound; the current value is reclamped.
    pub fn set_min(&mut self, bound: Option<&str>) -> Result<(), ConfigError> {
        let parsed = self.parse_bound(bound)?;
        if let (Some(min), Some(max)) = (&parsed, &self.max) {
            if min > max {
                return Err(ConfigError::MinAboveMax {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        self.min = parsed;
        self.reclamp();
        Ok(())
    }

    /// Set or clear the upper bound; the current value is reclamped.
    pub fn set_max(&mut self, bound: Option<&str>) -> Result<(), ConfigError> {
        let parsed = self.parse_bound(bound)?;
        if let (Some(min), Some(max)) = (&self.min, &parsed) {
            if min > max {
                return Err(ConfigError::MinAboveMax {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        self.max = parsed;
        self.reclamp();
        Ok(())
    }

    /// The lower bound, if set.
    pub fn min(&self) -> Option<&Amount> {
        self.min.as_ref()
    }

    /// The upper bound, if set.
    pub fn max(&self) -> Option<&Amount> {
        self.max.as_ref()
    }

    /// Fix the fractional width: edits right of the decimal separator
    /// overwrite digits instead of inserting or deleting.
    pub fn enable_strict_mode(&mut self) {
        self.strict = true;
        self.validator = NumericValidator::new(&self.config, self.value.scale(), true);
    }

    /// Return to free editing of the fractional part.
    pub fn disable_strict_mode(&mut self) {
        self.strict = false;
        self.validator = NumericValidator::new(&self.config, self.value.scale(), false);
    }

    /// Whether strict mode is active.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Allow an exact zero to carry negative framing on the surface. The
    /// reported value stays `0`.
    pub fn allow_negative_zero(&mut self, allow: bool) {
        self.negative_zero_allowed = allow;
    }

    /// Install the callback fired after every accepted edit.
    pub fn on_valid(&mut self, callback: impl FnMut() + 'static) {
        self.valid_callback = Some(Box::new(callback));
    }

    /// Install the callback fired after every rejected edit.
    pub fn on_invalid(&mut self, callback: impl FnMut() + 'static) {
        self.invalid_callback = Some(Box::new(callback));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Stop accepting edits without altering the value. Idempotent.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.surface.set_disabled(true);
    }

    /// Resume accepting edits. Idempotent.
    pub fn enable(&mut self) {
        self.disabled = false;
        self.surface.set_disabled(false);
    }

    /// Whether the engine currently rejects all edits.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Attach to a new surface, pushing the current text onto it. Returns
    /// the previous surface.
    pub fn remount(&mut self, mut surface: S) -> S {
        surface.set_content(&self.display, self.display.len());
        surface.set_disabled(self.disabled);
        std::mem::replace(&mut self.surface, surface)
    }

    /// Detach, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The mounted surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    // Full canonical rendering of a value under the current config.
    fn render(&self, value: &Amount, negative: bool) -> String {
        let canonical = value.to_string();
        let digits = canonical.strip_prefix('-').unwrap_or(&canonical);
        let body = if self.config.decimal_separator == "." {
            digits.to_string()
        } else {
            digits.replace('.', &self.config.decimal_separator)
        };
        let grouped = group::group_body(&body, &self.config);

        let prefix = self.affixes.prefix(negative);
        let suffix = self.affixes.suffix(negative);
        let mut out = String::with_capacity(prefix.len() + grouped.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(&grouped);
        out.push_str(suffix);
        out
    }

    // Replace the value wholesale: clear scale-mismatched bounds, clamp,
    // rebuild the validator, re-render.
    fn install(&mut self, value: Amount) {
        if self.min.is_some_and(|m| m.scale() != value.scale()) {
            log::debug!(target: "mask.bounds", "scale changed, clearing min");
            self.min = None;
        }
        if self.max.is_some_and(|m| m.scale() != value.scale()) {
            log::debug!(target: "mask.bounds", "scale changed, clearing max");
            self.max = None;
        }
        let value = match self.bounded(&value) {
            Some(bounded) => {
                log::debug!(target: "mask.bounds", "clamped {value} to {bounded}");
                bounded
            }
            None => value,
        };
        self.value = value;
        self.display_negative = self.frame_sign_for(&value);
        self.validator = NumericValidator::new(&self.config, value.scale(), self.strict);
        self.refresh_display();
    }

    // Which frame a freshly installed value renders with. Exact zero takes
    // the empty sign when one of the two signs is empty, the positive sign
    // otherwise.
    fn frame_sign_for(&self, value: &Amount) -> bool {
        if !value.is_zero() {
            return value.is_negative();
        }
        !self.config.positive_sign.is_empty() && self.config.negative_sign.is_empty()
    }

    // The bound-corrected value, or None when already within bounds.
    fn bounded(&self, value: &Amount) -> Option<Amount> {
        if let Some(min) = &self.min {
            if value < min {
                return Some(*min);
            }
        }
        if let Some(max) = &self.max {
            if value > max {
                return Some(*max);
            }
        }
        None
    }

    fn parse_bound(&self, bound: Option<&str>) -> Result<Option<Amount>, ConfigError> {
        let Some(s) = bound else {
            return Ok(None);
        };
        let amount = Amount::parse(s).map_err(|_| ConfigError::MalformedBound {
            bound: s.to_string(),
        })?;
        if amount.scale() != self.value.scale() {
            return Err(ConfigError::ScaleMismatch {
                bound: s.to_string(),
                expected: self.value.scale(),
            });
        }
        Ok(Some(amount))
    }

    fn reclamp(&mut self) {
        if let Some(bounded) = self.bounded(&self.value) {
            log::debug!(target: "mask.bounds", "reclamped {} to {}", self.value, bounded);
            self.display_negative = self.frame_sign_for(&bounded);
            self.value = bounded;
            self.refresh_display();
        }
    }

    fn refresh_display(&mut self) {
        self.display = self.render(&self.value, self.display_negative);
        let caret = self.display.len();
        self.push_display(caret);
    }

    fn push_display(&mut self, caret: usize) {
        self.surface.set_content(&self.display, caret);
    }
}
