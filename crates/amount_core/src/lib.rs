//! # amount_core
//!
//! Signed, fixed-scale decimal amounts.
//!
//! An [`Amount`] is a signed integer count of minor units together with a
//! scale (the number of fractional digits). `12.34` at scale 2 is stored as
//! `units = 1234, scale = 2`. All arithmetic is checked: an operation whose
//! result does not fit the underlying 128-bit integer reports failure
//! instead of wrapping.
//!
//! The canonical interchange format is `-?(0|[1-9]\d*)(\.\d+)?`: no
//! leading zeros, no trailing decimal point, `-` only for negative nonzero
//! values. [`Amount::parse`] accepts exactly that shape and
//! [`Amount::to_string`] produces it, zero-padded to the amount's scale.
//!
//! This crate is intentionally dependency-free and UI-agnostic; it knows
//! nothing about separators, currency symbols, or display concerns.

use std::cmp::Ordering;
use std::fmt;

/// Errors produced when constructing an [`Amount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountError {
    /// The input string is not a canonical decimal.
    Malformed,
    /// The value does not fit the 128-bit unit representation.
    OutOfRange,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Malformed => write!(f, "not a canonical decimal string"),
            AmountError::OutOfRange => write!(f, "value out of representable range"),
        }
    }
}

impl std::error::Error for AmountError {}

/// A signed decimal with a fixed number of fractional digits.
///
/// Two amounts compare numerically, independent of scale: `1.5` equals
/// `1.50`. The scale only governs rendering and which bounds may be
/// attached to a value by higher layers.
///
/// # Examples
///
/// ```
/// use amount_core::Amount;
///
/// let a = Amount::parse("40.50").unwrap();
/// assert_eq!(a.scale(), 2);
/// assert_eq!(a.to_string(), "40.50");
/// assert!(!a.is_negative());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Amount {
    units: i128,
    scale: u32,
}

impl Amount {
    /// Zero at the given scale.
    #[inline]
    pub const fn zero(scale: u32) -> Self {
        Self { units: 0, scale }
    }

    /// Parse a canonical decimal string (`-?(0|[1-9]\d*)(\.\d+)?`).
    ///
    /// The scale of the result is the number of fractional digits in the
    /// input (zero when there is no decimal point). `-0`/`-0.00` parse to
    /// plain zero; negative zero is not representable.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed);
        }
        if int_part.len() > 1 && int_part.starts_with('0') {
            return Err(AmountError::Malformed);
        }
        // A decimal point must be followed by at least one digit.
        if rest.contains('.')
            && (frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(AmountError::Malformed);
        }

        let scale = u32::try_from(frac_part.len()).map_err(|_| AmountError::OutOfRange)?;
        Self::from_digits(negative, int_part, frac_part, scale)
    }

    /// Build an amount from already-validated digit strings.
    ///
    /// `int_digits` and `frac_digits` must consist of ASCII digits only;
    /// `frac_digits` shorter than `scale` is right-padded with zeros, longer
    /// is malformed. This is the entry point for editing layers that have
    /// extracted digits from a display string.
    pub fn from_digits(
        negative: bool,
        int_digits: &str,
        frac_digits: &str,
        scale: u32,
    ) -> Result<Self, AmountError> {
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AmountError::Malformed);
        }
        if frac_digits.len() > scale as usize {
            return Err(AmountError::Malformed);
        }

        let mut units: i128 = 0;
        for b in int_digits.bytes() {
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add((b - b'0') as i128))
                .ok_or(AmountError::OutOfRange)?;
        }
        for b in frac_digits.bytes() {
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add((b - b'0') as i128))
                .ok_or(AmountError::OutOfRange)?;
        }
        // Missing fractional digits count as trailing zeros.
        let missing = scale as usize - frac_digits.len();
        for _ in 0..missing {
            units = units.checked_mul(10).ok_or(AmountError::OutOfRange)?;
        }

        if negative {
            units = -units;
        }
        Ok(Self { units, scale })
    }

    /// The number of fractional digits.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if the amount is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Returns `true` for negative nonzero amounts.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.units < 0
    }

    /// The same magnitude with the opposite sign. Zero stays zero.
    #[inline]
    pub const fn negated(&self) -> Self {
        Self {
            units: -self.units,
            scale: self.scale,
        }
    }

    /// Checked addition.
    ///
    /// The result carries the larger of the two scales. Returns `None` when
    /// scale alignment or the sum overflows.
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        let scale = self.scale.max(other.scale);
        let a = self.rescaled_units(scale)?;
        let b = other.rescaled_units(scale)?;
        Some(Amount {
            units: a.checked_add(b)?,
            scale,
        })
    }

    /// Checked subtraction; see [`Amount::checked_add`].
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        self.checked_add(&other.negated())
    }

    fn rescaled_units(&self, scale: u32) -> Option<i128> {
        debug_assert!(scale >= self.scale);
        self.units.checked_mul(pow10(scale - self.scale)?)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.units.cmp(&other.units);
        }
        let scale = self.scale.max(other.scale);
        match (self.rescaled_units(scale), other.rescaled_units(scale)) {
            (Some(a), Some(b)) => a.cmp(&b),
            // A side that cannot be aligned has a larger magnitude than
            // anything the other side can represent; its sign decides.
            (None, _) => {
                if self.units < 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (_, None) => {
                if other.units < 0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.units.unsigned_abs();
        if self.units < 0 {
            write!(f, "-")?;
        }
        if self.scale == 0 {
            return write!(f, "{magnitude}");
        }
        match pow10(self.scale) {
            Some(divisor) => {
                let divisor = divisor.unsigned_abs();
                let int = magnitude / divisor;
                let frac = magnitude % divisor;
                write!(f, "{int}.{frac:0width$}", width = self.scale as usize)
            }
            // A scale beyond every power of ten that fits i128: the whole
            // magnitude is fractional.
            None => write!(f, "0.{magnitude:0width$}", width = self.scale as usize),
        }
    }
}

/// `10^exp` as `i128`, or `None` when it overflows.
fn pow10(exp: u32) -> Option<i128> {
    let mut result: i128 = 1;
    for _ in 0..exp {
        result = result.checked_mul(10)?;
    }
    Some(result)
}
