//! Error types for configuration and value operations.
//!
//! Rejected keystrokes are NOT errors: they are a steady-state outcome of
//! reconciliation, reported through the invalid callback. The types here
//! cover the two genuinely fallible surfaces (formatter/bound
//! configuration and canonical value strings) and are returned before any
//! state is mutated, so a failed call leaves the engine untouched.

use std::fmt;

use amount_core::AmountError;

/// Invalid formatter options or min/max bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The decimal separator must never be the empty string.
    EmptyDecimalSeparator,
    /// Two separator/sign tokens share at least one character.
    OverlappingTokens {
        first: &'static str,
        second: &'static str,
    },
    /// Positive and negative sign are identical.
    EqualSigns,
    /// A sign is longer than one character.
    SignTooLong { sign: String },
    /// Neither sign is exactly one character long.
    NoOneCharSign,
    /// A bound string is not a canonical decimal.
    MalformedBound { bound: String },
    /// A bound's scale differs from the current value's scale.
    ScaleMismatch { bound: String, expected: u32 },
    /// min would exceed max.
    MinAboveMax { min: String, max: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDecimalSeparator => {
                write!(f, "decimal separator must not be empty")
            }
            ConfigError::OverlappingTokens { first, second } => {
                write!(f, "{first} and {second} share characters")
            }
            ConfigError::EqualSigns => {
                write!(f, "positive and negative sign must differ")
            }
            ConfigError::SignTooLong { sign } => {
                write!(f, "sign {sign:?} is longer than one character")
            }
            ConfigError::NoOneCharSign => {
                write!(f, "at least one sign must be exactly one character")
            }
            ConfigError::MalformedBound { bound } => {
                write!(f, "bound {bound:?} is not a canonical decimal")
            }
            ConfigError::ScaleMismatch { bound, expected } => {
                write!(f, "bound {bound:?} does not have scale {expected}")
            }
            ConfigError::MinAboveMax { min, max } => {
                write!(f, "min {min} exceeds max {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Invalid canonical value string or out-of-range arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// The string does not match `-?(0|[1-9]\d*)(\.\d+)?`.
    Malformed,
    /// The value does not fit the underlying representation.
    OutOfRange,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::Malformed => write!(f, "not a canonical decimal string"),
            ValueError::OutOfRange => write!(f, "value out of representable range"),
        }
    }
}

impl std::error::Error for ValueError {}

impl From<AmountError> for ValueError {
    fn from(e: AmountError) -> Self {
        match e {
            AmountError::Malformed => ValueError::Malformed,
            AmountError::OutOfRange => ValueError::OutOfRange,
        }
    }
}

/// Construction failure: either part of the initial setup can be invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    Config(ConfigError),
    Value(ValueError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "invalid formatter options: {e}"),
            InitError::Value(e) => write!(f, "invalid initial value: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl From<ValueError> for InitError {
    fn from(e: ValueError) -> Self {
        InitError::Value(e)
    }
}
