//! Formatter configuration: separators, signs, currency tokens, and the
//! placement of those tokens around the number.
//!
//! A [`FormatterConfig`] is an immutable snapshot. The engine replaces it
//! wholesale through `format` and derives the positive/negative
//! prefix/suffix frames from it; nothing mutates a config in place during
//! a reconciliation pass.

use crate::error::ConfigError;

/// Placement of sign, currency symbol, and currency name around the number.
///
/// Tokens listed before `Number` form the prefix frame, tokens after it the
/// suffix frame. A token's separator (symbol separator, name separator) is
/// always emitted on the side facing the number, and only when the token
/// itself is non-empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayOrder {
    /// `-$1,234.56 USD`
    #[default]
    SignSymbolNumberName,
    /// `$-1,234.56 USD`
    SymbolSignNumberName,
    /// `-USD 1,234.56$`
    SignNameNumberSymbol,
    /// `USD -1,234.56$`
    NameSignNumberSymbol,
    /// `USD 1,234.56-$`
    NameNumberSignSymbol,
    /// `$1,234.56- USD`
    SymbolNumberSignName,
}

#[derive(Clone, Copy)]
enum Token {
    Sign,
    Symbol,
    Name,
}

impl DisplayOrder {
    fn layout(self) -> (&'static [Token], &'static [Token]) {
        use Token::*;
        match self {
            DisplayOrder::SignSymbolNumberName => (&[Sign, Symbol], &[Name]),
            DisplayOrder::SymbolSignNumberName => (&[Symbol, Sign], &[Name]),
            DisplayOrder::SignNameNumberSymbol => (&[Sign, Name], &[Symbol]),
            DisplayOrder::NameSignNumberSymbol => (&[Name, Sign], &[Symbol]),
            DisplayOrder::NameNumberSignSymbol => (&[Name], &[Sign, Symbol]),
            DisplayOrder::SymbolNumberSignName => (&[Symbol], &[Sign, Name]),
        }
    }
}

/// Partial formatter options, resolved against defaults by
/// [`FormatterConfig::resolve`]. Unset fields take their default, not the
/// previously configured value.
#[derive(Clone, Debug, Default)]
pub struct FormatterOptions {
    pub currency_symbol: Option<String>,
    pub currency_name: Option<String>,
    pub symbol_separator: Option<String>,
    pub name_separator: Option<String>,
    pub positive_sign: Option<String>,
    pub negative_sign: Option<String>,
    pub group_separator: Option<String>,
    pub group_size: Option<u32>,
    pub decimal_separator: Option<String>,
    pub display_order: Option<DisplayOrder>,
}

/// Immutable formatting snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatterConfig {
    pub currency_symbol: String,
    pub currency_name: String,
    pub symbol_separator: String,
    pub name_separator: String,
    pub positive_sign: String,
    pub negative_sign: String,
    pub group_separator: String,
    pub group_size: u32,
    pub decimal_separator: String,
    pub display_order: DisplayOrder,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_name: String::new(),
            symbol_separator: String::new(),
            name_separator: " ".to_string(),
            positive_sign: String::new(),
            negative_sign: "-".to_string(),
            group_separator: ",".to_string(),
            group_size: 3,
            decimal_separator: ".".to_string(),
            display_order: DisplayOrder::default(),
        }
    }
}

impl FormatterConfig {
    /// Resolve partial options against defaults and validate the result.
    ///
    /// Validation happens before the caller installs the config, so a
    /// rejected call can leave all engine state untouched. Rules:
    /// the decimal separator is non-empty; decimal separator, group
    /// separator, and the two signs pairwise share no characters; the signs
    /// differ, are at most one character each, and at least one of them is
    /// exactly one character.
    pub fn resolve(options: FormatterOptions) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            currency_symbol: options.currency_symbol.unwrap_or(defaults.currency_symbol),
            currency_name: options.currency_name.unwrap_or(defaults.currency_name),
            symbol_separator: options.symbol_separator.unwrap_or(defaults.symbol_separator),
            name_separator: options.name_separator.unwrap_or(defaults.name_separator),
            positive_sign: options.positive_sign.unwrap_or(defaults.positive_sign),
            negative_sign: options.negative_sign.unwrap_or(defaults.negative_sign),
            group_separator: options.group_separator.unwrap_or(defaults.group_separator),
            group_size: options.group_size.unwrap_or(defaults.group_size),
            decimal_separator: options.decimal_separator.unwrap_or(defaults.decimal_separator),
            display_order: options.display_order.unwrap_or(defaults.display_order),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_separator.is_empty() {
            return Err(ConfigError::EmptyDecimalSeparator);
        }

        let tokens: [(&'static str, &str); 4] = [
            ("decimal separator", &self.decimal_separator),
            ("group separator", &self.group_separator),
            ("positive sign", &self.positive_sign),
            ("negative sign", &self.negative_sign),
        ];
        for (i, &(first, a)) in tokens.iter().enumerate() {
            for &(second, b) in tokens.iter().skip(i + 1) {
                if shares_chars(a, b) {
                    return Err(ConfigError::OverlappingTokens { first, second });
                }
            }
        }

        if self.positive_sign == self.negative_sign {
            return Err(ConfigError::EqualSigns);
        }
        for sign in [&self.positive_sign, &self.negative_sign] {
            if sign.chars().count() > 1 {
                return Err(ConfigError::SignTooLong { sign: sign.clone() });
            }
        }
        if self.positive_sign.is_empty() && self.negative_sign.is_empty() {
            return Err(ConfigError::NoOneCharSign);
        }
        Ok(())
    }

    /// The sign string for the given polarity.
    #[inline]
    pub fn sign(&self, negative: bool) -> &str {
        if negative {
            &self.negative_sign
        } else {
            &self.positive_sign
        }
    }

    /// Everything displayed before the numeric body for the given polarity.
    pub fn prefix(&self, negative: bool) -> String {
        let (before, _) = self.display_order.layout();
        let mut out = String::new();
        for token in before {
            match token {
                Token::Sign => out.push_str(self.sign(negative)),
                Token::Symbol => {
                    if !self.currency_symbol.is_empty() {
                        out.push_str(&self.currency_symbol);
                        out.push_str(&self.symbol_separator);
                    }
                }
                Token::Name => {
                    if !self.currency_name.is_empty() {
                        out.push_str(&self.currency_name);
                        out.push_str(&self.name_separator);
                    }
                }
            }
        }
        out
    }

    /// Everything displayed after the numeric body for the given polarity.
    pub fn suffix(&self, negative: bool) -> String {
        let (_, after) = self.display_order.layout();
        let mut out = String::new();
        for token in after {
            match token {
                Token::Sign => out.push_str(self.sign(negative)),
                Token::Symbol => {
                    if !self.currency_symbol.is_empty() {
                        out.push_str(&self.symbol_separator);
                        out.push_str(&self.currency_symbol);
                    }
                }
                Token::Name => {
                    if !self.currency_name.is_empty() {
                        out.push_str(&self.name_separator);
                        out.push_str(&self.currency_name);
                    }
                }
            }
        }
        out
    }

    /// Grouping is active only with a positive group size and a non-empty
    /// separator.
    #[inline]
    pub fn grouping_enabled(&self) -> bool {
        self.group_size > 0 && !self.group_separator.is_empty()
    }
}

fn shares_chars(a: &str, b: &str) -> bool {
    a.chars().any(|c| b.contains(c))
}
