use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::converter::{
    Cardinal, ConvertError, Digit, Electronic, Fraction, Telephone, Time, Verbatim,
};

/// Token category assigned by the upstream classifier. The engine trusts
/// the classification; it never re-derives it from the token text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenClass {
    Cardinal,
    Digit,
    Fraction,
    Telephone,
    Time,
    Electronic,
    Verbatim,
}

impl TokenClass {
    pub const ALL: [TokenClass; 7] = [
        TokenClass::Cardinal,
        TokenClass::Digit,
        TokenClass::Fraction,
        TokenClass::Telephone,
        TokenClass::Time,
        TokenClass::Electronic,
        TokenClass::Verbatim,
    ];

    fn label(self) -> &'static str {
        match self {
            TokenClass::Cardinal => "CARDINAL",
            TokenClass::Digit => "DIGIT",
            TokenClass::Fraction => "FRACTION",
            TokenClass::Telephone => "TELEPHONE",
            TokenClass::Time => "TIME",
            TokenClass::Electronic => "ELECTRONIC",
            TokenClass::Verbatim => "VERBATIM",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TokenClass {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CARDINAL" => Ok(TokenClass::Cardinal),
            "DIGIT" => Ok(TokenClass::Digit),
            "FRACTION" => Ok(TokenClass::Fraction),
            "TELEPHONE" => Ok(TokenClass::Telephone),
            "TIME" => Ok(TokenClass::Time),
            "ELECTRONIC" => Ok(TokenClass::Electronic),
            "VERBATIM" => Ok(TokenClass::Verbatim),
            _ => Err(NormalizeError::UnknownClass(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("unknown token class: {0}")]
    UnknownClass(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Registry over the shared converter singletons.
///
/// Construction is cheap (the underlying converters are built once per
/// process behind their own init guards) and the handle is freely
/// shareable across threads; `normalize` takes `&self` and keeps no
/// per-call state.
pub struct Normalizer {
    cardinal: &'static Cardinal,
    digit: &'static Digit,
    fraction: &'static Fraction,
    telephone: &'static Telephone,
    time: &'static Time,
    electronic: &'static Electronic,
    verbatim: &'static Verbatim,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            cardinal: Cardinal::global(),
            digit: Digit::global(),
            fraction: Fraction::global(),
            telephone: Telephone::global(),
            time: Time::global(),
            electronic: Electronic::global(),
            verbatim: Verbatim::global(),
        }
    }

    /// Normalize one classified token into its spoken-word form.
    pub fn normalize(&self, class: TokenClass, token: &str) -> Result<String, NormalizeError> {
        let _span = debug_span!("normalize", class = %class).entered();
        let normalized = match class {
            TokenClass::Cardinal => self.cardinal.convert(token),
            TokenClass::Digit => self.digit.convert(token)?,
            TokenClass::Fraction => self.fraction.convert(token),
            TokenClass::Telephone => self.telephone.convert(token),
            TokenClass::Time => self.time.convert(token),
            TokenClass::Electronic => self.electronic.convert(token),
            TokenClass::Verbatim => self.verbatim.convert(token),
        };
        Ok(normalized)
    }

    /// Corrected rendering for ELECTRONIC tokens. Never auto-selected;
    /// callers opt in explicitly.
    pub fn normalize_sensible(&self, token: &str) -> String {
        self.electronic.sensible_convert(token)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
