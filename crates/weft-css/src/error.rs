// SPDX-License-Identifier: MIT

use thiserror::Error;
use weft_color::ColorError;

pub type Result<T> = std::result::Result<T, CssError>;

/// Why a raw token could not be normalized into a CSS primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    #[error("empty {kind} value")]
    Empty { kind: &'static str },

    #[error("invalid length {input:?}: expected a number with an optional unit, a percentage or `auto`")]
    InvalidLength { input: String },

    #[error("unknown length unit {unit:?} in {input:?}")]
    UnknownUnit { input: String, unit: String },

    #[error("invalid color: {0}")]
    Color(#[from] ColorError),

    #[error("malformed function {input:?}: expected name(arguments)")]
    MalformedFunction { input: String },

    #[error("unknown CSS function {name:?}")]
    UnknownFunction { name: String },

    #[error("expected {expected}() but found {found}()")]
    FunctionMismatch { expected: String, found: String },

    #[error("{name}() requires arguments")]
    EmptyArguments { name: String },

    #[error("{input:?} is not a global keyword (inherit, initial, unset, revert, revert-layer)")]
    InvalidKeyword { input: String },

    #[error("{input:?} is not a CSS identifier")]
    InvalidIdent { input: String },

    #[error("{input:?} is a global keyword, not a plain identifier")]
    ReservedIdent { input: String },

    #[error("unterminated quote in {input:?}")]
    UnterminatedQuote { input: String },

    #[error("invalid image reference {input:?}")]
    InvalidImage { input: String },

    #[error("unsafe URL scheme {scheme:?}")]
    UnsafeScheme { scheme: String },

    #[error("unsupported URL scheme {scheme:?}: expected http, https, data or blob")]
    UnsupportedScheme { scheme: String },
}

impl CssError {
    #[must_use]
    pub const fn empty(kind: &'static str) -> Self {
        Self::Empty { kind }
    }
}
