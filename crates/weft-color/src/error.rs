// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

/// Why a color literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color literal")]
    Empty,

    #[error("invalid hex color {0:?}: expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidHex(String),

    #[error("unknown color function {0:?}: expected rgb, rgba, hsv or hsva")]
    UnknownFunction(String),

    #[error("{function}() takes {expected} arguments, found {found}")]
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {channel} channel {input:?}")]
    InvalidNumber { channel: &'static str, input: String },

    #[error("{channel} channel {value} is out of range {range}")]
    OutOfRange {
        channel: &'static str,
        value: String,
        range: &'static str,
    },

    #[error("unknown color name {0:?}")]
    UnknownName(String),
}
