// SPDX-License-Identifier: MIT

use std::fmt;

use weft_color::Color;

use crate::error::{CssError, Result};
use crate::value::CssValue;

/// A color value, canonically `#RRGGBBAA`.
///
/// Accepts the full `weft-color` literal grammar: hex forms, `rgb()`,
/// `rgba()`, `hsv()`, `hsva()`, web color names and Material names.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CssColor {
    css: String,
}

impl CssColor {
    /// The parsed color, or `None` for the empty sentinel.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        Color::parse(&self.css).ok()
    }
}

impl From<Color> for CssColor {
    fn from(color: Color) -> Self {
        Self { css: color.to_hex() }
    }
}

impl CssValue for CssColor {
    const KIND: &'static str = "color";

    fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        Ok(Color::parse(raw)?.into())
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
