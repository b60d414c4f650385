// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CssError, Result};
use crate::value::CssValue;

/// The CSS-wide keywords, in canonical spelling.
pub const GLOBAL_KEYWORDS: [&str; 5] = ["inherit", "initial", "unset", "revert", "revert-layer"];

// ─── GlobalKeyword ───────────────────────────────────────────────────────────

/// One of the CSS-wide keywords, valid for every property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalKeyword(&'static str);

impl GlobalKeyword {
    pub const INHERIT: Self = Self("inherit");
    pub const INITIAL: Self = Self("initial");
    pub const UNSET: Self = Self("unset");
    pub const REVERT: Self = Self("revert");
    pub const REVERT_LAYER: Self = Self("revert-layer");
}

impl CssValue for GlobalKeyword {
    const KIND: &'static str = "global keyword";

    fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        GLOBAL_KEYWORDS
            .iter()
            .copied()
            .find(|k| k.eq_ignore_ascii_case(s))
            .map(Self)
            .ok_or_else(|| CssError::InvalidKeyword { input: s.to_string() })
    }

    fn as_css(&self) -> &str {
        self.0
    }
}

impl fmt::Display for GlobalKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ─── Ident ───────────────────────────────────────────────────────────────────

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[a-z_][a-z0-9_-]*$").expect("ident regex"));

/// A single keyword value such as `solid`, `border-box` or `smooth`.
///
/// Canonically lowercase. CSS-wide keywords are rejected; they belong to
/// [`GlobalKeyword`]. Custom properties (`--x`) are rejected; they belong to
/// [`CssFunction`](crate::CssFunction).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident {
    css: String,
}

impl Ident {
    /// Build from a known-good lowercase identifier.
    ///
    /// # Errors
    ///
    /// Same as [`CssValue::parse`].
    pub fn new(ident: &str) -> Result<Self> {
        Self::parse(ident)
    }
}

impl CssValue for Ident {
    const KIND: &'static str = "identifier";

    fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        let lower = s.to_ascii_lowercase();
        if GLOBAL_KEYWORDS.contains(&lower.as_str()) {
            return Err(CssError::ReservedIdent { input: s.to_string() });
        }
        if !IDENT.is_match(&lower) {
            return Err(CssError::InvalidIdent { input: s.to_string() });
        }
        Ok(Self { css: lower })
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
