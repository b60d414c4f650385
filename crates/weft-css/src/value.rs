// SPDX-License-Identifier: MIT
//! The contract shared by every CSS primitive wrapper.
//!
//! A wrapper's only state is its canonical string. Parsing either produces
//! that string or fails; `try_parse` swaps the failure for the empty
//! sentinel so callers that prefer a flag over an error can have one.

use crate::error::Result;

/// A self-validating CSS value with one canonical text form.
pub trait CssValue: Sized + Default {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    /// Normalize `raw` into its canonical form.
    ///
    /// # Errors
    ///
    /// Returns a [`CssError`](crate::CssError) describing why `raw` is not a
    /// valid value of this kind.
    fn parse(raw: &str) -> Result<Self>;

    /// Normalize `raw`, returning `(false, Self::default())` on failure.
    ///
    /// The default is the empty sentinel whose canonical string is `""`.
    fn try_parse(raw: &str) -> (bool, Self) {
        Self::parse(raw).map_or_else(|_| (false, Self::default()), |value| (true, value))
    }

    /// The canonical string.
    fn as_css(&self) -> &str;

    /// Whether this is the empty sentinel.
    fn is_empty(&self) -> bool {
        self.as_css().is_empty()
    }

    /// Format as a declaration; see [`declaration`].
    fn declaration(&self, property: &str, prefix: Option<&str>) -> String {
        declaration(property, prefix, self.as_css())
    }
}

/// Format `value` as a CSS declaration.
///
/// | property  | prefix        | output                      |
/// |-----------|---------------|-----------------------------|
/// | `color`   | `None` / `""` | `color:#000000FF;`          |
/// | `color`   | `weft`        | `--weft-color:#000000FF;`   |
/// | `""`      | any           | `#000000FF`                 |
///
/// Leading `-` on the prefix and surrounding whitespace on both names are
/// ignored, so `--weft` and `weft` produce the same custom property.
#[must_use]
pub fn declaration(property: &str, prefix: Option<&str>, value: &str) -> String {
    let property = property.trim();
    if property.is_empty() {
        return value.to_string();
    }
    match prefix.map(|p| p.trim().trim_start_matches('-').trim_end_matches('-')) {
        Some(prefix) if !prefix.is_empty() => format!("--{prefix}-{property}:{value};"),
        _ => format!("{property}:{value};"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_declaration() {
        assert_eq!(declaration("color", None, "#000000FF"), "color:#000000FF;");
        assert_eq!(declaration(" color ", Some("   "), "red"), "color:red;");
    }

    #[test]
    fn prefixed_declaration() {
        assert_eq!(declaration("color", Some("weft"), "red"), "--weft-color:red;");
        assert_eq!(declaration("color", Some("--weft-"), "red"), "--weft-color:red;");
    }

    #[test]
    fn empty_property_yields_value() {
        assert_eq!(declaration("", Some("weft"), "1rem"), "1rem");
        assert_eq!(declaration("  ", None, "1rem"), "1rem");
    }
}
