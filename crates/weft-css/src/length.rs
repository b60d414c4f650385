// SPDX-License-Identifier: MIT
//
// Numbers, lengths and percentages.
//
// Grammar (after trimming):
//
//   auto
//   [+-]? ( digits ( . digits )? | . digits ) ( unit | % )?
//
// Units come from a fixed allow-list and match case-insensitively. The
// canonical form is the shortest decimal that round-trips the magnitude,
// followed by the unit in allow-list spelling: `+01.50PX` → `1.5px`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CssError, Result};
use crate::value::CssValue;

/// Every accepted length unit, in canonical spelling.
pub const LENGTH_UNITS: [&str; 49] = [
    // Font-relative
    "em", "rem", "ex", "rex", "cap", "rcap", "ch", "rch", "ic", "ric", "lh", "rlh",
    // Viewport
    "vw", "vh", "vi", "vb", "vmin", "vmax",
    "svw", "svh", "svi", "svb", "svmin", "svmax",
    "lvw", "lvh", "lvi", "lvb", "lvmin", "lvmax",
    "dvw", "dvh", "dvi", "dvb", "dvmin", "dvmax",
    // Container
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
    // Absolute
    "px", "cm", "mm", "Q", "in", "pc", "pt",
];

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+))([A-Za-z]+|%)?$").expect("length regex")
});

/// A number, length, percentage or `auto`.
///
/// ```
/// use weft_css::{CssValue, Length};
///
/// let gap = Length::parse("+01.50PX").unwrap();
/// assert_eq!(gap.as_css(), "1.5px");
/// assert_eq!(gap.value(), Some(1.5));
/// assert_eq!(gap.unit(), "px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length {
    css: String,
    // Byte offset where the unit starts.
    split: usize,
}

impl Length {
    /// A length in pixels. Non-finite magnitudes collapse to 0.
    #[must_use]
    pub fn px(value: f64) -> Self {
        Self::from_parts(value, "px")
    }

    /// A length in root ems. Non-finite magnitudes collapse to 0.
    #[must_use]
    pub fn rem(value: f64) -> Self {
        Self::from_parts(value, "rem")
    }

    /// A percentage. Non-finite magnitudes collapse to 0.
    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self::from_parts(value, "%")
    }

    /// A unitless number such as a `line-height` or `font-weight`.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::from_parts(value, "")
    }

    /// The `auto` keyword.
    #[must_use]
    pub fn auto() -> Self {
        Self { css: "auto".to_string(), split: 0 }
    }

    /// The magnitude, or `None` for `auto` and the empty sentinel.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.css.get(..self.split).and_then(|n| n.parse().ok())
    }

    /// The unit in canonical spelling: `""` for bare numbers, `"%"` for
    /// percentages.
    #[must_use]
    pub fn unit(&self) -> &str {
        if self.is_auto() { "" } else { &self.css[self.split..] }
    }

    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.css == "auto"
    }

    /// Multiply the magnitude by `factor`, keeping the unit.
    ///
    /// `auto` and the empty sentinel are returned unchanged.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        match self.value() {
            Some(value) => Self::from_parts(value * factor, self.unit()),
            None => self.clone(),
        }
    }

    fn from_parts(value: f64, unit: &str) -> Self {
        let number = format_number(value);
        let split = number.len();
        Self { css: number + unit, split }
    }
}

impl CssValue for Length {
    const KIND: &'static str = "length";

    fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::auto());
        }

        let invalid = || CssError::InvalidLength { input: s.to_string() };
        let caps = LENGTH.captures(s).ok_or_else(invalid)?;
        let value: f64 = caps[1].parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        let unit = match caps.get(2).map(|m| m.as_str()) {
            None => "",
            Some("%") => "%",
            Some(unit) => canonical_unit(unit).ok_or_else(|| CssError::UnknownUnit {
                input: s.to_string(),
                unit: unit.to_string(),
            })?,
        };
        Ok(Self::from_parts(value, unit))
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Look up `unit` case-insensitively, returning its canonical spelling.
#[must_use]
pub fn canonical_unit(unit: &str) -> Option<&'static str> {
    LENGTH_UNITS.iter().copied().find(|u| u.eq_ignore_ascii_case(unit))
}

/// Shortest decimal that round-trips `value`; `-0` and non-finite become `0`.
fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    // f64 Display never uses exponent notation and prints the shortest
    // representation that parses back to the same value.
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn css(raw: &str) -> String {
        Length::parse(raw).unwrap_or_else(|e| panic!("{raw:?}: {e}")).as_css().to_string()
    }

    #[test]
    fn minimal_decimal() {
        assert_eq!(css("+01.50px"), "1.5px");
        assert_eq!(css("10.000"), "10");
        assert_eq!(css(".5em"), "0.5em");
        assert_eq!(css("-0"), "0");
        assert_eq!(css("-0.0rem"), "0rem");
        assert_eq!(css("-2.25vw"), "-2.25vw");
    }

    #[test]
    fn units_are_case_insensitive_and_canonical() {
        assert_eq!(css("12PX"), "12px");
        assert_eq!(css("3q"), "3Q");
        assert_eq!(css("100DVMAX"), "100dvmax");
        assert_eq!(css("4Cqi"), "4cqi");
    }

    #[test]
    fn percent_auto_and_numbers() {
        assert_eq!(css("50%"), "50%");
        assert_eq!(css("  AUTO "), "auto");
        assert_eq!(css("700"), "700");
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["px", "1 px", "1.px", "1e3px", "1,5px", "--1px", "calc(1px)", "1.5.5"] {
            assert!(Length::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejects_unknown_units() {
        assert!(matches!(
            Length::parse("3furlongs"),
            Err(CssError::UnknownUnit { unit, .. }) if unit == "furlongs"
        ));
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(Length::parse("  "), Err(CssError::Empty { kind: "length" })));
    }

    #[test]
    fn try_parse_yields_sentinel() {
        let (ok, value) = Length::try_parse("wide");
        assert!(!ok);
        assert!(value.is_empty());
        assert_eq!(value.value(), None);

        let (ok, value) = Length::try_parse("2rem");
        assert!(ok);
        assert_eq!(value, Length::rem(2.0));
    }

    #[test]
    fn accessors() {
        let l = Length::parse("-1.25rem").unwrap();
        assert_eq!(l.value(), Some(-1.25));
        assert_eq!(l.unit(), "rem");

        let auto = Length::auto();
        assert!(auto.is_auto());
        assert_eq!(auto.value(), None);
        assert_eq!(auto.unit(), "");

        assert_eq!(Length::percent(50.0).unit(), "%");
        assert_eq!(Length::number(1.5).unit(), "");
    }

    #[test]
    fn constructors_match_parsing() {
        assert_eq!(Length::px(2.0), Length::parse("2px").unwrap());
        assert_eq!(Length::number(-0.0).as_css(), "0");
        assert_eq!(Length::px(f64::NAN).as_css(), "0px");
    }

    #[test]
    fn scale_keeps_unit() {
        assert_eq!(Length::rem(1.0).scale(1.5).as_css(), "1.5rem");
        assert_eq!(Length::percent(40.0).scale(0.5).as_css(), "20%");
        assert_eq!(Length::auto().scale(3.0), Length::auto());
    }

    #[test]
    fn equality_follows_canonical_string() {
        assert_eq!(Length::parse("1.0px").unwrap(), Length::parse("01px").unwrap());
        assert!(Length::parse("1px").unwrap() < Length::parse("2px").unwrap());
    }

    #[test]
    fn declaration() {
        let l = Length::px(2.0);
        assert_eq!(l.declaration("outline-width", Some("weft")), "--weft-outline-width:2px;");
    }
}
