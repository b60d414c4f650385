// SPDX-License-Identifier: MIT
//! CSS function expressions: `calc(…)`, `var(…)`, `translateX(…)`, …
//!
//! The shape is strict: an identifier, `(` with no whitespace before it,
//! and a final `)` that closes the first `(`. Only functions in
//! [`FUNCTION_NAMES`] are accepted. Names match case-insensitively except
//! the mixed-case transform functions, which must be spelled exactly.
//!
//! A bare custom property `--token` is shorthand for `var(--token)` when
//! the caller does not ask for a specific function.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CssError, Result};
use crate::value::CssValue;

/// Every accepted function name, in canonical spelling.
pub const FUNCTION_NAMES: &[&str] = &[
    // Math
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign",
    "sin", "cos", "tan", "asin", "acos", "atan", "atan2",
    "pow", "sqrt", "hypot", "log", "exp",
    // References
    "var", "env", "attr", "url",
    // Color
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch",
    "color", "color-mix", "light-dark",
    // Images
    "linear-gradient", "radial-gradient", "conic-gradient",
    "repeating-linear-gradient", "repeating-radial-gradient", "repeating-conic-gradient",
    "image-set", "cross-fade",
    // Transforms
    "matrix", "matrix3d", "perspective",
    "translate", "translateX", "translateY", "translateZ", "translate3d",
    "rotate", "rotateX", "rotateY", "rotateZ", "rotate3d",
    "scale", "scaleX", "scaleY", "scaleZ", "scale3d",
    "skew", "skewX", "skewY",
    // Filters
    "blur", "brightness", "contrast", "drop-shadow", "grayscale",
    "hue-rotate", "invert", "opacity", "saturate", "sepia",
    // Easing
    "cubic-bezier", "steps", "linear",
    // Grid
    "repeat", "minmax", "fit-content",
    // Content
    "counter", "counters", "format", "local",
];

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[A-Za-z][A-Za-z0-9-]*$").expect("function name regex"));

static CUSTOM_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--[A-Za-z0-9_-]+$").expect("custom property regex"));

/// Resolve `name` against [`FUNCTION_NAMES`].
///
/// Mixed-case names (`translateX`, `rotateY`, `skewX`, …) only match
/// their exact spelling; everything else matches case-insensitively.
#[must_use]
pub fn canonical_function(name: &str) -> Option<&'static str> {
    FUNCTION_NAMES.iter().copied().find(|known| {
        if known.bytes().any(|b| b.is_ascii_uppercase()) {
            *known == name
        } else {
            known.eq_ignore_ascii_case(name)
        }
    })
}

/// A validated CSS function expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CssFunction {
    css: String,
}

impl CssFunction {
    /// Parse `raw`, requiring the function to be `expected`.
    ///
    /// The `--token` shorthand is not applied here, so
    /// `parse_named("--gap", "var")` fails.
    ///
    /// # Errors
    ///
    /// Fails if `expected` is not a known function, if `raw` is malformed,
    /// or if it names a different function.
    pub fn parse_named(raw: &str, expected: &str) -> Result<Self> {
        let want = canonical_function(expected.trim()).ok_or_else(|| CssError::UnknownFunction {
            name: expected.trim().to_string(),
        })?;
        let parsed = parse_shape(raw.trim())?;
        if parsed.name() != want {
            return Err(CssError::FunctionMismatch {
                expected: want.to_string(),
                found: parsed.name().to_string(),
            });
        }
        Ok(parsed)
    }

    /// Like [`parse_named`](Self::parse_named), yielding the empty sentinel on failure.
    #[must_use]
    pub fn try_parse_named(raw: &str, expected: &str) -> (bool, Self) {
        Self::parse_named(raw, expected).map_or_else(|_| (false, Self::default()), |f| (true, f))
    }

    /// `var(--token)`.
    ///
    /// # Errors
    ///
    /// Fails if `token` is not a custom property name.
    pub fn var(token: &str) -> Result<Self> {
        let token = token.trim();
        if !CUSTOM_PROPERTY.is_match(token) {
            return Err(CssError::MalformedFunction { input: token.to_string() });
        }
        Ok(Self { css: format!("var({token})") })
    }

    /// Canonical function name; empty for the sentinel.
    #[must_use]
    pub fn name(&self) -> &str {
        self.css.find('(').map_or("", |open| &self.css[..open])
    }

    /// The trimmed text between the parentheses.
    #[must_use]
    pub fn arguments(&self) -> &str {
        match self.css.find('(') {
            Some(open) => &self.css[open + 1..self.css.len() - 1],
            None => "",
        }
    }
}

impl CssValue for CssFunction {
    const KIND: &'static str = "function";

    fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        if s.starts_with("--") && !s.contains('(') {
            return Self::var(s);
        }
        parse_shape(s)
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for CssFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

fn parse_shape(s: &str) -> Result<CssFunction> {
    if s.is_empty() {
        return Err(CssError::empty(CssFunction::KIND));
    }
    let malformed = || CssError::MalformedFunction { input: s.to_string() };

    let open = s.find('(').ok_or_else(malformed)?;
    let name = &s[..open];
    if !NAME.is_match(name) {
        return Err(malformed());
    }
    if matching_close(s, open) != Some(s.len() - 1) {
        return Err(malformed());
    }

    let canonical = canonical_function(name).ok_or_else(|| CssError::UnknownFunction {
        name: name.to_string(),
    })?;
    let inner = s[open + 1..s.len() - 1].trim();
    if inner.is_empty() {
        return Err(CssError::EmptyArguments { name: canonical.to_string() });
    }
    Ok(CssFunction { css: format!("{canonical}({inner})") })
}

/// Byte index of the `)` that closes the `(` at `open`.
///
/// Parentheses inside quoted strings are ignored.
fn matching_close(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in s[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn css(raw: &str) -> String {
        CssFunction::parse(raw).unwrap_or_else(|e| panic!("{raw:?}: {e}")).as_css().to_string()
    }

    #[test]
    fn canonical_spelling_and_trimmed_inner() {
        assert_eq!(css("  CALC(  100% - 2px ) "), "calc(100% - 2px)");
        assert_eq!(css("Linear-Gradient(red, blue)"), "linear-gradient(red, blue)");
        assert_eq!(css("translateX(4px)"), "translateX(4px)");
    }

    #[test]
    fn custom_property_shorthand() {
        assert_eq!(css("--gap"), "var(--gap)");
        assert_eq!(css("  --brand-primary_1 "), "var(--brand-primary_1)");
        assert!(CssFunction::parse("--").is_err());
        assert!(CssFunction::parse("--has space").is_err());
    }

    #[test]
    fn shorthand_only_without_explicit_name() {
        assert!(matches!(
            CssFunction::parse_named("--gap", "var"),
            Err(CssError::MalformedFunction { .. })
        ));
        assert_eq!(CssFunction::parse_named("var(--gap)", "VAR").unwrap().as_css(), "var(--gap)");
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(css("calc((1px + 2px) * 3)"), "calc((1px + 2px) * 3)");
        assert_eq!(css("min(calc(1px), 2px)"), "min(calc(1px), 2px)");
    }

    #[test]
    fn final_paren_must_close_the_first() {
        assert!(CssFunction::parse("calc(1px) + calc(2px)").is_err());
        assert!(CssFunction::parse("calc(1px").is_err());
        assert!(CssFunction::parse("calc(1px))").is_err());
    }

    #[test]
    fn quoted_parens_are_ignored() {
        assert_eq!(css(r#"url("a)b.png")"#), r#"url("a)b.png")"#);
    }

    #[test]
    fn whitespace_before_paren_is_rejected() {
        assert!(matches!(
            CssFunction::parse("calc (1px)"),
            Err(CssError::MalformedFunction { .. })
        ));
    }

    #[test]
    fn unknown_and_empty() {
        assert!(matches!(
            CssFunction::parse("frobnicate(1)"),
            Err(CssError::UnknownFunction { .. })
        ));
        assert!(matches!(
            CssFunction::parse("calc(   )"),
            Err(CssError::EmptyArguments { .. })
        ));
    }

    #[test]
    fn mixed_case_transforms_are_case_sensitive() {
        assert!(CssFunction::parse("translatex(1px)").is_err());
        assert!(CssFunction::parse("TRANSLATEX(1px)").is_err());
        assert!(CssFunction::parse_named("rotateX(1deg)", "rotateX").is_ok());
        assert!(matches!(
            CssFunction::parse_named("rotateY(1deg)", "rotateX"),
            Err(CssError::FunctionMismatch { .. })
        ));
        assert!(matches!(
            CssFunction::parse_named("rotateX(1deg)", "rotatex"),
            Err(CssError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn explicit_name_is_case_insensitive_otherwise() {
        assert!(CssFunction::parse_named("Calc(1px)", "CALC").is_ok());
        assert!(matches!(
            CssFunction::parse_named("min(1px)", "max"),
            Err(CssError::FunctionMismatch { .. })
        ));
    }

    #[test]
    fn unknown_expected_name() {
        let (ok, value) = CssFunction::try_parse_named("calc(1px)", "compute");
        assert!(!ok);
        assert!(value.is_empty());
    }

    #[test]
    fn accessors() {
        let f = CssFunction::parse("clamp(1rem, 2vw, 3rem)").unwrap();
        assert_eq!(f.name(), "clamp");
        assert_eq!(f.arguments(), "1rem, 2vw, 3rem");
        assert_eq!(CssFunction::default().name(), "");
        assert_eq!(CssFunction::default().arguments(), "");
    }
}
