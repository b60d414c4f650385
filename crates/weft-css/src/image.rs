// SPDX-License-Identifier: MIT
//! Image references: `url("…")` values for `background-image` and friends.
//!
//! Only the first `url(…)` in the input survives; gradients and other
//! layers are dropped. Without a `url(` the whole input is the URL body.
//! Script schemes are refused outright and absolute URLs must use http,
//! https, data or blob.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use weft_color::{Color, relative_luminance};

use crate::error::{CssError, Result};
use crate::font::{quote, unquote};
use crate::value::CssValue;

/// Schemes an absolute URL may use.
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "data", "blob"];

const DARK_OVERLAY: &str = "linear-gradient(rgba(0,0,0,0.5),rgba(0,0,0,0.5))";
const LIGHT_OVERLAY: &str = "linear-gradient(rgba(255,255,255,0.5),rgba(255,255,255,0.5))";

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]*):").expect("url scheme regex"));

/// A sanitized `url("…")` reference, optionally behind a legibility overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageRef {
    css: String,
}

impl ImageRef {
    /// Parse `raw` and layer a 50% overlay over it so text on top stays
    /// legible against `background`.
    ///
    /// Light backgrounds (relative luminance ≥ 0.5) get a black overlay,
    /// dark ones a white overlay.
    ///
    /// # Errors
    ///
    /// Same as [`CssValue::parse`].
    pub fn with_overlay(raw: &str, background: Color) -> Result<Self> {
        let image = Self::parse(raw)?;
        let overlay = if relative_luminance(background) >= 0.5 { DARK_OVERLAY } else { LIGHT_OVERLAY };
        Ok(Self { css: format!("{overlay},{}", image.css) })
    }

    /// Whether an overlay gradient precedes the image.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.css.starts_with("linear-gradient(")
    }
}

impl CssValue for ImageRef {
    const KIND: &'static str = "image";

    fn parse(raw: &str) -> Result<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }

        let body = match find_url(s)? {
            Some(body) => body,
            None => unquote(s),
        };
        let body = body.trim();
        if body.is_empty() {
            return Err(CssError::InvalidImage { input: s.to_string() });
        }
        check_scheme(body)?;
        if body.chars().any(char::is_control) {
            return Err(CssError::InvalidImage { input: s.to_string() });
        }

        Ok(Self { css: format!("url({})", quote(body)) })
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Body of the first `url(…)` token, unquoted; `None` if there is none.
fn find_url(s: &str) -> Result<Option<String>> {
    let lower = s.to_ascii_lowercase();
    let Some(start) = lower.find("url(") else {
        return Ok(None);
    };
    let rest = &s[start + 4..];
    let invalid = || CssError::InvalidImage { input: s.to_string() };

    let trimmed = rest.trim_start();
    let Some(q) = trimmed.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
        let close = rest.find(')').ok_or_else(invalid)?;
        return Ok(Some(rest[..close].trim().to_string()));
    };

    // Quoted body: scan to the matching quote, then expect `)`.
    let mut escaped = false;
    for (i, c) in trimmed.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == q {
            let after = trimmed[i + 1..].trim_start();
            if !after.starts_with(')') {
                return Err(invalid());
            }
            return Ok(Some(unquote(&trimmed[..=i])));
        }
    }
    Err(CssError::UnterminatedQuote { input: s.to_string() })
}

fn check_scheme(body: &str) -> Result<()> {
    // Browsers ignore embedded whitespace in schemes, so `java script:` counts.
    let squeezed: String = body
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    for unsafe_scheme in ["javascript:", "vbscript:"] {
        if squeezed.starts_with(unsafe_scheme) {
            return Err(CssError::UnsafeScheme {
                scheme: unsafe_scheme.trim_end_matches(':').to_string(),
            });
        }
    }

    if let Some(caps) = SCHEME.captures(body) {
        let scheme = caps[1].to_ascii_lowercase();
        if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
            return Err(CssError::UnsupportedScheme { scheme });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn css(raw: &str) -> String {
        ImageRef::parse(raw).unwrap_or_else(|e| panic!("{raw:?}: {e}")).as_css().to_string()
    }

    #[test]
    fn bare_paths_are_wrapped() {
        assert_eq!(css("img/banner.png"), r#"url("img/banner.png")"#);
        assert_eq!(css("  'img/banner.png' "), r#"url("img/banner.png")"#);
    }

    #[test]
    fn first_url_wins() {
        assert_eq!(
            css("linear-gradient(red, blue), URL( 'a.png' ), url(b.png)"),
            r#"url("a.png")"#
        );
        assert_eq!(css("url(https://cdn.example/x.jpg)"), r#"url("https://cdn.example/x.jpg")"#);
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(css(r#"url("a\"b.png")"#), r#"url("a\"b.png")"#);
        assert_eq!(css(r"dir\file.png"), r#"url("dir\\file.png")"#);
    }

    #[test]
    fn canonical_form_is_stable() {
        let once = css(r#"url("it's \"here\".png")"#);
        assert_eq!(css(&once), once);
    }

    #[test]
    fn script_schemes_are_refused() {
        for raw in ["javascript:alert(1)", "url(JavaScript:alert(1))", "java\tscript:x", "vbscript:msgbox"] {
            assert!(
                matches!(ImageRef::parse(raw), Err(CssError::UnsafeScheme { .. })),
                "{raw:?} should be refused"
            );
        }
    }

    #[test]
    fn only_known_schemes() {
        assert!(css("data:image/png;base64,AAAA").starts_with("url(\"data:"));
        assert!(css("blob:https://x/y").starts_with("url(\"blob:"));
        assert!(matches!(
            ImageRef::parse("ftp://host/file.png"),
            Err(CssError::UnsupportedScheme { scheme }) if scheme == "ftp"
        ));
        assert!(matches!(
            ImageRef::parse("file:///etc/passwd"),
            Err(CssError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn empty_bodies_are_invalid() {
        assert!(matches!(ImageRef::parse("url()"), Err(CssError::InvalidImage { .. })));
        assert!(matches!(ImageRef::parse("url('')"), Err(CssError::InvalidImage { .. })));
        assert!(matches!(ImageRef::parse(""), Err(CssError::Empty { .. })));
        assert!(matches!(ImageRef::parse("url(a.png"), Err(CssError::InvalidImage { .. })));
    }

    #[test]
    fn overlay_follows_background_luminance() {
        let light = ImageRef::with_overlay("a.png", Color::WHITE).unwrap();
        assert_eq!(light.as_css(), format!("{DARK_OVERLAY},url(\"a.png\")"));
        assert!(light.has_overlay());

        let dark = ImageRef::with_overlay("a.png", Color::from_u32(0x21_21_21)).unwrap();
        assert_eq!(dark.as_css(), format!("{LIGHT_OVERLAY},url(\"a.png\")"));
        assert!(!ImageRef::parse("a.png").unwrap().has_overlay());
    }
}
