// SPDX-License-Identifier: MIT
//
// Font-family lists.
//
// Input is one string or a list of strings; every entry may itself hold a
// comma-joined list. Each family is unwrapped from one layer of matching
// quotes, then re-quoted only if it needs it. Duplicates are dropped
// case-insensitively, keeping the first spelling.
//
//   ["Inter", "inter", "Open Sans"]      → Inter,"Open Sans"
//   "'Fira Code', monospace, Monospace"  → "Fira Code",monospace

use std::collections::HashSet;
use std::fmt;

use crate::error::{CssError, Result};
use crate::value::CssValue;

/// A canonical comma-separated font-family list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontFamily {
    css: String,
}

impl FontFamily {
    /// Normalize a list of entries, each of which may contain commas.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated quote or when no family remains.
    pub fn from_list<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut families: Vec<String> = Vec::new();

        for entry in entries {
            for token in split_families(entry.as_ref())? {
                let name = unquote(&token);
                if name.is_empty() || !seen.insert(name.to_lowercase()) {
                    continue;
                }
                families.push(quote_if_needed(&name));
            }
        }

        if families.is_empty() {
            return Err(CssError::empty(Self::KIND));
        }
        Ok(Self { css: families.join(",") })
    }

    /// The individual families without quotes.
    #[must_use]
    pub fn families(&self) -> Vec<String> {
        split_families(&self.css)
            .map(|tokens| tokens.iter().map(|t| unquote(t)).collect())
            .unwrap_or_default()
    }
}

impl CssValue for FontFamily {
    const KIND: &'static str = "font family";

    fn parse(raw: &str) -> Result<Self> {
        Self::from_list([raw])
    }

    fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Split on commas that sit outside quotes; tokens come back trimmed.
///
/// A quote only opens a quoted run at the start of a token, so apostrophes
/// inside bare names (`O'Neil Sans`) are plain characters.
fn split_families(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in input.chars() {
        if let Some(q) = quote {
            current.push(c);
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
            ',' => tokens.push(std::mem::take(&mut current).trim().to_string()),
            '"' | '\'' if current.trim().is_empty() => {
                current.clear();
                current.push(c);
                quote = Some(c);
            }
            _ => current.push(c),
        }
    }

    if quote.is_some() {
        return Err(CssError::UnterminatedQuote { input: input.to_string() });
    }
    tokens.push(current.trim().to_string());
    Ok(tokens.into_iter().filter(|t| !t.is_empty()).collect())
}

/// Strip one layer of matching quotes and resolve backslash escapes.
///
/// Unquoted tokens come back unchanged.
pub(crate) fn unquote(token: &str) -> String {
    let token = token.trim();
    let inner = ['"', '\'']
        .iter()
        .find_map(|&q| {
            token
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
                .filter(|_| token.len() >= 2)
        });
    let Some(inner) = inner else {
        return token.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// Escape `\` and `"` and wrap in double quotes.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if matches!(c, '\\' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn quote_if_needed(name: &str) -> String {
    if name.chars().any(|c| c.is_whitespace() || matches!(c, ',' | '"' | '\'')) {
        quote(name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(entries: &[&str]) -> String {
        FontFamily::from_list(entries).unwrap().as_css().to_string()
    }

    #[test]
    fn dedupes_case_insensitively_and_quotes_spaces() {
        assert_eq!(list(&["Inter", "inter", "Open Sans"]), r#"Inter,"Open Sans""#);
    }

    #[test]
    fn splits_commas_inside_entries() {
        assert_eq!(
            list(&["Roboto, Helvetica", "Arial,sans-serif"]),
            "Roboto,Helvetica,Arial,sans-serif"
        );
    }

    #[test]
    fn unwraps_single_and_double_quotes() {
        assert_eq!(
            FontFamily::parse("'Fira Code', \"monospace\", Monospace").unwrap().as_css(),
            r#""Fira Code",monospace"#
        );
    }

    #[test]
    fn comma_inside_quotes_is_kept() {
        assert_eq!(
            FontFamily::parse(r#""Weird, Font", serif"#).unwrap().as_css(),
            r#""Weird, Font",serif"#
        );
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let f = FontFamily::parse(r#""Say \"Hi\"", O'Neil"#).unwrap();
        assert_eq!(f.as_css(), r#""Say \"Hi\"","O'Neil""#);
        assert_eq!(f.families(), vec![r#"Say "Hi""#.to_string(), "O'Neil".to_string()]);
    }

    #[test]
    fn canonical_form_is_stable() {
        let once = FontFamily::parse(r#"'A B', "C\\D", e"#).unwrap();
        let twice = FontFamily::parse(once.as_css()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_results_are_errors() {
        assert!(matches!(FontFamily::parse(" , ,"), Err(CssError::Empty { .. })));
        assert!(matches!(FontFamily::from_list(Vec::<String>::new()), Err(CssError::Empty { .. })));
        assert!(matches!(FontFamily::parse(r#""""#), Err(CssError::Empty { .. })));
    }

    #[test]
    fn unterminated_quote() {
        assert!(matches!(
            FontFamily::parse("\"Open Sans, serif"),
            Err(CssError::UnterminatedQuote { .. })
        ));
    }
}
