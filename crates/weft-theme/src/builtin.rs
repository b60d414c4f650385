// SPDX-License-Identifier: MIT
//! Bundled brands, written as [`BrandSpec`]s over Material palette names.

use std::collections::BTreeMap;

use crate::axis::Palette;
use crate::brand::{Brand, BrandSpec, SeedSpec};
use crate::error::{Result, ThemeError};

/// Hue names for the three brand roles and the neutral surfaces.
struct Hues {
    primary: &'static str,
    secondary: &'static str,
    tertiary: &'static str,
    neutral: &'static str,
}

const STATUS: [(Palette, &str); 4] = [
    (Palette::Success, "green"),
    (Palette::Info, "light blue"),
    (Palette::Warning, "amber"),
    (Palette::Error, "red"),
];

/// Names accepted by [`builtin`].
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "ocean", "forest"]
}

/// The [`BrandSpec`] a builtin brand expands from.
#[must_use]
pub fn builtin_spec(name: &str) -> Option<BrandSpec> {
    let (hues, body, heading, banner): (Hues, &[&str], &[&str], Option<&str>) = match name {
        "default" => (
            Hues { primary: "indigo", secondary: "pink", tertiary: "amber", neutral: "grey" },
            &["Inter", "system-ui", "sans-serif"],
            &[],
            None,
        ),
        "ocean" => (
            Hues { primary: "blue", secondary: "cyan", tertiary: "teal", neutral: "blue grey" },
            &["Source Sans 3", "Helvetica Neue", "Arial", "sans-serif"],
            &["Merriweather", "Georgia", "serif"],
            None,
        ),
        "forest" => (
            Hues { primary: "green", secondary: "light green", tertiary: "brown", neutral: "grey" },
            &["Nunito", "Segoe UI", "sans-serif"],
            &["Lora", "serif"],
            Some("img/forest-canopy.jpg"),
        ),
        _ => return None,
    };

    Some(BrandSpec {
        name: name.to_string(),
        body_font: body.iter().map(ToString::to_string).collect(),
        heading_font: heading.iter().map(ToString::to_string).collect(),
        font_size: Some("1rem".into()),
        spacing: Some("0.5rem".into()),
        radius: Some(if name == "forest" { "0.75rem" } else { "0.25rem" }.into()),
        banner_image: banner.map(Into::into),
        light: light(&hues),
        dark: dark(&hues),
    })
}

/// Expand a builtin brand by name.
///
/// # Errors
///
/// [`ThemeError::UnknownBrand`] for names outside [`builtin_names`].
pub fn builtin(name: &str) -> Result<Brand> {
    let spec = builtin_spec(name).ok_or_else(|| ThemeError::UnknownBrand(name.to_string()))?;
    Brand::from_spec(&spec)
}

// ─── Seeds ───────────────────────────────────────────────────────────────────

fn shade(hue: &str, shade: u16) -> Option<String> {
    Some(format!("{hue} {shade}"))
}

fn roles(hues: &Hues) -> impl Iterator<Item = (Palette, &'static str)> {
    [
        (Palette::Primary, hues.primary),
        (Palette::Secondary, hues.secondary),
        (Palette::Tertiary, hues.tertiary),
    ]
    .into_iter()
    .chain(STATUS)
}

fn light(hues: &Hues) -> BTreeMap<Palette, SeedSpec> {
    let n = hues.neutral;
    let p = hues.primary;
    let mut seeds = BTreeMap::from([
        (Palette::Surface, SeedSpec {
            background: shade(n, 50),
            border: shade(n, 300),
            foreground: shade(n, 900),
            accent: shade(p, 500),
            caret: shade(p, 700),
            outline: shade(p, 500),
            text_decoration: shade(p, 700),
        }),
        (Palette::SurfaceVariant, SeedSpec {
            background: shade(n, 50),
            border: shade(n, 200),
            foreground: shade(n, 800),
            accent: shade(p, 500),
            caret: shade(p, 700),
            outline: shade(p, 500),
            text_decoration: shade(n, 800),
        }),
    ]);
    for (palette, hue) in roles(hues) {
        seeds.insert(palette, SeedSpec {
            background: shade(hue, 700),
            border: shade(hue, 800),
            foreground: Some("white".into()),
            accent: shade(hue, 500),
            caret: Some("white".into()),
            outline: shade(hue, 900),
            text_decoration: Some("white".into()),
        });
        seeds.insert(palette.variant(), SeedSpec {
            background: shade(n, 50),
            border: shade(hue, 200),
            foreground: shade(hue, 800),
            accent: shade(hue, 700),
            caret: shade(hue, 800),
            outline: shade(hue, 700),
            text_decoration: shade(hue, 800),
        });
    }
    seeds
}

fn dark(hues: &Hues) -> BTreeMap<Palette, SeedSpec> {
    let n = hues.neutral;
    let p = hues.primary;
    let mut seeds = BTreeMap::from([
        (Palette::Surface, SeedSpec {
            background: shade(n, 900),
            border: shade(n, 700),
            foreground: shade(n, 50),
            accent: shade(p, 200),
            caret: shade(p, 200),
            outline: shade(p, 200),
            text_decoration: shade(p, 200),
        }),
        (Palette::SurfaceVariant, SeedSpec {
            background: shade(n, 900),
            border: shade(n, 800),
            foreground: shade(n, 100),
            accent: shade(p, 200),
            caret: shade(p, 200),
            outline: shade(p, 200),
            text_decoration: shade(n, 100),
        }),
    ]);
    for (palette, hue) in roles(hues) {
        seeds.insert(palette, SeedSpec {
            background: shade(hue, 200),
            border: shade(hue, 300),
            foreground: shade(n, 900),
            accent: shade(hue, 300),
            caret: shade(n, 900),
            outline: shade(hue, 100),
            text_decoration: shade(n, 900),
        });
        seeds.insert(palette.variant(), SeedSpec {
            background: shade(n, 900),
            border: shade(hue, 700),
            foreground: shade(hue, 200),
            accent: shade(hue, 300),
            caret: shade(hue, 200),
            outline: shade(hue, 300),
            text_decoration: shade(hue, 200),
        });
    }
    seeds
}
