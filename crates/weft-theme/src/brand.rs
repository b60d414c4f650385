// SPDX-License-Identifier: MIT
//! Brands: the seed colors and structural tokens a theme is built from.
//!
//! A [`Brand`] holds, per (theme variant, palette, interaction state), an
//! optional set of [`SeedColors`], plus fonts, sizing and an optional
//! banner image. Brands are usually written as a [`BrandSpec`] (one base
//! seed per palette) and expanded with [`Brand::from_spec`], which derives
//! every interaction state and the five elevation tiers.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};
use weft_color::contrast::{AA_LARGE, AAA_NORMAL};
use weft_color::{Color, ensure_minimum_contrast};
use weft_css::{CssValue, FontFamily, ImageRef, Length};

use crate::axis::{Elevation, InteractionState, Palette, StyleProperty, ThemeVariant};
use crate::derive::{Derived, derive_elevation, derive_state};
use crate::error::Result;

const DEFAULT_BODY_FONT: &str = "system-ui,-apple-system,\"Segoe UI\",Roboto,sans-serif";

// ─── Seed Colors ─────────────────────────────────────────────────────────────

/// The colors one palette cell provides. Every slot is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedColors {
    pub background: Option<Color>,
    pub border: Option<Color>,
    pub foreground: Option<Color>,
    pub accent: Option<Color>,
    pub caret: Option<Color>,
    pub outline: Option<Color>,
    pub text_decoration: Option<Color>,
}

impl SeedColors {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            background: None,
            border: None,
            foreground: None,
            accent: None,
            caret: None,
            outline: None,
            text_decoration: None,
        }
    }

    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    #[must_use]
    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    #[must_use]
    pub const fn caret(mut self, color: Color) -> Self {
        self.caret = Some(color);
        self
    }

    #[must_use]
    pub const fn outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    #[must_use]
    pub const fn text_decoration(mut self, color: Color) -> Self {
        self.text_decoration = Some(color);
        self
    }

    /// The seed that feeds `property`, if any.
    #[must_use]
    pub const fn get(&self, property: StyleProperty) -> Option<Color> {
        match property {
            StyleProperty::BackgroundColor => self.background,
            StyleProperty::BorderColor => self.border,
            StyleProperty::Color => self.foreground,
            StyleProperty::AccentColor => self.accent,
            StyleProperty::CaretColor => self.caret,
            StyleProperty::OutlineColor => self.outline,
            StyleProperty::TextDecorationColor => self.text_decoration,
            _ => None,
        }
    }

    /// Present seeds paired with the property they feed.
    pub fn entries(&self) -> impl Iterator<Item = (StyleProperty, Color)> + '_ {
        StyleProperty::ALL
            .into_iter()
            .filter(|p| p.is_color())
            .filter_map(|p| self.get(p).map(|c| (p, c)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

// ─── Brand ───────────────────────────────────────────────────────────────────

type SeedKey = (ThemeVariant, Palette, InteractionState);

/// Seed colors and structural tokens for one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    name: String,
    high_contrast: bool,
    body_font: FontFamily,
    heading_font: FontFamily,
    font_size: Length,
    spacing: Length,
    radius: Length,
    banner_image: Option<String>,
    seeds: BTreeMap<SeedKey, SeedColors>,
}

impl Brand {
    /// A brand with no seeds and default structural tokens: a system font
    /// stack, `1rem` text, `0.5rem` spacing and `0.25rem` radius.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let (_, font) = FontFamily::try_parse(DEFAULT_BODY_FONT);
        Self {
            name: name.into(),
            high_contrast: false,
            body_font: font.clone(),
            heading_font: font,
            font_size: Length::rem(1.0),
            spacing: Length::rem(0.5),
            radius: Length::rem(0.25),
            banner_image: None,
            seeds: BTreeMap::new(),
        }
    }

    // ── Structural tokens ──

    #[must_use]
    pub fn with_body_font(mut self, font: FontFamily) -> Self {
        self.body_font = font;
        self
    }

    #[must_use]
    pub fn with_heading_font(mut self, font: FontFamily) -> Self {
        self.heading_font = font;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: Length) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: Length) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: Length) -> Self {
        self.radius = radius;
        self
    }

    /// Attach a banner image; it is validated now and rendered with a
    /// legibility overlay at build time.
    ///
    /// # Errors
    ///
    /// Any [`ImageRef`] validation failure.
    pub fn with_banner_image(mut self, raw: &str) -> Result<Self> {
        ImageRef::parse(raw)?;
        self.banner_image = Some(raw.trim().to_string());
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }

    #[must_use]
    pub const fn body_font(&self) -> &FontFamily {
        &self.body_font
    }

    #[must_use]
    pub const fn heading_font(&self) -> &FontFamily {
        &self.heading_font
    }

    #[must_use]
    pub const fn font_size(&self) -> &Length {
        &self.font_size
    }

    #[must_use]
    pub const fn spacing(&self) -> &Length {
        &self.spacing
    }

    #[must_use]
    pub const fn radius(&self) -> &Length {
        &self.radius
    }

    #[must_use]
    pub fn banner_image(&self) -> Option<&str> {
        self.banner_image.as_deref()
    }

    // ── Seeds ──

    /// Set the seeds of one cell, replacing what was there.
    #[must_use]
    pub fn with_seeds(
        mut self,
        variant: ThemeVariant,
        palette: Palette,
        state: InteractionState,
        seeds: SeedColors,
    ) -> Self {
        self.seeds.insert((variant, palette, state), seeds);
        self
    }

    #[must_use]
    pub fn seeds(
        &self,
        variant: ThemeVariant,
        palette: Palette,
        state: InteractionState,
    ) -> Option<&SeedColors> {
        self.seeds.get(&(variant, palette, state))
    }

    /// Variants this brand has any seeds for.
    #[must_use]
    pub fn variants(&self) -> BTreeSet<ThemeVariant> {
        self.seeds.keys().map(|&(variant, _, _)| variant).collect()
    }

    /// Seed `palette` from one default-state `base` and derive every
    /// interactive state from it.
    #[must_use]
    pub fn derive_palette(mut self, variant: ThemeVariant, palette: Palette, base: SeedColors) -> Self {
        for state in InteractionState::INTERACTIVE {
            let derived = derive_state(&base, state);
            self.note_unmet(&derived, variant, palette, state);
            self.seeds.insert((variant, palette, state), derived.seeds);
        }
        self
    }

    /// Fill the five elevation tiers of `variant` from its base surface.
    #[must_use]
    pub fn derive_elevations(self, variant: ThemeVariant, surface: SeedColors) -> Self {
        Elevation::ALL.into_iter().fold(self, |brand, tier| {
            let derived = derive_elevation(&surface, tier);
            brand.note_unmet(&derived, variant, tier.palette(), InteractionState::Default);
            brand.derive_palette(variant, tier.palette(), derived.seeds)
        })
    }

    /// The high-contrast counterpart of this brand.
    ///
    /// Light and dark seeds move to `HighContrastLight` / `HighContrastDark`
    /// with foregrounds repaired to 7:1 and borders to 3:1 against their
    /// background. Seeds already written for a high-contrast variant are
    /// kept as they are.
    #[must_use]
    pub fn high_contrast(&self) -> Self {
        let mut seeds = BTreeMap::new();
        for (&(variant, palette, state), cell) in &self.seeds {
            if !matches!(variant, ThemeVariant::Light | ThemeVariant::Dark) {
                continue;
            }
            let mut cell = *cell;
            if let Some(bg) = cell.background {
                if let Some(fg) = cell.foreground {
                    let result = ensure_minimum_contrast(fg, bg, AAA_NORMAL);
                    if !result.met {
                        warn!(brand = %self.name, %variant, ?palette, %state, ratio = result.ratio, "high-contrast foreground below 7:1");
                    }
                    cell.foreground = Some(result.color);
                }
                if let Some(border) = cell.border {
                    cell.border = Some(ensure_minimum_contrast(border, bg, AA_LARGE).color);
                }
            }
            seeds.insert((variant.high_contrast(), palette, state), cell);
        }
        for (&key, cell) in self.seeds.iter().filter(|((v, _, _), _)| v.is_high_contrast()) {
            seeds.insert(key, *cell);
        }

        Self { high_contrast: true, seeds, ..self.clone() }
    }

    fn note_unmet(&self, derived: &Derived, variant: ThemeVariant, palette: Palette, state: InteractionState) {
        if let Some(result) = derived.contrast.filter(|c| !c.met) {
            warn!(brand = %self.name, %variant, ?palette, %state, ratio = result.ratio, "derived foreground misses its contrast target");
        }
    }

    /// Expand a [`BrandSpec`] into a full brand.
    ///
    /// Every literal is parsed with the color grammar. For each of light
    /// and dark, the surface seeds fill the elevation tiers, then every
    /// listed palette is expanded across the interactive states. Explicit
    /// elevation palettes override the derived ones.
    ///
    /// # Errors
    ///
    /// The first invalid color, font, length or image literal.
    pub fn from_spec(spec: &BrandSpec) -> Result<Self> {
        let name = if spec.name.trim().is_empty() { "custom" } else { spec.name.trim() };
        let mut brand = Self::new(name);

        if !spec.body_font.is_empty() {
            let font = FontFamily::from_list(&spec.body_font)?;
            brand.heading_font = font.clone();
            brand.body_font = font;
        }
        if !spec.heading_font.is_empty() {
            brand.heading_font = FontFamily::from_list(&spec.heading_font)?;
        }
        if let Some(size) = &spec.font_size {
            brand.font_size = Length::parse(size)?;
        }
        if let Some(spacing) = &spec.spacing {
            brand.spacing = Length::parse(spacing)?;
        }
        if let Some(radius) = &spec.radius {
            brand.radius = Length::parse(radius)?;
        }
        if let Some(banner) = &spec.banner_image {
            brand = brand.with_banner_image(banner)?;
        }

        for (variant, palettes) in [(ThemeVariant::Light, &spec.light), (ThemeVariant::Dark, &spec.dark)] {
            if let Some(surface) = palettes.get(&Palette::Surface) {
                brand = brand.derive_elevations(variant, surface.parse()?);
            }
            for (&palette, seed) in palettes {
                brand = brand.derive_palette(variant, palette, seed.parse()?);
            }
        }

        debug!(brand = %brand.name, cells = brand.seeds.len(), "brand expanded");
        Ok(brand)
    }
}

// ─── Spec ────────────────────────────────────────────────────────────────────

/// A brand as written by hand: one base seed per palette and variant.
///
/// With the `serde` feature this is the JSON brand format (kebab-case keys):
///
/// ```json
/// {
///   "name": "acme",
///   "body-font": ["Inter", "sans-serif"],
///   "spacing": "0.5rem",
///   "light": {
///     "surface": { "background": "#FAFAFA", "foreground": "Grey 900" },
///     "primary": { "background": "Indigo 700", "foreground": "white" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case", deny_unknown_fields))]
pub struct BrandSpec {
    pub name: String,
    pub body_font: Vec<String>,
    pub heading_font: Vec<String>,
    pub font_size: Option<String>,
    pub spacing: Option<String>,
    pub radius: Option<String>,
    pub banner_image: Option<String>,
    pub light: BTreeMap<Palette, SeedSpec>,
    pub dark: BTreeMap<Palette, SeedSpec>,
}

/// Color literals for one palette cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case", deny_unknown_fields))]
pub struct SeedSpec {
    pub background: Option<String>,
    pub border: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
    pub caret: Option<String>,
    pub outline: Option<String>,
    pub text_decoration: Option<String>,
}

impl SeedSpec {
    /// Parse every present literal.
    ///
    /// # Errors
    ///
    /// The first literal the color grammar rejects.
    pub fn parse(&self) -> Result<SeedColors> {
        let parse = |raw: &Option<String>| -> Result<Option<Color>> {
            raw.as_deref().map(Color::parse).transpose().map_err(Into::into)
        };
        Ok(SeedColors {
            background: parse(&self.background)?,
            border: parse(&self.border)?,
            foreground: parse(&self.foreground)?,
            accent: parse(&self.accent)?,
            caret: parse(&self.caret)?,
            outline: parse(&self.outline)?,
            text_decoration: parse(&self.text_decoration)?,
        })
    }
}
