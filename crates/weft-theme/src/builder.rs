// SPDX-License-Identifier: MIT
//! Theme builder: expands a [`Brand`] into a fully populated [`ThemeStore`].
//!
//! ```text
//! Unbuilt ──create(brand)──▶ Ready ──build()──▶ Unbuilt
//! ```
//!
//! `create` runs twice per component, once for the brand and once for its
//! high-contrast counterpart, and commits:
//!
//! - palette colors for every interactive state that has seeds;
//! - structural properties (type, box model, borders, outline geometry
//!   outside the focused state, decoration, overflow, banner image),
//!   uniformly across interactive states.

use tracing::debug;
use weft_color::Color;
use weft_css::{CssPrimitive, FontFamily, Ident, ImageRef, Length};

use crate::axis::{ComponentKind, InteractionState, StateSet, StyleProperty, ThemeVariant, VariantSet};
use crate::brand::Brand;
use crate::coordinate::Coordinate;
use crate::error::{Result, ThemeError};
use crate::store::ThemeStore;

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Unbuilt,
    Ready(ThemeStore),
}

/// Two-phase theme builder.
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    phase: Phase,
}

impl ThemeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `create` has run since the last `build`.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// Populate a fresh store from `brand` and its high-contrast
    /// counterpart. Replaces whatever a previous `create` prepared.
    ///
    /// # Errors
    ///
    /// Any store validation error, unchanged. The builder is left unbuilt.
    pub fn create(&mut self, brand: &Brand) -> Result<&mut Self> {
        self.phase = Phase::Unbuilt;
        let mut store = ThemeStore::new();

        let passes = if brand.is_high_contrast() {
            vec![brand.clone()]
        } else {
            vec![brand.clone(), brand.high_contrast()]
        };

        for pass in &passes {
            let mut colors = 0;
            let mut structure = 0;
            for component in ComponentKind::ALL {
                colors += write_colors(&mut store, pass, component)?;
                structure += write_structure(&mut store, pass, component)?;
            }
            debug!(brand = pass.name(), high_contrast = pass.is_high_contrast(), colors, structure, "builder pass");
        }

        debug!(entries = store.len(), "theme ready");
        self.phase = Phase::Ready(store);
        Ok(self)
    }

    /// Hand over the store and return to the unbuilt state.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotReady`] if `create` has not run.
    pub fn build(&mut self) -> Result<ThemeStore> {
        match std::mem::take(&mut self.phase) {
            Phase::Ready(store) => Ok(store),
            Phase::Unbuilt => Err(ThemeError::NotReady),
        }
    }
}

// ─── Palette Colors ──────────────────────────────────────────────────────────

fn write_colors(store: &mut ThemeStore, brand: &Brand, component: ComponentKind) -> Result<usize> {
    let palette = component.palette();
    let mut written = 0;

    for variant in VariantSet::contrast_pair(brand.is_high_contrast()).variants() {
        for state in InteractionState::INTERACTIVE {
            let Some(seeds) = brand.seeds(variant, palette, state) else {
                continue;
            };
            for (property, color) in seeds.entries() {
                let coordinate = Coordinate::new()
                    .component(component)
                    .variants(variant)
                    .state(state)
                    .property(property);
                written += store.set_derived(&coordinate, color)?;
            }
        }
    }
    Ok(written)
}

// ─── Structural Properties ───────────────────────────────────────────────────

fn write_structure(store: &mut ThemeStore, brand: &Brand, component: ComponentKind) -> Result<usize> {
    let cells = Coordinate::new()
        .component(component)
        .contrast_variants(brand.is_high_contrast());
    let mut written = 0;

    for (property, value) in structure(brand, component)? {
        let states = if property.is_focus_ring() {
            StateSet::INTERACTIVE - StateSet::FOCUSED
        } else {
            StateSet::INTERACTIVE
        };
        let coordinate = cells.clone().states(states).property(property);
        written += store.set_derived(&coordinate, value)?;
    }

    if component == ComponentKind::Banner {
        written += write_banner(store, brand, &cells)?;
    }
    Ok(written)
}

/// Variant-independent structural values for one component.
fn structure(brand: &Brand, component: ComponentKind) -> Result<Vec<(StyleProperty, CssPrimitive)>> {
    use ComponentKind as C;
    use StyleProperty as P;

    let ident = |raw: &str| -> Result<CssPrimitive> { Ok(Ident::new(raw)?.into()) };
    let zero = || CssPrimitive::from(Length::px(0.0));
    let spacing = brand.spacing();

    let font: &FontFamily = if component == C::Heading { brand.heading_font() } else { brand.body_font() };
    let font_scale = match component {
        C::Heading => 2.0,
        C::Label | C::Chip | C::Badge | C::Tooltip => 0.875,
        _ => 1.0,
    };
    let weight = match component {
        C::Heading => 700.0,
        C::Button | C::Label | C::Badge => 600.0,
        _ => 400.0,
    };
    let line_height = if component == C::Heading { 1.2 } else { 1.5 };

    // (top, right, bottom, left)
    let margin = match component {
        C::Heading | C::Text | C::Table => [Length::px(0.0), Length::px(0.0), spacing.scale(2.0), Length::px(0.0)],
        _ => [Length::px(0.0), Length::px(0.0), Length::px(0.0), Length::px(0.0)],
    };
    let padding = match component {
        C::Page => [spacing.scale(2.0), spacing.scale(2.0), spacing.scale(2.0), spacing.scale(2.0)],
        C::Button | C::Input | C::Chip | C::Badge => {
            let (v, h) = (spacing.scale(0.5), spacing.clone());
            [v.clone(), h.clone(), v, h]
        }
        C::Banner => {
            let (v, h) = (spacing.scale(4.0), spacing.scale(2.0));
            [v.clone(), h.clone(), v, h]
        }
        C::Dialog => [spacing.scale(3.0), spacing.scale(3.0), spacing.scale(3.0), spacing.scale(3.0)],
        C::Card | C::Navigation | C::Menu | C::Tooltip | C::Table => {
            [spacing.scale(2.0), spacing.scale(2.0), spacing.scale(2.0), spacing.scale(2.0)]
        }
        C::SuccessAlert | C::InfoAlert | C::WarningAlert | C::ErrorAlert => {
            [spacing.clone(), spacing.scale(2.0), spacing.clone(), spacing.scale(2.0)]
        }
        _ => [Length::px(0.0), Length::px(0.0), Length::px(0.0), Length::px(0.0)],
    };

    let borderless = component.is_text_like() || matches!(component, C::Page | C::Banner);
    let radius = match component {
        C::Chip | C::Badge | C::Switch => Length::px(9999.0),
        _ if borderless || component == C::Navigation => Length::px(0.0),
        _ => brand.radius().clone(),
    };
    let overflow = match component {
        C::Menu | C::Dialog | C::Table => "auto",
        C::Tooltip | C::Chip | C::Badge => "hidden",
        _ => "visible",
    };

    let [mt, mr, mb, ml] = margin;
    let [pt, pr, pb, pl] = padding;
    let mut values: Vec<(StyleProperty, CssPrimitive)> = vec![
        (P::FontFamily, font.clone().into()),
        (P::FontSize, brand.font_size().scale(font_scale).into()),
        (P::FontWeight, Length::number(weight).into()),
        (P::LineHeight, Length::number(line_height).into()),
        (P::MarginTop, mt.into()),
        (P::MarginRight, mr.into()),
        (P::MarginBottom, mb.into()),
        (P::MarginLeft, ml.into()),
        (P::PaddingTop, pt.into()),
        (P::PaddingRight, pr.into()),
        (P::PaddingBottom, pb.into()),
        (P::PaddingLeft, pl.into()),
        (P::BorderWidth, if borderless { zero() } else { Length::px(1.0).into() }),
        (P::BorderStyle, ident(if borderless { "none" } else { "solid" })?),
        (P::BorderRadius, radius.into()),
        (P::OutlineWidth, zero()),
        (P::OutlineStyle, ident("none")?),
        (P::OutlineOffset, zero()),
        (P::TextDecorationLine, ident(if component == C::Link { "underline" } else { "none" })?),
        (P::TextDecorationStyle, ident("solid")?),
        (P::BoxSizing, ident("border-box")?),
        (P::Overflow, ident(overflow)?),
        (P::ScrollBehavior, ident("smooth")?),
    ];
    if component != C::Banner || brand.banner_image().is_none() {
        values.push((P::BackgroundImage, ident("none")?));
    }
    Ok(values)
}

/// The banner image, overlaid per variant against that variant's default
/// background so text on top stays legible.
fn write_banner(store: &mut ThemeStore, brand: &Brand, cells: &Coordinate) -> Result<usize> {
    let Some(raw) = brand.banner_image() else {
        return Ok(0);
    };
    let palette = ComponentKind::Banner.palette();
    let mut written = 0;

    for variant in cells.variant_set().variants() {
        let background = brand
            .seeds(variant, palette, InteractionState::Default)
            .and_then(|s| s.background)
            .unwrap_or_else(|| fallback_background(variant));
        let image = ImageRef::with_overlay(raw, background)?;
        let coordinate = Coordinate::new()
            .component(ComponentKind::Banner)
            .variants(variant)
            .interactive_states()
            .property(StyleProperty::BackgroundImage);
        written += store.set_derived(&coordinate, image)?;
    }
    Ok(written)
}

const fn fallback_background(variant: ThemeVariant) -> Color {
    if variant.is_dark() { Color::BLACK } else { Color::WHITE }
}
