// SPDX-License-Identifier: MIT
//! The four axes of the theme store, plus the palette vocabulary brands
//! use to seed them.
//!
//! | Axis               | Type               | Set type            |
//! |--------------------|--------------------|---------------------|
//! | component category | [`ComponentKind`]  | `BTreeSet`          |
//! | theme variant      | [`ThemeVariant`]   | [`VariantSet`]      |
//! | interaction state  | [`InteractionState`] | [`StateSet`]      |
//! | style property     | [`StyleProperty`]  | `BTreeSet`          |

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use weft_css::PrimitiveKind;

use crate::error::ThemeError;

// ─── Theme Variant ───────────────────────────────────────────────────────────

/// A color scheme.
///
/// `System` is a resolution-time alias and is never stored. The two
/// high-contrast variants are derived by the builder and read-only to
/// everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ThemeVariant {
    Light,
    Dark,
    HighContrastLight,
    HighContrastDark,
    System,
}

impl ThemeVariant {
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Dark,
        Self::HighContrastLight,
        Self::HighContrastDark,
        Self::System,
    ];

    /// Short name used on the command line and in CSS selectors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrastLight => "hc-light",
            Self::HighContrastDark => "hc-dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn is_high_contrast(self) -> bool {
        matches!(self, Self::HighContrastLight | Self::HighContrastDark)
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::HighContrastDark)
    }

    /// The high-contrast counterpart of `Light` / `Dark`; others map to themselves.
    #[must_use]
    pub const fn high_contrast(self) -> Self {
        match self {
            Self::Light => Self::HighContrastLight,
            Self::Dark => Self::HighContrastDark,
            other => other,
        }
    }

    /// Resolve `System` against the host's color-scheme preferences.
    ///
    /// Concrete variants are returned unchanged.
    #[must_use]
    pub const fn resolve(self, prefers_dark: bool, high_contrast: bool) -> Self {
        match (self, prefers_dark, high_contrast) {
            (Self::System, false, false) => Self::Light,
            (Self::System, true, false) => Self::Dark,
            (Self::System, false, true) => Self::HighContrastLight,
            (Self::System, true, true) => Self::HighContrastDark,
            (other, _, _) => other,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == lower)
            .ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

bitflags! {
    /// A set of [`ThemeVariant`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct VariantSet: u8 {
        const LIGHT               = 0b0_0001;
        const DARK                = 0b0_0010;
        const HIGH_CONTRAST_LIGHT = 0b0_0100;
        const HIGH_CONTRAST_DARK  = 0b0_1000;
        const SYSTEM              = 0b1_0000;

        const STANDARD      = Self::LIGHT.bits() | Self::DARK.bits();
        const HIGH_CONTRAST = Self::HIGH_CONTRAST_LIGHT.bits() | Self::HIGH_CONTRAST_DARK.bits();
    }
}

impl VariantSet {
    /// Light + dark, or the high-contrast pair.
    #[must_use]
    pub const fn contrast_pair(high_contrast: bool) -> Self {
        if high_contrast { Self::HIGH_CONTRAST } else { Self::STANDARD }
    }

    /// Members in declaration order.
    pub fn variants(self) -> impl Iterator<Item = ThemeVariant> {
        ThemeVariant::ALL.into_iter().filter(move |v| self.contains(Self::from(*v)))
    }
}

impl From<ThemeVariant> for VariantSet {
    fn from(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::LIGHT,
            ThemeVariant::Dark => Self::DARK,
            ThemeVariant::HighContrastLight => Self::HIGH_CONTRAST_LIGHT,
            ThemeVariant::HighContrastDark => Self::HIGH_CONTRAST_DARK,
            ThemeVariant::System => Self::SYSTEM,
        }
    }
}

// ─── Interaction State ───────────────────────────────────────────────────────

/// How the user is interacting with a component.
///
/// `Hidden` and `ReadOnly` are structural: consumers derive them and the
/// store never holds entries for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InteractionState {
    Default,
    Hovered,
    Focused,
    Pressed,
    Dragged,
    Disabled,
    Visited,
    Hidden,
    ReadOnly,
}

impl InteractionState {
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Hovered,
        Self::Focused,
        Self::Pressed,
        Self::Dragged,
        Self::Disabled,
        Self::Visited,
        Self::Hidden,
        Self::ReadOnly,
    ];

    /// Every state that may be stored.
    pub const INTERACTIVE: [Self; 7] = [
        Self::Default,
        Self::Hovered,
        Self::Focused,
        Self::Pressed,
        Self::Dragged,
        Self::Disabled,
        Self::Visited,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hovered => "hovered",
            Self::Focused => "focused",
            Self::Pressed => "pressed",
            Self::Dragged => "dragged",
            Self::Disabled => "disabled",
            Self::Visited => "visited",
            Self::Hidden => "hidden",
            Self::ReadOnly => "read-only",
        }
    }

    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Hidden | Self::ReadOnly)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`InteractionState`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StateSet: u16 {
        const DEFAULT   = 1 << 0;
        const HOVERED   = 1 << 1;
        const FOCUSED   = 1 << 2;
        const PRESSED   = 1 << 3;
        const DRAGGED   = 1 << 4;
        const DISABLED  = 1 << 5;
        const VISITED   = 1 << 6;
        const HIDDEN    = 1 << 7;
        const READ_ONLY = 1 << 8;

        const INTERACTIVE = Self::DEFAULT.bits()
            | Self::HOVERED.bits()
            | Self::FOCUSED.bits()
            | Self::PRESSED.bits()
            | Self::DRAGGED.bits()
            | Self::DISABLED.bits()
            | Self::VISITED.bits();
        const STRUCTURAL = Self::HIDDEN.bits() | Self::READ_ONLY.bits();
    }
}

impl StateSet {
    /// Members in declaration order.
    pub fn states(self) -> impl Iterator<Item = InteractionState> {
        InteractionState::ALL.into_iter().filter(move |s| self.contains(Self::from(*s)))
    }
}

impl From<InteractionState> for StateSet {
    fn from(state: InteractionState) -> Self {
        Self::from_bits_retain(1 << state as u16)
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// A semantic palette category a brand seeds colors for.
///
/// Each role has a `…Variant` counterpart used by text-like components,
/// and the five elevation tiers describe stacked surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Palette {
    Surface,
    SurfaceVariant,
    Primary,
    PrimaryVariant,
    Secondary,
    SecondaryVariant,
    Tertiary,
    TertiaryVariant,
    Success,
    SuccessVariant,
    Info,
    InfoVariant,
    Warning,
    WarningVariant,
    Error,
    ErrorVariant,
    ElevationLowest,
    ElevationLow,
    ElevationBase,
    ElevationHigh,
    ElevationHighest,
}

impl Palette {
    pub const ALL: [Self; 21] = [
        Self::Surface,
        Self::SurfaceVariant,
        Self::Primary,
        Self::PrimaryVariant,
        Self::Secondary,
        Self::SecondaryVariant,
        Self::Tertiary,
        Self::TertiaryVariant,
        Self::Success,
        Self::SuccessVariant,
        Self::Info,
        Self::InfoVariant,
        Self::Warning,
        Self::WarningVariant,
        Self::Error,
        Self::ErrorVariant,
        Self::ElevationLowest,
        Self::ElevationLow,
        Self::ElevationBase,
        Self::ElevationHigh,
        Self::ElevationHighest,
    ];

    /// The `…Variant` counterpart of a role; elevation tiers and variants
    /// map to themselves.
    #[must_use]
    pub const fn variant(self) -> Self {
        match self {
            Self::Surface => Self::SurfaceVariant,
            Self::Primary => Self::PrimaryVariant,
            Self::Secondary => Self::SecondaryVariant,
            Self::Tertiary => Self::TertiaryVariant,
            Self::Success => Self::SuccessVariant,
            Self::Info => Self::InfoVariant,
            Self::Warning => Self::WarningVariant,
            Self::Error => Self::ErrorVariant,
            other => other,
        }
    }

    #[must_use]
    pub const fn elevation(self) -> Option<Elevation> {
        match self {
            Self::ElevationLowest => Some(Elevation::Lowest),
            Self::ElevationLow => Some(Elevation::Low),
            Self::ElevationBase => Some(Elevation::Base),
            Self::ElevationHigh => Some(Elevation::High),
            Self::ElevationHighest => Some(Elevation::Highest),
            _ => None,
        }
    }
}

/// A visual depth level, from recessed to floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Elevation {
    Lowest,
    Low,
    Base,
    High,
    Highest,
}

impl Elevation {
    pub const ALL: [Self; 5] = [Self::Lowest, Self::Low, Self::Base, Self::High, Self::Highest];

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Lowest => Palette::ElevationLowest,
            Self::Low => Palette::ElevationLow,
            Self::Base => Palette::ElevationBase,
            Self::High => Palette::ElevationHigh,
            Self::Highest => Palette::ElevationHighest,
        }
    }
}

// ─── Component Kind ──────────────────────────────────────────────────────────

/// A component category in the library being themed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ComponentKind {
    Page,
    Heading,
    Text,
    Label,
    Link,
    Button,
    Input,
    Checkbox,
    Switch,
    Chip,
    Badge,
    Card,
    Navigation,
    Menu,
    Dialog,
    Tooltip,
    Banner,
    Table,
    SuccessAlert,
    InfoAlert,
    WarningAlert,
    ErrorAlert,
}

impl ComponentKind {
    pub const ALL: [Self; 22] = [
        Self::Page,
        Self::Heading,
        Self::Text,
        Self::Label,
        Self::Link,
        Self::Button,
        Self::Input,
        Self::Checkbox,
        Self::Switch,
        Self::Chip,
        Self::Badge,
        Self::Card,
        Self::Navigation,
        Self::Menu,
        Self::Dialog,
        Self::Tooltip,
        Self::Banner,
        Self::Table,
        Self::SuccessAlert,
        Self::InfoAlert,
        Self::WarningAlert,
        Self::ErrorAlert,
    ];

    /// Kebab-case name, used as the CSS class suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Heading => "heading",
            Self::Text => "text",
            Self::Label => "label",
            Self::Link => "link",
            Self::Button => "button",
            Self::Input => "input",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::Chip => "chip",
            Self::Badge => "badge",
            Self::Card => "card",
            Self::Navigation => "navigation",
            Self::Menu => "menu",
            Self::Dialog => "dialog",
            Self::Tooltip => "tooltip",
            Self::Banner => "banner",
            Self::Table => "table",
            Self::SuccessAlert => "success-alert",
            Self::InfoAlert => "info-alert",
            Self::WarningAlert => "warning-alert",
            Self::ErrorAlert => "error-alert",
        }
    }

    /// Components whose colors come from a palette's `…Variant` counterpart.
    #[must_use]
    pub const fn is_text_like(self) -> bool {
        matches!(self, Self::Heading | Self::Text | Self::Label | Self::Link)
    }

    /// The palette role before the text-like substitution.
    #[must_use]
    pub const fn role(self) -> Palette {
        match self {
            Self::Page | Self::Heading | Self::Text => Palette::Surface,
            Self::Label | Self::Switch => Palette::Secondary,
            Self::Link | Self::Button | Self::Checkbox => Palette::Primary,
            Self::Chip | Self::Badge => Palette::Tertiary,
            Self::Input => Palette::ElevationLowest,
            Self::Card => Palette::ElevationLow,
            Self::Banner | Self::Table => Palette::ElevationBase,
            Self::Navigation | Self::Menu => Palette::ElevationHigh,
            Self::Dialog | Self::Tooltip => Palette::ElevationHighest,
            Self::SuccessAlert => Palette::Success,
            Self::InfoAlert => Palette::Info,
            Self::WarningAlert => Palette::Warning,
            Self::ErrorAlert => Palette::Error,
        }
    }

    /// The palette this component reads its colors from.
    #[must_use]
    pub const fn palette(self) -> Palette {
        if self.is_text_like() { self.role().variant() } else { self.role() }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Style Property ──────────────────────────────────────────────────────────

/// A CSS property the store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StyleProperty {
    // Palette colors
    BackgroundColor,
    Color,
    BorderColor,
    AccentColor,
    CaretColor,
    OutlineColor,
    TextDecorationColor,
    // Typography
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    // Box
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    BorderWidth,
    BorderStyle,
    BorderRadius,
    // Outline
    OutlineWidth,
    OutlineStyle,
    OutlineOffset,
    // Misc
    TextDecorationLine,
    TextDecorationStyle,
    BoxSizing,
    Overflow,
    ScrollBehavior,
    BackgroundImage,
}

impl StyleProperty {
    pub const ALL: [Self; 31] = [
        Self::BackgroundColor,
        Self::Color,
        Self::BorderColor,
        Self::AccentColor,
        Self::CaretColor,
        Self::OutlineColor,
        Self::TextDecorationColor,
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::LineHeight,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::BorderWidth,
        Self::BorderStyle,
        Self::BorderRadius,
        Self::OutlineWidth,
        Self::OutlineStyle,
        Self::OutlineOffset,
        Self::TextDecorationLine,
        Self::TextDecorationStyle,
        Self::BoxSizing,
        Self::Overflow,
        Self::ScrollBehavior,
        Self::BackgroundImage,
    ];

    /// Outline geometry owned by the global focus ring.
    pub const FOCUS_RING: [Self; 3] = [Self::OutlineOffset, Self::OutlineStyle, Self::OutlineWidth];

    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::Color => "color",
            Self::BorderColor => "border-color",
            Self::AccentColor => "accent-color",
            Self::CaretColor => "caret-color",
            Self::OutlineColor => "outline-color",
            Self::TextDecorationColor => "text-decoration-color",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::BorderWidth => "border-width",
            Self::BorderStyle => "border-style",
            Self::BorderRadius => "border-radius",
            Self::OutlineWidth => "outline-width",
            Self::OutlineStyle => "outline-style",
            Self::OutlineOffset => "outline-offset",
            Self::TextDecorationLine => "text-decoration-line",
            Self::TextDecorationStyle => "text-decoration-style",
            Self::BoxSizing => "box-sizing",
            Self::Overflow => "overflow",
            Self::ScrollBehavior => "scroll-behavior",
            Self::BackgroundImage => "background-image",
        }
    }

    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::BackgroundColor
                | Self::Color
                | Self::BorderColor
                | Self::AccentColor
                | Self::CaretColor
                | Self::OutlineColor
                | Self::TextDecorationColor
        )
    }

    #[must_use]
    pub const fn is_focus_ring(self) -> bool {
        matches!(self, Self::OutlineOffset | Self::OutlineStyle | Self::OutlineWidth)
    }

    /// Whether a value of `kind` is meaningful for this property.
    ///
    /// Global keywords and functions (`var()`, `calc()`, …) fit anywhere.
    #[must_use]
    pub const fn accepts(self, kind: PrimitiveKind) -> bool {
        match kind {
            PrimitiveKind::Keyword | PrimitiveKind::Function => true,
            PrimitiveKind::Color => self.is_color(),
            PrimitiveKind::FontFamily => matches!(self, Self::FontFamily),
            PrimitiveKind::Image => matches!(self, Self::BackgroundImage),
            PrimitiveKind::Length => matches!(
                self,
                Self::FontSize
                    | Self::FontWeight
                    | Self::LineHeight
                    | Self::MarginTop
                    | Self::MarginRight
                    | Self::MarginBottom
                    | Self::MarginLeft
                    | Self::PaddingTop
                    | Self::PaddingRight
                    | Self::PaddingBottom
                    | Self::PaddingLeft
                    | Self::BorderWidth
                    | Self::BorderRadius
                    | Self::OutlineWidth
                    | Self::OutlineOffset
            ),
            PrimitiveKind::Ident => matches!(
                self,
                Self::FontWeight
                    | Self::LineHeight
                    | Self::BorderWidth
                    | Self::BorderStyle
                    | Self::OutlineWidth
                    | Self::OutlineStyle
                    | Self::TextDecorationLine
                    | Self::TextDecorationStyle
                    | Self::BoxSizing
                    | Self::Overflow
                    | Self::ScrollBehavior
                    | Self::BackgroundImage
            ),
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
