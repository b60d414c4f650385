// SPDX-License-Identifier: MIT

use std::fmt;

use crate::color::CssColor;
use crate::error::Result;
use crate::font::FontFamily;
use crate::function::CssFunction;
use crate::image::ImageRef;
use crate::keyword::{GlobalKeyword, Ident};
use crate::length::Length;
use crate::value::{CssValue, declaration};

/// Which wrapper a [`CssPrimitive`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveKind {
    Length,
    Color,
    Function,
    Keyword,
    Ident,
    FontFamily,
    Image,
}

impl PrimitiveKind {
    pub const ALL: [Self; 7] = [
        Self::Length,
        Self::Color,
        Self::Function,
        Self::Keyword,
        Self::Ident,
        Self::FontFamily,
        Self::Image,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Color => "color",
            Self::Function => "function",
            Self::Keyword => "global keyword",
            Self::Ident => "identifier",
            Self::FontFamily => "font family",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any CSS primitive value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CssPrimitive {
    Length(Length),
    Color(CssColor),
    Function(CssFunction),
    Keyword(GlobalKeyword),
    Ident(Ident),
    FontFamily(FontFamily),
    Image(ImageRef),
}

impl CssPrimitive {
    /// Parse `raw` as a specific kind.
    ///
    /// # Errors
    ///
    /// Whatever the chosen wrapper's parser reports.
    pub fn parse_as(kind: PrimitiveKind, raw: &str) -> Result<Self> {
        Ok(match kind {
            PrimitiveKind::Length => Self::Length(Length::parse(raw)?),
            PrimitiveKind::Color => Self::Color(CssColor::parse(raw)?),
            PrimitiveKind::Function => Self::Function(CssFunction::parse(raw)?),
            PrimitiveKind::Keyword => Self::Keyword(GlobalKeyword::parse(raw)?),
            PrimitiveKind::Ident => Self::Ident(Ident::parse(raw)?),
            PrimitiveKind::FontFamily => Self::FontFamily(FontFamily::parse(raw)?),
            PrimitiveKind::Image => Self::Image(ImageRef::parse(raw)?),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Length(_) => PrimitiveKind::Length,
            Self::Color(_) => PrimitiveKind::Color,
            Self::Function(_) => PrimitiveKind::Function,
            Self::Keyword(_) => PrimitiveKind::Keyword,
            Self::Ident(_) => PrimitiveKind::Ident,
            Self::FontFamily(_) => PrimitiveKind::FontFamily,
            Self::Image(_) => PrimitiveKind::Image,
        }
    }

    /// The canonical string of the wrapped value.
    #[must_use]
    pub fn as_css(&self) -> &str {
        match self {
            Self::Length(v) => v.as_css(),
            Self::Color(v) => v.as_css(),
            Self::Function(v) => v.as_css(),
            Self::Keyword(v) => v.as_css(),
            Self::Ident(v) => v.as_css(),
            Self::FontFamily(v) => v.as_css(),
            Self::Image(v) => v.as_css(),
        }
    }

    /// Format as `property:value;` or `--prefix-property:value;`.
    #[must_use]
    pub fn declaration(&self, property: &str, prefix: Option<&str>) -> String {
        declaration(property, prefix, self.as_css())
    }
}

impl fmt::Display for CssPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

macro_rules! impl_from {
    ($($wrapper:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$wrapper> for CssPrimitive {
                fn from(value: $wrapper) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    Length => Length,
    CssColor => Color,
    CssFunction => Function,
    GlobalKeyword => Keyword,
    Ident => Ident,
    FontFamily => FontFamily,
    ImageRef => Image,
}

impl From<weft_color::Color> for CssPrimitive {
    fn from(color: weft_color::Color) -> Self {
        Self::Color(color.into())
    }
}
