// SPDX-License-Identifier: MIT

use thiserror::Error;
use weft_color::ColorError;
use weft_css::{CssError, PrimitiveKind};

use crate::axis::{InteractionState, StyleProperty, ThemeVariant};

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Why a theme operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("builder has no brand: call create() before build()")]
    NotReady,

    #[error("the system variant must be resolved to light, dark or high contrast before writing")]
    SystemVariant,

    #[error("{0} is a structural state and is never stored")]
    StructuralState(InteractionState),

    #[error("{0} is read-only: high-contrast entries are derived by the builder")]
    HighContrastReadOnly(ThemeVariant),

    #[error("{0} is part of the global focus ring and cannot be set for the focused state")]
    ProtectedFocusOutline(StyleProperty),

    #[error("{property} does not accept a {kind} value")]
    ValueKind {
        property: StyleProperty,
        kind: PrimitiveKind,
    },

    #[error("{0} cannot be selected as a single variant")]
    VariantNotSelectable(ThemeVariant),

    #[error("unknown theme variant {0:?}: expected light, dark, hc-light, hc-dark or system")]
    UnknownVariant(String),

    #[error("unknown brand {0:?}")]
    UnknownBrand(String),

    #[error(transparent)]
    Css(#[from] CssError),

    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_css_names() {
        let err = ThemeError::ProtectedFocusOutline(StyleProperty::OutlineWidth);
        assert_eq!(
            err.to_string(),
            "outline-width is part of the global focus ring and cannot be set for the focused state"
        );
        let err = ThemeError::ValueKind {
            property: StyleProperty::FontSize,
            kind: PrimitiveKind::Color,
        };
        assert_eq!(err.to_string(), "font-size does not accept a color value");
    }

    #[test]
    fn lower_errors_convert() {
        let err: ThemeError = CssError::empty("length").into();
        assert_eq!(err.to_string(), "empty length value");
        let err: ThemeError = ColorError::Empty.into();
        assert!(matches!(err, ThemeError::Color(ColorError::Empty)));
    }
}
