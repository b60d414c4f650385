// SPDX-License-Identifier: MIT
//! The theme store: one CSS value per (component, variant, state, property).
//!
//! Writes go through a [`Coordinate`] and land on every address in its
//! product. A write is validated as a whole before anything is stored, so
//! a refused write leaves the store untouched.
//!
//! Two kinds of address are never stored:
//!
//! - the `System` variant and the structural states, which callers resolve
//!   themselves;
//! - focused outline geometry, which always reads from the global focus
//!   ring so keyboard focus stays visible in every theme.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;
use weft_css::{CssPrimitive, CssValue, Ident, Length};

use crate::axis::{ComponentKind, InteractionState, StateSet, StyleProperty, ThemeVariant, VariantSet};
use crate::coordinate::{Coordinate, ThemeKey};
use crate::error::{Result, ThemeError};

static RING_WIDTH: LazyLock<CssPrimitive> = LazyLock::new(|| Length::px(2.0).into());
static RING_STYLE: LazyLock<CssPrimitive> = LazyLock::new(|| Ident::try_parse("solid").1.into());
static RING_OFFSET: LazyLock<CssPrimitive> = LazyLock::new(|| Length::px(2.0).into());

/// The global focus ring value for an outline geometry property.
#[must_use]
pub fn focus_ring(property: StyleProperty) -> Option<&'static CssPrimitive> {
    match property {
        StyleProperty::OutlineWidth => Some(&*RING_WIDTH),
        StyleProperty::OutlineStyle => Some(&*RING_STYLE),
        StyleProperty::OutlineOffset => Some(&*RING_OFFSET),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Builder,
}

/// Resolved theme values keyed by [`ThemeKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStore {
    entries: BTreeMap<ThemeKey, CssPrimitive>,
}

impl ThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` to every address of `coordinate`; returns how many
    /// addresses were written. Later writes replace earlier ones.
    ///
    /// # Errors
    ///
    /// The first rule the coordinate breaks, checked in this order:
    /// [`ThemeError::SystemVariant`], [`ThemeError::StructuralState`],
    /// [`ThemeError::HighContrastReadOnly`],
    /// [`ThemeError::ProtectedFocusOutline`], [`ThemeError::ValueKind`].
    /// Nothing is written on error.
    pub fn set(&mut self, coordinate: &Coordinate, value: impl Into<CssPrimitive>) -> Result<usize> {
        self.write(coordinate, value.into(), Access::Public)
    }

    /// Like [`set`](Self::set) but allowed to write high-contrast variants.
    pub(crate) fn set_derived(
        &mut self,
        coordinate: &Coordinate,
        value: impl Into<CssPrimitive>,
    ) -> Result<usize> {
        self.write(coordinate, value.into(), Access::Builder)
    }

    fn write(&mut self, coordinate: &Coordinate, value: CssPrimitive, access: Access) -> Result<usize> {
        validate(coordinate, &value, access)?;

        let mut written = 0;
        for key in coordinate.keys() {
            self.entries.insert(key, value.clone());
            written += 1;
        }
        debug!(written, kind = %value.kind(), value = value.as_css(), "store write");
        Ok(written)
    }

    /// The value at one address.
    ///
    /// Focused outline geometry always answers with the focus ring; the
    /// `System` variant and structural states always answer `None`.
    #[must_use]
    pub fn get(&self, key: &ThemeKey) -> Option<&CssPrimitive> {
        if key.state == InteractionState::Focused && key.variant != ThemeVariant::System {
            if let Some(ring) = focus_ring(key.property) {
                return Some(ring);
            }
        }
        self.entries.get(key)
    }

    #[must_use]
    pub fn lookup(
        &self,
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        property: StyleProperty,
    ) -> Option<&CssPrimitive> {
        self.get(&ThemeKey::new(component, variant, state, property))
    }

    /// Number of stored addresses, not counting the focus ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ThemeKey, &CssPrimitive)> {
        self.entries.iter()
    }

    /// Every property of one (component, variant, state) cell as a run of
    /// declarations, in property order.
    #[must_use]
    pub fn declarations(
        &self,
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        prefix: Option<&str>,
    ) -> String {
        StyleProperty::ALL
            .into_iter()
            .filter_map(|property| {
                self.lookup(component, variant, state, property)
                    .map(|value| value.declaration(property.css_name(), prefix))
            })
            .collect()
    }
}

fn validate(coordinate: &Coordinate, value: &CssPrimitive, access: Access) -> Result<()> {
    let variants = coordinate.variant_set();
    let states = coordinate.state_set();

    if variants.contains(VariantSet::SYSTEM) {
        return Err(ThemeError::SystemVariant);
    }
    if let Some(state) = (states & StateSet::STRUCTURAL).states().next() {
        return Err(ThemeError::StructuralState(state));
    }
    if access == Access::Public {
        if let Some(variant) = (variants & VariantSet::HIGH_CONTRAST).variants().next() {
            return Err(ThemeError::HighContrastReadOnly(variant));
        }
    }
    if states.contains(StateSet::FOCUSED) {
        if let Some(&property) = coordinate.property_set().iter().find(|p| p.is_focus_ring()) {
            return Err(ThemeError::ProtectedFocusOutline(property));
        }
    }
    let kind = value.kind();
    if let Some(&property) = coordinate.property_set().iter().find(|p| !p.accepts(kind)) {
        return Err(ThemeError::ValueKind { property, kind });
    }
    Ok(())
}
