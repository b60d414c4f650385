// SPDX-License-Identifier: MIT
//! Coordinates: four-axis addresses into the theme store.
//!
//! A [`Coordinate`] holds one set per axis and denotes their cartesian
//! product. Every setter consumes the coordinate and returns the extended
//! copy, so chains read left to right and never share mutable state:
//!
//! ```
//! use weft_theme::{ComponentKind, Coordinate, StyleProperty};
//!
//! let coord = Coordinate::new()
//!     .component(ComponentKind::Button)
//!     .contrast_variants(false)
//!     .interactive_states()
//!     .property(StyleProperty::BorderRadius);
//! assert_eq!(coord.len(), 2 * 7);
//! ```

use std::collections::BTreeSet;

use crate::axis::{ComponentKind, InteractionState, StateSet, StyleProperty, ThemeVariant, VariantSet};
use crate::error::{Result, ThemeError};

/// One fully-resolved store address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemeKey {
    pub component: ComponentKind,
    pub variant: ThemeVariant,
    pub state: InteractionState,
    pub property: StyleProperty,
}

impl ThemeKey {
    #[must_use]
    pub const fn new(
        component: ComponentKind,
        variant: ThemeVariant,
        state: InteractionState,
        property: StyleProperty,
    ) -> Self {
        Self { component, variant, state, property }
    }
}

/// A set of store addresses: components × variants × states × properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinate {
    components: BTreeSet<ComponentKind>,
    variants: VariantSet,
    states: StateSet,
    properties: BTreeSet<StyleProperty>,
}

impl Coordinate {
    /// The empty coordinate; it addresses nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Components ──

    #[must_use]
    pub fn component(mut self, component: ComponentKind) -> Self {
        self.components.insert(component);
        self
    }

    #[must_use]
    pub fn components(mut self, components: impl IntoIterator<Item = ComponentKind>) -> Self {
        self.components.extend(components);
        self
    }

    #[must_use]
    pub fn all_components(self) -> Self {
        self.components(ComponentKind::ALL)
    }

    // ── Variants ──

    /// Add a set of variants as-is. The store decides whether they are writable.
    #[must_use]
    pub fn variants(mut self, variants: impl Into<VariantSet>) -> Self {
        self.variants |= variants.into();
        self
    }

    /// Add one explicit variant.
    ///
    /// # Errors
    ///
    /// [`ThemeError::VariantNotSelectable`] for `System` and both
    /// high-contrast variants.
    pub fn variant(self, variant: ThemeVariant) -> Result<Self> {
        if matches!(variant, ThemeVariant::System) || variant.is_high_contrast() {
            return Err(ThemeError::VariantNotSelectable(variant));
        }
        Ok(self.variants(variant))
    }

    /// Add light + dark, or the high-contrast pair.
    #[must_use]
    pub fn contrast_variants(self, high_contrast: bool) -> Self {
        self.variants(VariantSet::contrast_pair(high_contrast))
    }

    // ── States ──

    #[must_use]
    pub fn state(mut self, state: InteractionState) -> Self {
        self.states |= StateSet::from(state);
        self
    }

    #[must_use]
    pub fn states(mut self, states: impl Into<StateSet>) -> Self {
        self.states |= states.into();
        self
    }

    /// Add every state except the structural `Hidden` and `ReadOnly`.
    #[must_use]
    pub fn interactive_states(self) -> Self {
        self.states(StateSet::INTERACTIVE)
    }

    // ── Properties ──

    #[must_use]
    pub fn property(mut self, property: StyleProperty) -> Self {
        self.properties.insert(property);
        self
    }

    #[must_use]
    pub fn properties(mut self, properties: impl IntoIterator<Item = StyleProperty>) -> Self {
        self.properties.extend(properties);
        self
    }

    // ── Inspection ──

    #[must_use]
    pub const fn component_set(&self) -> &BTreeSet<ComponentKind> {
        &self.components
    }

    #[must_use]
    pub const fn variant_set(&self) -> VariantSet {
        self.variants
    }

    #[must_use]
    pub const fn state_set(&self) -> StateSet {
        self.states
    }

    #[must_use]
    pub const fn property_set(&self) -> &BTreeSet<StyleProperty> {
        &self.properties
    }

    /// Number of addresses in the product.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
            * self.variants.variants().count()
            * self.states.states().count()
            * self.properties.len()
    }

    /// Whether the product is empty (some axis has no members).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every address in the product, in key order.
    pub fn keys(&self) -> impl Iterator<Item = ThemeKey> + '_ {
        self.components.iter().flat_map(move |&component| {
            self.variants.variants().flat_map(move |variant| {
                self.states.states().flat_map(move |state| {
                    self.properties
                        .iter()
                        .map(move |&property| ThemeKey::new(component, variant, state, property))
                })
            })
        })
    }
}
