// SPDX-License-Identifier: MIT
//! Property-based tests for coordinate writes.
//!
//! 1. A write either stores every key of its coordinate or nothing at all
//! 2. A write is refused exactly when a store rule forbids it
//! 3. Successful writes read back everywhere and touch nothing else

use proptest::prelude::*;
use weft_color::Color;
use weft_css::{CssPrimitive, GlobalKeyword, Ident, Length};
use weft_theme::{ComponentKind, Coordinate, StateSet, StyleProperty, ThemeError, ThemeStore, VariantSet};

// ── Strategies ──────────────────────────────────────────────────────────

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (
        prop::sample::subsequence(ComponentKind::ALL.to_vec(), 0..4),
        0u8..0b10_0000,
        0u16..0b10_0000_0000,
        prop::sample::subsequence(StyleProperty::ALL.to_vec(), 0..4),
    )
        .prop_map(|(components, variants, states, properties)| {
            Coordinate::new()
                .components(components)
                .variants(VariantSet::from_bits_truncate(variants))
                .states(StateSet::from_bits_truncate(states))
                .properties(properties)
        })
}

fn value() -> impl Strategy<Value = CssPrimitive> {
    prop_oneof![
        any::<u32>().prop_map(|rgb| CssPrimitive::from(Color::from_u32(rgb & 0xFF_FF_FF))),
        (0u32..500).prop_map(|px| CssPrimitive::from(Length::px(f64::from(px)))),
        Just(CssPrimitive::from(GlobalKeyword::INHERIT)),
        Just(CssPrimitive::from(Ident::new("solid").unwrap())),
    ]
}

/// The error a write should raise, checked in store order.
fn expected_error(coordinate: &Coordinate, value: &CssPrimitive) -> Option<ThemeError> {
    let variants = coordinate.variant_set();
    let states = coordinate.state_set();
    if variants.contains(VariantSet::SYSTEM) {
        return Some(ThemeError::SystemVariant);
    }
    if let Some(state) = (states & StateSet::STRUCTURAL).states().next() {
        return Some(ThemeError::StructuralState(state));
    }
    if let Some(variant) = (variants & VariantSet::HIGH_CONTRAST).variants().next() {
        return Some(ThemeError::HighContrastReadOnly(variant));
    }
    if states.contains(StateSet::FOCUSED) {
        if let Some(&property) = coordinate.property_set().iter().find(|p| p.is_focus_ring()) {
            return Some(ThemeError::ProtectedFocusOutline(property));
        }
    }
    let kind = value.kind();
    coordinate
        .property_set()
        .iter()
        .find(|p| !p.accepts(kind))
        .map(|&property| ThemeError::ValueKind { property, kind })
}

fn seeded() -> ThemeStore {
    let mut store = ThemeStore::new();
    let base = Coordinate::new()
        .component(ComponentKind::Card)
        .variants(VariantSet::STANDARD)
        .states(StateSet::DEFAULT | StateSet::HOVERED)
        .property(StyleProperty::BackgroundColor);
    store.set(&base, Color::WHITE).unwrap();
    store
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Atomicity and refusal
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn write_is_all_or_nothing(coord in coordinate(), value in value()) {
        let mut store = seeded();
        let before = store.clone();
        match store.set(&coord, value.clone()) {
            Ok(written) => {
                prop_assert_eq!(written, coord.len());
                prop_assert!(store.len() <= before.len() + written);
            }
            Err(_) => {
                prop_assert_eq!(&store, &before);
            }
        }
    }

    #[test]
    fn refused_exactly_when_a_rule_forbids(coord in coordinate(), value in value()) {
        let mut store = ThemeStore::new();
        let expected = expected_error(&coord, &value);
        let result = store.set(&coord, value);
        match expected {
            Some(err) => {
                prop_assert_eq!(result, Err(err));
            }
            None => {
                prop_assert!(result.is_ok());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Read-back
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn written_keys_read_back(coord in coordinate(), value in value()) {
        let mut store = seeded();
        let before = store.clone();
        if store.set(&coord, value.clone()).is_ok() {
            for key in coord.keys() {
                prop_assert_eq!(store.get(&key), Some(&value));
            }
            for (key, old) in before.iter() {
                if !coord.keys().any(|k| k == *key) {
                    prop_assert_eq!(store.get(key), Some(old));
                }
            }
        }
    }
}
