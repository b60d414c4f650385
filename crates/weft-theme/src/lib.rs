// SPDX-License-Identifier: MIT
//! # weft-theme — theme store and builder
//!
//! Resolves a [`Brand`] into one validated CSS value per
//! (component × theme variant × interaction state × style property).
//!
//! ```text
//! BrandSpec (JSON) ──from_spec──▶ Brand ──high_contrast()──▶ Brand (HC)
//!                                   │                          │
//!                                   └──────────┬───────────────┘
//!                                              ▼
//!                               ThemeBuilder::create / build
//!                                              │  Coordinate writes
//!                                              ▼
//!                                         ThemeStore ──▶ lookup / declarations
//! ```
//!
//! ```
//! use weft_theme::{ComponentKind, InteractionState, StyleProperty, ThemeBuilder, ThemeVariant, builtin};
//!
//! let brand = builtin("default").unwrap();
//! let store = ThemeBuilder::new().create(&brand).unwrap().build().unwrap();
//! let ring = store.lookup(
//!     ComponentKind::Button,
//!     ThemeVariant::Dark,
//!     InteractionState::Focused,
//!     StyleProperty::OutlineWidth,
//! );
//! assert_eq!(ring.map(|v| v.as_css()), Some("2px"));
//! ```

// Structural token tables are long by nature.
#![allow(clippy::too_many_lines)]

pub mod axis;
pub mod brand;
pub mod builder;
pub mod builtin;
pub mod coordinate;
pub mod derive;
mod error;
pub mod store;

pub use axis::{
    ComponentKind, Elevation, InteractionState, Palette, StateSet, StyleProperty, ThemeVariant, VariantSet,
};
pub use brand::{Brand, BrandSpec, SeedColors, SeedSpec};
pub use builder::ThemeBuilder;
pub use builtin::{builtin, builtin_names, builtin_spec};
pub use coordinate::{Coordinate, ThemeKey};
pub use error::{Result, ThemeError};
pub use store::{ThemeStore, focus_ring};
