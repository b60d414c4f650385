// SPDX-License-Identifier: MIT
//! # weft-color — color model and contrast engine
//!
//! Parses color literals, moves colors through HSV for brightness and
//! saturation nudges, and repairs foregrounds until they meet a WCAG
//! contrast target against a background.
//!
//! ```text
//! "#3F51B5" / "rgb(…)" / "hsv(…)" / "Indigo 500"
//!     │
//!     ▼
//! color.rs:    Color (8-bit sRGB + alpha) ◀──▶ Hsv
//!     │
//!     ▼
//! contrast.rs: relative luminance, contrast ratio, minimum-contrast repair
//! ```
//!
//! Names come from two tables in `names.rs`: the CSS web colors and the
//! Material Design palette (`Deep Purple 200`, `blue-grey-900`, …).

// Mathematical code uses small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/value variable names are inherently similar.
#![allow(clippy::similar_names)]
// Static color tables are long by nature.
#![allow(clippy::too_many_lines)]

pub mod color;
pub mod contrast;
mod error;
pub mod names;

pub use color::{Color, Hsv};
pub use contrast::{ContrastResult, contrast_ratio, ensure_minimum_contrast, relative_luminance};
pub use error::{ColorError, Result};
