// SPDX-License-Identifier: MIT
//
// weft-css — self-validating CSS primitive values.
//
// Every wrapper turns an arbitrary token into one canonical string or
// fails with a descriptive error. Canonical strings are stable: parsing
// one again yields the same string. Wrappers compare, order and hash by
// that string alone.
//
//   Length        1.5px  50%  auto  700
//   CssColor      #3F51B5FF
//   CssFunction   calc(100% - 2px)  var(--gap)  translateX(4px)
//   GlobalKeyword inherit  revert-layer
//   Ident         solid  border-box
//   FontFamily    Inter,"Open Sans",sans-serif
//   ImageRef      url("img/banner.png")
//
// `CssPrimitive` is the closed sum over all of them.

pub mod color;
mod error;
pub mod font;
pub mod function;
pub mod image;
pub mod keyword;
pub mod length;
pub mod primitive;
pub mod value;

pub use color::CssColor;
pub use error::{CssError, Result};
pub use font::FontFamily;
pub use function::CssFunction;
pub use image::ImageRef;
pub use keyword::{GlobalKeyword, Ident};
pub use length::Length;
pub use primitive::{CssPrimitive, PrimitiveKind};
pub use value::{CssValue, declaration};
