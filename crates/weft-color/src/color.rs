// SPDX-License-Identifier: MIT
//
// weft color model — 8-bit sRGB channels, float alpha, HSV as the working
// space for brightness nudges.
//
// Single-character variable names (r, g, b, h, s, v, a) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Every color that leaves this module is quantized to 8-bit channels, so
// two colors are equal exactly when their canonical `#RRGGBBAA` strings
// are. HSV is derived on demand; a round trip RGB → HSV → RGB is exact
// because the quantization error of the float path is far below half a
// channel step.
//
// Conversion pipeline:
//
//   literal ──parse──▶ Color (r, g, b: u8, alpha: f64) ◀──▶ Hsv (h°, s%, v%)
//                          │
//                          └──▶ linear sRGB (luminance, pole mixing)

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::names;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color with alpha transparency.
///
/// Channels are stored as 8-bit values, alpha as a float clamped to
/// `[0.0, 1.0]`. The canonical text form is uppercase `#RRGGBBAA`, and
/// equality, hashing and ordering all follow that form.
///
/// # Examples
///
/// ```
/// use weft_color::Color;
///
/// let purple: Color = "deep purple 500".parse().unwrap();
/// assert_eq!(purple.to_hex(), "#673AB7FF");
///
/// let short: Color = "#ABC".parse().unwrap();
/// assert_eq!(short, "#AABBCC".parse().unwrap());
///
/// let hover = purple.shift_value(6.0);
/// assert!(hover.to_hsv().v > purple.to_hsv().v);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color from 8-bit channels and an alpha in `[0.0, 1.0]`.
    ///
    /// Alpha outside the range is clamped; `NaN` becomes fully opaque.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha: clamp_alpha(alpha) }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::rgb(r, g, b)
    }

    /// Create an opaque color from HSV channels.
    ///
    /// - `h`: hue in degrees, normalized into `[0, 360)`
    /// - `s`: saturation in percent, clamped to `[0, 100]`
    /// - `v`: value (brightness) in percent, clamped to `[0, 100]`
    #[must_use]
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::hsva(h, s, v, 1.0)
    }

    /// Create a color from HSV channels with alpha.
    #[must_use]
    pub fn hsva(h: f64, s: f64, v: f64, alpha: f64) -> Self {
        Hsv::new(h, s, v).to_color(alpha)
    }

    /// Parse any supported color literal.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`, `rgba()`,
    /// `hsv()`, `hsva()`, CSS web color names and Material palette names
    /// such as `Deep Purple 200`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why the literal was rejected.
    pub fn parse(input: &str) -> Result<Self> {
        parse_literal(input)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, alpha: 0.0 };

    // ─── Channels ────────────────────────────────────────────────────────

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.b
    }

    /// Alpha in `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Alpha quantized to 8 bits, as it appears in the canonical form.
    #[inline]
    #[must_use]
    pub fn alpha_u8(self) -> u8 {
        unit_to_u8(self.alpha)
    }

    /// Return a copy with the given alpha (clamped).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha: clamp_alpha(alpha), ..self }
    }

    /// Whether alpha quantizes to 255.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha_u8() == u8::MAX
    }

    // ─── HSV Operations ──────────────────────────────────────────────────

    /// Convert to HSV.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Whether the color sits on the light half of the value axis (V ≥ 50).
    #[inline]
    #[must_use]
    pub fn is_light(self) -> bool {
        self.to_hsv().v >= 50.0
    }

    /// Set the HSV value to an absolute percentage, keeping hue and saturation.
    #[must_use]
    pub fn with_value(self, v: f64) -> Self {
        let hsv = self.to_hsv();
        Hsv { v: v.clamp(0.0, 100.0), ..hsv }.to_color(self.alpha)
    }

    /// Move the HSV value by `delta` percentage points (clamped).
    #[must_use]
    pub fn shift_value(self, delta: f64) -> Self {
        let v = self.to_hsv().v;
        self.with_value(v + delta)
    }

    /// Set the HSV saturation to an absolute percentage, keeping hue and value.
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        let hsv = self.to_hsv();
        Hsv { s: s.clamp(0.0, 100.0), ..hsv }.to_color(self.alpha)
    }

    /// Move the HSV saturation by `delta` percentage points (clamped).
    #[must_use]
    pub fn shift_saturation(self, delta: f64) -> Self {
        let s = self.to_hsv().s;
        self.with_saturation(s + delta)
    }

    // ─── Mixing ──────────────────────────────────────────────────────────

    /// Mix toward `other` in linear sRGB.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`'s channels. Alpha
    /// is taken from `self` so a repaired foreground keeps its opacity.
    #[must_use]
    pub fn mix_linear(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let la = srgb_to_linear(f64::from(a) / 255.0);
            let lb = srgb_to_linear(f64::from(b) / 255.0);
            unit_to_u8(linear_to_srgb((lb - la).mul_add(t, la)))
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            alpha: self.alpha,
        }
    }

    /// Channels as linear-light values in `[0.0, 1.0]`.
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        (
            srgb_to_linear(f64::from(self.r) / 255.0),
            srgb_to_linear(f64::from(self.g) / 255.0),
            srgb_to_linear(f64::from(self.b) / 255.0),
        )
    }

    // ─── Formatting ──────────────────────────────────────────────────────

    /// Canonical uppercase `#RRGGBBAA`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r,
            self.g,
            self.b,
            self.alpha_u8()
        )
    }

    /// `rgba(r,g,b,a)` with alpha rounded to three decimals.
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        let a = (f64::from(self.alpha_u8()) / 255.0 * 1000.0).round() / 1000.0;
        format!("rgba({},{},{},{a})", self.r, self.g, self.b)
    }

    /// `hsva(h,s%,v%,a)` with one decimal per channel.
    #[must_use]
    pub fn to_hsva_string(self) -> String {
        let Hsv { h, s, v } = self.to_hsv();
        let a = (f64::from(self.alpha_u8()) / 255.0 * 1000.0).round() / 1000.0;
        format!("hsva({h:.1},{s:.1}%,{v:.1}%,{a})")
    }

    /// Canonical key: `(r, g, b, alpha_u8)`.
    #[inline]
    fn key(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.alpha_u8())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Color {
    // Fixed-width uppercase hex orders the same way as the channel tuple.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_literal(s)
    }
}

// ─── Hsv ─────────────────────────────────────────────────────────────────────

/// A color in HSV space: hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle in `[0, 360)`.
    pub h: f64,
    /// Saturation in `[0, 100]`.
    pub s: f64,
    /// Value (brightness) in `[0, 100]`.
    pub v: f64,
}

impl Hsv {
    /// Create a normalized HSV triple.
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    /// Quantize to a [`Color`] with the given alpha.
    #[must_use]
    pub fn to_color(self, alpha: f64) -> Color {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Color::rgba(r, g, b, alpha)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-18 % 360 + 360 rounds up to exactly 360.0.
    if h >= 360.0 { 0.0 } else { h }
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= f64::EPSILON {
        0.0 // Achromatic: hue is undefined
    } else if (max - r).abs() <= f64::EPSILON {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() <= f64::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max <= f64::EPSILON { 0.0 } else { delta / max };

    Hsv {
        h: normalize_hue(h),
        s: s * 100.0,
        v: max * 100.0,
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let v = v / 100.0;
    let c = v * s;
    let hp = normalize_hue(h) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────
//
// sRGB uses a piecewise transfer function to encode linear light values.
// Luminance and pole mixing both happen in linear space.

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Literal Parsing ─────────────────────────────────────────────────────────

fn parse_literal(input: &str) -> Result<Color> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
    }

    let lower = s.to_ascii_lowercase();
    if let Some((name, args)) = split_function(&lower) {
        return match name {
            "rgb" => parse_rgb(&args, false),
            "rgba" => parse_rgb(&args, true),
            "hsv" => parse_hsv(&args, false),
            "hsva" => parse_hsv(&args, true),
            _ => Err(ColorError::UnknownFunction(name.to_string())),
        };
    }

    names::lookup(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
}

/// Split `name(a, b, c)` into the name and its trimmed arguments.
fn split_function(s: &str) -> Option<(&str, Vec<&str>)> {
    let open = s.find('(')?;
    let inner = s.strip_suffix(')')?.get(open + 1..)?;
    let name = &s[..open];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some((name, inner.split(',').map(str::trim).collect()))
}

fn parse_rgb(args: &[&str], with_alpha: bool) -> Result<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(ColorError::Arity {
            function: if with_alpha { "rgba" } else { "rgb" },
            expected,
            found: args.len(),
        });
    }

    let channel = |name: &'static str, raw: &str| -> Result<u8> {
        let value: i64 = raw.parse().map_err(|_| ColorError::InvalidNumber {
            channel: name,
            input: raw.to_string(),
        })?;
        u8::try_from(value).map_err(|_| ColorError::OutOfRange {
            channel: name,
            value: raw.to_string(),
            range: "0-255",
        })
    };

    let r = channel("red", args[0])?;
    let g = channel("green", args[1])?;
    let b = channel("blue", args[2])?;
    let alpha = if with_alpha { parse_alpha(args[3])? } else { 1.0 };
    Ok(Color::rgba(r, g, b, alpha))
}

fn parse_hsv(args: &[&str], with_alpha: bool) -> Result<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(ColorError::Arity {
            function: if with_alpha { "hsva" } else { "hsv" },
            expected,
            found: args.len(),
        });
    }

    let h = parse_ranged("hue", args[0], 360.0, "0-360")?;
    let s = parse_ranged("saturation", args[1].strip_suffix('%').unwrap_or(args[1]), 100.0, "0-100")?;
    let v = parse_ranged("value", args[2].strip_suffix('%').unwrap_or(args[2]), 100.0, "0-100")?;
    let alpha = if with_alpha { parse_alpha(args[3])? } else { 1.0 };
    Ok(Color::hsva(h, s, v, alpha))
}

fn parse_alpha(raw: &str) -> Result<f64> {
    parse_ranged("alpha", raw, 1.0, "0-1")
}

fn parse_ranged(channel: &'static str, raw: &str, max: f64, range: &'static str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ColorError::InvalidNumber {
            channel,
            input: raw.to_string(),
        })?;
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            channel,
            value: raw.to_string(),
            range,
        })
    }
}

/// Parse the digits of a hex color (without the leading `#`).
fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.as_bytes();
    match bytes.len() {
        // #RGB / #RGBA
        3 | 4 => {
            let mut nibbles = [0u8; 4];
            for (slot, &c) in nibbles.iter_mut().zip(bytes) {
                *slot = parse_hex_digit(c)?;
            }
            let alpha = if bytes.len() == 4 { nibbles[3] << 4 | nibbles[3] } else { 0xFF };
            Some(Color::rgba(
                nibbles[0] << 4 | nibbles[0],
                nibbles[1] << 4 | nibbles[1],
                nibbles[2] << 4 | nibbles[2],
                f64::from(alpha) / 255.0,
            ))
        }
        // #RRGGBB / #RRGGBBAA
        6 | 8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = if bytes.len() == 8 { parse_hex_byte(&bytes[6..8])? } else { 0xFF };
            Some(Color::rgba(r, g, b, f64::from(a) / 255.0))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn parse(s: &str) -> Color {
        Color::parse(s).unwrap_or_else(|e| panic!("{s:?} should parse: {e}"))
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_short_expands() {
        assert_eq!(parse("#ABC"), parse("#AABBCC"));
        assert_eq!(parse("#ABC").to_hex(), "#AABBCCFF");
    }

    #[test]
    fn hex_short_with_alpha() {
        assert_eq!(parse("#f008").to_hex(), "#FF000088");
    }

    #[test]
    fn hex_long_with_alpha() {
        let c = parse("#12345678");
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha_u8()), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(parse("#abcdef"), parse("#ABCDEF"));
    }

    #[test]
    fn hex_invalid() {
        assert!(matches!(Color::parse("#12"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("#GGGGGG"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("#1234567"), Err(ColorError::InvalidHex(_))));
    }

    // ── Functional forms ─────────────────────────────────────────────────

    #[test]
    fn rgb_function() {
        assert_eq!(parse("rgb(255, 0, 128)").to_hex(), "#FF0080FF");
        assert_eq!(parse("RGB(1,2,3)").to_hex(), "#010203FF");
    }

    #[test]
    fn rgba_function() {
        assert_eq!(parse("rgba(0,0,0,0.5)").to_hex(), "#00000080");
    }

    #[test]
    fn rgb_out_of_range() {
        assert!(matches!(
            Color::parse("rgb(256,0,0)"),
            Err(ColorError::OutOfRange { channel: "red", .. })
        ));
        assert!(matches!(
            Color::parse("rgba(0,0,0,1.5)"),
            Err(ColorError::OutOfRange { channel: "alpha", .. })
        ));
    }

    #[test]
    fn rgb_rejects_floats_and_wrong_arity() {
        assert!(matches!(Color::parse("rgb(1.5,0,0)"), Err(ColorError::InvalidNumber { .. })));
        assert!(matches!(Color::parse("rgb(1,2)"), Err(ColorError::Arity { .. })));
        assert!(matches!(Color::parse("rgba(1,2,3)"), Err(ColorError::Arity { .. })));
    }

    #[test]
    fn hsv_function() {
        assert_eq!(parse("hsv(0, 100%, 100%)"), Color::rgb(255, 0, 0));
        assert_eq!(parse("hsv(120,100,50)"), Color::rgb(0, 128, 0));
        assert_eq!(parse("hsva(240,100%,100%,0)").to_hex(), "#0000FF00");
    }

    #[test]
    fn hsv_out_of_range() {
        assert!(matches!(
            Color::parse("hsv(361,0,0)"),
            Err(ColorError::OutOfRange { channel: "hue", .. })
        ));
        assert!(matches!(
            Color::parse("hsv(0,101%,0)"),
            Err(ColorError::OutOfRange { channel: "saturation", .. })
        ));
    }

    #[test]
    fn unknown_function() {
        assert!(matches!(Color::parse("hsl(0,0%,0%)"), Err(ColorError::UnknownFunction(_))));
    }

    // ── Names ────────────────────────────────────────────────────────────

    #[test]
    fn web_names() {
        assert_eq!(parse("rebeccapurple"), Color::from_u32(0x66_33_99));
        assert_eq!(parse("  CornflowerBlue "), Color::from_u32(0x64_95_ED));
        assert_eq!(parse("transparent").to_hex(), "#00000000");
    }

    #[test]
    fn material_names() {
        assert_eq!(parse("Deep Purple 200"), Color::from_u32(0xB3_9D_DB));
        assert_eq!(parse("blue_grey-900"), Color::from_u32(0x26_32_38));
        assert_eq!(parse("red50"), Color::from_u32(0xFF_EB_EE));
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(Color::parse("blurple"), Err(ColorError::UnknownName(_))));
        assert!(matches!(Color::parse("red 550"), Err(ColorError::UnknownName(_))));
        assert!(matches!(Color::parse("   "), Err(ColorError::Empty)));
    }

    // ── HSV ──────────────────────────────────────────────────────────────

    #[test]
    fn hsv_of_primaries() {
        let red = Color::rgb(255, 0, 0).to_hsv();
        assert!(approx_eq(red.h, 0.0, 1e-9) && approx_eq(red.s, 100.0, 1e-9));
        let blue = Color::rgb(0, 0, 255).to_hsv();
        assert!(approx_eq(blue.h, 240.0, 1e-9));
        let gray = Color::rgb(128, 128, 128).to_hsv();
        assert!(approx_eq(gray.s, 0.0, 1e-9));
    }

    #[test]
    fn hsv_roundtrip_is_lossless() {
        for &rgb in &[0x00_00_00, 0xFF_FF_FF, 0x67_3A_B7, 0x12_34_56, 0xFE_01_80, 0x80_80_80] {
            let c = Color::from_u32(rgb);
            assert_eq!(c.to_hsv().to_color(1.0), c, "roundtrip of {c}");
        }
    }

    #[test]
    fn hue_is_normalized() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-9));
        assert!(approx_eq(normalize_hue(f64::NAN), 0.0, 1e-9));
        assert_eq!(Color::hsv(360.0, 100.0, 100.0), Color::hsv(0.0, 100.0, 100.0));
    }

    #[test]
    fn shift_value_moves_brightness_only() {
        let c = Color::hsv(200.0, 60.0, 90.0);
        let darker = c.shift_value(-6.0).to_hsv();
        assert!(approx_eq(darker.v, 84.0, 0.5), "v = {}", darker.v);
        assert!(approx_eq(darker.h, 200.0, 1.5), "h = {}", darker.h);
        assert!(approx_eq(darker.s, 60.0, 1.5), "s = {}", darker.s);
    }

    #[test]
    fn shift_value_clamps() {
        assert_eq!(Color::WHITE.shift_value(10.0), Color::WHITE);
        assert_eq!(Color::BLACK.shift_value(-10.0), Color::BLACK);
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn alpha_is_clamped() {
        assert!(approx_eq(Color::rgba(0, 0, 0, 2.0).alpha(), 1.0, 1e-12));
        assert!(approx_eq(Color::rgba(0, 0, 0, -1.0).alpha(), 0.0, 1e-12));
        assert!(approx_eq(Color::rgba(0, 0, 0, f64::NAN).alpha(), 1.0, 1e-12));
    }

    #[test]
    fn equality_follows_canonical_form() {
        // 0.5 and 0.501 both quantize to 0x80.
        assert_eq!(Color::rgba(1, 2, 3, 0.5), Color::rgba(1, 2, 3, 0.501));
        assert_ne!(Color::rgba(1, 2, 3, 0.5), Color::rgba(1, 2, 3, 0.6));
    }

    #[test]
    fn ordering_matches_hex_strings() {
        let mut colors = vec![parse("#FF0000"), parse("#00FF00"), parse("#0000FF80"), parse("#0000FF")];
        colors.sort();
        let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
        let mut sorted = hex.clone();
        sorted.sort();
        assert_eq!(hex, sorted);
    }

    // ── Mixing ───────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let c = Color::rgba(10, 200, 30, 0.25);
        assert_eq!(c.mix_linear(Color::WHITE, 0.0), c);
        assert_eq!(c.mix_linear(Color::WHITE, 1.0), Color::rgba(255, 255, 255, 0.25));
    }

    #[test]
    fn mix_is_linear_light() {
        // Half-way in linear light between black and white is sRGB ~188, not 128.
        let mid = Color::BLACK.mix_linear(Color::WHITE, 0.5);
        assert!(mid.red() > 180 && mid.red() < 195, "mid = {mid}");
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn formats_reparse_to_same_color() {
        let c = Color::rgba(103, 58, 183, 0.5);
        assert_eq!(parse(&c.to_hex()), c);
        assert_eq!(parse(&c.to_rgba_string()), c);
        assert_eq!(c.to_rgba_string(), "rgba(103,58,183,0.502)");
    }

    #[test]
    fn display_is_canonical_hex() {
        assert_eq!(Color::from_u32(0x00_ab_cd).to_string(), "#00ABCDFF");
    }
}
