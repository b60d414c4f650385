// SPDX-License-Identifier: MIT
//! WCAG contrast measurement and hue-preserving contrast repair.
//!
//! Thresholds used across weft:
//!
//! - Normal text: contrast ratio >= 4.5:1 (WCAG AA)
//! - Large text, disabled text and non-text UI: >= 3.0:1
//! - High-contrast themes: >= 7.0:1 (WCAG AAA)
//!
//! Measurement happens in relative luminance (the WCAG definition), but
//! repair moves along the HSV value axis first, so a repaired color keeps
//! its hue and saturation whenever the target is reachable that way.

use tracing::trace;

use crate::color::{Color, Hsv};

/// Minimum ratio for normal text (WCAG AA).
pub const AA_NORMAL: f64 = 4.5;

/// Minimum ratio for large text and non-text UI (WCAG AA).
pub const AA_LARGE: f64 = 3.0;

/// Minimum ratio for normal text (WCAG AAA).
pub const AAA_NORMAL: f64 = 7.0;

/// Iterations per binary search.
pub const SEARCH_ITERATIONS: usize = 18;

/// HSV value step used to probe which direction improves contrast.
const PROBE_STEP: f64 = 2.0;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white. Alpha is
/// ignored.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_linear();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Outcome of [`ensure_minimum_contrast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    /// The resolved foreground.
    pub color: Color,
    /// Contrast achieved against the background.
    pub ratio: f64,
    /// Whether `ratio` meets the requested minimum.
    pub met: bool,
}

/// Repair `fg` until it reaches `min_ratio` against `bg`.
///
/// Search order:
///
/// 1. Already readable: `fg` is returned unchanged.
/// 2. The HSV value rail (hue and saturation fixed) in whichever direction
///    improves contrast at ±2 V, then the opposite direction.
/// 3. Linear-light mixes toward white and toward black; when both reach
///    the target the higher ratio wins.
///
/// Each search is an 18-step binary search for the smallest change that
/// meets the target. When nothing does, the best candidate seen is
/// returned with `met == false`. The alpha of `fg` is always preserved.
#[must_use]
pub fn ensure_minimum_contrast(fg: Color, bg: Color, min_ratio: f64) -> ContrastResult {
    let initial = contrast_ratio(fg, bg);
    if initial >= min_ratio {
        return ContrastResult { color: fg, ratio: initial, met: true };
    }

    let mut best = Candidate { color: fg, ratio: initial };
    let hsv = fg.to_hsv();
    let first = Rail::probe(hsv, fg, bg);

    for rail in [first, first.opposite()] {
        if let Some(found) = search_rail(hsv, fg.alpha(), bg, min_ratio, rail, &mut best) {
            trace!(fg = %fg, bg = %bg, to = %found.color, ratio = found.ratio, ?rail, "contrast met on value rail");
            return found.met();
        }
    }

    let toward_white = search_pole(fg, Color::WHITE, bg, min_ratio, &mut best);
    let toward_black = search_pole(fg, Color::BLACK, bg, min_ratio, &mut best);
    let mixed = match (toward_white, toward_black) {
        (Some(white), Some(black)) => Some(if white.ratio >= black.ratio { white } else { black }),
        (Some(found), None) | (None, Some(found)) => Some(found),
        (None, None) => None,
    };
    if let Some(found) = mixed {
        trace!(fg = %fg, bg = %bg, to = %found.color, ratio = found.ratio, "contrast met by pole mix");
        return found.met();
    }

    trace!(fg = %fg, bg = %bg, best = %best.color, ratio = best.ratio, min_ratio, "contrast target unreachable");
    ContrastResult { color: best.color, ratio: best.ratio, met: false }
}

// ---------------------------------------------------------------------------
// Search internals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Candidate {
    color: Color,
    ratio: f64,
}

impl Candidate {
    fn measure(color: Color, bg: Color) -> Self {
        Self { color, ratio: contrast_ratio(color, bg) }
    }

    const fn met(self) -> ContrastResult {
        ContrastResult { color: self.color, ratio: self.ratio, met: true }
    }

    fn keep_best(self, best: &mut Self) -> Self {
        if self.ratio > best.ratio {
            *best = self;
        }
        self
    }
}

/// Direction of travel along the HSV value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rail {
    Brighter,
    Darker,
}

impl Rail {
    /// Pick the direction whose ±2 V probe gives the higher contrast.
    ///
    /// Ties (both probes clamped, or symmetric) move away from the
    /// background's luminance.
    fn probe(hsv: Hsv, fg: Color, bg: Color) -> Self {
        let up = contrast_ratio(Hsv { v: (hsv.v + PROBE_STEP).min(100.0), ..hsv }.to_color(1.0), bg);
        let down = contrast_ratio(Hsv { v: (hsv.v - PROBE_STEP).max(0.0), ..hsv }.to_color(1.0), bg);
        if up > down {
            Self::Brighter
        } else if down > up {
            Self::Darker
        } else if relative_luminance(fg) >= relative_luminance(bg) {
            Self::Brighter
        } else {
            Self::Darker
        }
    }

    const fn opposite(self) -> Self {
        match self {
            Self::Brighter => Self::Darker,
            Self::Darker => Self::Brighter,
        }
    }

    /// Remaining value headroom from `v` in this direction.
    fn span(self, v: f64) -> f64 {
        match self {
            Self::Brighter => 100.0 - v,
            Self::Darker => v,
        }
    }

    fn apply(self, v: f64, delta: f64) -> f64 {
        match self {
            Self::Brighter => (v + delta).min(100.0),
            Self::Darker => (v - delta).max(0.0),
        }
    }
}

/// Binary-search the smallest V change along `rail` that meets `min_ratio`.
fn search_rail(
    hsv: Hsv,
    alpha: f64,
    bg: Color,
    min_ratio: f64,
    rail: Rail,
    best: &mut Candidate,
) -> Option<Candidate> {
    let span = rail.span(hsv.v);
    if span <= 0.0 {
        return None;
    }

    let mut at = |delta: f64| {
        let color = Hsv { v: rail.apply(hsv.v, delta), ..hsv }.to_color(alpha);
        Candidate::measure(color, bg).keep_best(best)
    };

    // Contrast only rises once the rail has crossed the background, so if
    // the far end misses the target nothing in between can reach it.
    let end = at(span);
    if end.ratio < min_ratio {
        return None;
    }

    let mut found = end;
    let (mut lo, mut hi) = (0.0, span);
    for _ in 0..SEARCH_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        let candidate = at(mid);
        if candidate.ratio >= min_ratio {
            found = candidate;
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(found)
}

/// Binary-search the smallest linear-light mix toward `pole` that meets `min_ratio`.
fn search_pole(
    fg: Color,
    pole: Color,
    bg: Color,
    min_ratio: f64,
    best: &mut Candidate,
) -> Option<Candidate> {
    let mut at = |t: f64| Candidate::measure(fg.mix_linear(pole, t), bg).keep_best(best);

    let end = at(1.0);
    if end.ratio < min_ratio {
        return None;
    }

    let mut found = end;
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..SEARCH_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        let candidate = at(mid);
        if candidate.ratio >= min_ratio {
            found = candidate;
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(found)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(hex("#808080"));
        // sRGB 128 linearizes to ~0.216
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(hex("#FF0000")), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#00FF00")), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#0000FF")), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_ignores_alpha() {
        let opaque = hex("#336699");
        assert!(approx_eq(
            relative_luminance(opaque),
            relative_luminance(opaque.with_alpha(0.1)),
            1e-12
        ));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#3F51B5");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#CC3344");
        let b = hex("#1A1A66");
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    // ── ensure_minimum_contrast ─────────────────────────────────────

    #[test]
    fn already_readable_is_unchanged() {
        let result = ensure_minimum_contrast(Color::WHITE, Color::BLACK, AA_NORMAL);
        assert!(result.met);
        assert_eq!(result.color, Color::WHITE);
        assert!(approx_eq(result.ratio, 21.0, 1e-9));
    }

    #[test]
    fn gray_on_gray_darkens_along_rail() {
        let bg = hex("#808080");
        let result = ensure_minimum_contrast(hex("#777777"), bg, AA_NORMAL);
        assert!(result.met, "should be reachable: {result:?}");
        assert!(contrast_ratio(result.color, bg) >= AA_NORMAL);
        let c = result.color;
        assert!(c.red() == c.green() && c.green() == c.blue(), "stays gray: {c}");
        assert!(c.red() < 0x77, "should have darkened: {c}");
    }

    #[test]
    fn smallest_change_is_preferred() {
        // Repair should stop close to the threshold, not jump to black.
        let bg = hex("#808080");
        let result = ensure_minimum_contrast(hex("#777777"), bg, AA_NORMAL);
        assert!(result.ratio < 4.8, "overshot: {}", result.ratio);
        assert_ne!(result.color, Color::BLACK);
    }

    #[test]
    fn repair_preserves_hue_and_saturation() {
        let fg = Color::hsv(210.0, 80.0, 35.0);
        let bg = Color::hsv(210.0, 20.0, 15.0);
        let result = ensure_minimum_contrast(fg, bg, AA_NORMAL);
        assert!(result.met);
        let before = fg.to_hsv();
        let after = result.color.to_hsv();
        assert!(after.v > before.v, "should have brightened");
        assert!(approx_eq(after.h, before.h, 2.0), "hue drifted: {} -> {}", before.h, after.h);
        assert!(approx_eq(after.s, before.s, 2.0), "saturation drifted: {} -> {}", before.s, after.s);
    }

    #[test]
    fn light_background_darkens() {
        let fg = hex("#FFFFFF");
        let bg = hex("#EEEEEE");
        let result = ensure_minimum_contrast(fg, bg, AA_NORMAL);
        assert!(result.met);
        assert!(result.color.to_hsv().v < 100.0);
    }

    #[test]
    fn saturated_blue_on_black_falls_back_to_pole_mix() {
        // V is already 100 and darkening only lowers contrast, so only a
        // mix toward white can reach the target.
        let result = ensure_minimum_contrast(hex("#0000FF"), Color::BLACK, AA_NORMAL);
        assert!(result.met, "{result:?}");
        assert!(result.ratio >= AA_NORMAL);
        assert!(result.color.to_hsv().s < 100.0, "left the rail: {}", result.color);
    }

    #[test]
    fn unreachable_reports_best_candidate() {
        let bg = hex("#808080");
        let result = ensure_minimum_contrast(hex("#777777"), bg, 21.0);
        assert!(!result.met);
        assert!(result.ratio < 21.0);
        // Black is the best either search can do against mid gray.
        assert!(approx_eq(result.ratio, contrast_ratio(Color::BLACK, bg), 1e-9));
    }

    #[test]
    fn alpha_survives_repair() {
        let fg = hex("#77777780");
        let result = ensure_minimum_contrast(fg, hex("#808080"), AA_NORMAL);
        assert_eq!(result.color.alpha_u8(), 0x80);
    }

    #[test]
    fn reported_ratio_matches_color() {
        let bg = hex("#3F51B5");
        let result = ensure_minimum_contrast(hex("#5C6BC0"), bg, AA_NORMAL);
        assert!(approx_eq(result.ratio, contrast_ratio(result.color, bg), 1e-12));
        assert!(result.met);
    }
}
