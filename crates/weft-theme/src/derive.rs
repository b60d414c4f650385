// SPDX-License-Identifier: MIT
//! State and elevation derivation.
//!
//! Interaction states and elevation tiers are brightness nudges on the HSV
//! value axis, applied to a palette's background and border. After every
//! nudge the foreground is re-checked against the *new* background and
//! repaired with [`ensure_minimum_contrast`] if needed.
//!
//! State nudges (V points, background / border):
//!
//! | State    | Background | Border | Min fg ratio |
//! |----------|-----------:|-------:|-------------:|
//! | hovered  |          6 |      8 |          4.5 |
//! | focused  |          8 |     10 |          4.5 |
//! | pressed  |         12 |     14 |          4.5 |
//! | dragged  |         16 |     18 |          4.5 |
//! | disabled | S − 60, V 15% toward 50 |  | 3.0 |
//!
//! Direction: light backgrounds (V ≥ 50) darken, dark ones lighten.
//!
//! Elevation tiers move lower tiers toward black and higher tiers toward
//! white: low/high ±8 background and ±10 border, lowest/highest ±12 and
//! ±14. `Base` is unchanged.

use weft_color::contrast::{AA_LARGE, AA_NORMAL};
use weft_color::{Color, ContrastResult, Hsv, ensure_minimum_contrast};

use crate::axis::{Elevation, InteractionState};
use crate::brand::SeedColors;

/// Disabled states drop this many saturation points.
pub const DISABLED_DESATURATION: f64 = 60.0;

/// Disabled states blend value this far toward 50.
pub const DISABLED_VALUE_BLEND: f64 = 0.15;

/// V-axis offsets for background and border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nudge {
    pub background: f64,
    pub border: f64,
}

impl Nudge {
    const fn new(background: f64, border: f64) -> Self {
        Self { background, border }
    }
}

/// Unsigned brightness nudge for a state; `None` for states without one.
#[must_use]
pub const fn state_nudge(state: InteractionState) -> Option<Nudge> {
    match state {
        InteractionState::Hovered => Some(Nudge::new(6.0, 8.0)),
        InteractionState::Focused => Some(Nudge::new(8.0, 10.0)),
        InteractionState::Pressed => Some(Nudge::new(12.0, 14.0)),
        InteractionState::Dragged => Some(Nudge::new(16.0, 18.0)),
        _ => None,
    }
}

/// Signed brightness nudge for an elevation tier.
#[must_use]
pub const fn elevation_nudge(tier: Elevation) -> Nudge {
    match tier {
        Elevation::Lowest => Nudge::new(-12.0, -14.0),
        Elevation::Low => Nudge::new(-8.0, -10.0),
        Elevation::Base => Nudge::new(0.0, 0.0),
        Elevation::High => Nudge::new(8.0, 10.0),
        Elevation::Highest => Nudge::new(12.0, 14.0),
    }
}

/// Minimum foreground contrast for a state.
#[must_use]
pub const fn state_min_ratio(state: InteractionState) -> f64 {
    match state {
        InteractionState::Disabled => AA_LARGE,
        _ => AA_NORMAL,
    }
}

/// Seeds after a derivation, with the foreground repair outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub seeds: SeedColors,
    /// `None` when the seeds lack a foreground or a background.
    pub contrast: Option<ContrastResult>,
}

impl Derived {
    /// Whether the foreground meets its target (trivially true without one).
    #[must_use]
    pub fn met(&self) -> bool {
        self.contrast.is_none_or(|c| c.met)
    }
}

/// Derive the seeds for `state` from the default-state `base`.
#[must_use]
pub fn derive_state(base: &SeedColors, state: InteractionState) -> Derived {
    let mut seeds = *base;
    if state == InteractionState::Disabled {
        seeds.background = seeds.background.map(disable);
        seeds.border = seeds.border.map(disable);
    } else if let Some(nudge) = state_nudge(state) {
        let sign = direction(base);
        seeds.background = seeds.background.map(|c| c.shift_value(sign * nudge.background));
        seeds.border = seeds.border.map(|c| c.shift_value(sign * nudge.border));
    }
    recheck(seeds, state_min_ratio(state))
}

/// Derive the seeds for an elevation tier from the base surface.
#[must_use]
pub fn derive_elevation(surface: &SeedColors, tier: Elevation) -> Derived {
    let nudge = elevation_nudge(tier);
    let mut seeds = *surface;
    seeds.background = seeds.background.map(|c| c.shift_value(nudge.background));
    seeds.border = seeds.border.map(|c| c.shift_value(nudge.border));
    recheck(seeds, AA_NORMAL)
}

/// −1 to darken (light background), +1 to lighten, 0 with nothing to go on.
fn direction(seeds: &SeedColors) -> f64 {
    match seeds.background.or(seeds.border) {
        Some(c) if c.is_light() => -1.0,
        Some(_) => 1.0,
        None => 0.0,
    }
}

fn disable(color: Color) -> Color {
    let Hsv { h, s, v } = color.to_hsv();
    let s = (s - DISABLED_DESATURATION).max(0.0);
    let v = (50.0 - v).mul_add(DISABLED_VALUE_BLEND, v);
    Hsv::new(h, s, v).to_color(color.alpha())
}

fn recheck(mut seeds: SeedColors, min_ratio: f64) -> Derived {
    let contrast = match (seeds.foreground, seeds.background) {
        (Some(fg), Some(bg)) => {
            let result = ensure_minimum_contrast(fg, bg, min_ratio);
            seeds.foreground = Some(result.color);
            Some(result)
        }
        _ => None,
    };
    Derived { seeds, contrast }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_color::contrast_ratio;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn seeds(bg: Color, border: Color, fg: Color) -> SeedColors {
        SeedColors::new().background(bg).border(border).foreground(fg)
    }

    fn v(c: Option<Color>) -> f64 {
        c.map(|c| c.to_hsv().v).unwrap_or(f64::NAN)
    }

    // ── States ──────────────────────────────────────────────────────

    #[test]
    fn hover_darkens_light_background() {
        let base = seeds(Color::hsv(220.0, 10.0, 90.0), Color::hsv(220.0, 10.0, 80.0), Color::hsv(220.0, 30.0, 20.0));
        let d = derive_state(&base, InteractionState::Hovered);
        assert!(approx_eq(v(d.seeds.background), 84.0, 0.5), "bg V = {}", v(d.seeds.background));
        assert!(approx_eq(v(d.seeds.border), 72.0, 0.5), "border V = {}", v(d.seeds.border));
        let (fg, bg) = (d.seeds.foreground.unwrap(), d.seeds.background.unwrap());
        assert!(contrast_ratio(fg, bg) >= 4.5);
        assert!(d.met());
    }

    #[test]
    fn pressed_lightens_dark_background() {
        let base = seeds(Color::hsv(220.0, 40.0, 20.0), Color::hsv(220.0, 40.0, 30.0), Color::WHITE);
        let d = derive_state(&base, InteractionState::Pressed);
        assert!(approx_eq(v(d.seeds.background), 32.0, 0.5));
        assert!(approx_eq(v(d.seeds.border), 44.0, 0.5));
    }

    #[test]
    fn nudges_grow_with_intensity() {
        let base = seeds(Color::hsv(0.0, 0.0, 95.0), Color::hsv(0.0, 0.0, 85.0), Color::BLACK);
        let states = [
            InteractionState::Hovered,
            InteractionState::Focused,
            InteractionState::Pressed,
            InteractionState::Dragged,
        ];
        let values: Vec<f64> = states.iter().map(|&s| v(derive_state(&base, s).seeds.background)).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]), "{values:?}");
    }

    #[test]
    fn disabled_desaturates_and_flattens() {
        let base = seeds(Color::hsv(120.0, 80.0, 90.0), Color::hsv(120.0, 50.0, 10.0), Color::BLACK);
        let d = derive_state(&base, InteractionState::Disabled);
        let bg = d.seeds.background.unwrap().to_hsv();
        assert!(approx_eq(bg.s, 20.0, 1.0), "s = {}", bg.s);
        assert!(approx_eq(bg.v, 84.0, 0.5), "v = {}", bg.v);
        let border = d.seeds.border.unwrap().to_hsv();
        assert!(approx_eq(border.s, 0.0, 1e-9), "saturation floors at 0");
        assert!(approx_eq(border.v, 16.0, 0.5), "v = {}", border.v);
    }

    #[test]
    fn disabled_uses_relaxed_ratio() {
        let base = seeds(Color::from_u32(0x9E_9E_9E), Color::from_u32(0x75_75_75), Color::from_u32(0x61_61_61));
        let d = derive_state(&base, InteractionState::Disabled);
        let ratio = d.contrast.unwrap().ratio;
        assert!(ratio >= 3.0 && ratio < 4.5, "disabled text only needs 3:1, got {ratio}");
    }

    #[test]
    fn default_and_visited_only_recheck() {
        let base = seeds(Color::from_u32(0x80_80_80), Color::from_u32(0x60_60_60), Color::from_u32(0x77_77_77));
        for state in [InteractionState::Default, InteractionState::Visited] {
            let d = derive_state(&base, state);
            assert_eq!(d.seeds.background, base.background);
            assert_eq!(d.seeds.border, base.border);
            assert!(d.contrast.unwrap().ratio >= 4.5);
        }
    }

    #[test]
    fn missing_foreground_skips_recheck() {
        let base = SeedColors::new().background(Color::WHITE);
        let d = derive_state(&base, InteractionState::Hovered);
        assert!(d.contrast.is_none());
        assert!(d.met());
        assert!(d.seeds.background.unwrap().to_hsv().v < 100.0);
    }

    #[test]
    fn unrelated_seeds_pass_through() {
        let accent = Color::from_u32(0xFF_40_81);
        let base = seeds(Color::WHITE, Color::BLACK, Color::BLACK).accent(accent);
        assert_eq!(derive_state(&base, InteractionState::Pressed).seeds.accent, Some(accent));
    }

    // ── Elevation ───────────────────────────────────────────────────

    #[test]
    fn elevation_tiers() {
        let surface = seeds(Color::hsv(0.0, 0.0, 50.0), Color::hsv(0.0, 0.0, 40.0), Color::WHITE);
        let expect = [
            (Elevation::Lowest, 38.0, 26.0),
            (Elevation::Low, 42.0, 30.0),
            (Elevation::Base, 50.0, 40.0),
            (Elevation::High, 58.0, 50.0),
            (Elevation::Highest, 62.0, 54.0),
        ];
        for (tier, bg, border) in expect {
            let d = derive_elevation(&surface, tier);
            assert!(approx_eq(v(d.seeds.background), bg, 0.5), "{tier:?} bg = {}", v(d.seeds.background));
            assert!(approx_eq(v(d.seeds.border), border, 0.5), "{tier:?} border = {}", v(d.seeds.border));
        }
    }

    #[test]
    fn elevation_rechecks_foreground() {
        let surface = seeds(Color::hsv(0.0, 0.0, 50.0), Color::hsv(0.0, 0.0, 40.0), Color::hsv(0.0, 0.0, 85.0));
        let d = derive_elevation(&surface, Elevation::Highest);
        let (fg, bg) = (d.seeds.foreground.unwrap(), d.seeds.background.unwrap());
        assert!(d.met());
        assert!(contrast_ratio(fg, bg) >= 4.5);
    }

    #[test]
    fn elevation_clamps_at_poles() {
        let surface = SeedColors::new().background(Color::WHITE);
        let d = derive_elevation(&surface, Elevation::Highest);
        assert_eq!(d.seeds.background, Some(Color::WHITE));
    }
}
