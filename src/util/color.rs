//! Paint values and gamma-correct color mixing.
//!
//! Channels use the canvas convention: red, green and blue in `0..=255`,
//! alpha in `0..=1`. Mixing happens in linear light so a transition between
//! two saturated colors does not dip through a muddy midpoint.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// RGBA quadruple: red, green, blue in `0..=255`, alpha in `0..=1`.
pub type Rgba = [f64; 4];

/// A fill or stroke paint.
///
/// Only [`Paint::Rgba`] can be interpolated. [`Paint::Css`] is an opaque
/// style (a named color, a gradient registered by the host, ...) that the
/// renderer passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Paint {
    /// Concrete RGBA color.
    Rgba(Rgba),
    /// Opaque style string handed to the surface as-is.
    Css(String),
}

impl Paint {
    /// Opaque black, the default fill and stroke paint.
    pub const BLACK: Self = Self::Rgba([0.0, 0.0, 0.0, 1.0]);

    /// The RGBA channels, if this paint is a concrete color.
    #[must_use]
    pub fn as_rgba(&self) -> Option<&Rgba> {
        match self {
            Self::Rgba(c) => Some(c),
            Self::Css(_) => None,
        }
    }

    /// Style string for a 2D canvas: `rgba(r,g,b,a)` or the opaque style.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Rgba([r, g, b, a]) => format!("rgba({r},{g},{b},{a})"),
            Self::Css(style) => style.clone(),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Self::Rgba(c)
    }
}

const DECODE_THRESHOLD: f64 = 0.04045;
const ENCODE_THRESHOLD: f64 = 0.003_130_8;
const GAMMA: f64 = 2.4;

#[inline]
fn decode_channel(c: f64) -> f64 {
    let c = c / 255.0;
    let linear = if c > DECODE_THRESHOLD {
        ((c + 0.055) / 1.055).powf(GAMMA)
    } else {
        c / 12.92
    };
    linear * 255.0
}

#[inline]
fn encode_channel(c: f64) -> f64 {
    let c = c / 255.0;
    let encoded = if c > ENCODE_THRESHOLD {
        1.055 * c.powf(1.0 / GAMMA) - 0.055
    } else {
        c * 12.92
    };
    encoded * 255.0
}

/// Convert gamma-encoded sRGB channels (`0..=255`) to linear light on the
/// same scale.
#[must_use]
pub fn inverse_srgb_companding(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(decode_channel)
}

/// Convert linear-light channels (`0..=255`) back to gamma-encoded sRGB.
#[must_use]
pub fn srgb_companding(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(encode_channel)
}

/// Mix two colors in linear light. `mix = 0` yields `c1`, `mix = 1` yields
/// `c2`. Alpha is mixed directly, without companding.
#[must_use]
pub fn color_mix(c1: &Rgba, c2: &Rgba, mix: f64) -> Rgba {
    // The companding round trip is not exact at the ends.
    if mix == 0.0 {
        return *c1;
    }
    if mix == 1.0 {
        return *c2;
    }
    let lin1 = inverse_srgb_companding([c1[0], c1[1], c1[2]]);
    let lin2 = inverse_srgb_companding([c2[0], c2[1], c2[2]]);
    let mixed = [
        lin1[0] * (1.0 - mix) + lin2[0] * mix,
        lin1[1] * (1.0 - mix) + lin2[1] * mix,
        lin1[2] * (1.0 - mix) + lin2[2] * mix,
    ];
    let [r, g, b] = srgb_companding(mixed);
    [r, g, b, c1[3] * (1.0 - mix) + c2[3] * mix]
}
