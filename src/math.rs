//! Color math — HSL, HSB and YUV conversions plus brightness helpers.
//!
//! Channels are normalized f64 in 0.0–1.0. HSL hue is in degrees, HSB hue is
//! a fraction of the full turn (0.0–1.0).

use crate::color::Color;
use crate::constants;
use crate::numeric::clamp_f64;

/// Hue (degrees, 0–360), saturation and lightness (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Luma `y` (0.0–1.0) and chroma `u`, `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

/// RGB → HSL. Hue ties are broken red first, then green, then blue.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let r = clamp_f64(0.0, 1.0, r);
    let g = clamp_f64(0.0, 1.0, g);
    let b = clamp_f64(0.0, 1.0, b);

    let min = r.min(g.min(b));
    let max = r.max(g.max(b));

    let hue = if max == min {
        0.0
    } else if max == r {
        ((60.0 * (g - b) / (max - min)) + 360.0) % 360.0
    } else if max == g {
        (60.0 * (b - r) / (max - min)) + 120.0
    } else {
        (60.0 * (r - g) / (max - min)) + 240.0
    };

    let lightness = (max + min) / 2.0;

    let saturation = if max == min {
        0.0
    } else if lightness <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    Hsl {
        hue: clamp_f64(0.0, 360.0, hue),
        saturation: clamp_f64(0.0, 1.0, saturation),
        lightness: clamp_f64(0.0, 1.0, lightness),
    }
}

/// HSL → RGB. Any hue is accepted and wrapped into [0, 360); saturation,
/// lightness and opacity are clamped into 0.0–1.0.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64, opacity: f64) -> Color {
    let saturation = clamp_f64(0.0, 1.0, saturation);
    let lightness = clamp_f64(0.0, 1.0, lightness);
    let opacity = clamp_f64(0.0, 1.0, opacity);

    let h = hue.rem_euclid(360.0) / 360.0;

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        (lightness + saturation) - (saturation * lightness)
    };
    let p = 2.0 * lightness - q;

    let r = clamp_f64(0.0, 1.0, hue_to_channel(p, q, h + (1.0 / 3.0)));
    let g = clamp_f64(0.0, 1.0, hue_to_channel(p, q, h));
    let b = clamp_f64(0.0, 1.0, hue_to_channel(p, q, h - (1.0 / 3.0)));

    Color::from_rgba(r, g, b, opacity)
}

/// [`hsl_to_rgb`] at full opacity.
pub fn hsl_to_rgb_opaque(hue: f64, saturation: f64, lightness: f64) -> Color {
    hsl_to_rgb(hue, saturation, lightness, 1.0)
}

/// One channel of the HSL → RGB transform for fractional hue offset `t`.
///
/// The segment thresholds are compared as `6t < 1`, `2t < 1`, `3t < 2`;
/// rewriting them as `t < 1/6` etc. moves the boundaries by an ulp.
pub fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if 6.0 * t < 1.0 {
        return p + ((q - p) * 6.0 * t);
    }
    if 2.0 * t < 1.0 {
        return q;
    }
    if 3.0 * t < 2.0 {
        return p + ((q - p) * 6.0 * ((2.0 / 3.0) - t));
    }
    p
}

/// HSB/HSV → RGB. All values 0.0–1.0.
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
pub fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Luma and chroma of `color`, using the picker's brightness weights.
pub fn color_to_yuv(color: &Color) -> Yuv {
    let (r, g, b) = (color.r(), color.g(), color.b());
    let y = clamp_f64(
        0.0,
        1.0,
        constants::YUV_WEIGHT_RED * r
            + constants::YUV_WEIGHT_GREEN * g
            + constants::YUV_WEIGHT_BLUE * b,
    );
    let u = clamp_f64(
        -constants::YUV_U_MAX,
        constants::YUV_U_MAX,
        constants::YUV_U_MAX * ((b - y) / (1.0 - constants::YUV_WEIGHT_BLUE)),
    );
    let v = clamp_f64(
        -constants::YUV_V_MAX,
        constants::YUV_V_MAX,
        constants::YUV_V_MAX * ((r - y) / (1.0 - constants::YUV_WEIGHT_RED)),
    );
    Yuv { y, u, v }
}

pub fn is_bright(color: &Color) -> bool {
    color_to_yuv(color).y >= constants::BRIGHTNESS_THRESHOLD
}

pub fn is_dark(color: &Color) -> bool {
    color_to_yuv(color).y < constants::BRIGHTNESS_THRESHOLD
}

/// Euclidean distance over red, green and blue. Opacity is ignored.
pub fn color_distance(a: &Color, b: &Color) -> f64 {
    let dr = b.r() - a.r();
    let dg = b.g() - a.g();
    let db = b.b() - a.b();
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Black for colors brighter than half (HSB brightness), white otherwise.
pub fn contrast_color(color: &Color) -> Color {
    if color.brightness() > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
