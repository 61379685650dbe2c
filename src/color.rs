//! Color type — the value every helper in this crate consumes and produces.
//!
//! Stores RGBA as f64 values clamped into the 0.0–1.0 range. Conversions to
//! HSL/HSB go through [`crate::math`].

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::math::{self, Hsl};
use crate::numeric::clamp_f64;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawColor"))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

/// Wire form of [`Color`]; channels are clamped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[cfg(feature = "serde")]
impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::from_rgba(raw.r, raw.g, raw.b, raw.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl Color {
    /// Create from f64 RGBA. Out-of-range channels are clamped into 0.0–1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_f64(0.0, 1.0, r),
            g: clamp_f64(0.0, 1.0, g),
            b: clamp_f64(0.0, 1.0, b),
            a: clamp_f64(0.0, 1.0, a),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from 0–255 RGBA values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Same color with `opacity` (clamped) as alpha.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            a: clamp_f64(0.0, 1.0, opacity),
            ..*self
        }
    }

    /// `true` when red, green and blue are identical.
    pub fn is_monochrome(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// HSB brightness, i.e. the largest channel.
    pub fn brightness(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// HSB hue in degrees (0–360).
    pub fn hue(&self) -> f64 {
        let (h, _, _) = math::rgb_to_hsb(self.r, self.g, self.b);
        h * 360.0
    }

    /// Create from HSB/HSV values (all 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, s, b);
        Self::from_rgba(r, g, bl, a)
    }

    /// Create from an HSB hue in degrees; any hue is wrapped into [0, 360),
    /// saturation and brightness are clamped.
    pub fn from_hsb_degrees(hue: f64, saturation: f64, brightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        Self::from_hsb(
            h,
            clamp_f64(0.0, 1.0, saturation),
            clamp_f64(0.0, 1.0, brightness),
            1.0,
        )
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Create from HSL, hue in degrees.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, a: f64) -> Self {
        math::hsl_to_rgb(hue, saturation, lightness, a)
    }

    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse().ok()
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when alpha is 1.0 or the color is black.
    /// Returns 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        let is_black = r == 0 && g == 0 && b == 0;
        if (self.a - 1.0).abs() < 0.001 || is_black {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, to_byte(self.a))
        }
    }

    /// Web color without alpha, e.g. `#ff8000`.
    pub fn to_web(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS color including alpha, e.g. `#ff8000ff`.
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, to_byte(self.a))
    }

    /// `rgb(r, g, b)` with 0–255 channels.
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// `rgba(r, g, b, a)` with 0–255 channels and alpha to three decimals.
    pub fn to_rgba_string(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgba({}, {}, {}, {:.3})", r, g, b, self.a)
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.trim().trim_start_matches('#');
        if stripped.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()))
        };
        match stripped.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Ok(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
