//! Mapping between colors and the chooser's three slider rows, plus the
//! hue/lightness canvas pick.
//!
//! The chooser shows three sliders whose meaning depends on the selected
//! color model. These functions are what the widgets call when a color is set
//! from outside, when a slider moves, and when a slider's text field loses
//! focus.

use crate::color::Color;
use crate::math;
use crate::numeric::clamp_f64;
use crate::text;

/// Color model selected in the chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorModel {
    /// Red, green, blue as 0–255.
    #[default]
    Rgb,
    /// Red, green, blue as 0–255, edited as two-digit hex.
    Hex,
    /// Hue 0–360, saturation and lightness 0–100.
    Hsl,
}

impl ColorModel {
    /// Upper bound of slider `slot` (0, 1 or 2).
    pub fn slider_max(&self, slot: usize) -> f64 {
        match (self, slot) {
            (ColorModel::Rgb | ColorModel::Hex, _) => 255.0,
            (ColorModel::Hsl, 0) => 360.0,
            (ColorModel::Hsl, _) => 100.0,
        }
    }

    /// Slider positions showing `color`.
    pub fn slider_values(&self, color: &Color) -> [f64; 3] {
        match self {
            ColorModel::Rgb | ColorModel::Hex => {
                [color.r() * 255.0, color.g() * 255.0, color.b() * 255.0]
            }
            ColorModel::Hsl => {
                let hsl = color.to_hsl();
                [hsl.hue, hsl.saturation * 100.0, hsl.lightness * 100.0]
            }
        }
    }

    /// Color selected by slider positions `values` at `opacity`.
    pub fn color_from_sliders(&self, values: [f64; 3], opacity: f64) -> Color {
        match self {
            ColorModel::Rgb | ColorModel::Hex => Color::from_rgba(
                values[0] / 255.0,
                values[1] / 255.0,
                values[2] / 255.0,
                opacity,
            ),
            ColorModel::Hsl => {
                math::hsl_to_rgb(values[0], values[1] / 100.0, values[2] / 100.0, opacity)
            }
        }
    }

    /// Slider value for the text typed into the field of slider `slot`.
    ///
    /// Numbers are truncated to whole units and clamped to the slider range;
    /// the hex model reads the last two-digit hex byte instead.
    pub fn commit_field(&self, slot: usize, input: &str) -> f64 {
        match self {
            ColorModel::Hex => text::extract_hex_byte(input) as f64,
            ColorModel::Rgb | ColorModel::Hsl => {
                let value = text::extract_number(input).trunc();
                clamp_f64(0.0, self.slider_max(slot), value)
            }
        }
    }

    /// Text shown in a slider field for slider value `value`, truncated to
    /// whole units like [`commit_field`](Self::commit_field).
    pub fn format_field(&self, value: f64) -> String {
        match self {
            ColorModel::Hex => format!("{:02X}", clamp_f64(0.0, 255.0, value) as u8),
            ColorModel::Rgb | ColorModel::Hsl => format!("{}", value.trunc() as i64),
        }
    }
}

/// Opacity (0.0–1.0) for the text typed into the opacity field, read as a
/// percentage clamped to 0–100.
pub fn commit_opacity(input: &str) -> f64 {
    clamp_f64(0.0, 100.0, text::extract_number(input)) / 100.0
}

/// Text shown in the opacity field, e.g. `45%`.
pub fn format_opacity(opacity: f64) -> String {
    format!("{:.0}%", clamp_f64(0.0, 1.0, opacity) * 100.0)
}

/// The hue × lightness picking canvas: hue runs 0–360 left to right,
/// lightness 1.0 to 0.0 top to bottom, saturation is always full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCanvas {
    pub width: f64,
    pub height: f64,
}

impl HueCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Color under canvas-local point `(x, y)`.
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        if self.width <= 0.0 || self.height <= 0.0 {
            log::debug!("hue canvas has no area: {}x{}", self.width, self.height);
            return Color::BLACK;
        }
        let x_step = 360.0 / self.width;
        let y_step = 1.0 / self.height;
        math::hsl_to_rgb_opaque(x * x_step, 1.0, 1.0 - y * y_step)
    }
}
