//! Swatch generation: linear palettes between two colors and saturation
//! variations of a single hue.

use crate::color::Color;
use crate::constants;
use crate::numeric::{clamp_f64, clamp_i32};

fn clamp_count(count: i32) -> usize {
    let clamped = clamp_i32(
        constants::MIN_PALETTE_COLORS,
        constants::MAX_PALETTE_COLORS,
        count,
    );
    if clamped != count {
        log::trace!("palette size {count} clamped to {clamped}");
    }
    clamped as usize
}

/// `count` colors (clamped to 1–12) stepping linearly from `from` towards
/// `to`, opacity included. The first entry is always `from`.
pub fn create_color_palette(from: &Color, to: &Color, count: i32) -> Vec<Color> {
    let count = clamp_count(count);
    let steps = count - 1;

    let mut palette = Vec::with_capacity(count);
    palette.push(*from);
    if steps == 0 {
        return palette;
    }

    let n = steps as f64;
    let delta_r = (to.r() - from.r()) / n;
    let delta_g = (to.g() - from.g()) / n;
    let delta_b = (to.b() - from.b()) / n;
    let delta_a = (to.a() - from.a()) / n;

    let mut current = *from;
    for _ in 0..steps {
        current = Color::from_rgba(
            clamp_f64(0.0, 1.0, current.r() + delta_r),
            clamp_f64(0.0, 1.0, current.g() + delta_g),
            clamp_f64(0.0, 1.0, current.b() + delta_b),
            clamp_f64(0.0, 1.0, current.a() + delta_a),
        );
        palette.push(current);
    }
    palette
}

/// `count` colors (clamped to 1–12) sharing the hue and brightness of
/// `color`, with saturation rising from 0.2 in equal steps.
pub fn create_color_variations(color: &Color, count: i32) -> Vec<Color> {
    let count = clamp_count(count);
    let step = constants::VARIATION_SATURATION_SPAN / count as f64;
    let hue = color.hue();
    let brightness = color.brightness();

    (0..count)
        .map(|i| {
            let saturation = clamp_f64(
                0.0,
                1.0,
                constants::VARIATION_SATURATION_FLOOR + i as f64 * step,
            );
            Color::from_hsb_degrees(hue, saturation, brightness)
        })
        .collect()
}
