//! Gradient stops and color lookup along a 1-D gradient.

use std::cmp::Ordering;

use crate::color::Color;
use crate::numeric::clamp_f64;

/// A `(offset, color)` anchor of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linearly interpolates every channel (opacity included) between two stops.
///
/// The stops must have distinct offsets. If they don't, there is no segment to
/// interpolate along and the lower stop's color is returned.
pub fn interpolate_color(lower: &GradientStop, upper: &GradientStop, position: f64) -> Color {
    let span = upper.offset - lower.offset;
    if span == 0.0 {
        log::warn!(
            "interpolate_color: stops share offset {}, returning lower color",
            lower.offset
        );
        return lower.color;
    }
    let pos = (position - lower.offset) / span;

    let (lc, uc) = (&lower.color, &upper.color);
    let lerp = |from: f64, to: f64| clamp_f64(0.0, 1.0, from + (to - from) * pos);

    Color::from_rgba(
        lerp(lc.r(), uc.r()),
        lerp(lc.g(), uc.g()),
        lerp(lc.b(), uc.b()),
        lerp(lc.a(), uc.a()),
    )
}

/// Offset-sorted stops, one per offset. A later stop replaces an earlier one
/// at the same offset.
fn sorted_stops(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut sorted: Vec<GradientStop> = Vec::with_capacity(stops.len() + 2);
    for stop in stops {
        match sorted
            .iter_mut()
            .find(|s| s.offset.total_cmp(&stop.offset) == Ordering::Equal)
        {
            Some(existing) => *existing = *stop,
            None => sorted.push(*stop),
        }
    }
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    sorted
}

/// Color of the gradient described by `stops` at `position` (clamped to
/// 0.0–1.0).
///
/// Stops may come in any order and need not cover 0.0 and 1.0: a missing end
/// takes the color of the nearest stop. An empty list is black.
///
/// The bracketing stops are the last one strictly below `position` and the
/// first one strictly above it, so a stop sitting exactly at `position` is
/// passed over and its neighbours are blended instead.
pub fn color_at(stops: &[GradientStop], position: f64) -> Color {
    let mut stops = sorted_stops(stops);
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Color::BLACK,
    };

    if first.offset > 0.0 {
        stops.insert(0, GradientStop::new(0.0, first.color));
    }
    if last.offset < 1.0 {
        stops.push(GradientStop::new(1.0, last.color));
    }

    let position = clamp_f64(0.0, 1.0, position);
    if stops.len() == 1 {
        return stops[0].color;
    }

    let mut lower = stops.iter().find(|s| s.offset == 0.0).unwrap_or(&stops[0]);
    let mut upper = stops
        .iter()
        .find(|s| s.offset == 1.0)
        .unwrap_or(&stops[stops.len() - 1]);
    for stop in &stops {
        if stop.offset < position {
            lower = stop;
        }
        if stop.offset > position {
            upper = stop;
            break;
        }
    }
    interpolate_color(lower, upper, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn red() -> Color {
        Color::from_rgba(1.0, 0.0, 0.0, 1.0)
    }

    fn blue() -> Color {
        Color::from_rgba(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn interpolates_all_channels() {
        let lower = GradientStop::new(0.2, Color::from_rgba(0.0, 0.0, 0.0, 0.0));
        let upper = GradientStop::new(0.6, Color::from_rgba(1.0, 0.5, 0.2, 1.0));
        let c = interpolate_color(&lower, &upper, 0.4);
        assert_abs_diff_eq!(c.r(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.g(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(c.b(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(c.a(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_outside_segment_is_clamped() {
        let lower = GradientStop::new(0.0, Color::BLACK);
        let upper = GradientStop::new(0.5, Color::WHITE);
        assert_eq!(interpolate_color(&lower, &upper, 1.0), Color::WHITE);
    }

    #[test]
    fn shared_offset_returns_lower_color() {
        let lower = GradientStop::new(0.5, red());
        let upper = GradientStop::new(0.5, blue());
        assert_eq!(interpolate_color(&lower, &upper, 0.5), red());
    }

    #[test]
    fn empty_gradient_is_black() {
        assert_eq!(color_at(&[], 0.3), Color::BLACK);
    }

    #[test]
    fn missing_ends_take_nearest_color() {
        let stops = [
            GradientStop::new(0.75, blue()),
            GradientStop::new(0.25, red()),
        ];
        assert_eq!(color_at(&stops, 0.1), red());
        assert_eq!(color_at(&stops, 0.9), blue());
        let mid = color_at(&stops, 0.5);
        assert_abs_diff_eq!(mid.r(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.b(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn position_is_clamped() {
        let stops = [
            GradientStop::new(0.0, Color::BLACK),
            GradientStop::new(1.0, Color::WHITE),
        ];
        assert_eq!(color_at(&stops, -4.0), Color::BLACK);
        assert_eq!(color_at(&stops, 4.0), Color::WHITE);
    }

    #[test]
    fn duplicate_offsets_keep_last() {
        let stops = [
            GradientStop::new(0.0, red()),
            GradientStop::new(0.0, Color::BLACK),
            GradientStop::new(1.0, Color::WHITE),
        ];
        assert_eq!(color_at(&stops, 0.0), Color::BLACK);
    }

    #[test]
    fn stop_at_exact_position_is_skipped() {
        let stops = [
            GradientStop::new(0.0, Color::BLACK),
            GradientStop::new(0.5, red()),
            GradientStop::new(1.0, Color::WHITE),
        ];
        // the red stop sits exactly at 0.5: black and white are blended
        let c = color_at(&stops, 0.5);
        assert_abs_diff_eq!(c.r(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.g(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.b(), 0.5, epsilon = 1e-12);

        // just beside it, red dominates
        let c = color_at(&stops, 0.5 + 1e-9);
        assert!(c.r() > 0.99);
        assert!(c.g() < 0.01);
    }

    #[test]
    fn out_of_range_offsets_bracket_directly() {
        let stops = [
            GradientStop::new(-1.0, Color::BLACK),
            GradientStop::new(2.0, Color::WHITE),
        ];
        let c = color_at(&stops, 0.5);
        assert_abs_diff_eq!(c.r(), 0.5, epsilon = 1e-12);
    }
}
