//! Numeric helpers used by sliders, axes and the color math.
//!
//! Everything here is a plain function over copies; the float variants follow
//! a total order so NaN inputs never slip through a clamp.

use std::cmp::Ordering;

use crate::constants;

/// Clamps `value` into `[min, max]` for any partially ordered type.
///
/// Returns `min` if `value < min`, `max` if `value > max`, else `value`.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

pub fn clamp_i32(min: i32, max: i32, value: i32) -> i32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

pub fn clamp_i64(min: i64, max: i64, value: i64) -> i64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Float clamp using `f64::total_cmp`. A NaN `value` sorts above every
/// number and therefore clamps to `max`.
pub fn clamp_f64(min: f64, max: f64, value: f64) -> f64 {
    if value.total_cmp(&min) == Ordering::Less {
        return min;
    }
    if value.total_cmp(&max) == Ordering::Greater {
        return max;
    }
    value
}

pub fn clamp_min(min: f64, value: f64) -> f64 {
    if value < min {
        min
    } else {
        value
    }
}

pub fn clamp_max(max: f64, value: f64) -> f64 {
    if value > max {
        max
    } else {
        value
    }
}

/// Picks whichever of `smaller` / `larger` is closer to `value`. Ties go to
/// `larger`.
pub fn nearest(smaller: f64, value: f64, larger: f64) -> f64 {
    if (value - smaller) < (larger - value) {
        smaller
    } else {
        larger
    }
}

/// Round half up (ties toward positive infinity).
///
/// Compares the fractional part instead of adding 0.5, which would round the
/// sum itself just below a half and above 2^52.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds `value` to `precision` decimal places.
pub fn round(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    round_half_up(value * scale) / scale
}

/// Rounds `value` to the nearest multiple of `target`.
pub fn round_to(value: f64, target: f64) -> f64 {
    target * round_half_up(value / target)
}

/// Rounds `value` to the nearest 0.5.
pub fn round_to_half(value: f64) -> f64 {
    round_half_up(value * 2.0) / 2.0
}

/// Rounds to an integer with ties away from zero.
pub fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < constants::EPSILON
}

pub fn greater_than(a: f64, b: f64) -> bool {
    (a - b) > constants::EPSILON
}

pub fn less_than(a: f64, b: f64) -> bool {
    (b - a) > constants::EPSILON
}

/// Returns a "nice" number (1, 2, 5 or 10 times a power of ten) close to
/// `range`.
///
/// With `round` the fraction is rounded to the closest nice value, otherwise
/// the smallest nice value not below it is taken. A non-positive or
/// non-finite range yields `0.0`.
pub fn calc_nice_number(range: f64, round: bool) -> f64 {
    if !range.is_finite() || range <= 0.0 {
        log::debug!("calc_nice_number: degenerate range {range}");
        return 0.0;
    }
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * 10f64.powf(exponent)
}

/// Tick counts used by [`calc_auto_scale_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleConfig {
    pub max_major_ticks: u32,
    pub max_minor_ticks: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            max_major_ticks: constants::MAX_MAJOR_TICKS,
            max_minor_ticks: constants::MAX_MINOR_TICKS,
        }
    }
}

/// Axis range and tick spacing computed by [`calc_auto_scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScale {
    pub nice_min: f64,
    pub nice_max: f64,
    pub major_tick_spacing: f64,
    pub minor_tick_spacing: f64,
}

/// Auto-scales `[min_value, max_value]` with 10 major and 10 minor ticks.
pub fn calc_auto_scale(min_value: f64, max_value: f64) -> AutoScale {
    calc_auto_scale_with(&ScaleConfig::default(), min_value, max_value)
}

/// Auto-scales `[min_value, max_value]` into nice bounds and tick spacings.
///
/// When `max_value <= min_value` there is nothing to scale: the bounds are
/// returned as given with zero spacings.
pub fn calc_auto_scale_with(config: &ScaleConfig, min_value: f64, max_value: f64) -> AutoScale {
    let degenerate = AutoScale {
        nice_min: min_value,
        nice_max: max_value,
        major_tick_spacing: 0.0,
        minor_tick_spacing: 0.0,
    };
    if max_value <= min_value {
        log::debug!("calc_auto_scale: empty range [{min_value}, {max_value}]");
        return degenerate;
    }

    // One fewer interval than ticks; never divide by zero for tiny configs.
    let major_intervals = (config.max_major_ticks.max(2) - 1) as f64;
    let minor_intervals = (config.max_minor_ticks.max(2) - 1) as f64;

    let nice_range = calc_nice_number(max_value - min_value, false);
    let major_tick_spacing = calc_nice_number(nice_range / major_intervals, true);
    if major_tick_spacing == 0.0 {
        return degenerate;
    }
    let nice_min = (min_value / major_tick_spacing).floor() * major_tick_spacing;
    let nice_max = (max_value / major_tick_spacing).ceil() * major_tick_spacing;
    let minor_tick_spacing = calc_nice_number(major_tick_spacing / minor_intervals, true);

    AutoScale {
        nice_min,
        nice_max,
        major_tick_spacing,
        minor_tick_spacing,
    }
}

/// Snaps `value` to the closest tick of a slider running from `min_value` to
/// `max_value`.
///
/// `minor_tick_count` is the number of ticks between two major ticks and is
/// clamped to `[0, 10]`. A non-positive `major_tick_unit` falls back to 0.25.
/// The result always lies in `[min_value, max_value]`.
pub fn snap_to_ticks(
    min_value: f64,
    max_value: f64,
    value: f64,
    minor_tick_count: i32,
    major_tick_unit: f64,
) -> f64 {
    let minor_tick_count = clamp_i32(0, constants::MAX_MINOR_TICK_COUNT, minor_tick_count);
    let major_tick_unit = if major_tick_unit <= 0.0 || major_tick_unit.is_nan() {
        constants::DEFAULT_MAJOR_TICK_UNIT
    } else {
        major_tick_unit
    };
    let tick_spacing = if minor_tick_count != 0 {
        major_tick_unit / (minor_tick_count + 1) as f64
    } else {
        major_tick_unit
    };

    let prev_tick = ((value - min_value) / tick_spacing).floor();
    let prev_tick_value = prev_tick * tick_spacing + min_value;
    let next_tick_value = (prev_tick + 1.0) * tick_spacing + min_value;

    let snapped = nearest(prev_tick_value, value, next_tick_value);
    clamp_f64(min_value, max_value, snapped)
}
