//! Tolerant parsing of slider and text-field input.
//!
//! Users type things like `255 (max)` or `#ff0000ff;`. Every function here
//! takes the *last* matching token so annotated or corrected input still
//! yields the value typed most recently. Patterns are compiled per call;
//! nothing is shared between threads.

use regex::Regex;

const FLOAT_PATTERN: &str = r"[-+]?[0-9]*\.?[0-9]+";
const HEX_COLOR_PATTERN: &str = r"#?([A-Fa-f0-9]{8}|[A-Fa-f0-9]{6})";
const HEX_BYTE_PATTERN: &str = r"#?([A-Fa-f0-9]{2})";

fn last_match<'t>(pattern: &str, text: &'t str) -> Option<regex::Match<'t>> {
    Regex::new(pattern).ok()?.find_iter(text).last()
}

/// The last number in `text`, or `0.0` if there is none.
pub fn extract_number(text: &str) -> f64 {
    let Some(m) = last_match(FLOAT_PATTERN, text) else {
        log::debug!("no number in {text:?}");
        return 0.0;
    };
    m.as_str().parse().unwrap_or_else(|err| {
        log::debug!("unparsable number {:?}: {err}", m.as_str());
        0.0
    })
}

/// The last 6- or 8-digit hex color in `text`, including its leading `#`
/// when one was typed. Empty if there is none.
pub fn extract_hex_color(text: &str) -> String {
    match last_match(HEX_COLOR_PATTERN, text) {
        Some(m) => m.as_str().to_string(),
        None => {
            log::debug!("no hex color in {text:?}");
            String::new()
        }
    }
}

/// The last two-digit hex byte in `text`, or `0` if there is none.
pub fn extract_hex_byte(text: &str) -> u8 {
    let Some(m) = last_match(HEX_BYTE_PATTERN, text) else {
        log::debug!("no hex byte in {text:?}");
        return 0;
    };
    u8::from_str_radix(m.as_str().trim_start_matches('#'), 16).unwrap_or(0)
}
