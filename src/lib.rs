//! # picker-core
//!
//! Color-model conversions and numeric helpers behind a color picker widget.
//!
//! Provides RGB↔HSL/HSB conversion, gradient-stop lookup, palette and
//! variation generation, YUV brightness classification, slider tick math and
//! tolerant parsing of text-field input. Everything is a pure function over
//! [`Color`] values and plain numbers, so widgets from any toolkit can call it.
//!
//! ## Usage
//!
//! ```rust
//! use picker_core::{color_at, Color, GradientStop};
//!
//! let stops = [
//!     GradientStop::new(0.0, Color::BLACK),
//!     GradientStop::new(1.0, Color::WHITE),
//! ];
//! let gray = color_at(&stops, 0.5);
//! assert_eq!(gray.to_web(), "#808080");
//! ```

mod color;
pub mod constants;
mod error;
mod gradient;
#[cfg(feature = "floem")]
mod interop;
mod math;
mod model;
pub mod numeric;
mod palette;
pub mod text;

pub use color::Color;
pub use error::ColorParseError;
pub use gradient::{color_at, interpolate_color, GradientStop};
pub use math::{
    color_distance, color_to_yuv, contrast_color, hsb_to_rgb, hsl_to_rgb, hsl_to_rgb_opaque,
    hue_to_channel, is_bright, is_dark, rgb_to_hsb, rgb_to_hsl, Hsl, Yuv,
};
pub use model::{commit_opacity, format_opacity, ColorModel, HueCanvas};
pub use numeric::{AutoScale, ScaleConfig};
pub use palette::{create_color_palette, create_color_variations};
