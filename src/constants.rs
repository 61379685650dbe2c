//! Tunables shared by the color and numeric helpers.

/// Luma weight of the red channel
pub const YUV_WEIGHT_RED: f64 = 0.299;

/// Luma weight of the green channel
pub const YUV_WEIGHT_GREEN: f64 = 0.587;

/// Luma weight of the blue channel.
///
/// Not the canonical 0.114: brightness thresholds downstream were tuned
/// against this value, so the weights sum to 1.030.
pub const YUV_WEIGHT_BLUE: f64 = 0.144;

/// Maximum magnitude of the U chroma component
pub const YUV_U_MAX: f64 = 0.436;

/// Maximum magnitude of the V chroma component
pub const YUV_V_MAX: f64 = 0.615;

/// Luma at or above which a color counts as bright
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Smallest palette / variation size
pub const MIN_PALETTE_COLORS: i32 = 1;

/// Largest palette / variation size
pub const MAX_PALETTE_COLORS: i32 = 12;

/// Saturation of the first color variation
pub const VARIATION_SATURATION_FLOOR: f64 = 0.2;

/// Saturation span covered by the color variations
pub const VARIATION_SATURATION_SPAN: f64 = 0.8;

/// Default number of major ticks used by auto-scaling
pub const MAX_MAJOR_TICKS: u32 = 10;

/// Default number of minor ticks used by auto-scaling
pub const MAX_MINOR_TICKS: u32 = 10;

/// Upper bound for the minor tick count when snapping
pub const MAX_MINOR_TICK_COUNT: i32 = 10;

/// Major tick unit used when the caller passes a non-positive one
pub const DEFAULT_MAJOR_TICK_UNIT: f64 = 0.25;

/// Tolerance for the approximate float comparisons
pub const EPSILON: f64 = 1e-6;
