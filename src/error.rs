use thiserror::Error;

/// Why a hex color string was rejected by [`Color::from_str`](std::str::FromStr).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}
