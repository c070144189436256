//! Error types for the huewheel core.
//!
//! Out-of-domain values are rejected, never clamped. Drawing coordinates are
//! the one exception and are clamped by [`crate::canvas::Canvas`] instead of
//! being reported.

/// Result type alias for huewheel core operations.
pub type Result<T> = std::result::Result<T, HueWheelError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HueWheelError {
    /// A numeric argument outside its documented domain.
    #[error("invalid input: {what} = {value}")]
    InvalidInput { what: &'static str, value: u32 },
    /// Pixel stride other than 3 (RGB) or 4 (RGBA).
    #[error("invalid pixel size {0}, expected 3 or 4 channels")]
    InvalidPixelSize(usize),
    /// Buffer length does not fit its declared layout: not a multiple of the
    /// pixel stride, or not exactly one canvas worth of bytes.
    #[error("invalid buffer: {len} bytes do not fit a {stride}-byte layout")]
    InvalidBuffer { len: usize, stride: usize },
    /// Canvas with no pixels.
    #[error("invalid canvas size {0}")]
    InvalidCanvasSize(u32),
}

impl HueWheelError {
    pub(crate) fn input(what: &'static str, value: impl Into<u32>) -> Self {
        Self::InvalidInput {
            what,
            value: value.into(),
        }
    }
}
