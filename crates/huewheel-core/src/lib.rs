//! Huewheel Core — color-distribution analysis on a hue/saturation wheel.
//!
//! This crate contains the RGB/HSL conversion, (hue, saturation) frequency
//! aggregation, polar wheel mapping, and canvas marker drawing. No file I/O
//! and no process-wide configuration; hosts feed it flat pixel buffers and
//! take the canvas back.

pub mod aggregate;
pub mod analysis;
pub mod canvas;
pub mod color;
pub mod error;
pub mod wheel;

// Re-exports for convenience.
pub use aggregate::{FrequencyMap, aggregate_colors};
pub use analysis::{
    AnalysisReport, ColorAnalysis, ColorEntry, WheelParams, analyze, analyze_par, plot_colors,
};
pub use canvas::{Canvas, MAX_CANVAS_SIZE, MarkerStyle};
pub use color::{HueSat, Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};
pub use error::{HueWheelError, Result};
pub use wheel::{WheelPoint, wheel_position};
