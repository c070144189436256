//! Hand-off of results: PNG wheel and JSON report.

use std::path::Path;

use huewheel_core::{AnalysisReport, Canvas};
use image::RgbImage;

use crate::error::CliError;

/// Encode the canvas as an image, format picked from the file extension.
pub fn save_canvas(canvas: Canvas, path: &Path) -> Result<(), CliError> {
    let size = canvas.size();
    let img = RgbImage::from_raw(size, size, canvas.into_raw())
        .ok_or_else(|| std::io::Error::other("canvas buffer does not match its size"))?;
    img.save(path)?;
    tracing::info!("Wrote wheel to {}", path.display());
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    tracing::info!("Wrote report to {}", path.display());
    Ok(())
}
