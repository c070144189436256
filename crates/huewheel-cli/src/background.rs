//! Wheel background: white disc on black.

use huewheel_core::{Canvas, HueWheelError, Rgb};

use crate::error::CliError;

/// Allocate a `size` × `size` canvas, fill it white, and paint everything
/// outside the inscribed circle black.
///
/// A pixel belongs to the disc when its center lies within `size / 2` of the
/// canvas center.
pub fn prepare_canvas(size: u32) -> Result<Canvas, CliError> {
    tracing::info!("Preparing output image ({size}x{size})");
    let mut canvas = Canvas::filled(size, Rgb::WHITE)?;
    let edge = i32::try_from(size).map_err(|_| HueWheelError::InvalidCanvasSize(size))?;

    let radius = f64::from(size) / 2.0;
    for y in 0..edge {
        for x in 0..edge {
            let dx = f64::from(x) + 0.5 - radius;
            let dy = f64::from(y) + 0.5 - radius;
            if dx * dx + dy * dy > radius * radius {
                canvas.draw_pixel(x, y, Rgb::BLACK);
            }
        }
    }
    Ok(canvas)
}
