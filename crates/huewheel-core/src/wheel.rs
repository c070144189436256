//! Polar hue/saturation → canvas coordinate mapping.
//!
//! Hue is the angle, saturation the radius. Saturation 0 sits at the wheel
//! center and saturation 100 on its rim (radius `size / 2`).
//!
//! ```text
//!   x = s · sin(h) · size / 200 + size / 2
//!   y = s · cos(h) · size / 200 + size / 2
//! ```
//!
//! No bounds checking happens here; points on the rim land at `size`, one
//! past the last pixel, and are clamped by the canvas when drawn.

use serde::{Deserialize, Serialize};

use crate::color::HueSat;

/// Integer canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WheelPoint {
    pub x: i32,
    pub y: i32,
}

impl WheelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Project `(hue, saturation)` onto a wheel inscribed in a `size` × `size` canvas.
pub fn wheel_position(color: HueSat, size: u32) -> WheelPoint {
    let angle = f64::from(color.hue).to_radians();
    let radius = f64::from(color.saturation) * f64::from(size) / 200.0;
    let center = f64::from(size) / 2.0;

    WheelPoint {
        x: (radius * angle.sin() + center) as i32,
        y: (radius * angle.cos() + center) as i32,
    }
}
