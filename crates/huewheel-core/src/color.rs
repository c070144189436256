//! RGB ↔ HSL conversion.
//!
//! Both directions truncate toward zero instead of rounding, so results are
//! biased slightly low. A full round trip drifts by at most one unit per
//! component.
//!
//! # Formula
//! ```text
//!   l = (max + min) / 2
//!   s = Δ / (1 − |2l − 1|)            (0 when Δ = 0)
//!   h = 60 × ((g − b)/Δ mod 6)         max = r
//!       60 × ((b − r)/Δ + 2)           max = g
//!       60 × ((r − g)/Δ + 4)           max = b
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{HueWheelError, Result};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Integer HSL triple: hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Drop lightness, keeping the aggregation key.
    pub const fn hue_sat(self) -> HueSat {
        HueSat {
            hue: self.hue,
            saturation: self.saturation,
        }
    }
}

/// A (hue, saturation) pair, the key colors are counted by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct HueSat {
    pub hue: u16,
    pub saturation: u8,
}

impl HueSat {
    pub const fn new(hue: u16, saturation: u8) -> Self {
        Self { hue, saturation }
    }
}

/// Convert an 8-bit RGB color to truncated integer HSL.
///
/// Achromatic inputs (`r == g == b`) get hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h, s)
    };

    Hsl {
        hue: (h as u16) % 360,
        saturation: ((s * 100.0) as u8).min(100),
        lightness: ((l * 100.0) as u8).min(100),
    }
}

/// Convert integer HSL back to 8-bit RGB, truncating each channel.
///
/// Hue 360 is accepted and behaves exactly like hue 0. Anything beyond
/// (hue > 360, saturation or lightness > 100) is rejected with
/// [`HueWheelError::InvalidInput`].
pub fn hsl_to_rgb(hsl: Hsl) -> Result<Rgb> {
    if hsl.hue > 360 {
        return Err(HueWheelError::input("hue", hsl.hue));
    }
    if hsl.saturation > 100 {
        return Err(HueWheelError::input("saturation", hsl.saturation));
    }
    if hsl.lightness > 100 {
        return Err(HueWheelError::input("lightness", hsl.lightness));
    }

    let h = f64::from(hsl.hue % 360);
    let s = f64::from(hsl.saturation) / 100.0;
    let l = f64::from(hsl.lightness) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hsl.hue % 360 {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Ok(Rgb {
        r: channel_to_u8(r + m),
        g: channel_to_u8(g + m),
        b: channel_to_u8(b + m),
    })
}

/// Scale a `[0, 1]` channel to `[0, 255]`, truncating.
fn channel_to_u8(v: f64) -> u8 {
    (255.0 * v).clamp(0.0, 255.0) as u8
}
