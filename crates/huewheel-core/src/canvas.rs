//! Square RGB8 output canvas with clamped pixel writes and marker stamping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{HueWheelError, Result};

/// Bytes per canvas pixel.
const CHANNELS: usize = 3;

/// Largest accepted canvas edge length. Keeps the buffer near 200 MB and every
/// coordinate representable as `i32`.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Axis-adjacent offsets added by [`MarkerStyle::Cross`].
static CROSS_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets added on top of the cross by [`MarkerStyle::Square`].
static DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Shape stamped at each plotted color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// Center pixel only.
    Pixel,
    /// Center plus its four axis neighbors.
    #[default]
    Cross,
    /// Full 3×3 block.
    Square,
}

impl MarkerStyle {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pixel => "pixel",
            Self::Cross => "cross",
            Self::Square => "square",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Pixel, Self::Cross, Self::Square]
    }

    /// Offsets from the center that make up this marker, center first.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> {
        let extra: &[(i32, i32)] = match self {
            Self::Pixel => &[],
            Self::Cross | Self::Square => &CROSS_OFFSETS,
        };
        let diagonals: &[(i32, i32)] = match self {
            Self::Square => &DIAGONAL_OFFSETS,
            _ => &[],
        };
        std::iter::once((0, 0))
            .chain(extra.iter().copied())
            .chain(diagonals.iter().copied())
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MarkerStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown marker style '{s}', expected pixel, cross or square"))
    }
}

/// Square RGB canvas, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Black `size` × `size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        Self::filled(size, Rgb::BLACK)
    }

    /// Canvas with every pixel set to `color`.
    pub fn filled(size: u32, color: Rgb) -> Result<Self> {
        let pixels = Self::byte_len(size)? / CHANNELS;
        let data = color.to_array().repeat(pixels);
        Ok(Self { size, data })
    }

    /// Wrap an existing buffer, which must hold exactly `size² × 3` bytes.
    pub fn from_raw(size: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(size)?;
        if data.len() != expected {
            return Err(HueWheelError::InvalidBuffer {
                len: data.len(),
                stride: expected,
            });
        }
        Ok(Self { size, data })
    }

    /// Buffer length for a `size` × `size` canvas. Rejects 0 and anything
    /// above [`MAX_CANVAS_SIZE`].
    pub fn byte_len(size: u32) -> Result<usize> {
        if size == 0 || size > MAX_CANVAS_SIZE {
            return Err(HueWheelError::InvalidCanvasSize(size));
        }
        let edge = size as usize;
        edge
            .checked_mul(edge)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(HueWheelError::InvalidCanvasSize(size))
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Hand the buffer off, e.g. to an image encoder.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let offset = self.offset(x, y);
        Some(Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (self.size as usize * y as usize + x as usize) * CHANNELS
    }

    fn clamp_coord(&self, v: i32) -> u32 {
        let max = i64::from(self.size) - 1;
        i64::from(v).clamp(0, max) as u32
    }

    /// Write one pixel. `x` and `y` are clamped independently into the
    /// canvas, so off-canvas writes land on the nearest edge pixel.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let offset = self.offset(self.clamp_coord(x), self.clamp_coord(y));
        self.data[offset..offset + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Stamp a marker centered on `(x, y)`. Every pixel of the marker is
    /// clamped on its own.
    pub fn draw_marker(&mut self, x: i32, y: i32, color: Rgb, style: MarkerStyle) {
        for (dx, dy) in style.offsets() {
            self.draw_pixel(x.saturating_add(dx), y.saturating_add(dy), color);
        }
    }
}
