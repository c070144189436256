//! Analysis pipeline: scan → filter → project → stamp.
//!
//! `WheelParams` is the single set of user-facing knobs. The host decides
//! where pixels come from and where the canvas goes; this module only wires
//! the core stages together.

use serde::{Deserialize, Serialize};

use crate::aggregate::FrequencyMap;
use crate::canvas::{Canvas, MAX_CANVAS_SIZE, MarkerStyle};
use crate::color::{HueSat, Hsl, Rgb, hsl_to_rgb};
use crate::error::{HueWheelError, Result};
use crate::wheel::wheel_position;

/// Default minimum occurrence count.
const DEFAULT_THRESHOLD: u32 = 1;
/// Default canvas edge length in pixels.
const DEFAULT_SIZE: u32 = 200;
/// Lightness used for marker colors; aggregation discards the real one.
const DISPLAY_LIGHTNESS: u8 = 50;

/// User-configurable analysis parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelParams {
    /// Minimum occurrences for a (hue, saturation) pair to be plotted. At least 1.
    pub threshold: u32,
    /// Marker shape.
    pub draw_as: MarkerStyle,
    /// Output canvas edge length, `1..=MAX_CANVAS_SIZE`.
    pub size: u32,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            draw_as: MarkerStyle::default(),
            size: DEFAULT_SIZE,
        }
    }
}

impl WheelParams {
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(HueWheelError::input("threshold", self.threshold));
        }
        if self.size == 0 || self.size > MAX_CANVAS_SIZE {
            return Err(HueWheelError::InvalidCanvasSize(self.size));
        }
        Ok(())
    }
}

/// Outcome of one scan: the full frequency map and the keys that passed the threshold.
#[derive(Debug, Clone)]
pub struct ColorAnalysis {
    pub frequencies: FrequencyMap,
    pub colors: Vec<HueSat>,
    pub threshold: u32,
}

impl ColorAnalysis {
    /// Filter an existing frequency map.
    pub fn from_frequencies(frequencies: FrequencyMap, threshold: u32) -> Result<Self> {
        let colors = frequencies.filter(threshold)?;
        tracing::debug!(
            distinct = frequencies.len(),
            surviving = colors.len(),
            threshold,
            "filtered color map"
        );
        Ok(Self {
            frequencies,
            colors,
            threshold,
        })
    }

    /// Plot the surviving colors onto `canvas`.
    pub fn render_onto(&self, canvas: &mut Canvas, style: MarkerStyle) -> Result<()> {
        plot_colors(canvas, &self.colors, style)
    }

    /// Serializable summary with exact counts.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            samples: self.frequencies.total(),
            distinct: self.frequencies.len(),
            threshold: self.threshold,
            colors: self
                .colors
                .iter()
                .map(|&key| ColorEntry {
                    hue: key.hue,
                    saturation: key.saturation,
                    count: self.frequencies.count(key),
                })
                .collect(),
        }
    }
}

/// JSON-friendly analysis summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub samples: u64,
    pub distinct: usize,
    pub threshold: u32,
    pub colors: Vec<ColorEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hue: u16,
    pub saturation: u8,
    pub count: u64,
}

/// Scan `pixels` and filter by `params.threshold`.
pub fn analyze(pixels: &[u8], pixel_size: usize, params: &WheelParams) -> Result<ColorAnalysis> {
    params.validate()?;
    tracing::debug!(bytes = pixels.len(), pixel_size, "scanning pixels");
    let frequencies = FrequencyMap::from_pixels(pixels, pixel_size)?;
    ColorAnalysis::from_frequencies(frequencies, params.threshold)
}

/// Like [`analyze`], but the scan is sharded across the rayon pool.
pub fn analyze_par(pixels: &[u8], pixel_size: usize, params: &WheelParams) -> Result<ColorAnalysis> {
    params.validate()?;
    tracing::debug!(bytes = pixels.len(), pixel_size, "scanning pixels in parallel");
    let frequencies = FrequencyMap::from_pixels_par(pixels, pixel_size)?;
    ColorAnalysis::from_frequencies(frequencies, params.threshold)
}

/// Marker color for a (hue, saturation) pair.
pub fn display_color(color: HueSat) -> Result<Rgb> {
    hsl_to_rgb(Hsl::new(color.hue, color.saturation, DISPLAY_LIGHTNESS))
}

/// Stamp one marker per color, in list order. Where markers overlap the
/// later color wins.
pub fn plot_colors(canvas: &mut Canvas, colors: &[HueSat], style: MarkerStyle) -> Result<()> {
    for &color in colors {
        let point = wheel_position(color, canvas.size());
        canvas.draw_marker(point.x, point.y, display_color(color)?, style);
    }
    tracing::debug!(markers = colors.len(), %style, "plotted colors");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = WheelParams::default();
        assert_eq!(params.threshold, 1);
        assert_eq!(params.draw_as, MarkerStyle::Cross);
        assert_eq!(params.size, 200);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_from_partial_json() {
        let params: WheelParams = serde_json::from_str(r#"{"draw_as": "square"}"#).unwrap();
        assert_eq!(params.draw_as, MarkerStyle::Square);
        assert_eq!(params.threshold, 1);
        assert_eq!(params.size, 200);
    }

    #[test]
    fn test_params_validation() {
        let zero_threshold = WheelParams {
            threshold: 0,
            ..WheelParams::default()
        };
        assert!(zero_threshold.validate().is_err());
        let zero_size = WheelParams {
            size: 0,
            ..WheelParams::default()
        };
        assert_eq!(zero_size.validate(), Err(HueWheelError::InvalidCanvasSize(0)));
        let huge = WheelParams {
            size: u32::MAX,
            ..WheelParams::default()
        };
        assert_eq!(huge.validate(), Err(HueWheelError::InvalidCanvasSize(u32::MAX)));
        let largest = WheelParams {
            size: MAX_CANVAS_SIZE,
            ..WheelParams::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_display_color_is_mid_lightness() {
        assert_eq!(display_color(HueSat::new(0, 100)).unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(display_color(HueSat::new(0, 0)).unwrap(), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_plot_single_red() {
        let mut canvas = Canvas::new(20).unwrap();
        // Red at full saturation: hue 0 points to y = size, clamped to the last row.
        plot_colors(&mut canvas, &[HueSat::new(0, 100)], MarkerStyle::Pixel).unwrap();
        assert_eq!(canvas.pixel(10, 19), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_overlapping_markers_last_wins() {
        // On a 10px wheel the gray center cross covers (6, 5), where the
        // pale hue-90 marker is centered.
        let gray = HueSat::new(0, 0);
        let pale = HueSat::new(90, 20);
        assert_eq!(wheel_position(pale, 10), crate::wheel::WheelPoint::new(6, 5));

        let mut canvas = Canvas::new(10).unwrap();
        plot_colors(&mut canvas, &[gray, pale], MarkerStyle::Cross).unwrap();
        assert_eq!(canvas.pixel(6, 5), Some(display_color(pale).unwrap()));
        assert_eq!(canvas.pixel(5, 5), Some(display_color(pale).unwrap()));

        let mut reversed = Canvas::new(10).unwrap();
        plot_colors(&mut reversed, &[pale, gray], MarkerStyle::Cross).unwrap();
        assert_eq!(reversed.pixel(6, 5), Some(display_color(gray).unwrap()));
        assert_ne!(display_color(gray).unwrap(), display_color(pale).unwrap());
    }

    #[test]
    fn test_report_counts() {
        let pixels = [255, 255, 255, 255, 255, 255, 255, 255, 255, 0, 0, 255];
        let params = WheelParams {
            threshold: 2,
            ..WheelParams::default()
        };
        let analysis = analyze(&pixels, 3, &params).unwrap();
        let report = analysis.report();
        assert_eq!(report.samples, 4);
        assert_eq!(report.distinct, 2);
        assert_eq!(
            report.colors,
            vec![ColorEntry {
                hue: 0,
                saturation: 0,
                count: 3
            }]
        );
    }
}
