//! End-to-end checks of the scan → plot pipeline against independent references.
//!
//! Run with: `cargo test -p huewheel-core`

use huewheel_core::{
    Canvas, HueSat, MarkerStyle, Rgb, WheelParams, analyze, analyze_par, rgb_to_hsl,
    wheel_position,
};
use palette::{FromColor, Hsl as PaletteHsl, Srgb};

/// Truncated integers never sit more than one unit from the exact value.
const TOLERANCE: f32 = 1.0 + 1e-3;

/// Four-color RGBA test image with counts 6 red, 3 green, 2 blue, 1 white.
fn stripes_rgba() -> Vec<u8> {
    let mut pixels = Vec::new();
    for (rgba, n) in [
        ([255, 0, 0, 255], 6),
        ([0, 255, 0, 128], 3),
        ([0, 0, 255, 0], 2),
        ([255, 255, 255, 255], 1),
    ] {
        for _ in 0..n {
            pixels.extend_from_slice(&rgba);
        }
    }
    pixels
}

#[test]
fn test_rgb_to_hsl_agrees_with_palette() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(17) {
                let ours = rgb_to_hsl(Rgb::new(r, g, b));
                let reference: PaletteHsl =
                    PaletteHsl::from_color(Srgb::new(r, g, b).into_format::<f32>());

                let l = reference.lightness * 100.0;
                assert!((f32::from(ours.lightness) - l).abs() <= TOLERANCE, "{r},{g},{b}");

                if r == g && g == b {
                    assert_eq!((ours.hue, ours.saturation), (0, 0));
                    continue;
                }

                let s = reference.saturation * 100.0;
                assert!((f32::from(ours.saturation) - s).abs() <= TOLERANCE, "{r},{g},{b}");

                let h = reference.hue.into_positive_degrees();
                let dh = (f32::from(ours.hue) - h).abs();
                assert!(dh.min(360.0 - dh) <= TOLERANCE, "{r},{g},{b}: {} vs {h}", ours.hue);
            }
        }
    }
}

#[test]
fn test_threshold_selects_frequent_colors() {
    let pixels = stripes_rgba();
    let params = WheelParams {
        threshold: 3,
        ..WheelParams::default()
    };
    let analysis = analyze(&pixels, 4, &params).unwrap();
    assert_eq!(analysis.colors, vec![HueSat::new(0, 100), HueSat::new(120, 100)]);
    assert_eq!(analysis.frequencies.count(HueSat::new(240, 100)), 2);
    assert_eq!(analysis.frequencies.count(HueSat::new(0, 0)), 1);
}

#[test]
fn test_parallel_analysis_renders_identically() {
    let pixels = stripes_rgba().repeat(500);
    let params = WheelParams::default();

    let seq = analyze(&pixels, 4, &params).unwrap();
    let par = analyze_par(&pixels, 4, &params).unwrap();
    assert_eq!(seq.colors, par.colors);
    assert_eq!(seq.report(), par.report());

    let mut a = Canvas::new(params.size).unwrap();
    let mut b = Canvas::new(params.size).unwrap();
    seq.render_onto(&mut a, params.draw_as).unwrap();
    par.render_onto(&mut b, params.draw_as).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rendered_markers_land_on_wheel_positions() {
    let pixels = stripes_rgba();
    let params = WheelParams {
        size: 100,
        draw_as: MarkerStyle::Square,
        ..WheelParams::default()
    };
    let analysis = analyze(&pixels, 4, &params).unwrap();
    let mut canvas = Canvas::filled(params.size, Rgb::WHITE).unwrap();
    analysis.render_onto(&mut canvas, params.draw_as).unwrap();

    // Green at hue 120 sits upper-right of center (about (93, 25)), inside the canvas.
    let green = wheel_position(HueSat::new(120, 100), params.size);
    let center = canvas
        .pixel(green.x as u32, green.y as u32)
        .expect("green marker inside canvas");
    assert_eq!(center, Rgb::new(0, 255, 0));

    // White aggregates to (0, 0) and is drawn mid-gray at the center.
    assert_eq!(canvas.pixel(50, 50), Some(Rgb::new(127, 127, 127)));

    let report = analysis.report();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"samples\":12"));
}
