//! Huewheel host layer — reads an image, draws its colour wheel, writes it out.
//!
//! The core never touches files; this crate supplies pixels from disk,
//! prepares the wheel background, and hands the finished canvas to an encoder.

pub mod background;
pub mod config;
pub mod error;
pub mod image_loader;
pub mod output;

use huewheel_core::analysis::{analyze, analyze_par};

pub use config::AppConfig;
pub use error::CliError;

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: u64,
    pub distinct: usize,
    pub plotted: usize,
}

/// Analyze `config.input` and write the wheel (and report, if requested).
pub fn run(config: &AppConfig) -> Result<RunSummary, CliError> {
    let params = &config.params;
    params.validate()?;

    let source = image_loader::load_pixels(&config.input)?;
    let analysis = if config.parallel {
        analyze_par(&source.data, source.pixel_size, params)?
    } else {
        analyze(&source.data, source.pixel_size, params)?
    };

    let mut canvas = background::prepare_canvas(params.size)?;
    analysis.render_onto(&mut canvas, params.draw_as)?;
    output::save_canvas(canvas, &config.output)?;

    let report = analysis.report();
    if let Some(path) = &config.report {
        output::write_report(&report, path)?;
    }

    Ok(RunSummary {
        samples: report.samples,
        distinct: report.distinct,
        plotted: report.colors.len(),
    })
}
