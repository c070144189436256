//! `huewheel` — plot the colours of an image on a hue/saturation wheel.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use huewheel_cli::{AppConfig, run};
use huewheel_core::{MAX_CANVAS_SIZE, MarkerStyle};
use tracing::Level;

/// Environment variable selecting the log level when no `-v`/`-q` is given.
const ENV_LOG: &str = "HUEWHEEL_LOG";

#[derive(Parser)]
#[command(name = "huewheel")]
#[command(version, about = "Display colours used in an image on a colour wheel", long_about = None)]
struct Cli {
    /// Image to analyze
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image (format from extension)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Min. number of occurrences per colour
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    threshold: Option<u32>,

    /// Marker shape: pixel, cross or square
    #[arg(long, value_name = "STYLE")]
    draw_as: Option<MarkerStyle>,

    /// Wheel size in pixels (at most 8192)
    #[arg(
        long,
        value_name = "PX",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CANVAS_SIZE))
    )]
    size: Option<u32>,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write a JSON report with exact counts
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Scan pixels on all cores
    #[arg(long)]
    parallel: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => std::env::var(ENV_LOG)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Level::INFO),
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    fn into_config(self) -> Result<AppConfig, huewheel_cli::CliError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_json_file(path)?,
            None => AppConfig::default(),
        };
        config.apply_process_env()?;

        config.input = self.input;
        if let Some(out) = self.out {
            config.output = out;
        }
        if let Some(threshold) = self.threshold {
            config.params.threshold = threshold;
        }
        if let Some(draw_as) = self.draw_as {
            config.params.draw_as = draw_as;
        }
        if let Some(size) = self.size {
            config.params.size = size;
        }
        if self.report.is_some() {
            config.report = self.report;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let result = cli.into_config().and_then(|config| run(&config));
    match result {
        Ok(summary) => {
            tracing::info!(
                "{} samples, {} distinct colours, {} plotted",
                summary.samples,
                summary.distinct,
                summary.plotted
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
