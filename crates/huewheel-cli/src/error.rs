use std::path::PathBuf;

use huewheel_core::HueWheelError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] HueWheelError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid {var}: {reason}")]
    Env { var: &'static str, reason: String },
}
