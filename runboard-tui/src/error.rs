use std::io;

use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to load model runs: {0}")]
    Runs(#[from] runboard_lib::Error),
}
