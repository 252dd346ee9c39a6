//! Error types

use thiserror::Error;

/// Errors raised at the edges of the dashboard core.
///
/// The pipeline itself never fails. These come from converting outside
/// values into core types and from loading rows.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid page size {0}, expected one of 5, 10, 25 or 50")]
    InvalidPageSize(usize),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
