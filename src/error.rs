//! Errors of the fallible surfaces: IO, cancellation and slot lookups.
//!
//! The graph algorithms themselves are total: "no path" or "no trail" are regular
//! results carrying a message, not errors.

use crate::model::Color;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to process graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unknown file format: {0}")]
    UnknownFormat(String),
    #[error("search cancelled")]
    Cancelled,
    #[error("slot {slot} lies outside a week grid of {slots} slots")]
    SlotOutOfRange { slot: Color, slots: Color },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
