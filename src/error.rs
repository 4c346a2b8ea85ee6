//! Centralized error type for the clipwarp umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] clipwarp_core::Error),

    #[error("Export: {0}")]
    Export(#[from] clipwarp_export::ExportError),

    /// Region bounds that are non-finite or do not satisfy `end > start`
    #[error("Invalid region range: start {start}s, end {end}s")]
    InvalidRegionRange { start: f64, end: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
