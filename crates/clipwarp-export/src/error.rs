//! Error types for clipwarp-export

use std::io;
use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing the encoded stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Audio does not fit the 32-bit size fields of a RIFF container
    #[error("Audio too large for WAV: {data_bytes} data bytes")]
    TooLarge { data_bytes: u64 },

    /// Invalid audio data
    #[error("Invalid audio data: {0}")]
    InvalidData(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
