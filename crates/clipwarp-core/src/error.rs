//! Error types for clipwarp-core.

use thiserror::Error;

/// Error type for clipwarp-core operations.
///
/// Only structural contract violations surface here. Out-of-range times,
/// tempos and channel mismatches are clamped by the operations themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Sample buffer must have at least one channel")]
    NoChannels,

    #[error("Invalid sample rate: {0}. Must be greater than zero")]
    InvalidSampleRate(u32),

    #[error("Channel {channel} has {actual} frames, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
