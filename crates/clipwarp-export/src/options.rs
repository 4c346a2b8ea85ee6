//! Encoding options.

use serde::{Deserialize, Serialize};

/// Sample encoding of the `data` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitDepth {
    /// 16-bit signed integer PCM
    #[default]
    Int16,
    /// 24-bit signed integer PCM, packed little-endian
    Int24,
    /// 32-bit IEEE float
    Float32,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Float32 => 32,
        }
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits() / 8
    }

    /// `fmt ` chunk format tag: 1 for integer PCM, 3 for IEEE float.
    pub fn format_tag(&self) -> u16 {
        match self {
            BitDepth::Int16 | BitDepth::Int24 => 1,
            BitDepth::Float32 => 3,
        }
    }
}
