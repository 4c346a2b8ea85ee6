//! # clipwarp-export
//!
//! RIFF/WAVE encoding for clipwarp sample buffers.
//!
//! The encoder always writes the canonical 44-byte header followed by
//! interleaved little-endian samples, either into memory ([`encode_wav`]) or
//! into any [`std::io::Write`] sink ([`write_wav`]).
//!
//! ```
//! use clipwarp_core::SampleBuffer;
//! use clipwarp_export::{encode_wav, WavConfig};
//!
//! let buffer = SampleBuffer::from_mono(44100, vec![0.0, 0.5, -0.5]).unwrap();
//! let wav = encode_wav(&buffer, &WavConfig::pcm16()).unwrap();
//!
//! assert_eq!(wav.mime_type(), "audio/wav");
//! assert_eq!(wav.len(), 44 + 3 * 2);
//! ```

pub mod error;
mod options;

pub mod format;

pub use error::{ExportError, Result};
pub use format::wav::{
    encode_wav, write_wav, EncodedAudio, WavConfig, WAV_HEADER_LEN, WAV_MIME_TYPE,
};
pub use options::BitDepth;
