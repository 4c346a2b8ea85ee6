//! Time-stretching for clipwarp sample buffers.
//!
//! Changes duration while keeping local waveform shape, using waveform
//! similarity overlap-add (WSOLA): Hann-windowed input segments are added to
//! the output at a stretched hop, each aligned by a local cross-correlation
//! search.
//!
//! # Example
//!
//! ```
//! use clipwarp_core::SampleBuffer;
//! use clipwarp_stretch::{stretch_buffer, time_stretch, StretchConfig};
//!
//! let mono: Vec<f32> = (0..8000).map(|i| (i as f32 * 0.02).sin()).collect();
//! assert_eq!(time_stretch(&mono, 1.5).len(), 12000);
//!
//! let buffer = SampleBuffer::new(44100, vec![mono.clone(), mono]).unwrap();
//! let slower = stretch_buffer(&buffer, 2.0, &StretchConfig::new().window_size(1024));
//! assert_eq!(slower.frame_count(), 16000);
//! ```
//!
//! # Features
//!
//! - `parallel`: stretch the channels of a buffer on the rayon thread pool

mod multichannel;
mod types;
mod wsola;

pub use multichannel::{stretch_buffer, stretch_range};
pub use types::{
    is_passthrough, target_length, StretchConfig, StretchParams, CORRELATION_STRIDE,
    IDENTITY_TOLERANCE,
};
pub use wsola::{hann_window, time_stretch, WsolaStretcher};
