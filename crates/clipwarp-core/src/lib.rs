//! Sample buffers, musical grid and buffer operations for clipwarp.
//!
//! # Primary API
//!
//! - [`SampleBuffer`]: owned planar audio, validated at construction
//! - [`slice`] / [`concat`]: clamping buffer edits that never fail
//! - [`snap_to_grid`], [`grid_step_seconds`]: tempo-aware grid quantization
//! - [`decibels_to_linear_gain`], [`equal_power_pan_gains`]: level helpers
//!
//! # Example
//!
//! ```
//! use clipwarp_core::{concat, slice, snap_to_grid, GridResolution, SampleBuffer};
//!
//! let buffer = SampleBuffer::from_mono(44100, vec![0.0; 44100]).unwrap();
//! let start = snap_to_grid(0.26, 120.0, GridResolution::Eighth);
//! let head = slice(&buffer, 0.0, start);
//! let tail = slice(&buffer, start, 1.0);
//! assert_eq!(concat([&head, &tail]).frame_count(), 44100);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod buffer;
pub use buffer::{SampleBuffer, DEFAULT_SAMPLE_RATE};

pub mod grid;
pub use grid::{
    bar_duration_seconds, beats_to_seconds, grid_step_seconds, seconds_to_beats, snap_to_grid,
    GridResolution, ParseGridResolutionError, FALLBACK_BPM,
};

pub mod level;
pub use level::{clamp, decibels_to_linear_gain, equal_power_pan_gains, linear_gain_to_decibels};

pub mod ops;
pub use ops::{concat, seconds_to_frame, slice, slice_into};
