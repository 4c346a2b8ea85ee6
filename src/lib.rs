//! # clipwarp - Audio region editing and time-stretch engine
//!
//! Umbrella crate built from modular subsystems.
//!
//! ## Architecture
//!
//! clipwarp coordinates:
//! - **clipwarp-core** - Sample buffers, musical grid, slicing and concatenation, gain/pan helpers
//! - **clipwarp-stretch** - WSOLA time-stretching
//! - **clipwarp-automation** - Sorted automation curves
//! - **clipwarp-export** - RIFF/WAVE encoding
//!
//! and adds the [`Region`] model plus region realization on top.
//!
//! ## Quick Start
//!
//! ```
//! use clipwarp::prelude::*;
//!
//! let tone: Vec<f32> = (0..44100).map(|i| (i as f32 * 0.06).sin()).collect();
//! let track = SampleBuffer::new(44100, vec![tone.clone(), tone])?;
//!
//! let mut region = Region::new("chorus", 0.25, 0.75)?;
//! region.set_gain_db(-3.0);
//! region.set_fade_in(0.05);
//! region.set_stretch_rate(1.5);
//!
//! let audio = realize_region(&region, &track, &RealizeConfig::default());
//! assert_eq!(audio.frame_count(), 33075);
//!
//! let wav = encode_wav(&audio, &WavConfig::pcm16())?;
//! assert_eq!(wav.mime_type(), "audio/wav");
//! # Ok::<(), clipwarp::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Stretch the channels of a buffer on the rayon thread pool

/// Re-export of clipwarp-core for direct access
pub use clipwarp_core as core;

/// Time-stretching
pub use clipwarp_stretch as stretch;

/// Automation curves
pub use clipwarp_automation as automation;

/// WAV encoding
pub use clipwarp_export as export;

mod error;
mod realize;
mod region;

pub use error::{Error, Result};
pub use realize::{bounce_regions, export_region, realize_region, RealizeConfig};
pub use region::Region;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{bounce_regions, export_region, realize_region, RealizeConfig, Region};

    // Buffers and grid
    pub use crate::core::{
        concat, slice, snap_to_grid, GridResolution, SampleBuffer,
    };

    // Stretch
    pub use crate::stretch::{stretch_buffer, time_stretch, StretchConfig};

    // Automation
    pub use crate::automation::{AutomationCurve, AutomationPoint};

    // Export
    pub use crate::export::{encode_wav, BitDepth, EncodedAudio, WavConfig};
}
