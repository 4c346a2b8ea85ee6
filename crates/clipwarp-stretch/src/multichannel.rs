//! Multi-channel wrappers around [`WsolaStretcher`].
//!
//! Channels are stretched independently with identical parameters, so they
//! stay sample-aligned. With the `parallel` feature each channel runs on the
//! rayon pool.

use clipwarp_core::{slice, SampleBuffer};

use crate::types::{is_passthrough, target_length, StretchConfig};
use crate::wsola::WsolaStretcher;

/// Stretch every channel of `buffer` by `factor`.
///
/// The result has `round(frame_count * factor)` frames; passthrough factors
/// return a clone.
pub fn stretch_buffer(buffer: &SampleBuffer, factor: f64, config: &StretchConfig) -> SampleBuffer {
    if is_passthrough(factor) {
        return buffer.clone();
    }

    let stretcher = WsolaStretcher::new(factor, config);
    let target = target_length(buffer.frame_count(), factor);
    let stretched = stretch_channels(&stretcher, buffer);

    let mut out = SampleBuffer::silent(buffer.channel_count(), buffer.sample_rate(), target);
    for (dst, src) in out.channels_mut().zip(&stretched) {
        let len = dst.len().min(src.len());
        dst[..len].copy_from_slice(&src[..len]);
    }
    out
}

/// Extract `[start_sec, end_sec)` from `buffer` and stretch it.
pub fn stretch_range(
    buffer: &SampleBuffer,
    start_sec: f64,
    end_sec: f64,
    factor: f64,
    config: &StretchConfig,
) -> SampleBuffer {
    let segment = slice(buffer, start_sec, end_sec);
    stretch_buffer(&segment, factor, config)
}

#[cfg(feature = "parallel")]
fn stretch_channels(stretcher: &WsolaStretcher, buffer: &SampleBuffer) -> Vec<Vec<f32>> {
    use rayon::prelude::*;

    let channels: Vec<&[f32]> = buffer.channels().collect();
    channels
        .par_iter()
        .map(|channel| stretcher.process(channel))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn stretch_channels(stretcher: &WsolaStretcher, buffer: &SampleBuffer) -> Vec<Vec<f32>> {
    buffer
        .channels()
        .map(|channel| stretcher.process(channel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_sine(frames: usize) -> SampleBuffer {
        let left = (0..frames)
            .map(|i| (i as f32 * 0.05).sin() * 0.5)
            .collect();
        let right = (0..frames)
            .map(|i| (i as f32 * 0.031).cos() * 0.25)
            .collect();
        SampleBuffer::new(44100, vec![left, right]).unwrap()
    }

    #[test]
    fn test_stretch_buffer_length_and_format() {
        let buffer = stereo_sine(12_345);
        for factor in [0.5, 0.75, 1.5, 2.0] {
            let out = stretch_buffer(&buffer, factor, &StretchConfig::default());
            assert_eq!(out.channel_count(), 2);
            assert_eq!(out.sample_rate(), 44100);
            assert_eq!(out.frame_count(), (12_345.0 * factor).round() as usize);
        }
    }

    #[test]
    fn test_stretch_buffer_matches_mono_per_channel() {
        let buffer = stereo_sine(9000);
        let config = StretchConfig::default();
        let out = stretch_buffer(&buffer, 1.5, &config);
        let stretcher = WsolaStretcher::new(1.5, &config);
        for (index, channel) in buffer.channels().enumerate() {
            assert_eq!(out.channel(index), Some(stretcher.process(channel).as_slice()));
        }
    }

    #[test]
    fn test_stretch_buffer_passthrough() {
        let buffer = stereo_sine(1000);
        assert_eq!(stretch_buffer(&buffer, 1.0, &StretchConfig::default()), buffer);
        assert_eq!(stretch_buffer(&buffer, -3.0, &StretchConfig::default()), buffer);
    }

    #[test]
    fn test_stretch_range() {
        let buffer = stereo_sine(44100);
        let out = stretch_range(&buffer, 0.25, 0.75, 2.0, &StretchConfig::default());
        assert_eq!(out.frame_count(), 44100);

        let same = stretch_range(&buffer, 0.25, 0.75, 1.0, &StretchConfig::default());
        assert_eq!(same, slice(&buffer, 0.25, 0.75));
    }
}
