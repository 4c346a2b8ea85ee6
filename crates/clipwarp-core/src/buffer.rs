//! Owned multi-channel sample buffer.

use crate::{Error, Result};

/// Sample rate used when an operation has to invent a buffer from nothing.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Planar multi-channel audio.
///
/// Every channel holds the same number of frames; this is checked once at
/// construction, after which all operations can rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Build a buffer from per-channel sample vectors.
    ///
    /// Fails when there are no channels, the sample rate is zero, or the
    /// channels disagree on length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        let expected = channels.first().ok_or(Error::NoChannels)?.len();
        for (channel, data) in channels.iter().enumerate().skip(1) {
            if data.len() != expected {
                return Err(Error::ChannelLengthMismatch {
                    channel,
                    expected,
                    actual: data.len(),
                });
            }
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Single-channel buffer.
    pub fn from_mono(sample_rate: u32, samples: Vec<f32>) -> Result<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Buffer of `frames` zeroed frames. A zero channel count is raised to one
    /// and a zero sample rate falls back to [`DEFAULT_SAMPLE_RATE`].
    pub fn silent(channel_count: usize, sample_rate: u32, frames: usize) -> Self {
        let sample_rate = if sample_rate == 0 {
            DEFAULT_SAMPLE_RATE
        } else {
            sample_rate
        };
        Self {
            sample_rate,
            channels: vec![vec![0.0; frames]; channel_count.max(1)],
        }
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Samples of one channel, or `None` past the last channel.
    #[inline]
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(index).map(Vec::as_mut_slice)
    }

    pub fn channels(&self) -> impl Iterator<Item = &[f32]> {
        self.channels.iter().map(Vec::as_slice)
    }

    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.channels.iter_mut().map(Vec::as_mut_slice)
    }

    /// Consume the buffer, returning its channel vectors.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Frame-interleaved copy `[c0, c1, .., c0, c1, ..]`.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let frames = self.frame_count();
        let channel_count = self.channel_count();
        let mut out = Vec::with_capacity(frames * channel_count);
        for frame in 0..frames {
            for channel in &self.channels {
                out.push(channel[frame]);
            }
        }
        out
    }

    /// Absolute peak across all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|c| c.iter())
            .fold(0.0_f32, |peak, s| peak.max(s.abs()))
    }

    /// Multiply every sample by `gain`.
    pub fn apply_gain(&mut self, gain: f32) {
        for channel in &mut self.channels {
            for sample in channel.iter_mut() {
                *sample *= gain;
            }
        }
    }

    /// Resize every channel in place, keeping the allocation. Used by
    /// [`crate::ops::slice_into`] to recycle a destination buffer.
    pub(crate) fn reshape(&mut self, sample_rate: u32, channel_count: usize, frames: usize) {
        self.sample_rate = sample_rate;
        self.channels.resize_with(channel_count.max(1), Vec::new);
        for channel in &mut self.channels {
            channel.clear();
            channel.resize(frames, 0.0);
        }
    }
}
