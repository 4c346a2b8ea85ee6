//! Region realization: turning a [`Region`] plus its track buffer into audio.
//!
//! The chain is slice → stretch → static gain and pan → fades → automation.
//! Every stage is a linear transform over a buffer the chain owns, so the
//! track buffer is only ever read.

use clipwarp_core::{
    concat, decibels_to_linear_gain, equal_power_pan_gains, slice, SampleBuffer,
};
use clipwarp_export::{encode_wav, EncodedAudio, WavConfig};
use clipwarp_stretch::{is_passthrough, stretch_buffer, StretchConfig};

use crate::error::Result;
use crate::region::Region;

/// Realization settings shared by every region of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RealizeConfig {
    /// WSOLA geometry used for stretched regions
    pub stretch: StretchConfig,
}

impl RealizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stretch(mut self, stretch: StretchConfig) -> Self {
        self.stretch = stretch;
        self
    }
}

/// Materialize `region` against `track`.
///
/// Pan uses the normalized equal-power law of [`equal_power_pan_gains`] on
/// channels 0 and 1; mono results are not panned. Fades are linear and each
/// is limited to half the realized length. Automation is evaluated at the
/// realized output time of each frame and multiplies the static gain.
pub fn realize_region(region: &Region, track: &SampleBuffer, config: &RealizeConfig) -> SampleBuffer {
    let segment = slice(track, region.start(), region.end());
    let mut out = if is_passthrough(region.stretch_rate()) {
        segment
    } else {
        stretch_buffer(&segment, region.stretch_rate(), &config.stretch)
    };

    apply_gain_and_pan(&mut out, region.gain_db(), region.pan());

    if let Some(gains) = envelope(region, out.frame_count(), out.sample_rate()) {
        for channel in out.channels_mut() {
            for (sample, gain) in channel.iter_mut().zip(&gains) {
                *sample *= gain;
            }
        }
    }

    tracing::debug!(
        id = region.id(),
        start = region.start(),
        end = region.end(),
        stretch_rate = region.stretch_rate(),
        frames = out.frame_count(),
        channels = out.channel_count(),
        "realized region"
    );
    out
}

/// Realize `regions` in start order and join them end to end.
///
/// Gaps between regions are not preserved; the result is the regions'
/// audio back to back.
pub fn bounce_regions(regions: &[Region], track: &SampleBuffer, config: &RealizeConfig) -> SampleBuffer {
    let mut ordered: Vec<&Region> = regions.iter().collect();
    ordered.sort_by(|a, b| a.start().total_cmp(&b.start()));

    let realized: Vec<SampleBuffer> = ordered
        .into_iter()
        .map(|region| realize_region(region, track, config))
        .collect();
    concat(&realized)
}

/// Realize `region` and encode it as WAV.
pub fn export_region(
    region: &Region,
    track: &SampleBuffer,
    config: &RealizeConfig,
    wav: &WavConfig,
) -> Result<EncodedAudio> {
    let audio = realize_region(region, track, config);
    Ok(encode_wav(&audio, wav)?)
}

fn apply_gain_and_pan(buffer: &mut SampleBuffer, gain_db: f32, pan: f32) {
    let gain = decibels_to_linear_gain(gain_db);
    if buffer.channel_count() < 2 {
        buffer.apply_gain(gain);
        return;
    }

    let (left, right) = equal_power_pan_gains(pan);
    for (index, channel) in buffer.channels_mut().enumerate() {
        let channel_gain = match index {
            0 => gain * left,
            1 => gain * right,
            _ => gain,
        };
        for sample in channel.iter_mut() {
            *sample *= channel_gain;
        }
    }
}

/// Frames covered by a fade of `seconds`, at most half of `frames`.
fn fade_frames(seconds: f64, sample_rate: u32, frames: usize) -> usize {
    let wanted = (seconds.max(0.0) * sample_rate as f64).round();
    let limit = frames / 2;
    if wanted.is_nan() {
        0
    } else if wanted >= limit as f64 {
        limit
    } else {
        wanted as usize
    }
}

/// Per-frame fade and automation gain, or `None` when it is unity
/// everywhere.
fn envelope(region: &Region, frames: usize, sample_rate: u32) -> Option<Vec<f32>> {
    let fade_in = fade_frames(region.fade_in_sec(), sample_rate, frames);
    let fade_out = fade_frames(region.fade_out_sec(), sample_rate, frames);
    let automation = region.automation();
    if fade_in == 0 && fade_out == 0 && automation.is_empty() {
        return None;
    }

    let mut gains = automation.frame_gains(frames, sample_rate);
    for (i, gain) in gains.iter_mut().take(fade_in).enumerate() {
        *gain *= i as f32 / fade_in as f32;
    }
    let tail = frames - fade_out;
    for (j, gain) in gains[tail..].iter_mut().enumerate() {
        *gain *= (fade_out - 1 - j) as f32 / fade_out as f32;
    }
    Some(gains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ones(channels: usize, frames: usize) -> SampleBuffer {
        SampleBuffer::new(100, vec![vec![1.0; frames]; channels]).unwrap()
    }

    #[test]
    fn test_plain_region_is_a_slice() {
        let track = SampleBuffer::from_mono(100, (0..300).map(|i| i as f32).collect()).unwrap();
        let region = Region::new("r", 1.0, 2.0).unwrap();
        let out = realize_region(&region, &track, &RealizeConfig::default());
        assert_eq!(out.frame_count(), 100);
        assert_eq!(out.channel(0).unwrap()[0], 100.0);
        assert_eq!(out.channel(0).unwrap()[99], 199.0);
    }

    #[test]
    fn test_gain_and_pan() {
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_gain_db(-20.0);
        region.set_pan(1.0);
        let out = realize_region(&region, &ones(2, 100), &RealizeConfig::default());
        assert_relative_eq!(out.channel(0).unwrap()[10], 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.channel(1).unwrap()[10], 0.1 * std::f32::consts::SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_centre_pan_is_unity() {
        let region = Region::new("r", 0.0, 1.0).unwrap();
        let out = realize_region(&region, &ones(2, 100), &RealizeConfig::default());
        assert_relative_eq!(out.channel(0).unwrap()[50], 1.0, epsilon = 1e-6);
        assert_relative_eq!(out.channel(1).unwrap()[50], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mono_is_not_panned() {
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_pan(-1.0);
        let out = realize_region(&region, &ones(1, 100), &RealizeConfig::default());
        assert_eq!(out.channel(0).unwrap()[50], 1.0);
    }

    #[test]
    fn test_linear_fades() {
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_fade_in(0.1);
        region.set_fade_out(0.1);
        let out = realize_region(&region, &ones(1, 100), &RealizeConfig::default());
        let samples = out.channel(0).unwrap();
        assert_eq!(samples[0], 0.0);
        assert_relative_eq!(samples[5], 0.5);
        assert_eq!(samples[10], 1.0);
        assert_eq!(samples[89], 1.0);
        assert_relative_eq!(samples[90], 0.9);
        assert_eq!(samples[99], 0.0);
    }

    #[test]
    fn test_fades_limited_to_half() {
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_fade_in(1.0);
        region.set_fade_out(1.0);
        let out = realize_region(&region, &ones(1, 100), &RealizeConfig::default());
        let samples = out.channel(0).unwrap();
        assert_relative_eq!(samples[25], 0.5);
        assert_relative_eq!(samples[49], 0.98);
        assert_relative_eq!(samples[50], 0.98);
        assert_eq!(samples[99], 0.0);
    }

    #[test]
    fn test_automation_multiplies_gain() {
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_gain_db(decibels(0.5));
        region.add_automation_point(0.0, 0.0);
        region.add_automation_point(1.0, 1.0);
        let out = realize_region(&region, &ones(1, 100), &RealizeConfig::default());
        let samples = out.channel(0).unwrap();
        assert_eq!(samples[0], 0.0);
        assert_relative_eq!(samples[50], 0.25, epsilon = 1e-5);
    }

    fn decibels(gain: f32) -> f32 {
        clipwarp_core::linear_gain_to_decibels(gain)
    }

    #[test]
    fn test_stretch_rate_changes_length() {
        let track = SampleBuffer::from_mono(
            8000,
            (0..16000).map(|i| (i as f32 * 0.05).sin()).collect(),
        )
        .unwrap();
        let mut region = Region::new("r", 0.0, 1.0).unwrap();
        region.set_stretch_rate(1.5);
        let out = realize_region(&region, &track, &RealizeConfig::default());
        assert_eq!(out.frame_count(), 12000);
    }

    #[test]
    fn test_bounce_orders_by_start() {
        let track = SampleBuffer::from_mono(10, (0..40).map(|i| i as f32).collect()).unwrap();
        let late = Region::new("b", 2.0, 3.0).unwrap();
        let early = Region::new("a", 0.0, 1.0).unwrap();
        let out = bounce_regions(&[late, early], &track, &RealizeConfig::default());
        let samples = out.channel(0).unwrap();
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[10], 20.0);
    }

    #[test]
    fn test_bounce_nothing() {
        let out = bounce_regions(&[], &ones(2, 10), &RealizeConfig::default());
        assert_eq!(out.frame_count(), 1);
    }

    #[test]
    fn test_export_region() {
        let region = Region::new("r", 0.0, 0.5).unwrap();
        let wav = export_region(&region, &ones(2, 100), &RealizeConfig::default(), &WavConfig::pcm16())
            .unwrap();
        assert_eq!(wav.mime_type(), "audio/wav");
        assert_eq!(wav.len(), 44 + 50 * 4);
    }
}
