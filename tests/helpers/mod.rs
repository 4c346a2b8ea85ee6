//! Test helpers and fixtures for clipwarp integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (passthrough, unity gain)
//! - `DSP_EPSILON` (1e-4): DSP processing (gain chains, interpolation)
//! - `INT16_EPSILON` / `INT24_EPSILON`: Quantization steps of the WAV encoder

#![allow(dead_code)]

pub mod tolerances;

use clipwarp::prelude::*;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Install a tracing subscriber that writes through the test harness.
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate an integer staircase signal [0, 1, 2, ..., n-1] as f32.
///
/// Each sample equals its index, so slicing and joining can be verified
/// exactly.
pub fn generate_integer_staircase(num_samples: usize) -> Vec<f32> {
    (0..num_samples).map(|i| i as f32).collect()
}

/// Generate a linear ramp from start to end value.
pub fn generate_ramp(start: f32, end: f32, num_samples: usize) -> Vec<f32> {
    if num_samples <= 1 {
        return vec![start; num_samples];
    }
    let step = (end - start) / (num_samples - 1) as f32;
    (0..num_samples)
        .map(|i| start + step * i as f32)
        .collect()
}

/// Stereo buffer holding the same signal on both channels.
pub fn dual_mono(samples: Vec<f32>, sample_rate: u32) -> SampleBuffer {
    SampleBuffer::new(sample_rate, vec![samples.clone(), samples]).expect("valid test buffer")
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Count sign changes from negative to non-negative.
pub fn count_rising_zero_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|pair| pair[0] < 0.0 && pair[1] >= 0.0)
        .count()
}

/// Estimate the dominant frequency of a roughly periodic signal from its
/// rising zero crossings.
pub fn estimate_frequency(samples: &[f32], sample_rate: u32) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let seconds = samples.len() as f64 / sample_rate as f64;
    count_rising_zero_crossings(samples) as f64 / seconds
}

/// Result of comparing two audio buffers.
#[derive(Debug, Clone)]
pub struct AudioComparisonResult {
    /// Whether all samples are within tolerance.
    pub equal: bool,
    /// Maximum absolute difference between any two samples.
    pub max_diff: f32,
    /// Index of first sample that exceeds tolerance (if any).
    pub first_diff_sample: Option<usize>,
    /// Number of samples that exceed tolerance.
    pub num_diffs: usize,
}

/// Compare two audio buffers with epsilon tolerance.
pub fn compare_audio(a: &[f32], b: &[f32], epsilon: f32) -> AudioComparisonResult {
    if a.len() != b.len() {
        return AudioComparisonResult {
            equal: false,
            max_diff: f32::MAX,
            first_diff_sample: Some(0),
            num_diffs: std::cmp::max(a.len(), b.len()),
        };
    }

    let mut max_diff: f32 = 0.0;
    let mut first_diff: Option<usize> = None;
    let mut num_diffs = 0;

    for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        max_diff = max_diff.max(diff);
        if diff > epsilon {
            num_diffs += 1;
            if first_diff.is_none() {
                first_diff = Some(i);
            }
        }
    }

    AudioComparisonResult {
        equal: num_diffs == 0,
        max_diff,
        first_diff_sample: first_diff,
        num_diffs,
    }
}

/// Assert two signals are equal within tolerance, with detailed error message.
pub fn assert_signals_equal(a: &[f32], b: &[f32], epsilon: f32, context: &str) {
    let result = compare_audio(a, b, epsilon);
    assert!(
        result.equal,
        "{}: Signals differ - first diff at sample {:?}, max_diff={:.6}, num_diffs={}",
        context,
        result.first_diff_sample,
        result.max_diff,
        result.num_diffs
    );
}

/// Decode WAV bytes with hound into per-channel f32 samples plus the
/// stream's sample rate.
pub fn decode_wav(bytes: &[u8]) -> (Vec<Vec<f32>>, u32) {
    let mut reader =
        hound::WavReader::new(std::io::Cursor::new(bytes)).expect("hound accepts the header");
    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().map(|s| s.unwrap()).collect(),
        hound::SampleFormat::Int => {
            let scale = (1u32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.unwrap() as f32 / scale)
                .collect()
        }
    };

    let channels = spec.channels as usize;
    let mut out = vec![Vec::with_capacity(interleaved.len() / channels); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (channel, &sample) in out.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    (out, spec.sample_rate)
}
