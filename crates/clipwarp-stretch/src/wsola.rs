//! Waveform-similarity overlap-add (WSOLA) processor.
//!
//! ## Algorithm Overview
//!
//! 1. **Seed**: copy the first window of input straight to the output
//! 2. **Search**: around each nominal input position, pick the offset whose
//!    window best correlates with what is already in the output
//! 3. **Overlap-add**: Hann-window the chosen segment and add it at the
//!    current output position
//! 4. **Advance**: input by the analysis hop, output by the synthesis hop
//!
//! The loop is sequential: every step correlates against output written by
//! the previous steps.

use std::f64::consts::PI;

use crate::types::{target_length, StretchConfig, StretchParams, CORRELATION_STRIDE};

/// Hann window of `len` samples using the symmetric `(len - 1)` denominator.
pub fn hann_window(len: usize) -> Vec<f32> {
    if len == 1 {
        return vec![1.0];
    }
    let denom = (len.saturating_sub(1)) as f64;
    (0..len)
        .map(|i| (0.5 * (1.0 - (2.0 * PI * i as f64 / denom).cos())) as f32)
        .collect()
}

/// Stretches mono sample slices by a fixed factor.
///
/// Holds the resolved parameters and the precomputed window, so one instance
/// can process every channel of a buffer.
#[derive(Debug, Clone)]
pub struct WsolaStretcher {
    params: StretchParams,
    window: Vec<f32>,
}

impl WsolaStretcher {
    pub fn new(factor: f64, config: &StretchConfig) -> Self {
        let params = config.params(factor);
        tracing::debug!(
            factor,
            window = params.window_size,
            analysis_hop = params.analysis_hop,
            synthesis_hop = params.synthesis_hop,
            search_radius = params.search_radius,
            "wsola parameters"
        );
        Self {
            window: hann_window(params.window_size),
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &StretchParams {
        &self.params
    }

    /// Stretch `input`, returning `round(input.len() * factor)` samples.
    ///
    /// Passthrough factors return an exact copy.
    pub fn process(&self, input: &[f32]) -> Vec<f32> {
        if self.params.is_passthrough() {
            return input.to_vec();
        }

        let window_size = self.params.window_size;
        let target_len = target_length(input.len(), self.params.factor);
        let mut output = vec![0.0_f32; target_len + window_size + 1];

        let seed = window_size.min(input.len());
        output[..seed].copy_from_slice(&input[..seed]);

        let mut in_pos = self.params.analysis_hop;
        let mut out_pos = self.params.synthesis_hop;
        let mut steps = 0usize;

        while out_pos + window_size <= output.len() && in_pos + window_size <= input.len() {
            let start = self.best_candidate(input, &output, in_pos, out_pos);
            let segment = &input[start..start + window_size];
            for ((out, &sample), &w) in output[out_pos..out_pos + window_size]
                .iter_mut()
                .zip(segment)
                .zip(&self.window)
            {
                *out += sample * w;
            }

            in_pos += self.params.analysis_hop;
            out_pos += self.params.synthesis_hop;
            steps += 1;
        }

        tracing::trace!(steps, input = input.len(), output = target_len, "wsola done");
        output.truncate(target_len);
        output
    }

    /// Input position within the search radius of `in_pos` whose window best
    /// matches the output at `out_pos`. Windows running past the input end are
    /// not considered; on equal scores the earliest position wins.
    fn best_candidate(&self, input: &[f32], output: &[f32], in_pos: usize, out_pos: usize) -> usize {
        let window_size = self.params.window_size;
        let radius = self.params.search_radius;
        let first = in_pos.saturating_sub(radius);
        let last = in_pos + radius;

        let mut best = in_pos;
        let mut best_score = f32::NEG_INFINITY;
        for candidate in first..=last {
            if candidate + window_size > input.len() {
                break;
            }
            let score = correlate(output, out_pos, &input[candidate..candidate + window_size]);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }
        best
    }
}

/// Strided dot product of `segment` against `output` starting at `out_pos`.
/// Reads past the end of `output` count as silence.
#[inline]
fn correlate(output: &[f32], out_pos: usize, segment: &[f32]) -> f32 {
    segment
        .iter()
        .enumerate()
        .step_by(CORRELATION_STRIDE)
        .map(|(i, &s)| output.get(out_pos + i).copied().unwrap_or(0.0) * s)
        .sum()
}

/// Stretch a mono slice with the default configuration.
pub fn time_stretch(input: &[f32], factor: f64) -> Vec<f32> {
    WsolaStretcher::new(factor, &StretchConfig::default()).process(input)
}
