//! Slicing and concatenation of sample buffers.
//!
//! Neither operation fails: out-of-range selections are clamped and
//! degenerate inputs produce a one-frame silent buffer.

use crate::buffer::{SampleBuffer, DEFAULT_SAMPLE_RATE};

/// Frame index for `time_sec`, floored and clamped into `[0, frame_count]`.
#[inline]
pub fn seconds_to_frame(time_sec: f64, sample_rate: u32, frame_count: usize) -> usize {
    let index = (time_sec * sample_rate as f64).floor();
    if index.is_nan() || index <= 0.0 {
        0
    } else if index >= frame_count as f64 {
        frame_count
    } else {
        index as usize
    }
}

fn frame_range(buffer: &SampleBuffer, start_sec: f64, end_sec: f64) -> (usize, usize) {
    let frames = buffer.frame_count();
    let start = seconds_to_frame(start_sec, buffer.sample_rate(), frames);
    let end = seconds_to_frame(end_sec, buffer.sample_rate(), frames);
    (start, end)
}

/// Copy `[start_sec, end_sec)` out of `buffer`.
///
/// The result always has at least one frame. An empty or inverted range
/// yields a single silent frame.
pub fn slice(buffer: &SampleBuffer, start_sec: f64, end_sec: f64) -> SampleBuffer {
    let mut out = SampleBuffer::silent(buffer.channel_count(), buffer.sample_rate(), 0);
    slice_into(buffer, start_sec, end_sec, &mut out);
    out
}

/// Like [`slice`], but writes into `dest`, reusing its channel allocations.
pub fn slice_into(buffer: &SampleBuffer, start_sec: f64, end_sec: f64, dest: &mut SampleBuffer) {
    let (start, end) = frame_range(buffer, start_sec, end_sec);
    let len = end.saturating_sub(start).max(1);
    if end <= start {
        tracing::trace!(start_sec, end_sec, "degenerate slice range, emitting one frame");
    }

    dest.reshape(buffer.sample_rate(), buffer.channel_count(), len);
    if end > start {
        for (dst, src) in dest.channels_mut().zip(buffer.channels()) {
            dst.copy_from_slice(&src[start..end]);
        }
    }
}

/// Join buffers end to end.
///
/// Zero-length inputs are skipped. The first remaining buffer fixes the
/// sample rate and channel count; a shorter input repeats its last channel to
/// fill the missing ones. With nothing left to join the result is one silent
/// mono frame at [`DEFAULT_SAMPLE_RATE`].
pub fn concat<'a, I>(buffers: I) -> SampleBuffer
where
    I: IntoIterator<Item = &'a SampleBuffer>,
{
    let inputs: Vec<&SampleBuffer> = buffers.into_iter().filter(|b| !b.is_empty()).collect();
    let Some(first) = inputs.first() else {
        return SampleBuffer::silent(1, DEFAULT_SAMPLE_RATE, 1);
    };

    let channel_count = first.channel_count();
    let total: usize = inputs.iter().map(|b| b.frame_count()).sum();
    let mut out = SampleBuffer::silent(channel_count, first.sample_rate(), total);

    let mut offset = 0;
    for input in &inputs {
        if input.sample_rate() != first.sample_rate() {
            tracing::warn!(
                expected = first.sample_rate(),
                actual = input.sample_rate(),
                "concatenating buffer with different sample rate, samples copied as-is"
            );
        }
        if input.channel_count() < channel_count {
            tracing::debug!(
                have = input.channel_count(),
                need = channel_count,
                "reusing last channel to fill missing channels"
            );
        }

        let frames = input.frame_count();
        let last = input.channel_count() - 1;
        for (index, dst) in out.channels_mut().enumerate() {
            if let Some(src) = input.channel(index.min(last)) {
                dst[offset..offset + frames].copy_from_slice(src);
            }
        }
        offset += frames;
    }

    out
}
