//! Canonical RIFF/WAVE encoder.
//!
//! Writes the classic 44-byte header (`RIFF`, 16-byte `fmt `, `data`)
//! followed by interleaved little-endian samples. Supports 16-bit and 24-bit
//! integer PCM and 32-bit float.

use std::io::Write;

use clipwarp_core::SampleBuffer;

use crate::error::{ExportError, Result};
use crate::options::BitDepth;

/// MIME type of the encoded stream.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Size of the canonical header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// WAV encoder configuration
///
/// Channel count and sample rate always come from the buffer being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WavConfig {
    /// Bit depth
    pub bit_depth: BitDepth,
}

impl WavConfig {
    pub fn new(bit_depth: BitDepth) -> Self {
        Self { bit_depth }
    }

    /// 16-bit integer PCM
    pub fn pcm16() -> Self {
        Self::new(BitDepth::Int16)
    }

    /// 32-bit float
    pub fn float32() -> Self {
        Self::new(BitDepth::Float32)
    }
}

/// A finished WAV byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    bytes: Vec<u8>,
}

impl EncodedAudio {
    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The interleaved sample bytes after the header.
    pub fn data(&self) -> &[u8] {
        &self.bytes[WAV_HEADER_LEN.min(self.bytes.len())..]
    }
}

impl AsRef<[u8]> for EncodedAudio {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Sizes derived from the buffer shape and bit depth.
struct Layout {
    channels: u16,
    sample_rate: u32,
    block_align: u16,
    byte_rate: u32,
    data_size: u32,
}

impl Layout {
    fn new(buffer: &SampleBuffer, bit_depth: BitDepth) -> Result<Self> {
        let channels = u16::try_from(buffer.channel_count()).map_err(|_| {
            ExportError::InvalidData(format!(
                "{} channels exceed the WAV limit of {}",
                buffer.channel_count(),
                u16::MAX
            ))
        })?;

        let block_align = u32::from(channels) * u32::from(bit_depth.bytes_per_sample());
        let block_align = u16::try_from(block_align).map_err(|_| {
            ExportError::InvalidData(format!("block align {block_align} exceeds 16 bits"))
        })?;

        let data_bytes = buffer.frame_count() as u64 * u64::from(block_align);
        // RIFF size is 36 + data size and must fit in 32 bits.
        if data_bytes + 36 > u64::from(u32::MAX) {
            return Err(ExportError::TooLarge { data_bytes });
        }

        let sample_rate = buffer.sample_rate();
        let byte_rate = u64::from(sample_rate) * u64::from(block_align);
        let byte_rate = u32::try_from(byte_rate).map_err(|_| {
            ExportError::InvalidData(format!("byte rate {byte_rate} exceeds 32 bits"))
        })?;

        Ok(Self {
            channels,
            sample_rate,
            block_align,
            byte_rate,
            data_size: data_bytes as u32,
        })
    }
}

/// Encode `buffer` to WAV bytes in memory.
pub fn encode_wav(buffer: &SampleBuffer, config: &WavConfig) -> Result<EncodedAudio> {
    let layout = Layout::new(buffer, config.bit_depth)?;
    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + layout.data_size as usize);
    write_layout(&mut bytes, buffer, config, &layout)?;
    Ok(EncodedAudio { bytes })
}

/// Encode `buffer` as WAV into `writer`.
///
/// Samples are written one at a time; wrap unbuffered sinks in a
/// `BufWriter`.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &SampleBuffer, config: &WavConfig) -> Result<()> {
    let layout = Layout::new(buffer, config.bit_depth)?;
    write_layout(writer, buffer, config, &layout)
}

fn write_layout<W: Write>(
    writer: &mut W,
    buffer: &SampleBuffer,
    config: &WavConfig,
    layout: &Layout,
) -> Result<()> {
    tracing::debug!(
        channels = layout.channels,
        sample_rate = layout.sample_rate,
        bits = config.bit_depth.bits(),
        data_size = layout.data_size,
        "encoding wav"
    );
    write_header(writer, config.bit_depth, layout)?;
    write_samples(writer, buffer, config.bit_depth)
}

fn write_header<W: Write>(writer: &mut W, bit_depth: BitDepth, layout: &Layout) -> Result<()> {
    let mut header = [0u8; WAV_HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + layout.data_size).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&bit_depth.format_tag().to_le_bytes());
    header[22..24].copy_from_slice(&layout.channels.to_le_bytes());
    header[24..28].copy_from_slice(&layout.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&layout.byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&layout.block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bit_depth.bits().to_le_bytes());
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&layout.data_size.to_le_bytes());
    writer.write_all(&header)?;
    Ok(())
}

fn write_samples<W: Write>(writer: &mut W, buffer: &SampleBuffer, bit_depth: BitDepth) -> Result<()> {
    let channels: Vec<&[f32]> = buffer.channels().collect();
    for frame in 0..buffer.frame_count() {
        for channel in &channels {
            let sample = channel[frame];
            match bit_depth {
                BitDepth::Int16 => writer.write_all(&float_to_i16(sample).to_le_bytes())?,
                BitDepth::Int24 => writer.write_all(&float_to_i24(sample).to_le_bytes()[..3])?,
                BitDepth::Float32 => writer.write_all(&sanitize(sample).to_le_bytes())?,
            }
        }
    }
    Ok(())
}

/// Clamp into `[-1, 1]`; non-finite samples become silence.
#[inline]
fn sanitize(sample: f32) -> f32 {
    if sample.is_finite() {
        sample.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Asymmetric scaling so both -1.0 and 1.0 reach full scale.
#[inline]
fn float_to_i16(sample: f32) -> i16 {
    let s = sanitize(sample);
    if s < 0.0 {
        (s * 32768.0).round() as i16
    } else {
        (s * 32767.0).round() as i16
    }
}

#[inline]
fn float_to_i24(sample: f32) -> i32 {
    let s = sanitize(sample) as f64;
    if s < 0.0 {
        (s * 8_388_608.0).round() as i32
    } else {
        (s * 8_388_607.0).round() as i32
    }
}
