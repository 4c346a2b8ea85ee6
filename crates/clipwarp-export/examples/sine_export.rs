//! Export a simple sine wave to WAV

use std::f32::consts::TAU;
use std::fs::File;
use std::io::BufWriter;

use clipwarp_core::SampleBuffer;
use clipwarp_export::{write_wav, WavConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_rate = 44100;
    let freq = 261.63; // C4

    let tone: Vec<f32> = (0..sample_rate as usize)
        .map(|i| 0.5 * (TAU * freq * i as f32 / sample_rate as f32).sin())
        .collect();
    let buffer = SampleBuffer::new(sample_rate, vec![tone.clone(), tone])?;

    let mut out = BufWriter::new(File::create("sine.wav")?);
    write_wav(&mut out, &buffer, &WavConfig::pcm16())?;

    println!("Exported sine.wav ({:.2}s)", buffer.duration_seconds());
    Ok(())
}
