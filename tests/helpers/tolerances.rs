//! Tolerance constants for audio testing.
//!
//! Different operations require different precision levels.

/// Floating point rounding errors (for passthrough, exact gain).
/// Use for operations that should be mathematically exact.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// DSP processing tolerance (gain chains, interpolation).
pub const DSP_EPSILON: f32 = 1e-4;

/// 16-bit quantization step size.
/// Use when testing bit-depth conversion to 16-bit.
pub const INT16_EPSILON: f32 = 1.0 / 32768.0;

/// 24-bit quantization step size.
/// Use when testing bit-depth conversion to 24-bit.
pub const INT24_EPSILON: f32 = 1.0 / 8388608.0;
