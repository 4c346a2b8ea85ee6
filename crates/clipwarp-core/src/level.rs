//! Gain, decibel and pan helpers.

use std::f32::consts::FRAC_PI_4;

/// Saturate `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound
/// wins.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        if max < min {
            min
        } else {
            max
        }
    } else if value < min {
        min
    } else {
        value
    }
}

#[inline]
pub fn decibels_to_linear_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Inverse of [`decibels_to_linear_gain`]. Silence maps to negative infinity.
#[inline]
pub fn linear_gain_to_decibels(gain: f32) -> f32 {
    if gain <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * gain.log10()
    }
}

/// Left/right gains for `pan` in `[-1, 1]`.
///
/// Equal-power law, normalized so the centre position is unity on both sides
/// (a hard pan lifts the active side by +3 dB). Out-of-range pans saturate.
pub fn equal_power_pan_gains(pan: f32) -> (f32, f32) {
    let pan = if pan.is_finite() {
        clamp(pan, -1.0, 1.0)
    } else {
        0.0
    };
    let angle = (pan + 1.0) * FRAC_PI_4;
    let norm = FRAC_PI_4.cos();
    (angle.cos() / norm, angle.sin() / norm)
}
