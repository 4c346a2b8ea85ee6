//! Musical grid and tempo conversions.
//!
//! Everything here assumes a 4-beat bar. Invalid tempos never raise; they fall
//! back to [`FALLBACK_BPM`].

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Tempo used whenever the caller supplies a non-finite or non-positive BPM.
pub const FALLBACK_BPM: f64 = 120.0;

/// Beats in one bar of the grid.
pub const BEATS_PER_BAR: f64 = 4.0;

/// Snap resolution as a fraction of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridResolution {
    #[serde(rename = "1/2")]
    Half,
    #[default]
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "1/8")]
    Eighth,
}

impl GridResolution {
    pub const ALL: [GridResolution; 3] = [Self::Half, Self::Quarter, Self::Eighth];

    /// Fraction of a bar covered by one grid step.
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Quarter => 0.25,
            Self::Eighth => 0.125,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Half => "1/2",
            Self::Quarter => "1/4",
            Self::Eighth => "1/8",
        }
    }
}

impl fmt::Display for GridResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `"1/2"`, `"1/4"`, `"1/8"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown grid resolution: {0}")]
pub struct ParseGridResolutionError(pub String);

impl FromStr for GridResolution {
    type Err = ParseGridResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1/2" => Ok(Self::Half),
            "1/4" => Ok(Self::Quarter),
            "1/8" => Ok(Self::Eighth),
            other => Err(ParseGridResolutionError(other.to_string())),
        }
    }
}

#[inline]
fn effective_bpm(bpm: f64) -> f64 {
    if bpm.is_finite() && bpm > 0.0 {
        bpm
    } else {
        FALLBACK_BPM
    }
}

/// Length of one 4-beat bar in seconds.
#[inline]
pub fn bar_duration_seconds(bpm: f64) -> f64 {
    (60.0 / effective_bpm(bpm)) * BEATS_PER_BAR
}

/// Length of one grid step in seconds.
#[inline]
pub fn grid_step_seconds(bpm: f64, resolution: GridResolution) -> f64 {
    bar_duration_seconds(bpm) * resolution.fraction()
}

/// Round `time_sec` to the nearest grid line, never below zero.
///
/// A degenerate step leaves the time untouched.
pub fn snap_to_grid(time_sec: f64, bpm: f64, resolution: GridResolution) -> f64 {
    let step = grid_step_seconds(bpm, resolution);
    if !step.is_finite() || step <= 0.0 {
        return time_sec;
    }
    // f64::max drops NaN, so a NaN time lands on 0.
    ((time_sec / step).round() * step).max(0.0)
}

#[inline]
pub fn beats_to_seconds(beats: f64, bpm: f64) -> f64 {
    beats * 60.0 / effective_bpm(bpm)
}

#[inline]
pub fn seconds_to_beats(seconds: f64, bpm: f64) -> f64 {
    seconds * effective_bpm(bpm) / 60.0
}
