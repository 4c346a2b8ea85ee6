//! Editable regions.
//!
//! A [`Region`] describes a time range of a track plus the edits applied to
//! it. It never owns sample data; [`crate::realize_region`] materializes it
//! against the track buffer on demand.

use clipwarp_automation::{AutomationCurve, AutomationPoint};
use clipwarp_core::{clamp, grid_step_seconds, snap_to_grid, GridResolution};
use clipwarp_stretch::is_passthrough;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An editable clip-level descriptor over `[start, end)` seconds of a track.
///
/// Setters clamp instead of failing: pan saturates to `[-1, 1]`, fades to
/// `[0, duration]`, and a non-positive or non-finite stretch rate resets to
/// 1. Only the range itself is validated, since a region without a positive
/// duration has nothing to realize.
///
/// Serialized with camelCase field names:
///
/// ```
/// use clipwarp::Region;
///
/// let region: Region =
///     serde_json::from_str(r#"{"id":"r1","start":1.0,"end":3.0,"gainDb":-6.0}"#).unwrap();
/// assert_eq!(region.duration(), 2.0);
/// assert_eq!(region.stretch_rate(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RegionFields")]
pub struct Region {
    id: String,
    start: f64,
    end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    gain_db: f32,
    pan: f32,
    fade_in_sec: f64,
    fade_out_sec: f64,
    stretch_rate: f64,
    automation: AutomationCurve,
}

/// Unvalidated wire form of [`Region`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionFields {
    id: String,
    start: f64,
    end: f64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    gain_db: f32,
    #[serde(default)]
    pan: f32,
    #[serde(default)]
    fade_in_sec: f64,
    #[serde(default)]
    fade_out_sec: f64,
    #[serde(default = "unity_rate")]
    stretch_rate: f64,
    #[serde(default)]
    automation: AutomationCurve,
}

fn unity_rate() -> f64 {
    1.0
}

impl TryFrom<RegionFields> for Region {
    type Error = Error;

    fn try_from(fields: RegionFields) -> Result<Self> {
        let mut region = Region::new(fields.id, fields.start, fields.end)?;
        region.name = fields.name;
        region.set_gain_db(fields.gain_db);
        region.set_pan(fields.pan);
        region.set_fade_in(fields.fade_in_sec);
        region.set_fade_out(fields.fade_out_sec);
        region.set_stretch_rate(fields.stretch_rate);
        region.automation = fields.automation;
        Ok(region)
    }
}

fn check_range(start: f64, end: f64) -> Result<()> {
    if start.is_finite() && end.is_finite() && end > start {
        Ok(())
    } else {
        Err(Error::InvalidRegionRange { start, end })
    }
}

/// Finite values pass through, anything else becomes `fallback`.
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

impl Region {
    /// New region with default edits: 0 dB, centred, no fades, no stretch.
    pub fn new(id: impl Into<String>, start: f64, end: f64) -> Result<Self> {
        check_range(start, end)?;
        Ok(Self {
            id: id.into(),
            start,
            end,
            name: None,
            gain_db: 0.0,
            pan: 0.0,
            fade_in_sec: 0.0,
            fade_out_sec: 0.0,
            stretch_rate: 1.0,
            automation: AutomationCurve::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Source duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Duration of the realized audio: source duration scaled by the
    /// stretch rate.
    pub fn realized_duration(&self) -> f64 {
        if is_passthrough(self.stretch_rate) {
            self.duration()
        } else {
            self.duration() * self.stretch_rate
        }
    }

    #[inline]
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }

    /// Non-finite gains reset to 0 dB.
    pub fn set_gain_db(&mut self, db: f32) {
        self.gain_db = if db.is_finite() { db } else { 0.0 };
    }

    #[inline]
    pub fn pan(&self) -> f32 {
        self.pan
    }

    pub fn set_pan(&mut self, pan: f32) {
        self.pan = if pan.is_finite() {
            clamp(pan, -1.0, 1.0)
        } else {
            0.0
        };
    }

    #[inline]
    pub fn fade_in_sec(&self) -> f64 {
        self.fade_in_sec
    }

    pub fn set_fade_in(&mut self, seconds: f64) {
        self.fade_in_sec = clamp(finite_or(seconds, 0.0), 0.0, self.duration());
    }

    #[inline]
    pub fn fade_out_sec(&self) -> f64 {
        self.fade_out_sec
    }

    pub fn set_fade_out(&mut self, seconds: f64) {
        self.fade_out_sec = clamp(finite_or(seconds, 0.0), 0.0, self.duration());
    }

    #[inline]
    pub fn stretch_rate(&self) -> f64 {
        self.stretch_rate
    }

    /// Output/input duration ratio. `2.0` plays twice as long.
    pub fn set_stretch_rate(&mut self, rate: f64) {
        self.stretch_rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            1.0
        };
    }

    pub fn automation(&self) -> &AutomationCurve {
        &self.automation
    }

    pub fn automation_mut(&mut self) -> &mut AutomationCurve {
        &mut self.automation
    }

    pub fn set_automation(&mut self, automation: AutomationCurve) {
        self.automation = automation;
    }

    /// Shorthand for `automation_mut().add_point(..)`.
    pub fn add_automation_point(&mut self, t: f64, v: f32) -> Option<usize> {
        self.automation.add_point(AutomationPoint::new(t, v))
    }

    /// Move to a new start time, keeping the duration. Negative starts
    /// saturate to 0.
    pub fn move_to(&mut self, start: f64) {
        let start = finite_or(start, self.start).max(0.0);
        let duration = self.duration();
        self.start = start;
        self.end = start + duration;
    }

    /// Move the left edge. Automation follows the audio it was drawn on.
    pub fn trim_start(&mut self, start: f64) -> Result<()> {
        check_range(start, self.end)?;
        let removed = start - self.start;
        self.automation.shift(-removed * self.rate_for_time());
        self.start = start;
        self.clamp_fades();
        Ok(())
    }

    /// Move the right edge.
    pub fn trim_end(&mut self, end: f64) -> Result<()> {
        check_range(self.start, end)?;
        self.end = end;
        self.clamp_fades();
        Ok(())
    }

    /// Split at `time` into two regions. The left half keeps this region's
    /// id and fade-in, the right half takes `right_id` and the fade-out;
    /// automation is cut so each half keeps its shape.
    ///
    /// Returns `None` unless `time` lies strictly inside the region.
    pub fn split_at(&self, time: f64, right_id: impl Into<String>) -> Option<(Region, Region)> {
        if !(time > self.start && time < self.end) {
            return None;
        }
        let cut = (time - self.start) * self.rate_for_time();
        let (left_curve, right_curve) = self.automation.split_at(cut);

        let mut left = self.clone();
        left.end = time;
        left.fade_out_sec = 0.0;
        left.automation = left_curve;
        left.clamp_fades();

        let mut right = self.clone();
        right.id = right_id.into();
        right.start = time;
        right.fade_in_sec = 0.0;
        right.automation = right_curve;
        right.clamp_fades();

        Some((left, right))
    }

    /// Snap both edges to the grid. If the edges collapse onto the same
    /// line the region keeps one grid step of length.
    pub fn snap_to_grid(&mut self, bpm: f64, resolution: GridResolution) {
        let start = snap_to_grid(self.start, bpm, resolution);
        let mut end = snap_to_grid(self.end, bpm, resolution);
        if end <= start {
            end = start + grid_step_seconds(bpm, resolution);
        }
        if check_range(start, end).is_ok() {
            self.start = start;
            self.end = end;
            self.clamp_fades();
        }
    }

    fn rate_for_time(&self) -> f64 {
        if is_passthrough(self.stretch_rate) {
            1.0
        } else {
            self.stretch_rate
        }
    }

    fn clamp_fades(&mut self) {
        let duration = self.duration();
        self.fade_in_sec = self.fade_in_sec.min(duration);
        self.fade_out_sec = self.fade_out_sec.min(duration);
    }
}
