//! Sorted automation curve with linear interpolation.

use serde::{Deserialize, Serialize};

/// One automation breakpoint: value `v` at time `t` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutomationPoint {
    pub t: f64,
    pub v: f32,
}

impl AutomationPoint {
    pub fn new(t: f64, v: f32) -> Self {
        Self { t, v }
    }
}

/// Automation points kept sorted by time.
///
/// Points may be added in any order. Lookups use binary search and
/// interpolate linearly between neighbours; before the first point the first
/// value holds, after the last point the last value holds.
///
/// # Example
///
/// ```
/// use clipwarp_automation::{AutomationCurve, AutomationPoint};
///
/// let mut curve = AutomationCurve::new();
/// curve.add_point(AutomationPoint::new(2.0, 0.0));
/// curve.add_point(AutomationPoint::new(0.0, 1.0));
///
/// assert_eq!(curve.get_value_at(1.0), Some(0.5));
/// assert_eq!(curve.get_value_at(5.0), Some(0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AutomationPoint>", into = "Vec<AutomationPoint>")]
pub struct AutomationCurve {
    points: Vec<AutomationPoint>,
}

impl AutomationCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from points in any order. Non-finite points are dropped.
    pub fn from_points<I: IntoIterator<Item = AutomationPoint>>(points: I) -> Self {
        let mut points: Vec<AutomationPoint> = points
            .into_iter()
            .filter(|p| p.t.is_finite() && p.v.is_finite())
            .collect();
        points.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[AutomationPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Insert a point, keeping time order. A point at an already-used time
    /// lands after the existing ones. Returns the insertion index, or `None`
    /// for a non-finite point.
    pub fn add_point(&mut self, point: AutomationPoint) -> Option<usize> {
        if !point.t.is_finite() || !point.v.is_finite() {
            tracing::warn!(t = point.t, v = point.v, "ignoring non-finite automation point");
            return None;
        }
        let index = self.points.partition_point(|p| p.t <= point.t);
        self.points.insert(index, point);
        Some(index)
    }

    pub fn remove_point(&mut self, index: usize) -> Option<AutomationPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Remove the point closest to `t`, if one lies within `tolerance`.
    pub fn remove_near(&mut self, t: f64, tolerance: f64) -> Option<AutomationPoint> {
        let index = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| (p.t - t).abs() <= tolerance)
            .min_by(|(_, a), (_, b)| (a.t - t).abs().total_cmp(&(b.t - t).abs()))
            .map(|(i, _)| i)?;
        self.remove_point(index)
    }

    /// Interpolated value at `t`, or `None` for an empty curve.
    pub fn get_value_at(&self, t: f64) -> Option<f32> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if t.is_nan() || t <= first.t {
            return Some(first.v);
        }
        if t >= last.t {
            return Some(last.v);
        }

        let upper = self.points.partition_point(|p| p.t <= t);
        let a = self.points[upper - 1];
        let b = self.points[upper];
        let span = b.t - a.t;
        if span <= 0.0 {
            return Some(b.v);
        }
        let frac = ((t - a.t) / span) as f32;
        Some(a.v + (b.v - a.v) * frac)
    }

    /// Gain multiplier at `t`: the curve value, or unity when empty.
    #[inline]
    pub fn gain_at(&self, t: f64) -> f32 {
        self.get_value_at(t).unwrap_or(1.0)
    }

    /// Per-frame gain multipliers for `frames` frames at `sample_rate`,
    /// frame `i` sampled at `i / sample_rate` seconds.
    pub fn frame_gains(&self, frames: usize, sample_rate: u32) -> Vec<f32> {
        if self.points.is_empty() {
            return vec![1.0; frames];
        }
        let rate = sample_rate.max(1) as f64;
        (0..frames).map(|i| self.gain_at(i as f64 / rate)).collect()
    }

    /// Move every point by `offset` seconds.
    pub fn shift(&mut self, offset: f64) {
        for point in &mut self.points {
            point.t += offset;
        }
    }

    /// Split at `t` into the part before and the part after, the latter
    /// re-based so `t` becomes zero. Both halves get a breakpoint at the cut
    /// so the interpolated shape is preserved.
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        let Some(value) = self.get_value_at(t) else {
            return (Self::new(), Self::new());
        };

        let mut left = Self::from_points(self.points.iter().copied().filter(|p| p.t < t));
        left.add_point(AutomationPoint::new(t, value));

        let mut right = Self::from_points(
            self.points
                .iter()
                .filter(|p| p.t > t)
                .map(|p| AutomationPoint::new(p.t - t, p.v)),
        );
        right.add_point(AutomationPoint::new(0.0, value));

        (left, right)
    }
}

impl From<Vec<AutomationPoint>> for AutomationCurve {
    fn from(points: Vec<AutomationPoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<AutomationCurve> for Vec<AutomationPoint> {
    fn from(curve: AutomationCurve) -> Self {
        curve.points
    }
}

impl FromIterator<AutomationPoint> for AutomationCurve {
    fn from_iter<I: IntoIterator<Item = AutomationPoint>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
