//! Automation curves for clipwarp regions.
//!
//! A region's automation is a sparse list of `{t, v}` breakpoints, kept sorted
//! by time and evaluated with binary search plus linear interpolation. During
//! realization the curve is sampled once per frame and applied as a gain
//! multiplier on top of the region's static gain.
//!
//! # Example
//!
//! ```
//! use clipwarp_automation::{AutomationCurve, AutomationPoint};
//!
//! let curve: AutomationCurve = vec![
//!     AutomationPoint::new(0.0, 0.0),
//!     AutomationPoint::new(0.5, 1.0),
//! ]
//! .into();
//!
//! let gains = curve.frame_gains(3, 4);
//! assert_eq!(gains, vec![0.0, 0.5, 1.0]);
//! ```

mod curve;

pub use curve::{AutomationCurve, AutomationPoint};
