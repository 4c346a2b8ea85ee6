//! Time-stretch configuration and derived parameters.

/// Stretch factors closer to 1.0 than this are treated as no-ops.
pub const IDENTITY_TOLERANCE: f64 = 0.001;

/// Cross-correlation only looks at every n-th sample of the window.
pub const CORRELATION_STRIDE: usize = 8;

/// `true` when `factor` leaves the input untouched: non-positive,
/// non-finite, or within [`IDENTITY_TOLERANCE`] of 1.
#[inline]
pub fn is_passthrough(factor: f64) -> bool {
    !factor.is_finite() || factor <= 0.0 || (factor - 1.0).abs() < IDENTITY_TOLERANCE
}

/// Output length for `input_len` samples stretched by `factor`.
#[inline]
pub fn target_length(input_len: usize, factor: f64) -> usize {
    if is_passthrough(factor) {
        input_len
    } else {
        (input_len as f64 * factor).round() as usize
    }
}

/// Caller overrides for the WSOLA window geometry.
///
/// Unset fields use the defaults; every value is clamped when the
/// parameters are derived, so any config is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StretchConfig {
    pub window_size: Option<usize>,
    pub analysis_hop: Option<usize>,
    pub search_radius: Option<usize>,
}

impl StretchConfig {
    pub const MIN_WINDOW: usize = 512;
    pub const MAX_WINDOW: usize = 8192;
    pub const DEFAULT_WINDOW: usize = 2048;
    pub const MIN_ANALYSIS_HOP: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_size(mut self, samples: usize) -> Self {
        self.window_size = Some(samples);
        self
    }

    pub fn analysis_hop(mut self, samples: usize) -> Self {
        self.analysis_hop = Some(samples);
        self
    }

    pub fn search_radius(mut self, samples: usize) -> Self {
        self.search_radius = Some(samples);
        self
    }

    /// Resolve the overrides into concrete parameters for `factor`.
    pub fn params(&self, factor: f64) -> StretchParams {
        let window_size = self
            .window_size
            .unwrap_or(Self::DEFAULT_WINDOW)
            .clamp(Self::MIN_WINDOW, Self::MAX_WINDOW);

        let analysis_hop = self
            .analysis_hop
            .unwrap_or(window_size / 4)
            .clamp(Self::MIN_ANALYSIS_HOP, window_size / 2);

        let search_radius = self
            .search_radius
            .unwrap_or_else(|| (analysis_hop as f64 / 2.0).round() as usize)
            .min(window_size / 2);

        let synthesis_hop = if factor.is_finite() && factor > 0.0 {
            (analysis_hop as f64 * factor).round() as usize
        } else {
            analysis_hop
        };

        StretchParams {
            factor,
            window_size,
            analysis_hop,
            synthesis_hop,
            search_radius,
        }
    }
}

/// Fully resolved WSOLA geometry for one stretch factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchParams {
    pub factor: f64,
    /// Window length `W` in samples.
    pub window_size: usize,
    /// Input advance per step (`Ha`).
    pub analysis_hop: usize,
    /// Output advance per step (`Hs = round(Ha * factor)`).
    pub synthesis_hop: usize,
    /// Maximum alignment offset searched either side of the nominal input position.
    pub search_radius: usize,
}

impl StretchParams {
    /// Defaults for `factor`.
    pub fn for_factor(factor: f64) -> Self {
        StretchConfig::default().params(factor)
    }

    #[inline]
    pub fn is_passthrough(&self) -> bool {
        is_passthrough(self.factor)
    }
}
