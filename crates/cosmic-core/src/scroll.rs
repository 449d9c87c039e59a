/// Raw document scroll readings, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> f32 {
        scroll_progress(self.scroll_y, self.scroll_height, self.viewport_height)
    }
}

/// Anything that can report scroll metrics. `None` means the platform is
/// not there (e.g. rendering before a window exists).
pub trait ScrollSource {
    fn metrics(&self) -> Option<ScrollMetrics>;
}

/// `scroll_y / (scroll_height - viewport_height)` clamped to `[0, 1]`.
/// A page no taller than the viewport, or any non-finite input, gives `0`.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let range = scroll_height - viewport_height;
    if !scroll_y.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range.max(1.0)).clamp(0.0, 1.0) as f32
}

/// Read the current progress, defaulting to `0` when nothing can be read.
#[inline]
pub fn sample_scroll(source: &dyn ScrollSource) -> f32 {
    source.metrics().map(|m| m.progress()).unwrap_or(0.0)
}
