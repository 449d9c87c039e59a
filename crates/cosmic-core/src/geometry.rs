//! Viewport bounds and panel clamping.

use glam::Vec2;

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Map a client-space point to `[-1, 1]²` with the origin at the centre.
    /// Degenerate viewports map everything to the centre.
    pub fn normalize_point(&self, point: Vec2) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 || !point.is_finite() {
            return Vec2::ZERO;
        }
        let nx = (point.x / self.width) * 2.0 - 1.0;
        let ny = (point.y / self.height) * 2.0 - 1.0;
        Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Clamp a panel's top-left corner so its header stays reachable.
///
/// The upper bound is applied first and the lower bound last, so a viewport
/// narrower than the panel pins it to `0` and lets the right edge clip.
#[inline]
pub fn clamp_position(position: Vec2, width: f32, header_height: f32, viewport: Viewport) -> Vec2 {
    let x = if position.x.is_finite() { position.x } else { 0.0 };
    let y = if position.y.is_finite() { position.y } else { 0.0 };
    Vec2::new(
        x.min(viewport.width - width).max(0.0),
        y.min(viewport.height - header_height).max(0.0),
    )
}
