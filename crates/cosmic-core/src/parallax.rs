//! Parallax offsets for decorative layers.
//!
//! Everything here is a pure function of its inputs; callers recompute on
//! each update instead of caching derived state.

use crate::constants::{DRIP_SWAY_PX, POINTER_TRAVEL_PX, SCROLL_TRAVEL_PX};
use crate::controller::SceneSnapshot;
use crate::scene::{ParallaxStyle, ParallaxTuning, SceneName};
use glam::Vec2;
use std::f32::consts::TAU;

/// Offset with the default intensity tuning.
#[inline]
pub fn compute_offset(
    factor: f32,
    style: ParallaxStyle,
    scene: SceneName,
    progress: f32,
    pointer: Vec2,
) -> Vec2 {
    compute_offset_with(&ParallaxTuning::default(), factor, style, scene, progress, pointer)
}

/// `pointer` is normalized to `[-1, 1]²` around the viewport centre.
pub fn compute_offset_with(
    tuning: &ParallaxTuning,
    factor: f32,
    style: ParallaxStyle,
    scene: SceneName,
    progress: f32,
    pointer: Vec2,
) -> Vec2 {
    let factor = if factor.is_finite() { factor } else { 0.0 };
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let pointer = if pointer.is_finite() {
        pointer.clamp(Vec2::splat(-1.0), Vec2::ONE)
    } else {
        Vec2::ZERO
    };

    let travel = progress * factor * SCROLL_TRAVEL_PX * scene.parallax_multiplier();
    let sway = (progress * TAU * 2.0).sin() * DRIP_SWAY_PX * factor;
    let scroll = match style {
        ParallaxStyle::ThreeD => Vec2::new(0.0, -travel),
        ParallaxStyle::Dripping => Vec2::new(sway, travel),
        ParallaxStyle::Combined => Vec2::new(sway, -travel),
    };

    // layers drift away from the pointer, nearer layers (higher factor) more
    let intensity = tuning.intensity(style);
    let drift = -pointer * factor * POINTER_TRAVEL_PX * intensity;

    scroll + drift
}

/// Per-element parallax settings. `None` fields inherit the broadcast value;
/// a `Some` always overrides it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub factor: f32,
    pub scene: Option<SceneName>,
    pub style: Option<ParallaxStyle>,
}

impl ParallaxLayer {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            scene: None,
            style: None,
        }
    }

    pub fn resolve(&self, snapshot: &SceneSnapshot) -> (SceneName, ParallaxStyle) {
        (
            self.scene.unwrap_or(snapshot.scene),
            self.style.unwrap_or(snapshot.style),
        )
    }

    pub fn offset(&self, snapshot: &SceneSnapshot, tuning: &ParallaxTuning) -> Vec2 {
        let (scene, style) = self.resolve(snapshot);
        compute_offset_with(
            tuning,
            self.factor,
            style,
            scene,
            snapshot.progress,
            snapshot.pointer,
        )
    }
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(1.0)
    }
}
