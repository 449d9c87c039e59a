//! Discrete scenes derived from scroll progress.

use crate::constants::{
    AWAKENING_UPPER, COSMIC_REVEAL_UPPER, DORMANT_UPPER, INTENSITY_3D, INTENSITY_COMBINED,
    INTENSITY_OTHER, SCENE_MULT_AWAKENING, SCENE_MULT_COSMIC_FLIGHT, SCENE_MULT_COSMIC_REVEAL,
    SCENE_MULT_DORMANT,
};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneName {
    Dormant,
    Awakening,
    CosmicReveal,
    CosmicFlight,
}

impl SceneName {
    pub const ALL: [SceneName; 4] = [
        SceneName::Dormant,
        SceneName::Awakening,
        SceneName::CosmicReveal,
        SceneName::CosmicFlight,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Name as written in markup (`data-scene`).
    pub fn as_str(self) -> &'static str {
        match self {
            SceneName::Dormant => "dormant",
            SceneName::Awakening => "awakening",
            SceneName::CosmicReveal => "cosmicReveal",
            SceneName::CosmicFlight => "cosmicFlight",
        }
    }

    /// Base multiplier for scroll-driven parallax travel.
    pub fn parallax_multiplier(self) -> f32 {
        match self {
            SceneName::Dormant => SCENE_MULT_DORMANT,
            SceneName::Awakening => SCENE_MULT_AWAKENING,
            SceneName::CosmicReveal => SCENE_MULT_COSMIC_REVEAL,
            SceneName::CosmicFlight => SCENE_MULT_COSMIC_FLIGHT,
        }
    }
}

impl fmt::Display for SceneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneName::ALL
            .into_iter()
            .find(|scene| scene.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Exclusive upper bounds of the first three scenes; the last scene takes
/// everything from the third bound up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneThresholds {
    bounds: [f32; 3],
}

impl SceneThresholds {
    /// Bounds must be finite, strictly ascending and inside `[0, 1]`.
    pub fn new(dormant: f32, awakening: f32, cosmic_reveal: f32) -> Option<Self> {
        let bounds = [dormant, awakening, cosmic_reveal];
        let in_range = bounds.iter().all(|b| b.is_finite() && (0.0..=1.0).contains(b));
        let ascending = bounds.windows(2).all(|w| w[0] < w[1]);
        (in_range && ascending).then_some(Self { bounds })
    }

    /// Parse `"0.2,0.4,0.6"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let values: Vec<f32> = raw
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .ok()?;
        match values.as_slice() {
            [a, b, c] => Self::new(*a, *b, *c),
            _ => None,
        }
    }

    pub fn bounds(&self) -> [f32; 3] {
        self.bounds
    }

    /// Pure lookup. A value exactly on a bound belongs to the upper scene.
    pub fn classify(&self, progress: f32) -> SceneName {
        let p = if progress.is_finite() { progress } else { 0.0 };
        if p < self.bounds[0] {
            SceneName::Dormant
        } else if p < self.bounds[1] {
            SceneName::Awakening
        } else if p < self.bounds[2] {
            SceneName::CosmicReveal
        } else {
            SceneName::CosmicFlight
        }
    }
}

impl Default for SceneThresholds {
    fn default() -> Self {
        Self {
            bounds: [DORMANT_UPPER, AWAKENING_UPPER, COSMIC_REVEAL_UPPER],
        }
    }
}

/// Classify against the default thresholds.
#[inline]
pub fn classify(progress: f32) -> SceneName {
    SceneThresholds::default().classify(progress)
}

/// How parallax offsets are composed. Chosen by the page, never by scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ParallaxStyle {
    #[default]
    ThreeD,
    Dripping,
    Combined,
}

impl ParallaxStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ParallaxStyle::ThreeD => "3d",
            ParallaxStyle::Dripping => "dripping",
            ParallaxStyle::Combined => "combined",
        }
    }
}

impl fmt::Display for ParallaxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParallaxStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "3d" => Ok(ParallaxStyle::ThreeD),
            "dripping" => Ok(ParallaxStyle::Dripping),
            "combined" => Ok(ParallaxStyle::Combined),
            _ => Err(()),
        }
    }
}

/// Pointer intensity per style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTuning {
    pub combined: f32,
    pub three_d: f32,
    pub other: f32,
}

impl ParallaxTuning {
    pub fn intensity(&self, style: ParallaxStyle) -> f32 {
        match style {
            ParallaxStyle::Combined => self.combined,
            ParallaxStyle::ThreeD => self.three_d,
            ParallaxStyle::Dripping => self.other,
        }
    }
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            combined: INTENSITY_COMBINED,
            three_d: INTENSITY_3D,
            other: INTENSITY_OTHER,
        }
    }
}
