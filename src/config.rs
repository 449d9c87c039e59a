// Page configuration read from `data-*` attributes on `<body>`.
// Pure over an attribute lookup.

use cosmic_core::constants::{DEFAULT_MODE, DEFAULT_NAMESPACE, HEADER_HEIGHT_PX};
use cosmic_core::{ParallaxStyle, ParallaxTuning, SceneThresholds};

pub const ATTR_HUD_NAMESPACE: &str = "data-hud-namespace";
pub const ATTR_HUD_MODE: &str = "data-hud-mode";
pub const ATTR_HEADER_HEIGHT: &str = "data-hud-header-height";
pub const ATTR_PARALLAX_STYLE: &str = "data-parallax-style";
pub const ATTR_SCENE_THRESHOLDS: &str = "data-scene-thresholds";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub namespace: String,
    pub mode: String,
    pub header_height: f32,
    pub style: ParallaxStyle,
    pub thresholds: SceneThresholds,
    pub tuning: ParallaxTuning,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            mode: DEFAULT_MODE.to_string(),
            header_height: HEADER_HEIGHT_PX,
            style: ParallaxStyle::default(),
            thresholds: SceneThresholds::default(),
            tuning: ParallaxTuning::default(),
        }
    }
}

impl PageConfig {
    /// Build from an attribute lookup. Malformed values keep the default.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(ns) = get(ATTR_HUD_NAMESPACE).filter(|s| !s.trim().is_empty()) {
            cfg.namespace = ns.trim().to_string();
        }
        if let Some(mode) = get(ATTR_HUD_MODE).filter(|s| !s.trim().is_empty()) {
            cfg.mode = mode.trim().to_string();
        }
        if let Some(raw) = get(ATTR_HEADER_HEIGHT) {
            match raw.trim().parse::<f32>() {
                Ok(h) if h.is_finite() && h >= 0.0 => cfg.header_height = h,
                _ => log::warn!("[config] ignoring {}={:?}", ATTR_HEADER_HEIGHT, raw),
            }
        }
        if let Some(raw) = get(ATTR_PARALLAX_STYLE) {
            match raw.parse::<ParallaxStyle>() {
                Ok(style) => cfg.style = style,
                Err(()) => log::warn!("[config] ignoring {}={:?}", ATTR_PARALLAX_STYLE, raw),
            }
        }
        if let Some(raw) = get(ATTR_SCENE_THRESHOLDS) {
            match SceneThresholds::parse(&raw) {
                Some(t) => cfg.thresholds = t,
                None => log::warn!("[config] ignoring {}={:?}", ATTR_SCENE_THRESHOLDS, raw),
            }
        }
        cfg
    }
}
