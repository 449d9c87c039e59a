// Tuning defaults shared by the panel manager and the scene controller.
// The overridable structs (`ManagerConfig`, `SceneThresholds`, `ParallaxTuning`)
// take their `Default` values from here.

// Panels
pub const HEADER_HEIGHT_PX: f32 = 40.0; // part of a panel that must stay on-screen
pub const BASE_Z_INDEX: u32 = 1000; // first value handed out by a fresh counter
pub const DEFAULT_PANEL_WIDTH_PX: f32 = 320.0;

// Storage
pub const DEFAULT_NAMESPACE: &str = "hud";
pub const DEFAULT_MODE: &str = "Debug";
pub const POSITIONS_KEY_SUFFIX: &str = "positions";

// Scene thresholds (upper bounds, exclusive)
pub const DORMANT_UPPER: f32 = 0.2;
pub const AWAKENING_UPPER: f32 = 0.4;
pub const COSMIC_REVEAL_UPPER: f32 = 0.6;

// Parallax intensity per style
pub const INTENSITY_COMBINED: f32 = 1.0;
pub const INTENSITY_3D: f32 = 0.8;
pub const INTENSITY_OTHER: f32 = 0.4;

// Per-scene base multipliers applied to scroll-driven travel
pub const SCENE_MULT_DORMANT: f32 = 0.25;
pub const SCENE_MULT_AWAKENING: f32 = 0.5;
pub const SCENE_MULT_COSMIC_REVEAL: f32 = 0.8;
pub const SCENE_MULT_COSMIC_FLIGHT: f32 = 1.2;

// Travel distances (px at factor 1.0)
pub const SCROLL_TRAVEL_PX: f32 = 120.0;
pub const POINTER_TRAVEL_PX: f32 = 24.0;
pub const DRIP_SWAY_PX: f32 = 8.0; // sideways sway of the dripping style

// Motion smoothing
pub const OFFSET_SMOOTHING_TAU_SEC: f32 = 0.18;
pub const FLOAT_BOB_AMPLITUDE_PX: f32 = 6.0;
pub const FLOAT_BOB_PERIOD_SEC: f32 = 6.0;
