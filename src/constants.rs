// Markup contract between the page and the front-end.
// Panels and layers are authored in HTML; these names are how we find them.

// HUD panels
pub const PANEL_SELECTOR: &str = ".hud-panel";
pub const HEADER_SELECTOR: &str = ".hud-header";
pub const MINIMIZE_SELECTOR: &str = ".hud-minimize";
pub const CLOSE_SELECTOR: &str = ".hud-close";

pub const ATTR_PANEL_ID: &str = "data-panel-id";
pub const ATTR_PANEL_TITLE: &str = "data-panel-title";
pub const ATTR_PANEL_SLOT: &str = "data-panel-slot"; // 1..=10, Alt+digit
pub const ATTR_PANEL_X: &str = "data-panel-x";
pub const ATTR_PANEL_Y: &str = "data-panel-y";
pub const ATTR_PANEL_WIDTH: &str = "data-panel-width";
pub const ATTR_PANEL_VISIBLE: &str = "data-panel-visible"; // present = shown at mount

pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_MINIMIZED: &str = "minimized";
pub const CLASS_DRAGGING: &str = "dragging";

// Decorative parallax layers
pub const LAYER_SELECTOR: &str = "[data-parallax-factor]";
pub const ATTR_LAYER_FACTOR: &str = "data-parallax-factor";
pub const ATTR_LAYER_SCENE: &str = "data-parallax-scene"; // absent = follow the page
pub const ATTR_LAYER_STYLE: &str = "data-parallax-style"; // absent = follow the page
pub const ATTR_LAYER_PHASE: &str = "data-float-phase"; // bob phase in turns

// Body
pub const ATTR_SCENE: &str = "data-scene";
pub const ATTR_SCROLL_PROGRESS: &str = "data-scroll-progress";

// Page-level defaults
pub const FALLBACK_PANEL_X: f32 = 24.0;
pub const FALLBACK_PANEL_Y: f32 = 24.0;
pub const PANEL_CASCADE_STEP: f32 = 32.0; // offset between panels without a default position
