use crate::constants::{DEFAULT_PANEL_WIDTH_PX, HEADER_HEIGHT_PX};
use glam::Vec2;

/// One visible floating panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: String,
    pub position: Vec2,
    pub width: f32,
    pub minimized: bool,
    pub z_index: u32,
    // pointer minus top-left, captured at drag start
    pub(crate) drag_offset: Option<Vec2>,
}

impl Panel {
    pub(crate) fn new(id: &str, position: Vec2, width: f32, z_index: u32) -> Self {
        Self {
            id: id.to_string(),
            position,
            width,
            minimized: false,
            z_index,
            drag_offset: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }
}

/// Catalog entry describing a panel a HUD set knows how to show.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSpec {
    pub id: String,
    pub title: String,
    pub default_position: Vec2,
    pub width: f32,
    /// Keyboard slot (1..=10) for the modifier+digit toggle shortcut.
    pub slot: Option<u8>,
}

impl PanelSpec {
    pub fn new(id: &str, title: &str, default_position: Vec2) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            default_position,
            width: DEFAULT_PANEL_WIDTH_PX,
            slot: None,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_slot(mut self, slot: u8) -> Self {
        self.slot = Some(slot);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManagerConfig {
    pub header_height: f32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT_PX,
        }
    }
}

/// Change notifications delivered to the manager's owner.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    Shown(Panel),
    Hidden { id: String },
    Moved { id: String, position: Vec2 },
    Raised { id: String, z_index: u32 },
    MinimizeToggled { id: String, minimized: bool },
}
