pub mod keyboard;

pub use keyboard::wire_panel_shortcuts;
