//! Platform-independent core of the cosmic landing page front-end.
//!
//! Two independent pieces live here: the floating HUD panel manager
//! (drag, z-order, clamping, persistence) and the scroll scene controller
//! (scene classification, parallax math, subscriber broadcast). Neither
//! references browser APIs; the web crate supplies storage, scroll readings
//! and pointer input.

pub mod constants;
pub mod controller;
pub mod geometry;
pub mod manager;
pub mod motion;
pub mod panel;
pub mod parallax;
pub mod scene;
pub mod scroll;
pub mod shortcuts;
pub mod storage;
pub mod zorder;

pub use controller::{SceneController, SceneSnapshot, Subscription};
pub use geometry::{clamp_position, Viewport};
pub use manager::PanelManager;
pub use motion::{float_bob, smooth_toward};
pub use panel::{ManagerConfig, Panel, PanelEvent, PanelSpec};
pub use parallax::{compute_offset, compute_offset_with, ParallaxLayer};
pub use scene::{classify, ParallaxStyle, ParallaxTuning, SceneName, SceneThresholds};
pub use scroll::{sample_scroll, scroll_progress, ScrollMetrics, ScrollSource};
pub use shortcuts::{command_for_key, slot_for_code, slot_for_key, HudCommand};
pub use storage::{positions_key, KvStore, MemoryStore, NullStore, PositionStore, StorageError};
pub use zorder::ZCounter;
