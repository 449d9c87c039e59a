//! Floating panel windowing: visibility, drag, z-order, minimize and
//! position persistence for one HUD set.
//!
//! The manager is a plain state machine driven by the caller's pointer
//! events. It never touches the platform; the owner renders from the
//! [`PanelEvent`]s it emits.

use crate::geometry::{clamp_position, Viewport};
use crate::panel::{ManagerConfig, Panel, PanelEvent, PanelSpec};
use crate::storage::PositionStore;
use crate::zorder::ZCounter;
use fnv::FnvHashMap;
use glam::Vec2;

type Listener = Box<dyn FnMut(&PanelEvent)>;

pub struct PanelManager {
    config: ManagerConfig,
    viewport: Viewport,
    z: ZCounter,
    store: Option<PositionStore>,
    // read once at mount, kept in sync with our own writes
    persisted: FnvHashMap<String, Vec2>,
    catalog: Vec<PanelSpec>,
    panels: FnvHashMap<String, Panel>,
    listener: Option<Listener>,
}

impl PanelManager {
    pub fn new(
        config: ManagerConfig,
        viewport: Viewport,
        z: ZCounter,
        store: Option<PositionStore>,
    ) -> Self {
        let persisted = store.as_ref().map(|s| s.load()).unwrap_or_default();
        if let Some(s) = &store {
            log::debug!(
                "[hud] mounted {} with {} persisted positions",
                s.key(),
                persisted.len()
            );
        }
        Self {
            config,
            viewport,
            z,
            store,
            persisted,
            catalog: Vec::new(),
            panels: FnvHashMap::default(),
            listener: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Vec<PanelSpec>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&PanelEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> ManagerConfig {
        self.config
    }

    pub fn catalog(&self) -> &[PanelSpec] {
        &self.catalog
    }

    pub fn spec(&self, id: &str) -> Option<&PanelSpec> {
        self.catalog.iter().find(|s| s.id == id)
    }

    pub fn spec_for_slot(&self, slot: u8) -> Option<&PanelSpec> {
        self.catalog.iter().find(|s| s.slot == Some(slot))
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.get(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Visible panel ids ordered back to front.
    pub fn stacking_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&Panel> = self.panels.values().collect();
        ordered.sort_by_key(|p| p.z_index);
        ordered.into_iter().map(|p| p.id.as_str()).collect()
    }

    pub fn any_dragging(&self) -> bool {
        self.panels.values().any(Panel::is_dragging)
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.panels.get(id).is_some_and(Panel::is_dragging)
    }

    /// Register `id` if it is not already visible. A persisted position wins
    /// over `initial_position`; either is clamped to the current viewport.
    pub fn show(&mut self, id: &str, initial_position: Vec2, width: f32) -> &Panel {
        if !self.panels.contains_key(id) {
            let start = self.persisted.get(id).copied().unwrap_or(initial_position);
            let position = self.clamp(start, width);
            let panel = Panel::new(id, position, width, self.z.activate());
            log::debug!(
                "[hud] show {} at ({:.0},{:.0}) z={}",
                id,
                position.x,
                position.y,
                panel.z_index
            );
            self.emit(PanelEvent::Shown(panel.clone()));
            self.panels.insert(id.to_string(), panel);
        }
        &self.panels[id]
    }

    /// Show a catalog panel at its default placement.
    pub fn show_spec(&mut self, id: &str) -> Option<&Panel> {
        let spec = self.spec(id)?.clone();
        Some(self.show(&spec.id, spec.default_position, spec.width))
    }

    /// Show every catalog panel named in `ids`; unknown ids are skipped.
    pub fn show_initial<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            if self.show_spec(id).is_none() {
                log::warn!("[hud] no catalog entry for initial panel {}", id);
            }
        }
    }

    pub fn hide(&mut self, id: &str) -> bool {
        match self.panels.remove(id) {
            Some(_) => {
                log::debug!("[hud] hide {}", id);
                self.emit(PanelEvent::Hidden { id: id.to_string() });
                true
            }
            None => false,
        }
    }

    pub fn hide_all(&mut self) {
        let ids: Vec<String> = self.stacking_order().iter().map(|s| s.to_string()).collect();
        for id in ids {
            self.hide(&id);
        }
    }

    /// Flip visibility of a catalog panel. Returns the new visibility.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.hide(id) {
            return false;
        }
        self.show_spec(id).is_some()
    }

    /// Capture the pointer offset and raise the panel to the top.
    pub fn begin_drag(&mut self, id: &str, pointer: Vec2) -> Option<u32> {
        if !self.panels.contains_key(id) {
            return None;
        }
        let z_index = self.z.activate();
        let panel = self.panels.get_mut(id)?;
        panel.drag_offset = Some(pointer - panel.position);
        panel.z_index = z_index;
        log::debug!("[hud] begin drag {} z={}", id, z_index);
        self.emit(PanelEvent::Raised {
            id: id.to_string(),
            z_index,
        });
        Some(z_index)
    }

    /// Follow the pointer. No-op unless `id` is between begin and end.
    pub fn update_drag(&mut self, id: &str, pointer: Vec2) -> Option<Vec2> {
        let header_height = self.config.header_height;
        let viewport = self.viewport;
        let panel = self.panels.get_mut(id)?;
        let offset = panel.drag_offset?;
        let next = clamp_position(pointer - offset, panel.width, header_height, viewport);
        if next != panel.position {
            panel.position = next;
            self.emit(PanelEvent::Moved {
                id: id.to_string(),
                position: next,
            });
        }
        Some(next)
    }

    /// Release the drag and commit the last position.
    pub fn end_drag(&mut self, id: &str) -> Option<Vec2> {
        let panel = self.panels.get_mut(id)?;
        panel.drag_offset.take()?;
        let position = panel.position;
        log::debug!(
            "[hud] end drag {} at ({:.0},{:.0})",
            id,
            position.x,
            position.y
        );
        self.persist(id, position);
        Some(position)
    }

    /// End every drag in progress, e.g. on a window-level pointerup.
    pub fn end_all_drags(&mut self) -> Vec<String> {
        let ids: Vec<String> = self
            .panels
            .values()
            .filter(|p| p.is_dragging())
            .map(|p| p.id.clone())
            .collect();
        for id in &ids {
            self.end_drag(id);
        }
        ids
    }

    pub fn toggle_minimize(&mut self, id: &str) -> Option<bool> {
        let panel = self.panels.get_mut(id)?;
        panel.minimized = !panel.minimized;
        let minimized = panel.minimized;
        self.emit(PanelEvent::MinimizeToggled {
            id: id.to_string(),
            minimized,
        });
        Some(minimized)
    }

    /// Place a panel directly, clamped, and persist it.
    pub fn move_to(&mut self, id: &str, position: Vec2) -> Option<Vec2> {
        let width = self.panels.get(id)?.width;
        let next = self.clamp(position, width);
        if let Some(panel) = self.panels.get_mut(id) {
            panel.position = next;
        }
        self.emit(PanelEvent::Moved {
            id: id.to_string(),
            position: next,
        });
        self.persist(id, next);
        Some(next)
    }

    /// Adopt a new viewport and pull every panel back inside it. The
    /// persisted positions are left alone so a larger viewport restores them.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let header_height = self.config.header_height;
        let mut moved = Vec::new();
        for panel in self.panels.values_mut() {
            let next = clamp_position(panel.position, panel.width, header_height, viewport);
            if next != panel.position {
                panel.position = next;
                moved.push(PanelEvent::Moved {
                    id: panel.id.clone(),
                    position: next,
                });
            }
        }
        for ev in moved {
            self.emit(ev);
        }
    }

    /// Forget persisted positions and return visible catalog panels to
    /// their defaults.
    pub fn reset_positions(&mut self) {
        if let Some(store) = &self.store {
            store.clear();
        }
        self.persisted.clear();
        let defaults: Vec<(String, Vec2)> = self
            .catalog
            .iter()
            .filter(|s| self.panels.contains_key(&s.id))
            .map(|s| (s.id.clone(), s.default_position))
            .collect();
        for (id, position) in defaults {
            let width = self.panels[&id].width;
            let next = self.clamp(position, width);
            if let Some(panel) = self.panels.get_mut(&id) {
                panel.position = next;
            }
            self.emit(PanelEvent::Moved { id, position: next });
        }
        log::info!("[hud] layout reset");
    }

    fn clamp(&self, position: Vec2, width: f32) -> Vec2 {
        clamp_position(position, width, self.config.header_height, self.viewport)
    }

    fn persist(&mut self, id: &str, position: Vec2) {
        self.persisted.insert(id.to_string(), position);
        if let Some(store) = &self.store {
            store.persist_position(id, position);
        }
    }

    fn emit(&mut self, event: PanelEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }
}
