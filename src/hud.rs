//! DOM binding for the floating HUD panels.
//!
//! Panels are authored in the page as `.hud-panel` elements. At mount we
//! build a catalog from their `data-panel-*` attributes, hand it to a
//! [`PanelManager`], and mirror every [`PanelEvent`] back onto the elements.
//! Window-level pointer listeners exist only while a drag is in progress.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::input;
use cosmic_core::{
    KvStore, ManagerConfig, PanelEvent, PanelManager, PanelSpec, PositionStore, ZCounter,
};
use glam::Vec2;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

type Elements = Rc<HashMap<String, web::HtmlElement>>;

pub struct Hud {
    manager: Rc<RefCell<PanelManager>>,
    _drag: Rc<DragSession>,
    _listeners: Vec<Listener>,
}

impl Hud {
    pub fn mount(
        document: &web::Document,
        z: ZCounter,
        store: Rc<dyn KvStore>,
        config: &crate::config::PageConfig,
    ) -> anyhow::Result<Self> {
        let mut elements: HashMap<String, web::HtmlElement> = HashMap::new();
        let mut catalog = Vec::new();
        let mut initial = Vec::new();
        for (index, el) in dom::query_all(document, PANEL_SELECTOR).into_iter().enumerate() {
            let Some(spec) = spec_from_element(&el, index) else {
                log::warn!("[hud] panel #{} has no {}", index, ATTR_PANEL_ID);
                continue;
            };
            if elements.contains_key(&spec.id) {
                log::warn!("[hud] duplicate panel id {}, keeping the first", spec.id);
                continue;
            }
            if el.has_attribute(ATTR_PANEL_VISIBLE) {
                initial.push(spec.id.clone());
            }
            dom::set_class(&el, CLASS_HIDDEN, true);
            elements.insert(spec.id.clone(), el);
            catalog.push(spec);
        }
        let elements: Elements = Rc::new(elements);

        let mut manager = PanelManager::new(
            ManagerConfig {
                header_height: config.header_height,
            },
            dom::viewport(),
            z,
            Some(PositionStore::new(store, &config.namespace, &config.mode)),
        )
        .with_catalog(catalog);
        let render_elements = elements.clone();
        manager.set_listener(move |ev| render(&render_elements, ev));
        manager.show_initial(initial.iter().map(String::as_str));
        log::info!(
            "[hud] mounted {} panels ({} visible) for {}/{}",
            elements.len(),
            manager.len(),
            config.namespace,
            config.mode
        );

        let manager = Rc::new(RefCell::new(manager));
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let drag = DragSession::new(&window, manager.clone(), elements.clone());

        let mut listeners = Vec::new();
        for (id, el) in elements.iter() {
            wire_panel(&mut listeners, id, el, &manager, &drag);
        }

        let resize_manager = manager.clone();
        if let Some(l) = Listener::on_window("resize", move |_ev| {
            resize_manager.borrow_mut().set_viewport(dom::viewport());
        }) {
            listeners.push(l);
        }

        Ok(Self {
            manager,
            _drag: drag,
            _listeners: listeners,
        })
    }

    /// Toggle whichever catalog panel owns `slot`.
    pub fn toggle_slot(&self, slot: u8) -> Option<bool> {
        let mut m = self.manager.borrow_mut();
        let id = m.spec_for_slot(slot)?.id.clone();
        let visible = m.toggle(&id);
        log::info!("[hud] slot {} -> {} visible={}", slot, id, visible);
        Some(visible)
    }

    pub fn hide_all(&self) {
        self.manager.borrow_mut().hide_all();
    }

    pub fn reset_layout(&self) {
        self.manager.borrow_mut().reset_positions();
    }
}

fn spec_from_element(el: &web::HtmlElement, index: usize) -> Option<PanelSpec> {
    let id = el.get_attribute(ATTR_PANEL_ID)?.trim().to_string();
    if id.is_empty() {
        return None;
    }
    let title = el
        .get_attribute(ATTR_PANEL_TITLE)
        .unwrap_or_else(|| id.clone());
    let cascade = index as f32 * PANEL_CASCADE_STEP;
    let x = dom::attr_f32(el, ATTR_PANEL_X).unwrap_or(FALLBACK_PANEL_X + cascade);
    let y = dom::attr_f32(el, ATTR_PANEL_Y).unwrap_or(FALLBACK_PANEL_Y + cascade);
    let mut spec = PanelSpec::new(&id, &title, Vec2::new(x, y));

    let measured = el.offset_width() as f32;
    match dom::attr_f32(el, ATTR_PANEL_WIDTH) {
        Some(w) if w > 0.0 => spec = spec.with_width(w),
        _ if measured > 0.0 => spec = spec.with_width(measured),
        _ => {}
    }
    if let Some(slot) = el
        .get_attribute(ATTR_PANEL_SLOT)
        .and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|s| (1..=10).contains(s))
    {
        spec = spec.with_slot(slot);
    }
    Some(spec)
}

fn wire_panel(
    listeners: &mut Vec<Listener>,
    id: &str,
    el: &web::HtmlElement,
    manager: &Rc<RefCell<PanelManager>>,
    drag: &Rc<DragSession>,
) {
    let header = dom::child(el, HEADER_SELECTOR).unwrap_or_else(|| el.clone().into());

    let (down_id, down_manager, down_drag) = (id.to_string(), manager.clone(), drag.clone());
    let down = Listener::new(header.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !input::is_primary_press(ev) || on_control(ev) {
            return;
        }
        down_drag.begin(&down_manager, &down_id, input::client_point(ev));
        ev.prevent_default();
    });
    down.attach();
    listeners.push(down);

    if let Some(button) = dom::child(el, MINIMIZE_SELECTOR) {
        let (min_id, min_manager) = (id.to_string(), manager.clone());
        let l = Listener::new(button.as_ref(), "click", move |_ev| {
            min_manager.borrow_mut().toggle_minimize(&min_id);
        });
        l.attach();
        listeners.push(l);
    }

    if let Some(button) = dom::child(el, CLOSE_SELECTOR) {
        let (close_id, close_manager) = (id.to_string(), manager.clone());
        let l = Listener::new(button.as_ref(), "click", move |_ev| {
            close_manager.borrow_mut().hide(&close_id);
        });
        l.attach();
        listeners.push(l);
    }
}

// Presses on the header's buttons are clicks, not drags.
fn on_control(ev: &web::PointerEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| {
            el.closest(&format!("{}, {}", MINIMIZE_SELECTOR, CLOSE_SELECTOR))
                .ok()
                .flatten()
        })
        .is_some()
}

fn render(elements: &Elements, ev: &PanelEvent) {
    match ev {
        PanelEvent::Shown(panel) => {
            if let Some(el) = elements.get(&panel.id) {
                dom::set_class(el, CLASS_HIDDEN, false);
                dom::set_class(el, CLASS_MINIMIZED, panel.minimized);
                dom::set_px(el, "left", panel.position.x);
                dom::set_px(el, "top", panel.position.y);
                dom::set_px(el, "width", panel.width);
                _ = el.style().set_property("z-index", &panel.z_index.to_string());
            }
        }
        PanelEvent::Hidden { id } => {
            if let Some(el) = elements.get(id) {
                dom::set_class(el, CLASS_HIDDEN, true);
                dom::set_class(el, CLASS_DRAGGING, false);
            }
        }
        PanelEvent::Moved { id, position } => {
            if let Some(el) = elements.get(id) {
                dom::set_px(el, "left", position.x);
                dom::set_px(el, "top", position.y);
            }
        }
        PanelEvent::Raised { id, z_index } => {
            if let Some(el) = elements.get(id) {
                _ = el.style().set_property("z-index", &z_index.to_string());
            }
        }
        PanelEvent::MinimizeToggled { id, minimized } => {
            if let Some(el) = elements.get(id) {
                dom::set_class(el, CLASS_MINIMIZED, *minimized);
            }
        }
    }
}

/// Window-level move/up listeners for the panel being dragged. Built once,
/// attached at drag start and detached at drag end.
struct DragSession {
    manager: Weak<RefCell<PanelManager>>,
    elements: Elements,
    panel: RefCell<Option<String>>,
    moves: Listener,
    ups: Listener,
    cancels: Listener,
}

impl DragSession {
    fn new(
        window: &web::Window,
        manager: Rc<RefCell<PanelManager>>,
        elements: Elements,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<DragSession>| {
            let w_move = weak.clone();
            let moves = Listener::new(window.as_ref(), "pointermove", move |ev: web::Event| {
                let (Some(session), Some(ev)) = (w_move.upgrade(), ev.dyn_ref::<web::PointerEvent>())
                else {
                    return;
                };
                session.follow(input::client_point(ev));
            });
            let w_up = weak.clone();
            let ups = Listener::new(window.as_ref(), "pointerup", move |_ev| {
                if let Some(session) = w_up.upgrade() {
                    session.finish();
                }
            });
            // a cancelled pointer still commits the last position
            let w_cancel = weak.clone();
            let cancels = Listener::new(window.as_ref(), "pointercancel", move |_ev| {
                if let Some(session) = w_cancel.upgrade() {
                    session.finish();
                }
            });
            DragSession {
                manager: Rc::downgrade(&manager),
                elements,
                panel: RefCell::new(None),
                moves,
                ups,
                cancels,
            }
        })
    }

    fn begin(&self, manager: &Rc<RefCell<PanelManager>>, id: &str, pointer: Vec2) {
        if manager.borrow_mut().begin_drag(id, pointer).is_none() {
            return;
        }
        // a second pointer cannot start another drag mid-drag
        if let Some(previous) = self.panel.replace(Some(id.to_string())) {
            if previous != id {
                manager.borrow_mut().end_drag(&previous);
                self.mark(&previous, false);
            }
        }
        self.mark(id, true);
        self.moves.attach();
        self.ups.attach();
        self.cancels.attach();
    }

    fn follow(&self, pointer: Vec2) {
        let Some(manager) = self.manager.upgrade() else {
            return;
        };
        if let Some(id) = self.panel.borrow().as_deref() {
            manager.borrow_mut().update_drag(id, pointer);
        }
    }

    fn finish(&self) {
        if let Some(id) = self.panel.take() {
            if let Some(manager) = self.manager.upgrade() {
                manager.borrow_mut().end_drag(&id);
            }
            self.mark(&id, false);
        }
        self.moves.detach();
        self.ups.detach();
        self.cancels.detach();
    }

    fn mark(&self, id: &str, dragging: bool) {
        if let Some(el) = self.elements.get(id) {
            dom::set_class(el, CLASS_DRAGGING, dragging);
        }
    }
}
