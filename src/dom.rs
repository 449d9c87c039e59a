use cosmic_core::Viewport;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current inner window size, or the default viewport before there is one.
pub fn viewport() -> Viewport {
    let size = web::window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some((width as f32, height as f32))
    });
    match size {
        Some((w, h)) => Viewport::new(w, h),
        None => Viewport::default(),
    }
}

/// Every element matching `selector` under `root`.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn child(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.query_selector(selector).ok().flatten()
}

pub fn attr_f32(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)?.trim().parse::<f32>().ok()
}

pub fn set_px(el: &web::HtmlElement, property: &str, value: f32) {
    _ = el.style().set_property(property, &format!("{:.1}px", value));
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Event listener that removes itself from its target when dropped.
///
/// Never drop one from inside its own handler; detach and re-attach
/// long-lived handlers with [`Listener::attach`] / [`Listener::detach`].
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: Cell<bool>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        Self {
            target: target.clone(),
            event,
            closure,
            attached: Cell::new(false),
        }
    }

    /// Create and attach to the window. `None` when there is no window.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let window = web::window()?;
        let listener = Self::new(window.as_ref(), event, handler);
        listener.attach();
        Some(listener)
    }

    pub fn attach(&self) {
        if self.attached.get() {
            return;
        }
        match self
            .target
            .add_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            Ok(()) => self.attached.set(true),
            Err(e) => log::error!("[dom] add {} listener failed: {:?}", self.event, e),
        }
    }

    pub fn detach(&self) {
        if !self.attached.get() {
            return;
        }
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        self.attached.set(false);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}
