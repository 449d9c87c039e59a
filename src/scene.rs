//! Browser side of the scroll scene controller.
//!
//! Exactly one `scroll`, one `resize` and one `pointermove` listener feed the
//! shared [`SceneController`]; every decorative layer subscribes to it and
//! eases toward its own parallax offset on the animation-frame loop.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input;
use cosmic_core::constants::{
    FLOAT_BOB_AMPLITUDE_PX, FLOAT_BOB_PERIOD_SEC, OFFSET_SMOOTHING_TAU_SEC,
};
use cosmic_core::{
    float_bob, smooth_toward, ParallaxLayer, ParallaxStyle, ParallaxTuning, SceneController,
    SceneName, ScrollMetrics, ScrollSource, Subscription,
};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll readings from the live window and document.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn metrics(&self) -> Option<ScrollMetrics> {
        let window = web::window()?;
        let root = window.document()?.document_element()?;
        Some(ScrollMetrics {
            scroll_y: window.scroll_y().ok()?,
            scroll_height: root.scroll_height() as f64,
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }
}

struct Layer {
    el: web::HtmlElement,
    phase: f32,
    target: Rc<Cell<Vec2>>,
    current: Vec2,
}

/// Field order is teardown order: stop the frame loop, then drop
/// subscriptions, then remove the window listeners.
pub struct SceneBinding {
    controller: SceneController,
    _frames: Option<FrameLoop>,
    _subscriptions: Vec<Subscription>,
    _listeners: Vec<Listener>,
}

impl SceneBinding {
    pub fn mount(
        document: &web::Document,
        controller: SceneController,
        tuning: ParallaxTuning,
    ) -> Self {
        let mut subscriptions = Vec::new();

        if let Some(body) = document.body() {
            let body: web::Element = body.into();
            subscriptions.push(controller.subscribe(move |snap| {
                _ = body.set_attribute(ATTR_SCROLL_PROGRESS, &format!("{:.3}", snap.progress));
                if snap.scene_changed || body.get_attribute(ATTR_SCENE).is_none() {
                    _ = body.set_attribute(ATTR_SCENE, snap.scene.as_str());
                }
            }));
        }

        let layers: Rc<RefCell<Vec<Layer>>> = Rc::new(RefCell::new(Vec::new()));
        for el in dom::query_all(document, LAYER_SELECTOR) {
            let (layer, phase) = layer_from_element(&el);
            let target = Rc::new(Cell::new(Vec2::ZERO));
            let sink = target.clone();
            subscriptions.push(controller.subscribe(move |snap| {
                sink.set(layer.offset(snap, &tuning));
            }));
            layers.borrow_mut().push(Layer {
                el,
                phase,
                current: target.get(),
                target,
            });
        }
        log::info!(
            "[scene] {} parallax layers, {} subscribers",
            layers.borrow().len(),
            controller.subscriber_count()
        );

        let mut listeners = Vec::new();
        let scroll_ctl = controller.clone();
        listeners.extend(Listener::on_window("scroll", move |_ev| {
            scroll_ctl.sample(&WindowScroll);
        }));
        let resize_ctl = controller.clone();
        listeners.extend(Listener::on_window("resize", move |_ev| {
            resize_ctl.sample(&WindowScroll);
        }));
        let pointer_ctl = controller.clone();
        listeners.extend(Listener::on_window("pointermove", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                pointer_ctl.set_pointer(input::pointer_ndc(input::client_point(ev), dom::viewport()));
            }
        }));

        // first sample after listeners exist so nothing is missed in between
        controller.sample(&WindowScroll);

        let frames = if layers.borrow().is_empty() {
            None
        } else {
            let mut elapsed = 0.0_f32;
            FrameLoop::start(move |dt_sec| {
                elapsed += dt_sec;
                for layer in layers.borrow_mut().iter_mut() {
                    layer.current = smooth_toward(
                        layer.current,
                        layer.target.get(),
                        dt_sec,
                        OFFSET_SMOOTHING_TAU_SEC,
                    );
                    let bob = float_bob(elapsed, FLOAT_BOB_AMPLITUDE_PX, FLOAT_BOB_PERIOD_SEC, layer.phase);
                    _ = layer.el.style().set_property(
                        "transform",
                        &format!(
                            "translate3d({:.2}px, {:.2}px, 0)",
                            layer.current.x,
                            layer.current.y + bob
                        ),
                    );
                }
            })
        };

        Self {
            controller,
            _frames: frames,
            _subscriptions: subscriptions,
            _listeners: listeners,
        }
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }
}

fn layer_from_element(el: &web::HtmlElement) -> (ParallaxLayer, f32) {
    let factor = dom::attr_f32(el, ATTR_LAYER_FACTOR)
        .filter(|f| f.is_finite())
        .unwrap_or(1.0);
    let scene = el
        .get_attribute(ATTR_LAYER_SCENE)
        .and_then(|s| s.parse::<SceneName>().ok());
    let style = el
        .get_attribute(ATTR_LAYER_STYLE)
        .and_then(|s| s.parse::<ParallaxStyle>().ok());
    let phase = dom::attr_f32(el, ATTR_LAYER_PHASE).unwrap_or(0.0);
    (
        ParallaxLayer {
            factor,
            scene,
            style,
        },
        phase,
    )
}
