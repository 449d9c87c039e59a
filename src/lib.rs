#![cfg(target_arch = "wasm32")]
use cosmic_core::{SceneController, ZCounter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod hud;
mod input;
mod scene;
mod storage;

use config::PageConfig;

/// Everything that must live as long as the page. Dropping it tears down
/// listeners, subscriptions and the animation-frame loop.
struct App {
    _shortcuts: Option<dom::Listener>,
    _hud: Rc<hud::Hud>,
    scene: scene::SceneBinding,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn read_config(document: &web::Document) -> PageConfig {
    match document.body() {
        Some(body) => PageConfig::from_attrs(|name| body.get_attribute(name)),
        None => PageConfig::default(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmic-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = read_config(&document);
    log::info!(
        "[config] hud={}/{} style={} thresholds={:?}",
        config.namespace,
        config.mode,
        config.style,
        config.thresholds.bounds()
    );

    // one counter for every panel on the page
    let z = ZCounter::new();
    let hud = Rc::new(hud::Hud::mount(
        &document,
        z,
        Rc::new(storage::LocalStorage),
        &config,
    )?);
    let shortcuts = events::wire_panel_shortcuts(hud.clone());

    let controller = SceneController::new(config.thresholds, config.style);
    let scene = scene::SceneBinding::mount(&document, controller, config.tuning);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _shortcuts: shortcuts,
            _hud: hud,
            scene,
        })
    });
    Ok(())
}

/// Switch the parallax style at runtime (`"3d"`, `"dripping"`, `"combined"`).
#[wasm_bindgen]
pub fn set_parallax_style(style: &str) -> bool {
    let Ok(style) = style.parse::<cosmic_core::ParallaxStyle>() else {
        log::warn!("[scene] unknown parallax style {:?}", style);
        return false;
    };
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .map(|a| a.scene.controller().set_style(style))
            .unwrap_or(false)
    })
}

/// Tear everything down, e.g. before a client-side navigation replaces the page.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("cosmic-web stopped");
    }
}
