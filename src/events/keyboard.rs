use crate::dom::Listener;
use crate::hud::Hud;
use crate::input;
use cosmic_core::{command_for_key, HudCommand};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_panel_keydown(ev: &web::KeyboardEvent, hud: &Hud) {
    if ev.repeat() {
        return;
    }
    let modifier = input::panel_modifier_held(ev.alt_key(), ev.ctrl_key(), ev.meta_key());
    let Some(command) = command_for_key(&ev.key(), &ev.code(), modifier) else {
        return;
    };
    match command {
        HudCommand::Toggle(slot) => {
            if hud.toggle_slot(slot).is_none() {
                log::debug!("[keys] no panel on slot {}", slot);
                return;
            }
        }
        HudCommand::HideAll => {
            hud.hide_all();
            log::info!("[keys] hid all panels");
        }
        HudCommand::ResetLayout => hud.reset_layout(),
    }
    ev.prevent_default();
}

pub fn wire_panel_shortcuts(hud: Rc<Hud>) -> Option<Listener> {
    Listener::on_window("keydown", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_panel_keydown(ev, &hud);
        }
    })
}
