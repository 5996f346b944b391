use std::cell::RefCell;
use std::rc::Rc;

use viewer_core::{Shortcut, Viewer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PANEL_ID;
use crate::overlay;
use crate::panel::Panel;

/// Skip shortcuts while the user is typing into a form control.
fn typing_target(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.type_() != "range")
        .unwrap_or(false)
}

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    viewer: &Rc<RefCell<Viewer>>,
    panel: Option<&Panel>,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_target(ev) {
        return;
    }
    let Some(shortcut) = Shortcut::from_key(&ev.key()) else {
        return;
    };
    match shortcut {
        Shortcut::TogglePanel => {
            overlay::toggle(document, PANEL_ID);
            log::info!("[keys] panel hidden={}", overlay::is_hidden(document, PANEL_ID));
        }
        other => {
            let mut v = viewer.borrow_mut();
            v.apply_shortcut(other);
            if let Some(p) = panel {
                p.sync_all(&v);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(
    document: web::Document,
    viewer: Rc<RefCell<Viewer>>,
    panel: Option<Rc<Panel>>,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &document, &viewer, panel.as_deref());
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
