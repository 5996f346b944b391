use std::cell::RefCell;
use std::rc::Rc;

use viewer_core::{PointerButton, Viewer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PRIMARY_BUTTON;
use crate::input;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<Viewer>>,
}

/// Drag begins on the canvas; move and release are tracked on the window so
/// a drag survives leaving the canvas, and leaving the page ends it.
pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_mouseleave(&w);
    wire_wheel(&w);
}

fn wire_mousedown(w: &PointerWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        viewer
            .borrow_mut()
            .pointer_down(PointerButton::Primary, x, y);
        log::debug!("[mouse] down at ({},{})", x, y);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &PointerWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        viewer
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(w: &PointerWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut v = viewer.borrow_mut();
        let was_dragging = v.controller.is_dragging();
        v.pointer_up(input::pointer_button(ev.button()));
        if was_dragging && !v.controller.is_dragging() {
            let vel = v.controller.velocity();
            log::debug!(
                "[mouse] release, velocity ({:.4},{:.4},{:.4})",
                vel.x,
                vel.y,
                vel.z
            );
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseleave(w: &PointerWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        viewer.borrow_mut().pointer_leave();
    }) as Box<dyn FnMut(_)>);
    let root = web::window()
        .and_then(|wnd| wnd.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let viewer = w.viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        viewer.borrow_mut().wheel(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w.canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
