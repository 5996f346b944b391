use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn create_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

/// Resize the canvas backing store to CSS size × devicePixelRatio.
/// Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = input::canvas_backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    (w, h)
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = sync_canvas_backing_size(&canvas_resize);
        log::debug!("[dom] canvas resized to {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
