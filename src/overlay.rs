use viewer_core::MotionPhase;
use web_sys as web;

use crate::constants::{ERROR_ID, HIDDEN_CLASS, STATUS_ID};

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.remove_attribute("style");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    el.class_list().contains(HIDDEN_CLASS)
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Motion phase and angular speed (radians per frame) in the status corner.
pub fn update_status(document: &web::Document, phase: MotionPhase, speed: f32, ready: bool) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        let text = if ready {
            format!("{} • {:.4} rad/frame", phase.label(), speed)
        } else {
            "Loading model…".to_string()
        };
        el.set_text_content(Some(&text));
    }
}

/// Put a startup failure on the page instead of leaving it blank.
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(ERROR_ID) {
        el.set_text_content(Some(message));
        show(document, ERROR_ID);
    } else if let Some(body) = document.body() {
        if let Ok(el) = document.create_element("div") {
            el.set_id(ERROR_ID);
            _ = el.set_attribute(
                "style",
                "position:fixed;top:0;left:0;right:0;padding:12px;background:#b00020;color:#fff;font:14px system-ui;",
            );
            el.set_text_content(Some(message));
            _ = body.append_child(&el);
        }
    }
}
