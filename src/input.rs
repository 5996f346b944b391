// Pure input helpers; no web-sys types so the host tests can include this file.

use viewer_core::PointerButton;

/// Map a DOM `MouseEvent.button` code.
#[inline]
pub fn pointer_button(code: i16) -> PointerButton {
    match code {
        0 => PointerButton::Primary,
        1 => PointerButton::Middle,
        2 => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// Backing-store size for a canvas of `css_w`×`css_h` CSS pixels. Never zero,
/// so the surface can always be configured.
#[inline]
pub fn canvas_backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_w), px(css_h))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelChoice {
    Guitar,
    Box,
}

/// Read the canvas `data-model` attribute; anything but `box` is the guitar.
#[inline]
pub fn model_choice(attr: Option<&str>) -> ModelChoice {
    match attr.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("box") => ModelChoice::Box,
        _ => ModelChoice::Guitar,
    }
}
