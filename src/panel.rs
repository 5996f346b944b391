//! Live tuning panel: one range input per entry of [`bindings::SLIDERS`],
//! grouped into a fieldset per section and appended to `#tuning-panel`.

use std::cell::RefCell;
use std::rc::Rc;

use viewer_core::Viewer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::bindings::{self, Section, SliderSpec};
use crate::constants::PANEL_ID;
use crate::dom;

struct SliderRow {
    spec: &'static SliderSpec,
    input: web::HtmlInputElement,
    readout: web::Element,
}

impl SliderRow {
    fn show(&self, value: f32) {
        self.input.set_value(&value.to_string());
        self.readout.set_text_content(Some(&format_value(self.spec, value)));
    }
}

pub struct Panel {
    rows: Vec<SliderRow>,
}

fn format_value(spec: &SliderSpec, value: f32) -> String {
    let step = spec.range.step;
    if step >= 1.0 {
        format!("{:.0}", value)
    } else if step >= 0.01 || step == 0.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    }
}

fn build_row(
    document: &web::Document,
    spec: &'static SliderSpec,
    parent: &web::Element,
) -> anyhow::Result<SliderRow> {
    let label = dom::create_element(document, "label")?;
    label.set_class_name("slider");
    let name = dom::create_element(document, "span")?;
    name.set_text_content(Some(spec.label));

    let input: web::HtmlInputElement = dom::create_element(document, "input")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_type("range");
    input.set_id(&format!("slider-{}", spec.id));
    input.set_min(&spec.range.min.to_string());
    input.set_max(&spec.range.max.to_string());
    if spec.range.step > 0.0 {
        input.set_step(&spec.range.step.to_string());
    } else {
        input.set_step("any");
    }

    let readout = dom::create_element(document, "output")?;

    _ = label.append_child(&name);
    _ = label.append_child(&input);
    _ = label.append_child(&readout);
    _ = parent.append_child(&label);

    Ok(SliderRow {
        spec,
        input,
        readout,
    })
}

fn wire_input(row: &SliderRow, viewer: Rc<RefCell<Viewer>>) {
    let spec = row.spec;
    let input = row.input.clone();
    let readout = row.readout.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = input.value_as_number() as f32;
        let result = bindings::apply(spec, &mut viewer.borrow_mut(), raw);
        match result {
            Ok(v) => {
                readout.set_text_content(Some(&format_value(spec, v)));
                log::debug!("[panel] {} = {}", spec.id, v);
            }
            Err(e) => log::warn!("[panel] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = row
        .input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

impl Panel {
    pub fn build(document: &web::Document, viewer: &Rc<RefCell<Viewer>>) -> anyhow::Result<Self> {
        let root = dom::element_by_id(document, PANEL_ID)?;
        let mut rows = Vec::with_capacity(bindings::SLIDERS.len());
        for section in Section::ALL {
            let fieldset = dom::create_element(document, "fieldset")?;
            let legend = dom::create_element(document, "legend")?;
            legend.set_text_content(Some(section.title()));
            _ = fieldset.append_child(&legend);
            for spec in bindings::in_section(section) {
                let row = build_row(document, spec, &fieldset)?;
                wire_input(&row, viewer.clone());
                rows.push(row);
            }
            _ = root.append_child(&fieldset);
        }
        let panel = Self { rows };
        panel.sync_all(&viewer.borrow());
        log::info!("[panel] {} sliders", panel.rows.len());
        Ok(panel)
    }

    /// Refresh every slider, e.g. after a reset or a keyboard nudge.
    pub fn sync_all(&self, viewer: &Viewer) {
        for row in &self.rows {
            row.show((row.spec.get)(viewer));
        }
    }

    /// Per-frame refresh of the sliders flagged `listen`.
    pub fn sync_listening(&self, viewer: &Viewer) {
        for row in self.rows.iter().filter(|r| r.spec.listen) {
            let value = (row.spec.get)(viewer);
            // leave a slider alone while it already shows the value
            if row.input.value_as_number() as f32 != value {
                row.show(value);
            }
        }
    }
}
