#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use viewer_core::{Mesh, ModelTransform, Viewer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bindings;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod panel;
mod render;

use constants::{CANVAS_ID, MODEL_ATTR};
use input::ModelChoice;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_error(&document, &format!("Viewer failed to start: {:#}", e));
            }
        }
    });
    Ok(())
}

fn mesh_for(choice: ModelChoice) -> Mesh {
    match choice {
        ModelChoice::Guitar => Mesh::guitar_stand_in(),
        ModelChoice::Box => Mesh::unit_box(),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let viewer = Rc::new(RefCell::new(Viewer::new()));
    let choice = input::model_choice(canvas.get_attribute(MODEL_ATTR).as_deref());
    let mesh = mesh_for(choice);
    log::info!("[init] model {:?}", choice);

    // Input is live before the model is; the controller drops it until bind.
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
    });

    let panel = match panel::Panel::build(&document, &viewer) {
        Ok(p) => Some(Rc::new(p)),
        Err(e) => {
            log::warn!("[init] tuning panel unavailable: {:?}", e);
            None
        }
    };
    events::wire_global_keydown(document.clone(), viewer.clone(), panel.clone());

    let gpu = match frame::init_gpu(&canvas, &mesh).await {
        Ok(g) => {
            let mut v = viewer.borrow_mut();
            v.bind_model(ModelTransform::default());
            if let Some(p) = &panel {
                p.sync_all(&v);
            }
            Some(g)
        }
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            overlay::show_error(&document, &format!("WebGPU unavailable: {:#}", e));
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        viewer, canvas, document, gpu, panel,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
