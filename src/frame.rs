use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use viewer_core::{Mesh, MotionPhase, Viewer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{FPS_LOG_INTERVAL_SEC, STATUS_REFRESH_FRAMES};
use crate::overlay;
use crate::panel::Panel;
use crate::render;

pub struct FrameContext<'a> {
    pub viewer: Rc<RefCell<Viewer>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub panel: Option<Rc<Panel>>,

    pub last_phase: Option<MotionPhase>,
    pub frames_since_status: u32,
    pub fps_window_start: Instant,
    pub fps_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        viewer: Rc<RefCell<Viewer>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState<'a>>,
        panel: Option<Rc<Panel>>,
    ) -> Self {
        Self {
            viewer,
            canvas,
            document,
            gpu,
            panel,
            last_phase: None,
            frames_since_status: 0,
            fps_window_start: Instant::now(),
            fps_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let shared = self.viewer.clone();
        let mut viewer = shared.borrow_mut();
        viewer.resize(width, height);
        viewer.tick();

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(width, height);
            match gpu.render(&viewer) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    gpu.reconfigure();
                }
                Err(e) => log::error!("[gpu] frame skipped: {:?}", e),
            }
        }

        if let Some(panel) = &self.panel {
            panel.sync_listening(&viewer);
        }
        self.update_status(&viewer);
        drop(viewer);

        self.count_frame();
    }

    fn update_status(&mut self, viewer: &Viewer) {
        let phase = viewer.phase();
        self.frames_since_status += 1;
        if self.last_phase == Some(phase) && self.frames_since_status < STATUS_REFRESH_FRAMES {
            return;
        }
        if self.last_phase != Some(phase) {
            log::debug!("[frame] phase {}", phase.label());
        }
        self.last_phase = Some(phase);
        self.frames_since_status = 0;
        let speed = viewer.controller.velocity().length();
        overlay::update_status(&self.document, phase, speed, viewer.is_ready());
    }

    fn count_frame(&mut self) {
        self.fps_frames += 1;
        let elapsed = self.fps_window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[frame] {:.1} fps", self.fps_frames as f32 / elapsed);
            self.fps_frames = 0;
            self.fps_window_start = Instant::now();
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &Mesh,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, mesh).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
