use glam::Vec2;
use viewer_core::gpu::SceneRenderer;
use viewer_core::{Mesh, ModelTransform, PointerButton, Shortcut, Viewer};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::{Window, WindowBuilder};

// Wheel lines are scaled to roughly what a browser reports per notch.
const PIXELS_PER_LINE: f32 = 100.0;

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window, mesh: &Mesh) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let scene = SceneRenderer::new(&device, format, width, height, mesh);
        log::info!("[gpu] {:?} surface {}x{}", format, width, height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            scene,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.scene.resize(&self.device, size.width, size.height);
    }

    fn render(&mut self, viewer: &Viewer) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.scene.render(&self.device, &self.queue, &view, viewer);
        frame.present();
        Ok(())
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Browser-style wheel delta: positive scrolls toward the user (zoom out).
fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(p) => -p.y as f32,
    }
}

fn mesh_from_args() -> Mesh {
    match std::env::args().nth(1).as_deref() {
        Some("box") => Mesh::unit_box(),
        _ => Mesh::guitar_stand_in(),
    }
}

fn handle_window_event(
    event: &WindowEvent,
    viewer: &mut Viewer,
    cursor: &mut Vec2,
    scale_factor: f64,
) {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(scale_factor);
            *cursor = Vec2::new(logical.x, logical.y);
            viewer.pointer_move(cursor.x, cursor.y);
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = pointer_button(*button);
            match state {
                ElementState::Pressed => viewer.pointer_down(button, cursor.x, cursor.y),
                ElementState::Released => viewer.pointer_up(button),
            }
        }
        WindowEvent::CursorLeft { .. } => viewer.pointer_leave(),
        WindowEvent::MouseWheel { delta, .. } => viewer.wheel(wheel_delta_y(*delta)),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key: Key::Character(ch),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => {
            if let Some(shortcut) = Shortcut::from_key(ch.as_str()) {
                if !viewer.apply_shortcut(shortcut) {
                    log::debug!("[keys] {:?} has no native counterpart", shortcut);
                }
            }
        }
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Guitar Viewer")
        .build(&event_loop)?;

    let mesh = mesh_from_args();
    let mut gpu = pollster::block_on(GpuState::new(&window, &mesh))?;

    let mut viewer = Viewer::new();
    let size = window.inner_size();
    viewer.resize(size.width, size.height);
    viewer.bind_model(ModelTransform::default());
    let mut cursor = Vec2::ZERO;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            gpu.resize(size);
            viewer.resize(size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent { event, .. } => {
            handle_window_event(&event, &mut viewer, &mut cursor, gpu.window.scale_factor());
        }
        Event::AboutToWait => {
            viewer.tick();
            match gpu.render(&viewer) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
