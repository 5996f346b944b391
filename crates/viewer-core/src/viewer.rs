use glam::Vec3;

use crate::motion::{InertialRotation, MotionPhase};
use crate::params::{MotionParams, ParamKey};
use crate::scene::{Camera, LightRig, ModelTransform};
use crate::shortcuts::Shortcut;

/// Platform-neutral mouse button as reported by the frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// The whole interactive state of one view: rotation controller, tunables,
/// camera, lights and the (possibly not yet loaded) model.
///
/// Frontends forward raw input here and call [`Viewer::tick`] once per
/// displayed frame. Until [`Viewer::bind_model`] is called, moves and ticks
/// are dropped by the controller.
#[derive(Clone, Debug, Default)]
pub struct Viewer {
    pub controller: InertialRotation,
    pub params: MotionParams,
    pub camera: Camera,
    pub lights: LightRig,
    model: Option<ModelTransform>,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_model(&mut self, transform: ModelTransform) {
        log::info!(
            "[viewer] model bound: pos=({:.2},{:.2},{:.2}) rot=({:.2},{:.2},{:.2}) scale={:.2}",
            transform.position.x,
            transform.position.y,
            transform.position.z,
            transform.rotation.x,
            transform.rotation.y,
            transform.rotation.z,
            transform.scale.x
        );
        self.model = Some(transform);
    }

    #[inline]
    pub fn model(&self) -> Option<&ModelTransform> {
        self.model.as_ref()
    }

    #[inline]
    pub fn model_mut(&mut self) -> Option<&mut ModelTransform> {
        self.model.as_mut()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    fn rotation_target(model: &mut Option<ModelTransform>) -> Option<&mut Vec3> {
        model.as_mut().map(|m| &mut m.rotation)
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        if button != PointerButton::Primary {
            return;
        }
        self.controller.begin_drag(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.controller
            .drag_move(x, y, &self.params, Self::rotation_target(&mut self.model));
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        self.controller.end_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.controller.on_pointer_exit();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.camera.zoom_wheel(delta_y);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Advance one displayed frame.
    pub fn tick(&mut self) {
        self.controller
            .tick(&self.params, Self::rotation_target(&mut self.model));
    }

    /// Back to the initial pose with no residual motion.
    pub fn reset_view(&mut self) {
        self.controller.halt();
        if let Some(m) = self.model.as_mut() {
            m.reset();
        }
        log::info!("[viewer] view reset");
    }

    pub fn nudge(&mut self, key: ParamKey, steps: i32) -> f32 {
        let v = self.params.nudge(key, steps);
        log::info!("[viewer] {} -> {}", key.name(), v);
        v
    }

    /// Apply a keyboard shortcut. Returns false for shortcuts the viewer
    /// does not own (panel visibility), leaving them to the frontend.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::ResetView => self.reset_view(),
            Shortcut::Nudge(key, steps) => {
                self.nudge(key, steps);
            }
            Shortcut::TogglePanel => return false,
        }
        true
    }

    pub fn phase(&self) -> MotionPhase {
        self.controller.phase(&self.params)
    }
}
