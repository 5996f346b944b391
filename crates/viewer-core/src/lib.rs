pub mod constants;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod mesh;
pub mod motion;
pub mod params;
pub mod scene;
pub mod shortcuts;
pub mod uniforms;
pub mod viewer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use error::ParamError;
pub use mesh::{Mesh, Vertex};
pub use motion::{wrap_angle, InertialRotation, MotionPhase, Sample, SmoothingWindow};
pub use params::{MotionParams, ParamKey, ParamRange};
pub use scene::{Camera, Light, LightKind, LightRig, ModelTransform};
pub use shortcuts::Shortcut;
pub use viewer::{PointerButton, Viewer};
