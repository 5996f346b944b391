use glam::Vec3;
use std::f32::consts::FRAC_PI_4;

use crate::params::ParamRange;

// Shared motion/scene tuning constants used by both web and native frontends.

// Drag-to-rotation mapping
pub const DRAG_ROTATION_GAIN: f32 = 0.005; // radians per smoothed pixel
pub const TWIST_GAIN: f32 = 0.002; // z twist per pixel of x/y asymmetry
pub const MIN_VELOCITY: f32 = 0.0001; // per-axis stop threshold

// Operator-tunable motion parameters (default, then slider range)
pub const CURVE_INTENSITY_DEFAULT: f32 = 0.5;
pub const CURVE_INTENSITY_RANGE: ParamRange = ParamRange::new(0.1, 2.0, 0.1);

pub const HISTORY_LIMIT_DEFAULT: usize = 10;
pub const HISTORY_LIMIT_RANGE: ParamRange = ParamRange::new(3.0, 30.0, 1.0);
// Inline capacity of the smoothing window; covers the whole slider range.
pub const HISTORY_INLINE_CAPACITY: usize = 32;

pub const INERTIA_DEFAULT: f32 = 0.92;
pub const INERTIA_RANGE: ParamRange = ParamRange::new(0.85, 0.98, 0.01);

pub const AUTO_ROTATE_SPEED_DEFAULT: f32 = 0.005; // radians per frame
pub const AUTO_ROTATE_SPEED_RANGE: ParamRange = ParamRange::new(0.0, 0.02, 0.001);

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.0, 6.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

// Wheel zoom (dolly toward the orbit target)
pub const ZOOM_STEP: f32 = 0.95; // distance factor per wheel notch
pub const ZOOM_MIN_DISTANCE: f32 = 1.0;
pub const ZOOM_MAX_DISTANCE: f32 = 50.0;

// Model initial pose
pub const MODEL_SCALE: f32 = 0.5;
pub const MODEL_ROTATION: Vec3 = Vec3::new(-FRAC_PI_4, -FRAC_PI_4, -FRAC_PI_4);

// Background clear colour (sRGB hex)
pub const BACKGROUND_HEX: u32 = 0xf0f0f0;

// Panel ranges for scene values
pub const MODEL_POSITION_RANGE: ParamRange = ParamRange::continuous(-10.0, 10.0);
pub const MODEL_ROTATION_RANGE: ParamRange =
    ParamRange::continuous(-std::f32::consts::PI, std::f32::consts::PI);
pub const MODEL_SCALE_RANGE: ParamRange = ParamRange::continuous(0.1, 5.0);
pub const LIGHT_INTENSITY_RANGE: ParamRange = ParamRange::continuous(0.0, 10.0);
pub const LIGHT_POSITION_RANGE: ParamRange = ParamRange::continuous(-20.0, 20.0);
pub const LIGHT_DISTANCE_RANGE: ParamRange = ParamRange::continuous(0.0, 40.0);
