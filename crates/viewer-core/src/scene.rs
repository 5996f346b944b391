//! Scene-side state shared with the web and native frontends.
//!
//! These types avoid platform-specific APIs. The frontends build camera
//! matrices from them, hand the model transform to the rotation controller,
//! and pack the light rig into GPU uniforms.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::*;

/// Right-handed perspective camera orbiting a fixed target.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_Z_NEAR,
            zfar: CAMERA_Z_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Match the aspect ratio to a surface size; zero-sized surfaces
    /// (minimized windows, detached canvases) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Dolly along the eye→target ray for one wheel event. Negative
    /// `delta_y` (wheel up) zooms in.
    pub fn zoom_wheel(&mut self, delta_y: f32) {
        let offset = self.eye - self.target;
        let dist = offset.length();
        if dist <= f32::EPSILON || delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let scaled = if delta_y < 0.0 {
            dist * ZOOM_STEP
        } else {
            dist / ZOOM_STEP
        };
        let next = scaled.clamp(ZOOM_MIN_DISTANCE, ZOOM_MAX_DISTANCE);
        self.eye = self.target + offset * (next / dist);
    }
}

/// Position, Euler rotation (XYZ, radians) and per-axis scale of the model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: MODEL_ROTATION,
            scale: Vec3::splat(MODEL_SCALE),
        }
    }
}

impl ModelTransform {
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }

    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Parallel light shining from `position` toward the origin.
    Directional,
    /// Local light; `distance == 0` means no cutoff.
    Point { distance: f32, decay: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub name: &'static str,
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl Light {
    fn new(name: &'static str, kind: LightKind, hex: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            name,
            kind,
            color: srgb_hex_to_linear(hex),
            intensity,
            position,
        }
    }

    /// Unit vector from the origin toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Fixed five-light rig: ambient fill plus key, fill and rim directionals and
/// a point light from below.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: Light,
    pub key: Light,
    pub fill: Light,
    pub rim: Light,
    pub bottom: Light,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: Light::new("ambient", LightKind::Ambient, 0xffffff, 1.5, Vec3::ZERO),
            key: Light::new(
                "key",
                LightKind::Directional,
                0xffffff,
                3.0,
                Vec3::new(5.0, 10.0, 7.5),
            ),
            fill: Light::new(
                "fill",
                LightKind::Directional,
                0xffffee,
                1.5,
                Vec3::new(-10.0, 5.0, 7.5),
            ),
            rim: Light::new(
                "rim",
                LightKind::Directional,
                0xeeeeff,
                2.0,
                Vec3::new(0.0, 10.0, -10.0),
            ),
            bottom: Light::new(
                "bottom",
                LightKind::Point {
                    distance: 20.0,
                    decay: 2.0,
                },
                0xffffff,
                1.0,
                Vec3::new(0.0, -3.0, 0.0),
            ),
        }
    }
}

impl LightRig {
    pub fn directionals(&self) -> [&Light; 3] {
        [&self.key, &self.fill, &self.rim]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        [&self.ambient, &self.key, &self.fill, &self.rim, &self.bottom].into_iter()
    }

    /// Cutoff distance of the bottom point light, 0 when unbounded.
    pub fn bottom_distance(&self) -> f32 {
        match self.bottom.kind {
            LightKind::Point { distance, .. } => distance,
            _ => 0.0,
        }
    }

    pub fn set_bottom_distance(&mut self, d: f32) {
        if let LightKind::Point { distance, .. } = &mut self.bottom.kind {
            *distance = d.max(0.0);
        }
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` sRGB colour to linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_convert_exactly() {
        assert_eq!(srgb_hex_to_linear(0x000000), Vec3::ZERO);
        let w = srgb_hex_to_linear(0xffffff);
        assert!((w - Vec3::ONE).abs().max_element() < 1e-6);
    }

    #[test]
    fn rig_has_three_directionals_and_one_point() {
        let rig = LightRig::default();
        assert_eq!(rig.iter().count(), 5);
        assert!(rig
            .directionals()
            .iter()
            .all(|l| l.kind == LightKind::Directional));
        assert_eq!(rig.bottom_distance(), 20.0);
    }

    #[test]
    fn model_matrix_applies_scale_then_translation() {
        let mut m = ModelTransform {
            rotation: Vec3::ZERO,
            ..Default::default()
        };
        m.position = Vec3::new(1.0, 2.0, 3.0);
        m.set_uniform_scale(2.0);
        let p = m.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-5);
    }
}
