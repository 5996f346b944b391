use glam::Mat4;

use crate::scene::{Camera, LightRig, ModelTransform};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = unit vector toward the light, w = intensity
    pub direction: [f32; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    /// xyz = world position, w = cutoff distance (0 = none)
    pub position: [f32; 4],
    /// rgb = colour, w = intensity
    pub color: [f32; 4],
    /// x = decay exponent
    pub params: [f32; 4],
}

/// Everything the scene shader reads; one uniform buffer, 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb = colour × intensity
    pub ambient: [f32; 4],
    pub directionals: [DirectionalLightUniform; 3],
    pub point: PointLightUniform,
}

impl SceneUniforms {
    pub fn new(camera: &Camera, model: &ModelTransform, lights: &LightRig) -> Self {
        let model_m = model.matrix();
        let normal_m = normal_matrix(model_m);
        let dir = |l: &crate::scene::Light| DirectionalLightUniform {
            direction: l.direction_to_light().extend(l.intensity).to_array(),
            color: l.color.extend(1.0).to_array(),
        };
        let [key, fill, rim] = lights.directionals();
        let decay = match lights.bottom.kind {
            crate::scene::LightKind::Point { decay, .. } => decay,
            _ => 2.0,
        };
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model_m.to_cols_array_2d(),
            normal_matrix: normal_m.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: (lights.ambient.color * lights.ambient.intensity)
                .extend(1.0)
                .to_array(),
            directionals: [dir(key), dir(fill), dir(rim)],
            point: PointLightUniform {
                position: lights
                    .bottom
                    .position
                    .extend(lights.bottom_distance())
                    .to_array(),
                color: lights
                    .bottom
                    .color
                    .extend(lights.bottom.intensity)
                    .to_array(),
                params: [decay, 0.0, 0.0, 0.0],
            },
        }
    }
}

/// Inverse-transpose of the model matrix; falls back to the model matrix when
/// it is singular (a zero scale axis).
pub fn normal_matrix(model: Mat4) -> Mat4 {
    if model.determinant().abs() <= f32::EPSILON {
        return model;
    }
    model.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_block_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<DirectionalLightUniform>(), 32);
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 48);
    }

    #[test]
    fn packs_key_light_toward_its_position() {
        let u = SceneUniforms::new(
            &Camera::default(),
            &ModelTransform::default(),
            &LightRig::default(),
        );
        let d = Vec3::new(
            u.directionals[0].direction[0],
            u.directionals[0].direction[1],
            u.directionals[0].direction[2],
        );
        assert!((d - Vec3::new(5.0, 10.0, 7.5).normalize()).length() < 1e-6);
        assert_eq!(u.directionals[0].direction[3], 3.0);
        assert_eq!(u.point.position[3], 20.0);
    }

    #[test]
    fn singular_model_does_not_produce_nan_normals() {
        let m = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        let n = normal_matrix(m);
        assert!(n.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
