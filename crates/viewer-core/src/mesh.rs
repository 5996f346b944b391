use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

// Stand-in palette (linear RGB)
const BODY_COLOR: Vec3 = Vec3::new(0.55, 0.30, 0.12);
const NECK_COLOR: Vec3 = Vec3::new(0.25, 0.12, 0.05);
const HEADSTOCK_COLOR: Vec3 = Vec3::new(0.08, 0.05, 0.03);
const SOUND_HOLE_COLOR: Vec3 = Vec3::new(0.02, 0.02, 0.02);
const BRIDGE_COLOR: Vec3 = Vec3::new(0.10, 0.06, 0.03);

const BODY_SEGMENTS: u32 = 48;
const BODY_HALF_DEPTH: f32 = 0.16;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Procedural guitar silhouette: two-bout body, sound hole, bridge, neck
    /// and headstock. The body faces +Z and the neck points along +Y.
    pub fn guitar_stand_in() -> Self {
        let mut m = Mesh::default();
        // lower and upper bouts overlap to form the waist
        m.push_elliptic_prism(
            Vec3::new(0.0, -0.55, 0.0),
            Vec2::new(0.62, 0.60),
            BODY_HALF_DEPTH,
            BODY_COLOR,
        );
        m.push_elliptic_prism(
            Vec3::new(0.0, 0.25, 0.0),
            Vec2::new(0.48, 0.46),
            BODY_HALF_DEPTH,
            BODY_COLOR,
        );
        m.push_disc(Vec3::new(0.0, 0.05, BODY_HALF_DEPTH + 0.002), 0.16, SOUND_HOLE_COLOR);
        m.push_box(
            Vec3::new(0.0, -0.78, BODY_HALF_DEPTH + 0.02),
            Vec3::new(0.22, 0.04, 0.02),
            BRIDGE_COLOR,
        );
        m.push_box(
            Vec3::new(0.0, 1.30, 0.04),
            Vec3::new(0.08, 0.75, 0.05),
            NECK_COLOR,
        );
        m.push_box(
            Vec3::new(0.0, 2.30, 0.02),
            Vec3::new(0.13, 0.25, 0.04),
            HEADSTOCK_COLOR,
        );
        m
    }

    /// 1×1×1 placeholder with faces coloured by their normal.
    pub fn unit_box() -> Self {
        let mut m = Mesh::default();
        m.push_box(Vec3::ZERO, Vec3::splat(0.5), Vec3::ONE);
        for v in &mut m.vertices {
            let n = Vec3::from_array(v.normal);
            v.color = (n * 0.5 + Vec3::splat(0.5)).to_array();
        }
        m
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: Vec3) {
        let b = self.base();
        self.vertices
            .extend(corners.iter().map(|&p| Vertex::new(p, normal, color)));
        self.indices
            .extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
    }

    pub fn push_box(&mut self, center: Vec3, half: Vec3, color: Vec3) {
        // (normal, u, v) with u × v = normal so corners wind CCW from outside
        let faces = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];
        for (n, u, v) in faces {
            let corner = |su: f32, sv: f32| center + (n + u * su + v * sv) * half;
            self.push_quad(
                [
                    corner(-1.0, -1.0),
                    corner(1.0, -1.0),
                    corner(1.0, 1.0),
                    corner(-1.0, 1.0),
                ],
                n,
                color,
            );
        }
    }

    /// Prism with an elliptical cross-section in XY, extruded ±`half_depth`
    /// along Z, capped on both ends.
    pub fn push_elliptic_prism(&mut self, center: Vec3, radii: Vec2, half_depth: f32, color: Vec3) {
        let ring = |i: u32| {
            let t = TAU * i as f32 / BODY_SEGMENTS as f32;
            let (s, c) = t.sin_cos();
            let p = Vec2::new(c * radii.x, s * radii.y);
            let n = Vec2::new(c / radii.x, s / radii.y).normalize_or_zero();
            (p, n)
        };
        let front = center.z + half_depth;
        let back = center.z - half_depth;

        for i in 0..BODY_SEGMENTS {
            let (pa, na) = ring(i);
            let (pb, nb) = ring(i + 1);
            let b = self.base();
            let at = |p: Vec2, z: f32| Vec3::new(center.x + p.x, center.y + p.y, z);
            self.vertices.extend_from_slice(&[
                Vertex::new(at(pa, back), na.extend(0.0), color),
                Vertex::new(at(pb, back), nb.extend(0.0), color),
                Vertex::new(at(pb, front), nb.extend(0.0), color),
                Vertex::new(at(pa, front), na.extend(0.0), color),
            ]);
            self.indices
                .extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
        }

        self.push_fan(Vec3::new(center.x, center.y, front), radii, Vec3::Z, color);
        self.push_fan(Vec3::new(center.x, center.y, back), radii, Vec3::NEG_Z, color);
    }

    /// Flat disc facing +Z.
    pub fn push_disc(&mut self, center: Vec3, radius: f32, color: Vec3) {
        self.push_fan(center, Vec2::splat(radius), Vec3::Z, color);
    }

    fn push_fan(&mut self, center: Vec3, radii: Vec2, normal: Vec3, color: Vec3) {
        let b = self.base();
        self.vertices.push(Vertex::new(center, normal, color));
        for i in 0..=BODY_SEGMENTS {
            let t = TAU * i as f32 / BODY_SEGMENTS as f32;
            let (s, c) = t.sin_cos();
            let p = center + Vec3::new(c * radii.x, s * radii.y, 0.0);
            self.vertices.push(Vertex::new(p, normal, color));
        }
        let facing_front = normal.z > 0.0;
        for i in 0..BODY_SEGMENTS {
            let (p0, p1) = (b + 1 + i, b + 2 + i);
            if facing_front {
                self.indices.extend_from_slice(&[b, p0, p1]);
            } else {
                self.indices.extend_from_slice(&[b, p1, p0]);
            }
        }
    }
}

#[cfg(feature = "gpu")]
impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(m: &Mesh, tri: usize) -> Vec3 {
        let p = |k: usize| Vec3::from_array(m.vertices[m.indices[tri * 3 + k] as usize].position);
        (p(1) - p(0)).cross(p(2) - p(0))
    }

    #[test]
    fn unit_box_winds_outward() {
        let m = Mesh::unit_box();
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.triangle_count(), 12);
        for t in 0..m.triangle_count() {
            let geometric = face_normal(&m, t);
            let stored = Vec3::from_array(m.vertices[m.indices[t * 3] as usize].normal);
            assert!(geometric.dot(stored) > 0.0, "triangle {t} winds inward");
        }
    }

    #[test]
    fn unit_box_bounds_are_half_unit() {
        let (lo, hi) = Mesh::unit_box().bounds().unwrap();
        assert_eq!(lo, Vec3::splat(-0.5));
        assert_eq!(hi, Vec3::splat(0.5));
    }

    #[test]
    fn stand_in_indices_are_in_bounds_and_outward() {
        let m = Mesh::guitar_stand_in();
        let n = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < n));
        assert_eq!(m.indices.len() % 3, 0);
        for t in 0..m.triangle_count() {
            let geometric = face_normal(&m, t);
            let stored = Vec3::from_array(m.vertices[m.indices[t * 3] as usize].normal);
            assert!(geometric.dot(stored) >= 0.0, "triangle {t} winds inward");
        }
    }

    #[test]
    fn stand_in_is_taller_than_wide() {
        let (lo, hi) = Mesh::guitar_stand_in().bounds().unwrap();
        let size = hi - lo;
        assert!(size.y > 2.0 * size.x);
        assert!(size.z < size.x);
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert!(Mesh::default().bounds().is_none());
    }
}
