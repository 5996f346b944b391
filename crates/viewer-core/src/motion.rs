//! Inertial drag-to-rotate controller.
//!
//! Pointer-drag displacements are collected into a short smoothing window,
//! weighted linearly toward the most recent sample, and mapped to a 3-axis
//! rotational velocity. While dragging, each move applies that velocity to the
//! target at once. After release the velocity keeps rotating the target and
//! decays geometrically by `inertia` each frame; once every axis has snapped to
//! zero the target falls back to a constant idle spin around Y.
//!
//! The target is a plain Euler rotation (`Vec3`, radians). Each axis is folded
//! into [-π, π] as it advances so the idle spin keeps full `f32` resolution
//! however long it runs. Passing `None` as the target means the model is not
//! ready yet: moves and ticks are dropped without touching any state.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::constants::{DRAG_ROTATION_GAIN, HISTORY_INLINE_CAPACITY, TWIST_GAIN};
use crate::params::MotionParams;

/// Screen-space displacement between two consecutive pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    pub dx: f32,
    pub dy: f32,
}

impl Sample {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Bounded FIFO of recent samples, oldest first.
#[derive(Clone, Debug, Default)]
pub struct SmoothingWindow {
    samples: SmallVec<[Sample; HISTORY_INLINE_CAPACITY]>,
}

impl SmoothingWindow {
    /// Append a sample and evict from the front until at most `limit` remain.
    pub fn push(&mut self, sample: Sample, limit: usize) {
        self.samples.push(sample);
        let limit = limit.max(1);
        if self.samples.len() > limit {
            let excess = self.samples.len() - limit;
            self.samples.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Linear recency weight of position `index` in a window of `len`
    /// samples; the newest sample always weighs 1.0.
    #[inline]
    pub fn weight(index: usize, len: usize) -> f32 {
        (index + 1) as f32 / len as f32
    }

    /// Weighted sum of the window, scaled by `curve_intensity`.
    pub fn smoothed(&self, curve_intensity: f32) -> Vec2 {
        let n = self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, s)| {
                let w = Self::weight(i, n) * curve_intensity;
                acc + Vec2::new(s.dx * w, s.dy * w)
            })
    }
}

/// Fold an angle into [-π, π]. In-range values pass through unchanged.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    if (-PI..=PI).contains(&a) {
        a
    } else {
        (a + PI).rem_euclid(TAU) - PI
    }
}

/// Add `delta` to `rotation` axis by axis, folding before and after so the
/// sum is taken at small magnitude.
fn advance(rotation: &mut Vec3, delta: Vec3) {
    rotation.x = wrap_angle(wrap_angle(rotation.x) + delta.x);
    rotation.y = wrap_angle(wrap_angle(rotation.y) + delta.y);
    rotation.z = wrap_angle(wrap_angle(rotation.z) + delta.z);
}

/// Observable state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    /// No drag and no residual velocity: the target spins at the idle rate.
    Idle,
    /// Released with velocity above threshold on at least one axis.
    Coasting,
    /// Primary button held; moves rotate the target directly.
    Dragging,
}

impl MotionPhase {
    pub fn label(self) -> &'static str {
        match self {
            MotionPhase::Idle => "Idle",
            MotionPhase::Coasting => "Coasting",
            MotionPhase::Dragging => "Dragging",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InertialRotation {
    dragging: bool,
    last_pointer: Vec2,
    window: SmoothingWindow,
    velocity: Vec3,
}

impl InertialRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `(x, y)`; any residual inertia is discarded.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
        self.window.clear();
        self.velocity = Vec3::ZERO;
        log::debug!("[motion] begin drag at ({:.1},{:.1})", x, y);
    }

    pub fn drag_move(&mut self, x: f32, y: f32, params: &MotionParams, target: Option<&mut Vec3>) {
        if !self.dragging {
            return;
        }
        let Some(rotation) = target else {
            return;
        };

        let pointer = Vec2::new(x, y);
        let delta = pointer - self.last_pointer;
        self.window
            .push(Sample::new(delta.x, delta.y), params.history_limit);

        let smoothed = self.window.smoothed(params.curve_intensity);
        // vertical screen motion turns about X, horizontal about Y, and the
        // x/y asymmetry adds a twist about Z
        self.velocity = Vec3::new(
            smoothed.y * DRAG_ROTATION_GAIN,
            smoothed.x * DRAG_ROTATION_GAIN,
            (smoothed.x - smoothed.y) * TWIST_GAIN * params.curve_intensity,
        );
        advance(rotation, self.velocity);

        self.last_pointer = pointer;
    }

    pub fn end_drag(&mut self) {
        if self.dragging {
            log::debug!(
                "[motion] release with velocity ({:.4},{:.4},{:.4})",
                self.velocity.x,
                self.velocity.y,
                self.velocity.z
            );
        }
        self.dragging = false;
    }

    /// Pointer left the tracking surface; the button-up may never arrive.
    pub fn on_pointer_exit(&mut self) {
        self.end_drag();
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self, params: &MotionParams, target: Option<&mut Vec3>) {
        if self.dragging {
            return;
        }
        let Some(rotation) = target else {
            return;
        };

        let min = params.min_velocity;
        if self.velocity.abs().max_element() > min {
            advance(rotation, self.velocity);
            self.velocity *= params.inertia;
            let v = &mut self.velocity;
            for axis in [&mut v.x, &mut v.y, &mut v.z] {
                if axis.abs() < min {
                    *axis = 0.0;
                }
            }
            if self.velocity == Vec3::ZERO {
                log::debug!("[motion] settled, idle rotation resumes");
            }
        } else {
            advance(rotation, Vec3::new(0.0, params.auto_rotate_speed, 0.0));
        }
    }

    /// Stop all motion without starting a gesture.
    pub fn halt(&mut self) {
        self.dragging = false;
        self.window.clear();
        self.velocity = Vec3::ZERO;
    }

    pub fn phase(&self, params: &MotionParams) -> MotionPhase {
        if self.dragging {
            MotionPhase::Dragging
        } else if self.velocity.abs().max_element() > params.min_velocity {
            MotionPhase::Coasting
        } else {
            MotionPhase::Idle
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn window(&self) -> &SmoothingWindow {
        &self.window
    }

    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_evicts_oldest_first() {
        let mut w = SmoothingWindow::default();
        for i in 0..5 {
            w.push(Sample::new(i as f32, 0.0), 3);
        }
        let xs: Vec<f32> = w.samples().iter().map(|s| s.dx).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn lowering_the_limit_shrinks_on_next_push() {
        let mut w = SmoothingWindow::default();
        for i in 0..20 {
            w.push(Sample::new(i as f32, 0.0), 20);
        }
        w.push(Sample::new(99.0, 0.0), 4);
        assert_eq!(w.len(), 4);
        assert_eq!(w.samples()[3].dx, 99.0);
        assert_eq!(w.samples()[0].dx, 17.0);
    }

    #[test]
    fn window_spills_past_inline_capacity_without_loss() {
        let mut w = SmoothingWindow::default();
        for i in 0..40 {
            w.push(Sample::new(i as f32, 0.0), 40);
        }
        assert_eq!(w.len(), 40);
        assert_eq!(w.samples()[39].dx, 39.0);
    }

    #[test]
    fn wrap_angle_folds_out_of_range_only() {
        assert_eq!(wrap_angle(0.3), 0.3);
        assert_eq!(wrap_angle(-PI), -PI);
        assert_eq!(wrap_angle(PI), PI);
        assert!((wrap_angle(PI + 0.5) - (0.5 - PI)).abs() < 1e-6);
        assert!((wrap_angle(-PI - 0.5) - (PI - 0.5)).abs() < 1e-6);
        assert!((wrap_angle(4.0 * TAU + 1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn smoothed_of_empty_window_is_zero() {
        assert_eq!(SmoothingWindow::default().smoothed(0.5), Vec2::ZERO);
    }

    #[test]
    fn smoothed_weights_ramp_linearly() {
        let mut w = SmoothingWindow::default();
        w.push(Sample::new(10.0, 0.0), 10);
        w.push(Sample::new(10.0, 4.0), 10);
        // weights 0.5 and 1.0, intensity 1.0
        let s = w.smoothed(1.0);
        assert!((s.x - 15.0).abs() < 1e-5);
        assert!((s.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn phase_follows_drag_and_velocity() {
        let params = MotionParams::default();
        let mut rot = Vec3::ZERO;
        let mut c = InertialRotation::new();
        assert_eq!(c.phase(&params), MotionPhase::Idle);
        c.begin_drag(0.0, 0.0);
        assert_eq!(c.phase(&params), MotionPhase::Dragging);
        c.drag_move(30.0, 0.0, &params, Some(&mut rot));
        c.end_drag();
        assert_eq!(c.phase(&params), MotionPhase::Coasting);
        for _ in 0..500 {
            c.tick(&params, Some(&mut rot));
        }
        assert_eq!(c.phase(&params), MotionPhase::Idle);
    }

    #[test]
    fn halt_clears_everything() {
        let params = MotionParams::default();
        let mut rot = Vec3::ZERO;
        let mut c = InertialRotation::new();
        c.begin_drag(0.0, 0.0);
        c.drag_move(5.0, 5.0, &params, Some(&mut rot));
        c.halt();
        assert!(!c.is_dragging());
        assert!(c.window().is_empty());
        assert_eq!(c.velocity(), Vec3::ZERO);
    }
}
