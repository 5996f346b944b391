// Host-side tests for the inertial rotation controller.

use glam::Vec3;
use std::f32::consts::PI;
use viewer_core::{
    wrap_angle, InertialRotation, MotionParams, MotionPhase, Sample, SmoothingWindow,
};

const EPS: f32 = 1e-5;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPS
}

/// Drag from the origin through `moves`, then release.
fn drag(c: &mut InertialRotation, p: &MotionParams, rot: &mut Vec3, moves: &[(f32, f32)]) {
    c.begin_drag(0.0, 0.0);
    for &(x, y) in moves {
        c.drag_move(x, y, p, Some(&mut *rot));
    }
    c.end_drag();
}

fn ticks_until_settled(c: &mut InertialRotation, p: &MotionParams, rot: &mut Vec3) -> usize {
    let mut n = 0;
    while c.velocity() != Vec3::ZERO {
        c.tick(p, Some(&mut *rot));
        n += 1;
        assert!(n < 10_000, "velocity never reached zero");
    }
    n
}

#[test]
fn window_keeps_most_recent_samples_in_order() {
    let mut p = MotionParams::default();
    p.history_limit = 4;
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(0.0, 0.0);
    for n in 1..=9 {
        c.drag_move(n as f32, 0.0, &p, Some(&mut rot));
        assert_eq!(c.window().len(), n.min(4));
    }
    // every move was +1px in x
    assert!(c.window().samples().iter().all(|s| *s == Sample::new(1.0, 0.0)));

    let mut c = InertialRotation::new();
    c.begin_drag(0.0, 0.0);
    let mut x = 0.0;
    for step in 1..=7 {
        x += step as f32;
        c.drag_move(x, 0.0, &p, Some(&mut rot));
    }
    let dxs: Vec<f32> = c.window().samples().iter().map(|s| s.dx).collect();
    assert_eq!(dxs, vec![4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn newest_sample_weighs_one_and_weights_increase() {
    for n in 1..=30 {
        assert_eq!(SmoothingWindow::weight(n - 1, n), 1.0);
        for i in 1..n {
            assert!(SmoothingWindow::weight(i, n) > SmoothingWindow::weight(i - 1, n));
        }
    }
}

#[test]
fn single_horizontal_move_from_rest() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(0.0, 0.0);
    c.drag_move(100.0, 0.0, &p, Some(&mut rot));

    assert_eq!(c.window().samples(), &[Sample::new(100.0, 0.0)]);
    assert!(approx(c.velocity(), Vec3::new(0.0, 0.25, 0.05)));
    assert!(approx(rot, Vec3::new(0.0, 0.25, 0.05)));
    assert_eq!(c.last_pointer(), glam::Vec2::new(100.0, 0.0));
}

#[test]
fn vertical_motion_turns_about_x_and_twists_negative() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(10.0, 10.0);
    c.drag_move(10.0, 50.0, &p, Some(&mut rot));
    // smoothed y = 40 * 1.0 * 0.5 = 20
    assert!(approx(c.velocity(), Vec3::new(0.1, 0.0, -0.02)));
}

#[test]
fn first_coast_tick_applies_then_decays() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    drag(&mut c, &p, &mut rot, &[(100.0, 0.0)]);
    let before = rot;

    c.tick(&p, Some(&mut rot));
    assert!(approx(rot - before, Vec3::new(0.0, 0.25, 0.05)));
    assert!((c.velocity().y - 0.23).abs() < EPS);
    assert!((c.velocity().z - 0.046).abs() < EPS);

    let n = ticks_until_settled(&mut c, &p, &mut rot);
    assert!(n > 50 && n < 200, "settled after {n} ticks");
    assert_eq!(c.phase(&p), MotionPhase::Idle);
}

#[test]
fn decay_reaches_exact_zero_for_any_inertia() {
    for inertia in [0.85, 0.9, 0.92, 0.95, 0.98] {
        for (x, y) in [(1000.0, 0.0), (0.0, -800.0), (300.0, 300.0), (-2.0, 1.0)] {
            let mut p = MotionParams::default();
            p.inertia = inertia;
            let mut c = InertialRotation::new();
            let mut rot = Vec3::ZERO;
            drag(&mut c, &p, &mut rot, &[(x, y)]);
            ticks_until_settled(&mut c, &p, &mut rot);
            assert_eq!(c.velocity(), Vec3::ZERO);
        }
    }
}

#[test]
fn idle_tick_spins_only_about_y() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.tick(&p, Some(&mut rot));
    assert_eq!(rot, Vec3::new(0.0, p.auto_rotate_speed, 0.0));

    let mut rot = Vec3::new(0.3, -1.0, 2.0);
    for k in 1..=100 {
        c.tick(&p, Some(&mut rot));
        assert_eq!(rot.x, 0.3);
        assert_eq!(rot.z, 2.0);
        assert!((rot.y - (-1.0 + k as f32 * p.auto_rotate_speed)).abs() < 1e-4);
    }
}

#[test]
fn idle_spin_keeps_full_step_far_from_origin() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    // several days of idle spin at 60 fps
    let mut rot = Vec3::new(0.0, 131_072.0, 0.0);
    c.tick(&p, Some(&mut rot));
    assert!((-PI..=PI).contains(&rot.y), "y = {}", rot.y);

    let mut advanced = 0.0;
    for _ in 0..1000 {
        let before = rot.y;
        c.tick(&p, Some(&mut rot));
        let step = wrap_angle(rot.y - before);
        assert!((step - p.auto_rotate_speed).abs() < 1e-5, "step = {}", step);
        assert!((-PI..=PI).contains(&rot.y));
        advanced += step;
    }
    assert!((advanced - 1000.0 * p.auto_rotate_speed).abs() < 5e-3);
}

#[test]
fn coasting_keeps_every_axis_bounded() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::new(-3.0, 3.1, 1e5);
    drag(&mut c, &p, &mut rot, &[(800.0, -600.0), (1600.0, -1200.0)]);
    ticks_until_settled(&mut c, &p, &mut rot);
    for _ in 0..10 {
        c.tick(&p, Some(&mut rot));
    }
    for a in rot.to_array() {
        assert!(a.is_finite() && (-PI..=PI).contains(&a), "{:?}", rot);
    }
}

#[test]
fn settled_controller_hands_off_to_idle_spin() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    drag(&mut c, &p, &mut rot, &[(40.0, 40.0)]);
    ticks_until_settled(&mut c, &p, &mut rot);
    let before = rot;
    c.tick(&p, Some(&mut rot));
    assert_eq!(rot.x, before.x);
    assert_eq!(rot.z, before.z);
    assert!((rot.y - before.y - p.auto_rotate_speed).abs() < 1e-6);
}

#[test]
fn zero_auto_rotate_speed_holds_still() {
    let mut p = MotionParams::default();
    p.auto_rotate_speed = 0.0;
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ONE;
    for _ in 0..10 {
        c.tick(&p, Some(&mut rot));
    }
    assert_eq!(rot, Vec3::ONE);
}

#[test]
fn new_drag_discards_inertia() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    drag(&mut c, &p, &mut rot, &[(10.0, 0.0), (30.0, 5.0), (70.0, 9.0)]);
    assert_ne!(c.velocity(), Vec3::ZERO);
    assert!(!c.window().is_empty());

    c.begin_drag(500.0, 500.0);
    assert_eq!(c.velocity(), Vec3::ZERO);
    assert!(c.window().is_empty());
    assert_eq!(c.phase(&p), MotionPhase::Dragging);
}

#[test]
fn tick_while_dragging_does_nothing() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(0.0, 0.0);
    c.drag_move(20.0, 0.0, &p, Some(&mut rot));
    let (r, v) = (rot, c.velocity());
    for _ in 0..5 {
        c.tick(&p, Some(&mut rot));
    }
    assert_eq!(rot, r);
    assert_eq!(c.velocity(), v);
}

#[test]
fn pointer_exit_releases_like_button_up() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(0.0, 0.0);
    c.drag_move(60.0, 0.0, &p, Some(&mut rot));
    let v = c.velocity();
    c.on_pointer_exit();
    assert!(!c.is_dragging());
    assert_eq!(c.velocity(), v);
    assert_eq!(c.phase(&p), MotionPhase::Coasting);

    // moves after release are ignored
    let r = rot;
    c.drag_move(200.0, 0.0, &p, Some(&mut rot));
    assert_eq!(rot, r);
}

#[test]
fn moves_and_ticks_without_target_change_nothing() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    c.begin_drag(0.0, 0.0);
    c.drag_move(10.0, 10.0, &p, None);
    assert!(c.window().is_empty());
    assert_eq!(c.velocity(), Vec3::ZERO);
    assert_eq!(c.last_pointer(), glam::Vec2::ZERO);

    // coasting controller keeps its velocity while the target is missing
    let mut rot = Vec3::ZERO;
    drag(&mut c, &p, &mut rot, &[(50.0, 0.0)]);
    let v = c.velocity();
    for _ in 0..10 {
        c.tick(&p, None);
    }
    assert_eq!(c.velocity(), v);
}

#[test]
fn dropped_move_leaves_late_target_untouched() {
    let p = MotionParams::default();
    let mut c = InertialRotation::new();
    c.begin_drag(0.0, 0.0);
    c.drag_move(10.0, 10.0, &p, None);

    let mut rot = Vec3::ZERO;
    // the next move measures from the last accepted pointer position
    c.drag_move(12.0, 10.0, &p, Some(&mut rot));
    assert_eq!(c.window().samples(), &[Sample::new(12.0, 10.0)]);
}

#[test]
fn parameter_edits_apply_on_next_move() {
    let mut p = MotionParams::default();
    let mut c = InertialRotation::new();
    let mut rot = Vec3::ZERO;
    c.begin_drag(0.0, 0.0);
    c.drag_move(100.0, 0.0, &p, Some(&mut rot));
    let v1 = c.velocity();
    p.curve_intensity = 1.0;
    c.drag_move(100.0, 0.0, &p, Some(&mut rot));
    // window [(100,0),(0,0)]: weights 0.5, 1.0 → smoothed x = 50 at intensity 1
    assert!((c.velocity().y - v1.y).abs() < EPS);
    assert!((c.velocity().z - 0.1).abs() < EPS);
}
