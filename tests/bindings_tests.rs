// Host-side tests for the tuning panel binding table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bindings {
    include!("../src/bindings.rs");
}

use bindings::*;
use std::collections::HashSet;
use viewer_core::{ModelTransform, ParamError, ParamKey, Viewer};

fn ready_viewer() -> Viewer {
    let mut v = Viewer::new();
    v.bind_model(ModelTransform::default());
    v
}

#[test]
fn slider_ids_are_unique() {
    let ids: HashSet<&str> = SLIDERS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SLIDERS.len());
}

#[test]
fn every_section_has_sliders() {
    for section in Section::ALL {
        assert!(in_section(section).count() > 0, "{} is empty", section.title());
    }
    assert_eq!(in_section(Section::Motion).count(), 3);
}

#[test]
fn every_motion_tunable_has_a_slider_with_matching_range() {
    for key in ParamKey::ALL {
        let spec = find(key.name()).unwrap_or_else(|| panic!("no slider for {}", key.name()));
        assert_eq!(spec.range, key.range());
    }
}

#[test]
fn only_scale_sliders_listen() {
    for spec in SLIDERS {
        assert_eq!(spec.listen, spec.id.starts_with("model.scale"), "{}", spec.id);
    }
}

#[test]
fn defaults_read_back_inside_ranges() {
    let v = ready_viewer();
    for spec in SLIDERS {
        let value = (spec.get)(&v);
        assert!(
            spec.range.contains(value),
            "{} = {} outside [{}, {}]",
            spec.id,
            value,
            spec.range.min,
            spec.range.max
        );
    }
}

#[test]
fn apply_writes_through_to_the_viewer() {
    let mut v = ready_viewer();

    let spec = find("inertia").unwrap();
    assert_eq!(apply(spec, &mut v, 0.95), Ok((spec.get)(&v)));
    assert!((v.params.inertia - 0.95).abs() < 1e-5);

    let spec = find("key.intensity").unwrap();
    assert_eq!(apply(spec, &mut v, 4.5), Ok(4.5));
    assert_eq!(v.lights.key.intensity, 4.5);

    let spec = find("bottom.distance").unwrap();
    assert_eq!(apply(spec, &mut v, 12.0), Ok(12.0));
    assert_eq!(v.lights.bottom_distance(), 12.0);

    let spec = find("model.position.y").unwrap();
    apply(spec, &mut v, -2.0).unwrap();
    assert_eq!(v.model().map(|m| m.position.y), Some(-2.0));
}

#[test]
fn uniform_scale_sets_all_axes() {
    let mut v = ready_viewer();
    apply(find("model.scale").unwrap(), &mut v, 1.25).unwrap();
    let scale = v.model().map(|m| m.scale).unwrap();
    assert_eq!(scale, glam::Vec3::splat(1.25));
    assert_eq!((find("model.scale.z").unwrap().get)(&v), 1.25);
}

#[test]
fn apply_clamps_and_snaps() {
    let mut v = ready_viewer();
    assert_eq!(apply(find("key.position.x").unwrap(), &mut v, 99.0), Ok(20.0));
    assert_eq!(apply(find("historyLimit").unwrap(), &mut v, 3.6), Ok(4.0));
    assert_eq!(v.params.history_limit, 4);
    assert_eq!(apply(find("model.scale.x").unwrap(), &mut v, 0.0), Ok(0.1));
}

#[test]
fn apply_rejects_non_finite_values() {
    let mut v = ready_viewer();
    let before = v.lights.clone();
    let spec = find("rim.intensity").unwrap();
    assert!(matches!(
        apply(spec, &mut v, f32::NAN),
        Err(ParamError::NonFinite { name: "rim.intensity", .. })
    ));
    assert_eq!(v.lights, before);
}

#[test]
fn model_sliders_are_inert_until_model_binds() {
    let mut v = Viewer::new();
    let spec = find("model.position.x").unwrap();
    assert_eq!(apply(spec, &mut v, 3.0), Ok(0.0));
    assert!(v.model().is_none());
    // shows the initial pose meanwhile
    assert_eq!(
        (find("model.scale").unwrap().get)(&v),
        ModelTransform::default().scale.x
    );
}
