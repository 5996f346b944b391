// Tuning panel binding table. Pure data over `viewer_core::Viewer` so the host
// tests can include this file; the DOM side lives in `panel.rs`.

use viewer_core::constants::{
    LIGHT_DISTANCE_RANGE, LIGHT_INTENSITY_RANGE, LIGHT_POSITION_RANGE, MODEL_POSITION_RANGE,
    MODEL_ROTATION_RANGE, MODEL_SCALE_RANGE,
};
use viewer_core::{ModelTransform, ParamError, ParamKey, ParamRange, Viewer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Model,
    Motion,
    Lighting,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Model, Section::Motion, Section::Lighting];

    pub fn title(self) -> &'static str {
        match self {
            Section::Model => "Model",
            Section::Motion => "Motion",
            Section::Lighting => "Lighting",
        }
    }
}

/// One slider: where it sits, its range, and how it reads and writes the viewer.
pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub range: ParamRange,
    /// Refreshed from the viewer every frame.
    pub listen: bool,
    pub get: fn(&Viewer) -> f32,
    pub set: fn(&mut Viewer, f32),
}

impl std::fmt::Debug for SliderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderSpec")
            .field("id", &self.id)
            .field("section", &self.section)
            .field("range", &self.range)
            .field("listen", &self.listen)
            .finish()
    }
}

// Model sliders show the initial pose until a model is bound.
fn pose(v: &Viewer) -> ModelTransform {
    v.model().cloned().unwrap_or_default()
}

fn set_param(v: &mut Viewer, key: ParamKey, x: f32) {
    if let Err(e) = v.params.set(key, x) {
        log::warn!("[panel] {}", e);
    }
}

pub static SLIDERS: &[SliderSpec] = &[
    // ---- Model ----
    SliderSpec {
        id: "model.position.x",
        label: "Position X",
        section: Section::Model,
        range: MODEL_POSITION_RANGE,
        listen: false,
        get: |v| pose(v).position.x,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.position.x = x;
            }
        },
    },
    SliderSpec {
        id: "model.position.y",
        label: "Position Y",
        section: Section::Model,
        range: MODEL_POSITION_RANGE,
        listen: false,
        get: |v| pose(v).position.y,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.position.y = x;
            }
        },
    },
    SliderSpec {
        id: "model.position.z",
        label: "Position Z",
        section: Section::Model,
        range: MODEL_POSITION_RANGE,
        listen: false,
        get: |v| pose(v).position.z,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.position.z = x;
            }
        },
    },
    SliderSpec {
        id: "model.rotation.x",
        label: "Rotation X",
        section: Section::Model,
        range: MODEL_ROTATION_RANGE,
        listen: false,
        get: |v| pose(v).rotation.x,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.rotation.x = x;
            }
        },
    },
    SliderSpec {
        id: "model.rotation.y",
        label: "Rotation Y",
        section: Section::Model,
        range: MODEL_ROTATION_RANGE,
        listen: false,
        get: |v| pose(v).rotation.y,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.rotation.y = x;
            }
        },
    },
    SliderSpec {
        id: "model.rotation.z",
        label: "Rotation Z",
        section: Section::Model,
        range: MODEL_ROTATION_RANGE,
        listen: false,
        get: |v| pose(v).rotation.z,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.rotation.z = x;
            }
        },
    },
    SliderSpec {
        id: "model.scale.x",
        label: "Scale X",
        section: Section::Model,
        range: MODEL_SCALE_RANGE,
        listen: true,
        get: |v| pose(v).scale.x,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.scale.x = x;
            }
        },
    },
    SliderSpec {
        id: "model.scale.y",
        label: "Scale Y",
        section: Section::Model,
        range: MODEL_SCALE_RANGE,
        listen: true,
        get: |v| pose(v).scale.y,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.scale.y = x;
            }
        },
    },
    SliderSpec {
        id: "model.scale.z",
        label: "Scale Z",
        section: Section::Model,
        range: MODEL_SCALE_RANGE,
        listen: true,
        get: |v| pose(v).scale.z,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.scale.z = x;
            }
        },
    },
    SliderSpec {
        id: "model.scale",
        label: "Uniform scale",
        section: Section::Model,
        range: MODEL_SCALE_RANGE,
        listen: true,
        get: |v| pose(v).scale.x,
        set: |v, x| {
            if let Some(m) = v.model_mut() {
                m.set_uniform_scale(x);
            }
        },
    },
    SliderSpec {
        id: "autoRotateSpeed",
        label: "Auto-rotate speed",
        section: Section::Model,
        range: viewer_core::constants::AUTO_ROTATE_SPEED_RANGE,
        listen: false,
        get: |v| v.params.auto_rotate_speed,
        set: |v, x| set_param(v, ParamKey::AutoRotateSpeed, x),
    },
    // ---- Motion ----
    SliderSpec {
        id: "curveIntensity",
        label: "Curve intensity",
        section: Section::Motion,
        range: viewer_core::constants::CURVE_INTENSITY_RANGE,
        listen: false,
        get: |v| v.params.curve_intensity,
        set: |v, x| set_param(v, ParamKey::CurveIntensity, x),
    },
    SliderSpec {
        id: "historyLimit",
        label: "Smoothing",
        section: Section::Motion,
        range: viewer_core::constants::HISTORY_LIMIT_RANGE,
        listen: false,
        get: |v| v.params.history_limit as f32,
        set: |v, x| set_param(v, ParamKey::HistoryLimit, x),
    },
    SliderSpec {
        id: "inertia",
        label: "Inertia",
        section: Section::Motion,
        range: viewer_core::constants::INERTIA_RANGE,
        listen: false,
        get: |v| v.params.inertia,
        set: |v, x| set_param(v, ParamKey::Inertia, x),
    },
    // ---- Lighting ----
    SliderSpec {
        id: "ambient.intensity",
        label: "Ambient intensity",
        section: Section::Lighting,
        range: LIGHT_INTENSITY_RANGE,
        listen: false,
        get: |v| v.lights.ambient.intensity,
        set: |v, x| v.lights.ambient.intensity = x,
    },
    SliderSpec {
        id: "key.intensity",
        label: "Key intensity",
        section: Section::Lighting,
        range: LIGHT_INTENSITY_RANGE,
        listen: false,
        get: |v| v.lights.key.intensity,
        set: |v, x| v.lights.key.intensity = x,
    },
    SliderSpec {
        id: "key.position.x",
        label: "Key X",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.key.position.x,
        set: |v, x| v.lights.key.position.x = x,
    },
    SliderSpec {
        id: "key.position.y",
        label: "Key Y",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.key.position.y,
        set: |v, x| v.lights.key.position.y = x,
    },
    SliderSpec {
        id: "key.position.z",
        label: "Key Z",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.key.position.z,
        set: |v, x| v.lights.key.position.z = x,
    },
    SliderSpec {
        id: "fill.intensity",
        label: "Fill intensity",
        section: Section::Lighting,
        range: LIGHT_INTENSITY_RANGE,
        listen: false,
        get: |v| v.lights.fill.intensity,
        set: |v, x| v.lights.fill.intensity = x,
    },
    SliderSpec {
        id: "fill.position.x",
        label: "Fill X",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.fill.position.x,
        set: |v, x| v.lights.fill.position.x = x,
    },
    SliderSpec {
        id: "fill.position.y",
        label: "Fill Y",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.fill.position.y,
        set: |v, x| v.lights.fill.position.y = x,
    },
    SliderSpec {
        id: "fill.position.z",
        label: "Fill Z",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.fill.position.z,
        set: |v, x| v.lights.fill.position.z = x,
    },
    SliderSpec {
        id: "rim.intensity",
        label: "Rim intensity",
        section: Section::Lighting,
        range: LIGHT_INTENSITY_RANGE,
        listen: false,
        get: |v| v.lights.rim.intensity,
        set: |v, x| v.lights.rim.intensity = x,
    },
    SliderSpec {
        id: "rim.position.x",
        label: "Rim X",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.rim.position.x,
        set: |v, x| v.lights.rim.position.x = x,
    },
    SliderSpec {
        id: "rim.position.y",
        label: "Rim Y",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.rim.position.y,
        set: |v, x| v.lights.rim.position.y = x,
    },
    SliderSpec {
        id: "rim.position.z",
        label: "Rim Z",
        section: Section::Lighting,
        range: LIGHT_POSITION_RANGE,
        listen: false,
        get: |v| v.lights.rim.position.z,
        set: |v, x| v.lights.rim.position.z = x,
    },
    SliderSpec {
        id: "bottom.intensity",
        label: "Bottom intensity",
        section: Section::Lighting,
        range: LIGHT_INTENSITY_RANGE,
        listen: false,
        get: |v| v.lights.bottom.intensity,
        set: |v, x| v.lights.bottom.intensity = x,
    },
    SliderSpec {
        id: "bottom.distance",
        label: "Bottom distance",
        section: Section::Lighting,
        range: LIGHT_DISTANCE_RANGE,
        listen: false,
        get: |v| v.lights.bottom_distance(),
        set: |v, x| v.lights.set_bottom_distance(x),
    },
];

pub fn find(id: &str) -> Option<&'static SliderSpec> {
    SLIDERS.iter().find(|s| s.id == id)
}

pub fn in_section(section: Section) -> impl Iterator<Item = &'static SliderSpec> {
    SLIDERS.iter().filter(move |s| s.section == section)
}

/// Write a raw slider value into the viewer: snapped and clamped to the
/// slider's range. Returns the value the viewer now reports.
pub fn apply(spec: &SliderSpec, viewer: &mut Viewer, raw: f32) -> Result<f32, ParamError> {
    if !raw.is_finite() {
        return Err(ParamError::NonFinite {
            name: spec.id,
            value: raw,
        });
    }
    (spec.set)(viewer, spec.range.apply(raw));
    Ok((spec.get)(viewer))
}
