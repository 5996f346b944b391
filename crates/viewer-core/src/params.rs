//! Operator-tunable motion parameters.
//!
//! The live tuning panel and keyboard shortcuts write these values; the
//! rotation controller reads them at the point of use on every move event and
//! frame, so an edit takes effect immediately.

use crate::constants::*;
use crate::error::ParamError;

/// Inclusive slider range with an optional step (`0.0` = continuous).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub const fn continuous(min: f32, max: f32) -> Self {
        Self::new(min, max, 0.0)
    }

    /// Snap to the step grid anchored at `min`, then clamp into range.
    pub fn apply(&self, value: f32) -> f32 {
        let snapped = if self.step > 0.0 {
            ((value - self.min) / self.step).round() * self.step + self.min
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    CurveIntensity,
    HistoryLimit,
    Inertia,
    AutoRotateSpeed,
}

impl ParamKey {
    pub const ALL: [ParamKey; 4] = [
        ParamKey::CurveIntensity,
        ParamKey::HistoryLimit,
        ParamKey::Inertia,
        ParamKey::AutoRotateSpeed,
    ];

    /// Stable identifier, also used for DOM ids and log lines.
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::CurveIntensity => "curveIntensity",
            ParamKey::HistoryLimit => "historyLimit",
            ParamKey::Inertia => "inertia",
            ParamKey::AutoRotateSpeed => "autoRotateSpeed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::CurveIntensity => "Curve intensity",
            ParamKey::HistoryLimit => "Smoothing",
            ParamKey::Inertia => "Inertia",
            ParamKey::AutoRotateSpeed => "Auto-rotate speed",
        }
    }

    pub fn range(self) -> ParamRange {
        match self {
            ParamKey::CurveIntensity => CURVE_INTENSITY_RANGE,
            ParamKey::HistoryLimit => HISTORY_LIMIT_RANGE,
            ParamKey::Inertia => INERTIA_RANGE,
            ParamKey::AutoRotateSpeed => AUTO_ROTATE_SPEED_RANGE,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub curve_intensity: f32,
    pub history_limit: usize,
    pub inertia: f32,
    pub min_velocity: f32,
    pub auto_rotate_speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            curve_intensity: CURVE_INTENSITY_DEFAULT,
            history_limit: HISTORY_LIMIT_DEFAULT,
            inertia: INERTIA_DEFAULT,
            min_velocity: MIN_VELOCITY,
            auto_rotate_speed: AUTO_ROTATE_SPEED_DEFAULT,
        }
    }
}

impl MotionParams {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::CurveIntensity => self.curve_intensity,
            ParamKey::HistoryLimit => self.history_limit as f32,
            ParamKey::Inertia => self.inertia,
            ParamKey::AutoRotateSpeed => self.auto_rotate_speed,
        }
    }

    /// Write a tunable the way a slider would: snapped to its step and
    /// clamped into range. Returns the value actually stored.
    pub fn set(&mut self, key: ParamKey, value: f32) -> Result<f32, ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NonFinite {
                name: key.name(),
                value,
            });
        }
        let v = key.range().apply(value);
        match key {
            ParamKey::CurveIntensity => self.curve_intensity = v,
            ParamKey::HistoryLimit => self.history_limit = v.round() as usize,
            ParamKey::Inertia => self.inertia = v,
            ParamKey::AutoRotateSpeed => self.auto_rotate_speed = v,
        }
        log::debug!("[params] {} = {}", key.name(), self.get(key));
        Ok(self.get(key))
    }

    pub fn set_by_name(&mut self, name: &str, value: f32) -> Result<f32, ParamError> {
        let key = ParamKey::from_name(name).ok_or_else(|| ParamError::Unknown(name.to_owned()))?;
        self.set(key, value)
    }

    /// Move a tunable by whole steps (keyboard shortcuts).
    pub fn nudge(&mut self, key: ParamKey, steps: i32) -> f32 {
        let step = key.range().step;
        let target = self.get(key) + step * steps as f32;
        // finite by construction: current value and step are both finite
        self.set(key, target).unwrap_or_else(|_| self.get(key))
    }
}
