use crate::params::ParamKey;

/// Keyboard shortcuts shared by both frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Show or hide the tuning panel (web only).
    TogglePanel,
    ResetView,
    /// Move a tunable by whole steps.
    Nudge(ParamKey, i32),
}

impl Shortcut {
    /// Map a key's logical value (`KeyboardEvent.key` on the web, the
    /// character of a winit `Key::Character` natively).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(Shortcut::TogglePanel),
            "r" | "R" => Some(Shortcut::ResetView),
            "[" => Some(Shortcut::Nudge(ParamKey::Inertia, -1)),
            "]" => Some(Shortcut::Nudge(ParamKey::Inertia, 1)),
            "-" | "_" => Some(Shortcut::Nudge(ParamKey::CurveIntensity, -1)),
            "=" | "+" => Some(Shortcut::Nudge(ParamKey::CurveIntensity, 1)),
            _ => None,
        }
    }
}
