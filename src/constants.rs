// Page wiring and front-end cadence constants.
// Motion, camera and lighting defaults live in `viewer_core::constants`;
// this module only holds what the browser front-end needs on top.

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "viewer-canvas";
pub const PANEL_ID: &str = "tuning-panel";
pub const STATUS_ID: &str = "status-overlay";
pub const ERROR_ID: &str = "error-overlay";

// Canvas attribute selecting the placeholder mesh (`data-model="box"`)
pub const MODEL_ATTR: &str = "data-model";

// Class toggled on overlays and the panel
pub const HIDDEN_CLASS: &str = "hidden";

// `MouseEvent.button` of the primary (usually left) button
pub const PRIMARY_BUTTON: i16 = 0;

// Status overlay refresh: on every phase change, otherwise every N frames
pub const STATUS_REFRESH_FRAMES: u32 = 15;

// Frame-rate log window (seconds)
pub const FPS_LOG_INTERVAL_SEC: f32 = 1.0;
