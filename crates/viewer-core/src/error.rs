use thiserror::Error;

/// Rejected writes to the operator-tunable parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    Unknown(String),
    #[error("parameter `{name}` cannot be set to non-finite value {value}")]
    NonFinite { name: &'static str, value: f32 },
}
