use thiserror::Error;

/// Errors surfaced by the bounding box computation
///
/// All of them are caller-input problems; nothing is retried or clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundBoxError {
    /// A scalar parameter is outside of its domain (cutoff, scale factor)
    #[error("invalid parameter `{name}`: {value} ({expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A stage was asked to work on zero points
    #[error("empty input at {stage}")]
    EmptyInput { stage: &'static str },
}

pub type Result<T> = std::result::Result<T, BoundBoxError>;
