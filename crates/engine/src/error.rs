use std::borrow::Cow;
use std::path::PathBuf;

/// Startup-fatal failures while loading or assembling the estimator.
///
/// These block service readiness: the process must not accept requests
/// after any of them.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An artifact file is absent on disk.
    #[error("artifact not found: {path}")]
    ArtifactMissing { path: PathBuf },

    /// An artifact file exists but cannot be used (unparseable content,
    /// too few schema columns, or a model/schema width mismatch).
    #[error("artifact {path} is malformed: {message}")]
    ArtifactMalformed { path: PathBuf, message: String },

    /// The schema and model artifacts disagree on the feature-vector
    /// width. A mismatched pair would misprice silently if accepted.
    #[error("artifact pair mismatch: {message}")]
    ArtifactMismatch { message: String },

    /// The estimator was asked to assemble before both artifacts were
    /// supplied.
    #[error("estimator is not ready: {message}")]
    NotReady { message: Cow<'static, str> },
}

/// Client-side request rejections, surfaced as structured 400 responses.
///
/// Detected before any inference work is performed; an unknown location is
/// deliberately *not* represented here (it is a modeled soft fallback, not
/// an error).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value type for field: {0}")]
    InvalidType(&'static str),

    #[error("All numeric values must be positive: {0}")]
    NonPositiveValue(&'static str),

    #[error("{field} seems unrealistic (max: {max})")]
    OutOfRange { field: &'static str, max: f64 },
}
