//! Model Handle: the pre-trained linear estimator.
//!
//! The training pipeline exports the fitted regression to JSON as
//! `{"coefficients": [...], "intercept": ...}`, with coefficients in the
//! exact feature order recorded in the column schema. Inference is a dot
//! product: deterministic, pure, and cheap enough to run inline on the
//! request path.

use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// A loaded linear regression estimator. Read-only after load.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelHandle {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl ModelHandle {
    /// Loads the estimator from its JSON artifact.
    ///
    /// # Errors
    /// * [`EngineError::ArtifactMissing`] if the file is absent.
    /// * [`EngineError::ArtifactMalformed`] if the content cannot be parsed
    ///   or contains non-finite parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|_| EngineError::ArtifactMissing { path: path.to_path_buf() })?;

        let model: Self =
            serde_json::from_str(&raw).map_err(|e| EngineError::ArtifactMalformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::ArtifactMalformed {
                path: path.to_path_buf(),
                message: "model parameters must be finite".to_owned(),
            });
        }

        info!(features = model.coefficients.len(), "regression model loaded");

        Ok(model)
    }

    /// Number of features the estimator expects per input vector.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the regression for a single feature vector.
    ///
    /// The vector must follow the training-time feature order; callers
    /// obtain it from the feature encoder, never by hand.
    #[must_use]
    pub fn predict(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.coefficients.len(), "feature vector width mismatch");

        self.intercept + self.coefficients.iter().zip(x).map(|(c, v)| c * v).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_is_intercept_plus_dot_product() {
        let model = ModelHandle { coefficients: vec![0.5, 2.0, 3.0], intercept: 10.0 };
        let price = model.predict(&[100.0, 2.0, 1.0]);
        assert!((price - 67.0).abs() < 1e-9);
    }

    #[test]
    fn predict_is_deterministic() {
        let model = ModelHandle { coefficients: vec![0.1, 1.0, 1.0, 5.0], intercept: -3.0 };
        let x = [1200.0, 2.0, 2.0, 1.0];
        assert_eq!(model.predict(&x).to_bits(), model.predict(&x).to_bits());
    }
}
