//! Estimation Service: composes the Schema Store, Feature Encoder, and
//! Model Handle into a single `estimate` operation.

use crate::encoder::encode;
use crate::error::EngineError;
use crate::model::ModelHandle;
use crate::schema::ColumnSchema;
use crate::validate::EstimateRequest;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// The estimate for one request, rounded to 2 decimal places. The currency
/// unit is lakhs; the HTTP layer attaches the label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    pub estimated_price: f64,
}

/// The loaded estimator: schema + model, assembled once at startup and
/// shared read-only across all concurrent requests.
#[derive(Debug, Clone)]
pub struct Estimator {
    schema: ColumnSchema,
    model: ModelHandle,
}

impl Estimator {
    /// Returns a new [`EstimatorBuilder`].
    #[must_use]
    pub fn builder() -> EstimatorBuilder {
        EstimatorBuilder::default()
    }

    /// Loads both artifacts and assembles the estimator in one step.
    ///
    /// # Errors
    /// Any [`EngineError`] from loading or cross-checking the artifacts.
    /// A failure here is fatal to startup; the service must not begin
    /// accepting requests afterwards.
    pub fn load(
        schema_path: impl AsRef<Path>,
        model_path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        Self::builder()
            .schema(ColumnSchema::load(schema_path)?)
            .model(ModelHandle::load(model_path)?)
            .build()
    }

    /// Estimates the price for a validated request.
    ///
    /// Pure over immutable state: identical input yields identical output,
    /// and no shared data is mutated, so any number of requests may run
    /// concurrently without locking.
    #[must_use]
    pub fn estimate(&self, request: &EstimateRequest) -> EstimateResult {
        let x = encode(
            &request.location,
            request.total_sqft,
            request.bhk,
            request.bath,
            &self.schema,
        );
        let raw = self.model.predict(&x);

        // Rounded half away from zero, the f64::round convention.
        EstimateResult { estimated_price: (raw * 100.0).round() / 100.0 }
    }

    /// The loaded column schema.
    #[must_use]
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// The known location names, in schema order.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        self.schema.locations()
    }
}

/// A fluent builder for assembling the [`Estimator`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct EstimatorBuilder {
    schema: Option<ColumnSchema>,
    model: Option<ModelHandle>,
}

impl EstimatorBuilder {
    /// Sets the column schema.
    pub fn schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the model handle.
    pub fn model(mut self, model: ModelHandle) -> Self {
        self.model = Some(model);
        self
    }

    /// Assembles the estimator.
    ///
    /// # Errors
    /// * [`EngineError::NotReady`] if schema or model was not supplied.
    /// * [`EngineError::ArtifactMismatch`] if the model's coefficient
    ///   count differs from the schema width.
    pub fn build(self) -> Result<Estimator, EngineError> {
        let schema = self
            .schema
            .ok_or(EngineError::NotReady { message: "column schema not loaded".into() })?;
        let model = self
            .model
            .ok_or(EngineError::NotReady { message: "regression model not loaded".into() })?;

        if model.n_features() != schema.size() {
            return Err(EngineError::ArtifactMismatch {
                message: format!(
                    "model expects {} features but schema has {} columns",
                    model.n_features(),
                    schema.size()
                ),
            });
        }

        info!(
            features = schema.size(),
            locations = schema.locations().len(),
            "estimator ready"
        );

        Ok(Estimator { schema, model })
    }
}
