//! # Estimation Engine
//!
//! Core of the home price estimation service: loads the training artifacts
//! (column schema + linear regression model), validates inbound requests,
//! encodes them into the fixed-width feature vectors the model was trained
//! against, and produces a rounded price estimate.
//!
//! ## Architecture
//!
//! * **Schema Store** ([`schema`]) — the ordered feature-name list; the
//!   location subset is derived from it, never stored separately.
//! * **Model Handle** ([`model`]) — the opaque trained estimator; a pure
//!   function over a dense numeric vector.
//! * **Feature Encoder** ([`encoder`]) — the one place that knows the
//!   vector layout. Wrong index means wrong price with no crash, so the
//!   layout is never duplicated elsewhere.
//! * **Estimation Service** ([`service`]) — composes the above behind a
//!   single `estimate(request) -> price` operation, assembled once at
//!   startup and shared read-only.
//! * **Request Validator** ([`validate`]) — turns untyped JSON into a typed
//!   request before anything downstream sees it.
//!
//! ## Example
//! ```no_run
//! use homeval_engine::Estimator;
//!
//! # fn main() -> Result<(), homeval_engine::EngineError> {
//! let estimator = Estimator::load("artifacts/columns.json", "artifacts/home_prices_model.json")?;
//! let body = serde_json::json!({
//!     "total_sqft": 1200, "location": "Whitefield", "bhk": 2, "bath": 2
//! });
//! let request = homeval_engine::validate(&body).expect("valid request");
//! let result = estimator.estimate(&request);
//! println!("{} lakhs", result.estimated_price);
//! # Ok(())
//! # }
//! ```

pub mod encoder;
mod error;
pub mod model;
pub mod schema;
pub mod service;
mod validate;

pub use crate::error::{EngineError, ValidationError};
pub use crate::model::ModelHandle;
pub use crate::schema::ColumnSchema;
pub use crate::service::{EstimateResult, Estimator, EstimatorBuilder};
pub use crate::validate::{EstimateRequest, MAX_ROOMS, MAX_SQFT, validate};
