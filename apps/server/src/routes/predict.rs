use crate::error::{ApiError, ErrorResponse};
use crate::state::ApiState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use homeval_domain::constants::{CURRENCY, ESTIMATION_TAG};
use homeval_engine::EstimateRequest;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

/// A successful price estimate.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PredictResponse {
    status: &'static str,
    /// Estimated price in lakhs, rounded to 2 decimal places.
    estimated_price: f64,
    currency: &'static str,
    /// Echo of the validated input the estimate was computed from.
    #[schema(value_type = Object)]
    input: EstimateRequest,
}

#[utoipa::path(
    post,
    path = "/predict_home_price",
    responses(
        (status = OK, description = "Price estimate", body = PredictResponse),
        (status = BAD_REQUEST, description = "Validation failure", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorResponse),
    ),
    tag = ESTIMATION_TAG,
)]
pub(crate) async fn predict_home_price(
    State(state): State<ApiState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

    // Validation happens entirely before any inference work.
    let request = homeval_engine::validate(&body)?;
    let result = state.estimator.estimate(&request);

    debug!(
        location = %request.location,
        total_sqft = request.total_sqft,
        price = result.estimated_price,
        "estimate computed"
    );

    Ok(Json(PredictResponse {
        status: "success",
        estimated_price: result.estimated_price,
        currency: CURRENCY,
        input: request,
    }))
}
