use crate::state::ApiState;
use axum::Json;
use axum::extract::State;
use homeval_domain::constants::ESTIMATION_TAG;
use serde::Serialize;
use utoipa::ToSchema;

/// All location names the model was trained against.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LocationsResponse {
    status: &'static str,
    total_locations: usize,
    locations: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/get_location_names",
    responses((status = OK, description = "Known location names", body = LocationsResponse)),
    tag = ESTIMATION_TAG,
)]
pub(crate) async fn get_location_names(State(state): State<ApiState>) -> Json<LocationsResponse> {
    let locations = state.estimator.locations().to_vec();

    Json(LocationsResponse { status: "success", total_locations: locations.len(), locations })
}
