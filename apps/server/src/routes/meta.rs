use crate::state::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use homeval_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

/// Service metadata returned by the home endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ServiceInfo {
    message: &'static str,
    status: &'static str,
    version: &'static str,
    total_locations: usize,
    endpoints: EndpointCatalogue,
    example_request: ExampleRequest,
}

#[derive(Debug, Serialize, ToSchema)]
struct EndpointCatalogue {
    home: &'static str,
    get_locations: &'static str,
    predict: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
struct ExampleRequest {
    url: &'static str,
    method: &'static str,
    body: ExampleBody,
}

#[derive(Debug, Serialize, ToSchema)]
struct ExampleBody {
    total_sqft: u32,
    location: &'static str,
    bhk: u32,
    bath: u32,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Service metadata", body = ServiceInfo)),
    tag = SYSTEM_TAG,
)]
pub(crate) async fn service_info(State(state): State<ApiState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Home Price Estimation API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        total_locations: state.estimator.locations().len(),
        endpoints: EndpointCatalogue {
            home: "/ [GET]",
            get_locations: "/get_location_names [GET]",
            predict: "/predict_home_price [POST]",
        },
        example_request: ExampleRequest {
            url: "/predict_home_price",
            method: "POST",
            body: ExampleBody {
                total_sqft: 1000,
                location: "1st Phase JP Nagar",
                bhk: 2,
                bath: 2,
            },
        },
    })
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Status
    status: &'static str,
    /// Version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(crate) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
