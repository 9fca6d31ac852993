use crate::error::ErrorResponse;
use crate::routes::{locations, meta, predict};
use crate::state::ApiState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

/// Builds the application router: API routes, request tracing, permissive
/// CORS for browser clients, panic containment, and the Scalar UI at `/api`.
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .routes(routes!(meta::service_info))
        .routes(routes!(meta::health_handler))
        .routes(routes!(locations::get_location_names))
        .routes(routes!(predict::predict_home_price))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .split_for_parts();

    // Merge all routes and then apply the Scalar UI
    Router::new().merge(openapi_routes).merge(Scalar::with_url("/api", api_doc))
}

/// Generic 500 for anything that panics on the request path. Nothing from
/// the panic payload is echoed back.
fn panic_response(
    _panic: Box<dyn std::any::Any + Send + 'static>,
) -> axum::http::Response<axum::body::Body> {
    let body = ErrorResponse { status: "error", message: "Internal server error".to_owned() };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
