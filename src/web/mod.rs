pub mod dtos;
pub mod handlers;
pub mod view;

use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};

pub use dtos::{ErrorResponse, ExtractForm, ExtractRequest, ExtractResponse};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, handlers::extract_api),
    components(schemas(
        health::HealthResponse,
        ExtractRequest,
        ExtractResponse,
        ErrorResponse
    )),
    tags(
        (name = "health", description = "Liveness and model availability"),
        (name = "extract", description = "Furniture extraction from a web page")
    )
)]
pub struct ApiDoc;

/// All routes with tracing and `x-request-id` propagation.
pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(handlers::index_page).post(handlers::submit_form))
        .route("/api/extract", post(handlers::extract_api))
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}
