use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{info, instrument, warn};

use crate::{
    app_state::AppState,
    web::{
        dtos::{ErrorResponse, ExtractForm, ExtractRequest, ExtractResponse},
        view::render_page,
    },
};

/// Fetch `url`, run the extractor on its paragraph text and fold any failure
/// into the response. An empty `url` leaves the page awaiting input.
#[instrument(skip_all, fields(url = %url))]
pub async fn run_extraction(state: &AppState, url: String) -> ExtractResponse {
    if url.is_empty() {
        return ExtractResponse::awaiting_input(url);
    }

    let text = match state.fetcher.fetch_page_text(&url).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to fetch page: {}", e);
            return ExtractResponse::failed(url, e.to_string());
        }
    };

    match state.extractor.extract_furniture(&text).await {
        Ok(items) => {
            info!(items = items.len(), "Extraction finished");
            ExtractResponse::found(url, items)
        }
        Err(e) => {
            warn!("Extraction failed: {}", e);
            ExtractResponse::failed(url, e.to_string())
        }
    }
}

pub async fn index_page() -> Html<String> {
    Html(render_page(&ExtractResponse::default()))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ExtractForm>,
) -> Html<String> {
    let outcome = run_extraction(&state, form.url).await;
    Html(render_page(&outcome))
}

#[utoipa::path(
    post,
    path = "/api/extract",
    tag = "extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction ran; `error` is set when fetching or inference failed", body = ExtractResponse),
        (status = 400, description = "Missing or oversized URL", body = ErrorResponse)
    )
)]
pub async fn extract_api(
    State(state): State<AppState>,
    Json(payload): Json<ExtractRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    Json(run_extraction(&state, payload.url).await).into_response()
}
