use std::{sync::Arc, time::Duration};

use axum::Router;
use furniscrape::{
    app_state::AppState,
    dictionary::Dictionaries,
    extractor::FurnitureExtractor,
    fetcher::PageFetcher,
    model::EntityModel,
    web::router,
};

pub fn dictionaries() -> Dictionaries {
    Dictionaries::new(
        vec!["chair".to_string(), "table".to_string(), "sofa".to_string()],
        vec!["stool".to_string()],
        vec!["seat".to_string()],
    )
}

pub fn test_app(model: Option<Arc<dyn EntityModel>>) -> Router {
    let fetcher =
        PageFetcher::with_timeout(Duration::from_secs(5)).expect("Failed to build fetcher");
    let state = AppState::new(
        fetcher,
        FurnitureExtractor::new(model, Arc::new(dictionaries())),
    );
    router(state)
}
