use crate::{extractor::FurnitureExtractor, fetcher::PageFetcher};

/// Everything a request needs, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
    pub extractor: FurnitureExtractor,
}

impl AppState {
    pub fn new(fetcher: PageFetcher, extractor: FurnitureExtractor) -> Self {
        Self { fetcher, extractor }
    }
}
