pub mod client;
pub mod errors;
pub mod pipeline;
pub mod text;
pub mod types;

pub use client::{FETCH_TIMEOUT, PageFetcher, USER_AGENT};
pub use errors::FetchError;
pub use text::paragraph_text;
pub use types::PageResponse;
