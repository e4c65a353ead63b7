use reqwest::StatusCode;
use url::Url;

/// A successfully fetched page with its body already decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
    pub encoding: &'static str,
}
