use std::time::Duration;

use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, instrument};

use crate::fetcher::{
    errors::FetchError, pipeline::decode_body, text::paragraph_text, types::PageResponse,
};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// Many shops answer 403 to clients without a browser-looking agent.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// Single-attempt page downloader. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Download `url` and decode the body. No retries.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;
        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed_url.scheme().to_string()));
        }

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let url_final = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let (body, encoding) = decode_body(content_type.as_deref(), &body);

        Ok(PageResponse {
            url_final,
            status,
            content_type,
            body,
            encoding: encoding.name(),
        })
    }

    /// Paragraph text of the page at `url`, with boilerplate removed.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch_page_text(&self, url: &str) -> Result<String, FetchError> {
        let page = self.fetch(url).await?;
        let text = paragraph_text(&page.body);

        debug!(
            final_url = %page.url_final,
            status = %page.status,
            encoding = page.encoding,
            html_bytes = page.body.len(),
            text_chars = text.chars().count(),
            "Fetched page"
        );

        Ok(text)
    }
}
