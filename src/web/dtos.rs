use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MAX_URL_LEN: usize = 2048;

/// Body of the form posted from the index page.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    pub url: String,
}

impl ExtractRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if self.url.len() > MAX_URL_LEN {
            return Err("URL too long".to_string());
        }
        Ok(())
    }
}

/// Outcome of one submission. Also the view model of the HTML page: `url`
/// is echoed back, `error` replaces the item list when set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    pub url: String,
    pub items: Vec<String>,
    pub error: Option<String>,
}

impl ExtractResponse {
    pub fn awaiting_input(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn found(url: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            url: url.into(),
            items,
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            items: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
