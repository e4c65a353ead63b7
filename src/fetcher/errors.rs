use thiserror::Error;

/// Failures while retrieving a page. The `Display` text is shown to the user
/// as-is, so variants carry the underlying message where there is one.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("io error: {0}")]
    Io(String),

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else if err.is_connect() || err.is_request() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Io(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_readable() {
        assert_eq!(
            FetchError::Http {
                status: reqwest::StatusCode::NOT_FOUND
            }
            .to_string(),
            "http error 404 Not Found"
        );
        assert_eq!(FetchError::RequestTimeout.to_string(), "request timeout");
        assert_eq!(
            FetchError::UnsupportedScheme("ftp".to_string()).to_string(),
            "unsupported url scheme: ftp"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err: FetchError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("invalid url:"));
    }
}
