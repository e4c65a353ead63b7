use thiserror::Error;

/// Failure of a single inference call.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("inference request failed: {0}")]
    Request(String),

    #[error("inference server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed inference response: {0}")]
    Decode(String),

    #[error("invalid entity in model output: {0}")]
    InvalidEntity(String),
}

/// Failure to bring the model up at startup. Never fatal: the server keeps
/// running and reports the model as unavailable.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("invalid model endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("model server unreachable: {0}")]
    Unreachable(String),

    #[error("model server unhealthy: {0}")]
    Unhealthy(String),

    #[error("model server has {actual} loaded, expected {expected}")]
    WrongModel { expected: String, actual: String },
}
