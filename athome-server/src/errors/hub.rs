use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("Hub connection failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hub request timed out")]
    Timeout,

    #[error("Malformed hub response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Hub rejected request: {0}")]
    Rejected(String),

    #[error("Hub response missing field: {0}")]
    MissingField(&'static str),
}

impl HubError {
    pub fn status_code(&self) -> StatusCode {
        // The console itself is healthy; every hub failure is an upstream one
        StatusCode::BAD_GATEWAY
    }
}
