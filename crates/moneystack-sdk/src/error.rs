use thiserror::Error;

/// Failure talking to one of the services
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is already in display form
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response body.
    ///
    /// `{"error": ..., "message": ...}` bodies become `error: message`; anything
    /// else is reported as `HTTP <status>: <body>`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let structured = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                let error = json.get("error")?.as_str()?.to_string();
                let message = json.get("message")?.as_str()?.to_string();
                Some(format!("{}: {}", error, message))
            });

        ApiError::Status {
            status,
            message: structured.unwrap_or_else(|| format!("HTTP {}: {}", status, body)),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
