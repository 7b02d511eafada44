use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Failures talking to the upstream indexing API.
///
/// Every failure is either "the upstream did not answer successfully" or
/// "the upstream answered with something we could not read". Neither is
/// retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-2xx status, or the request never produced a response.
    #[error("Upstream unavailable ({}): {}", status_label(.status), .url)]
    UpstreamUnavailable { url: String, status: Option<u16> },

    /// Body is not JSON or lacks an expected field.
    #[error("Upstream returned malformed data from {url}: {reason}")]
    UpstreamMalformed { url: String, reason: String },
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}

impl FetchError {
    /// Short label used for metrics and structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::UpstreamMalformed { .. } => "upstream_malformed",
        }
    }

    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        tracing::debug!(url = %url, error = %err, "Upstream transport failure");
        Self::UpstreamUnavailable {
            url: url.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }

    pub(crate) fn malformed(url: &str, err: serde_json::Error) -> Self {
        Self::UpstreamMalformed {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Application error types surfaced at the HTTP boundary
#[derive(Debug)]
pub enum AppError {
    /// Request could not be understood
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::BadRequest(_) => "bad_request",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("JSON error: {}", err))
    }
}
