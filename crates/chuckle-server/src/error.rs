use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chuckle::errors::JokeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Error reply for the HTTP surface
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "type": self.kind,
            }
        }));
        (self.status, body).into_response()
    }
}

impl From<JokeError> for ApiError {
    fn from(err: JokeError) -> Self {
        let (status, kind) = match &err {
            JokeError::NoJokes { .. } => (StatusCode::NOT_FOUND, "no_jokes"),
            JokeError::UnsupportedQuery { .. } => (StatusCode::NOT_FOUND, "unsupported_query"),
            JokeError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, "unknown_category"),
            JokeError::UnknownLanguage(_) => (StatusCode::BAD_REQUEST, "unknown_language"),
            JokeError::Corpus(_) => (StatusCode::INTERNAL_SERVER_ERROR, "corpus_error"),
            JokeError::Provider(_) => (StatusCode::BAD_GATEWAY, "provider_error"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
        };
        ApiError::new(status, kind, err.to_string())
    }
}
