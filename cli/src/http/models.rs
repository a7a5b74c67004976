//! HTTP API数据模型

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use parzu_core::api::{DispatchError, EngineErrorKind, CONTENT_TYPE_HTML, CONTENT_TYPE_TEXT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============= Parse =============

/// GET /parse/ 的查询参数，重复的键只取第一个值
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParseQuery {
    pub text: Option<String>,
    pub format: Option<String>,
}

impl ParseQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "text" => &mut query.text,
                "format" => &mut query.format,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// POST /parse/ 的 JSON body，`null` 视为缺省
#[derive(Debug, Default, Deserialize)]
pub struct ParseBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

// ============= Health =============

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub engine: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub requests_by_endpoint: HashMap<String, u64>,
    pub errors_total: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

pub const MALFORMED_BODY_MESSAGE: &str =
    "Request body must be a JSON object with text and format fields\n";

#[derive(Debug)]
pub enum HttpServerError {
    Dispatch(DispatchError),
    MalformedBody(String),
}

impl From<DispatchError> for HttpServerError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}

impl HttpServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Dispatch(DispatchError::MissingText | DispatchError::InvalidFormat(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Dispatch(DispatchError::Engine(e)) => match e.kind() {
                EngineErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
                EngineErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                EngineErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
                EngineErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (content_type, message) = match self {
            Self::MalformedBody(detail) => {
                tracing::debug!(error = %detail, "rejected request body");
                (CONTENT_TYPE_TEXT, MALFORMED_BODY_MESSAGE.to_string())
            }
            Self::Dispatch(e) if e.is_client_error() => (CONTENT_TYPE_HTML, e.user_message()),
            Self::Dispatch(e) => (CONTENT_TYPE_TEXT, e.user_message()),
        };

        (status, [(header::CONTENT_TYPE, content_type)], message).into_response()
    }
}
