//! HTTP路由handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use chrono::Local;
use parzu_core::api::ParseRequest;

use crate::http::{index::index_html, models::*, state::AppState};

const PARSE_ENDPOINT: &str = "/parse/";

/// 创建所有路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            PARSE_ENDPOINT,
            get(parse_get_handler).post(parse_post_handler),
        )
        // 帮助页之外的客户端常省略末尾斜杠
        .route("/parse", get(parse_get_handler).post(parse_post_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// GET / - 帮助页
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    state.record_request("/");
    Html(index_html())
}

/// GET /parse/ - 从查询参数解析
async fn parse_get_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, HttpServerError> {
    let query = ParseQuery::from_pairs(pairs);
    handle_parse(&state, query.text, query.format).await
}

/// POST /parse/ - 从 JSON body 解析（忽略 Content-Type）
async fn parse_post_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HttpServerError> {
    let body: ParseBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            state.record_request(PARSE_ENDPOINT);
            state.record_error();
            return Err(HttpServerError::MalformedBody(e.to_string()));
        }
    };
    handle_parse(&state, body.text, body.format).await
}

/// GET 与 POST 共用：解析输入 -> 分发 -> 设置 Content-Type
async fn handle_parse(
    state: &AppState,
    text: Option<String>,
    format: Option<String>,
) -> Result<Response, HttpServerError> {
    state.record_request(PARSE_ENDPOINT);

    let result = match ParseRequest::resolve(text, format) {
        Ok(req) => state.dispatcher.dispatch(&req).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(rendered) => Ok((
            [(header::CONTENT_TYPE, rendered.content_type)],
            rendered.body,
        )
            .into_response()),
        Err(e) => {
            state.record_error();
            Err(e.into())
        }
    }
}

/// GET /health - 健康检查
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let (uptime_seconds, requests_handled, requests_by_endpoint, errors_total) = state
        .stats
        .read()
        .map(|stats| {
            (
                stats.uptime_seconds(),
                stats.requests_total,
                stats.requests_by_endpoint.clone(),
                stats.errors_total,
            )
        })
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        engine: state.dispatcher.engine_name().to_string(),
        uptime_seconds,
        requests_handled,
        requests_by_endpoint,
        errors_total,
        timestamp: Local::now().to_rfc3339(),
    })
}
