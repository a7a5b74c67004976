//! 完整链路：真实路由 + 中间件 + 外部命令引擎（用 `sh -c` 代替 ParZu）

#![cfg(unix)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use parzu_cli::http::{build_app, AppState};
use parzu_core::api::{
    CommandEngineConfig, Dispatcher, EngineConfig, EngineProvider, HttpServerConfig,
};
use parzu_plugins::factory::build_engine;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn app_with_script(script: &str, timeout_ms: u64) -> axum::Router {
    app_with_server(script, timeout_ms, &HttpServerConfig::default())
}

fn app_with_server(script: &str, timeout_ms: u64, server: &HttpServerConfig) -> axum::Router {
    let engine = build_engine(&EngineConfig {
        provider: EngineProvider::Command(CommandEngineConfig {
            program: "sh".into(),
            args: vec!["-c".into(), script.into()],
            timeout_ms,
            working_dir: None,
        }),
        max_concurrency: 2,
    })
    .unwrap();
    let state = AppState::new("e2e".into(), Dispatcher::new(engine));
    build_app(server, state)
}

async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, String, String) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn post_conll_through_command_engine() {
    // 每个词一行，模拟逐行输出
    let app = app_with_script("tr ' ' '\\n'", 0);
    let req = Request::builder()
        .method(Method::POST)
        .uri("/parse/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"text":"Ich bin ein Berliner.","format":"conll"}"#,
        ))
        .unwrap();

    let (status, content_type, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert_eq!(body, "Ich\nbin\nein\nBerliner.");
}

#[tokio::test]
async fn get_graphical_through_command_engine() {
    let app = app_with_script("printf '<svg/>'", 0);
    let req = Request::builder()
        .uri("/parse/?text=Hallo&format=graphical")
        .body(Body::empty())
        .unwrap();

    let (status, content_type, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml");
    assert_eq!(body, "<svg/>");
}

#[tokio::test]
async fn engine_timeout_is_gateway_timeout() {
    let app = app_with_script("sleep 5", 100);
    let req = Request::builder()
        .uri("/parse/?text=Hallo")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, "Parser error: timeout\n");
}

#[tokio::test]
async fn engine_crash_is_internal_error_without_detail() {
    let app = app_with_script("echo 'Traceback: /opt/ParZu' >&2; exit 1", 0);
    let req = Request::builder()
        .uri("/parse/?text=Hallo&format=raw")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("Traceback"));
}

#[tokio::test]
async fn health_reports_engine() {
    let app = app_with_script("cat", 0);
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["engine"], "command");
    assert_eq!(health["session_id"], "e2e");
}

#[tokio::test]
async fn request_timeout_layer_returns_408() {
    let server = HttpServerConfig {
        request_timeout_ms: 100,
        ..Default::default()
    };
    let app = app_with_server("sleep 5", 0, &server);
    let req = Request::builder()
        .uri("/parse/?text=Hallo")
        .body(Body::empty())
        .unwrap();

    let (status, _, _) = send(app, req).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn zero_request_timeout_lets_slow_parse_finish() {
    let server = HttpServerConfig {
        request_timeout_ms: 0,
        ..Default::default()
    };
    let app = app_with_server("sleep 0.3; cat", 0, &server);
    let req = Request::builder()
        .uri("/parse/?text=Hallo&format=raw")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hallo");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app_with_script("cat", 0);
    let req = Request::builder()
        .uri("/parse/?text=Hallo&format=raw")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_allows_post() {
    let app = app_with_script("cat", 0);
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/parse/")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allowed.contains("POST"), "allowed methods: {allowed}");
}
