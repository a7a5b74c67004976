//! HTTP服务器生命周期管理

use super::{
    middleware::{create_cors_layer, create_timeout_layer, create_trace_layer, request_logger},
    routes::create_router,
    AppState,
};
use axum::{middleware, Router};
use parzu_core::api::{AppConfig, CliError, Dispatcher, HttpServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use uuid::Uuid;

/// 构建引擎与状态并启动服务器，直到收到关闭信号
pub async fn handle_http_server(cfg: AppConfig) -> Result<(), CliError> {
    let session_id = Uuid::new_v4().to_string();

    // 引擎只在启动时构建一次，之后所有请求共享
    let engine = parzu_plugins::factory::build_engine(&cfg.engine)
        .map_err(|e| CliError::Config(format!("failed to build parsing engine: {e}")))?;
    let state = AppState::new(session_id.clone(), Dispatcher::new(engine));

    start_server(session_id, &cfg.http_server, state).await
}

/// 组装路由与中间件
pub fn build_app(config: &HttpServerConfig, state: AppState) -> Router {
    let app = create_router(state)
        .layer(middleware::from_fn(request_logger))
        .layer(create_trace_layer())
        .layer(create_cors_layer());

    match create_timeout_layer(config.request_timeout_ms) {
        Some(timeout) => app.layer(timeout),
        None => app,
    }
}

/// 启动HTTP服务器
pub async fn start_server(
    session_id: String,
    config: &HttpServerConfig,
    state: AppState,
) -> Result<(), CliError> {
    let app = build_app(config, state);

    // 解析地址
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| CliError::Config(format!("invalid listen address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "HTTP server listening on http://{} (session: {})",
        addr, session_id
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await
        .map_err(|e| CliError::Server(e.to_string()))?;

    info!("Server shutdown complete");
    Ok(())
}

/// 等待 SIGTERM 信号（Unix系统）
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!("Failed to setup SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Windows 系统不支持 SIGTERM，使用空操作
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
