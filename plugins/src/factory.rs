use std::sync::Arc;

use anyhow::Result;
use parzu_core::api::{EngineConfig, EngineProvider, LimitedEngine, ParseEngine};

use crate::engine::CommandEngine;

/// 构建进程内唯一的解析引擎，并按配置限制并发
pub fn build_engine(cfg: &EngineConfig) -> Result<Arc<dyn ParseEngine>> {
    let inner: Arc<dyn ParseEngine> = match &cfg.provider {
        EngineProvider::Command(cmd_cfg) => Arc::new(CommandEngine::new(cmd_cfg.clone())?),
    };

    tracing::info!(
        engine = %inner.name(),
        max_concurrency = cfg.max_concurrency,
        "parsing engine built"
    );

    Ok(Arc::new(LimitedEngine::new(inner, cfg.max_concurrency)))
}
