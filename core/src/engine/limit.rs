//! 引擎并发限制：用信号量包装任意引擎，`max_concurrency = 1` 即完全串行

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::EngineError;
use crate::format::{InputFormat, OutputFormat};

use super::{ParseEngine, ParseOutput};

pub struct LimitedEngine {
    inner: Arc<dyn ParseEngine>,
    permits: Arc<Semaphore>,
    max_concurrency: usize,
}

impl LimitedEngine {
    pub fn new(inner: Arc<dyn ParseEngine>, max_concurrency: usize) -> Self {
        let max_concurrency = max_concurrency.max(1);
        Self {
            inner,
            permits: Arc::new(Semaphore::new(max_concurrency)),
            max_concurrency,
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

#[async_trait]
impl ParseEngine for LimitedEngine {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn parse(
        &self,
        text: &str,
        input: InputFormat,
        output: OutputFormat,
    ) -> Result<ParseOutput, EngineError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;
        tracing::trace!(
            engine = %self.inner.name(),
            available = self.permits.available_permits(),
            "engine permit acquired"
        );
        self.inner.parse(text, input, output).await
    }
}
