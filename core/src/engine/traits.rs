use async_trait::async_trait;

use crate::error::EngineError;
use crate::format::{InputFormat, OutputFormat};

use super::types::ParseOutput;

/// 解析引擎能力。进程内只构建一次并在所有请求间共享，因此要求 `Send + Sync`；
/// 不可重入的实现需要由 [`super::LimitedEngine`] 串行化。
#[async_trait]
pub trait ParseEngine: Send + Sync {
    fn name(&self) -> &str;

    async fn parse(
        &self,
        text: &str,
        input: InputFormat,
        output: OutputFormat,
    ) -> Result<ParseOutput, EngineError>;
}
