use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::engine::ParseEngine;
use crate::error::EngineError;
use crate::format::{InputFormat, OutputFormat, VALID_FORMATS};

use super::render::{render, Rendered};
use super::request::ParseRequest;

/// 分发过程中的错误：前两类是客户端输入错误，引擎错误已分类
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("missing text")]
    MissingText,

    #[error("invalid output format: {0:?}")]
    InvalidFormat(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl DispatchError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingText | Self::InvalidFormat(_))
    }

    /// 面向用户的说明文字
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingText => {
                "Please provide text as POST data or GET text= parameter\n".to_string()
            }
            Self::InvalidFormat(_) => invalid_format_message(),
            Self::Engine(e) => format!("Parser error: {}\n", e.kind().as_str()),
        }
    }
}

fn invalid_format_message() -> String {
    let choices = VALID_FORMATS
        .iter()
        .map(OutputFormat::as_str)
        .collect::<Vec<_>>()
        .join("</li>\n<li>");
    format!(
        "Please provide valid output format as POST data or GET format= parameter\n</br>Valid outputformats are: <ul><li>{choices}</li></ul>"
    )
}

/// 分发处理器，持有进程内唯一的共享引擎
#[derive(Clone)]
pub struct Dispatcher {
    engine: Arc<dyn ParseEngine>,
}

impl Dispatcher {
    pub fn new(engine: Arc<dyn ParseEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// 校验格式、调用一次引擎并渲染。格式非法时不会调用引擎。
    #[tracing::instrument(name = "dispatch", skip(self, req), fields(format = %req.format, text_len = req.text.len()))]
    pub async fn dispatch(&self, req: &ParseRequest) -> Result<Rendered, DispatchError> {
        let format: OutputFormat = req
            .format
            .parse()
            .map_err(|_| DispatchError::InvalidFormat(req.format.clone()))?;

        let start = Instant::now();
        let output = self
            .engine
            .parse(&req.text, InputFormat::Plain, format)
            .await
            .map_err(|e| {
                tracing::error!(
                    engine = %self.engine.name(),
                    error = %e,
                    kind = e.kind().as_str(),
                    "engine call failed"
                );
                e
            })?;
        tracing::debug!(
            engine = %self.engine.name(),
            duration_ms = start.elapsed().as_millis() as u64,
            "engine call completed"
        );

        render(format, output)
    }
}
