use crate::error::EngineError;
use crate::format::{OutputFormat, RenderStrategy};

use super::DispatchError;
use crate::engine::ParseOutput;

pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const CONTENT_TYPE_SVG: &str = "image/svg+xml";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// 渲染后的响应体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content_type: &'static str,
    pub body: String,
}

/// 按格式的渲染策略把引擎输出转换为响应体
pub fn render(format: OutputFormat, output: ParseOutput) -> Result<Rendered, DispatchError> {
    let strategy = format.strategy();
    let body = match (strategy, output) {
        (RenderStrategy::LineJoined, ParseOutput::Lines(lines)) => lines.join("\n"),
        (RenderStrategy::Passthrough, ParseOutput::Raw(raw)) => raw,
        (RenderStrategy::ImageDocument, ParseOutput::Documents(docs)) => {
            let first = docs.into_iter().next().ok_or_else(|| {
                EngineError::Output(format!("{format} returned no documents"))
            })?;
            return Ok(Rendered {
                content_type: CONTENT_TYPE_SVG,
                body: first,
            });
        }
        (strategy, other) => {
            return Err(EngineError::Output(format!(
                "{format} expects {strategy:?} output, got {}",
                other.shape()
            ))
            .into())
        }
    };

    Ok(Rendered {
        content_type: CONTENT_TYPE_TEXT,
        body,
    })
}
