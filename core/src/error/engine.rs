use std::time::Duration;

use thiserror::Error;

/// 解析引擎调用失败的分类
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("input rejected by parser: {0}")]
    InvalidInput(String),

    #[error("parser unavailable: {0}")]
    Unavailable(String),

    #[error("parser timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("parser exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("unexpected parser output: {0}")]
    Output(String),

    #[error("parser io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 传输层据此选择状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    InvalidInput,
    Unavailable,
    Timeout,
    Internal,
}

impl EngineError {
    pub fn kind(&self) -> EngineErrorKind {
        match self {
            Self::InvalidInput(_) => EngineErrorKind::InvalidInput,
            Self::Unavailable(_) => EngineErrorKind::Unavailable,
            Self::Timeout(_) => EngineErrorKind::Timeout,
            Self::Failed { .. } | Self::Output(_) | Self::Io(_) => EngineErrorKind::Internal,
        }
    }
}

impl EngineErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Unavailable => "unavailable",
            Self::Timeout => "timeout",
            Self::Internal => "internal",
        }
    }
}
