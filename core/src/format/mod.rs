//! 输出格式定义与渲染策略查找表

use std::fmt;
use std::str::FromStr;

/// 客户端请求的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Conll,
    Prolog,
    Graphical,
    Tokenized,
    Tagged,
    Preprocessed,
    Moses,
    Raw,
}

/// 引擎输出映射到响应体的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// 多行结果按 `\n` 拼接，`text/plain`
    LineJoined,
    /// 单个原始文本原样返回，`text/plain`
    Passthrough,
    /// 取第一个文档作为 SVG 图像返回
    ImageDocument,
}

/// 格式 -> 渲染策略的静态查找表（顺序即规范顺序）
pub const FORMAT_TABLE: [(OutputFormat, RenderStrategy); 8] = [
    (OutputFormat::Conll, RenderStrategy::LineJoined),
    (OutputFormat::Prolog, RenderStrategy::LineJoined),
    (OutputFormat::Graphical, RenderStrategy::ImageDocument),
    (OutputFormat::Tokenized, RenderStrategy::LineJoined),
    (OutputFormat::Tagged, RenderStrategy::LineJoined),
    (OutputFormat::Preprocessed, RenderStrategy::Passthrough),
    (OutputFormat::Moses, RenderStrategy::LineJoined),
    (OutputFormat::Raw, RenderStrategy::Passthrough),
];

/// 帮助页推荐的格式
pub const SUGGESTED_FORMATS: [OutputFormat; 3] = [
    OutputFormat::Conll,
    OutputFormat::Prolog,
    OutputFormat::Graphical,
];

pub const OTHER_FORMATS: [OutputFormat; 5] = [
    OutputFormat::Tokenized,
    OutputFormat::Tagged,
    OutputFormat::Preprocessed,
    OutputFormat::Moses,
    OutputFormat::Raw,
];

/// 所有合法格式，错误提示中按此顺序列出
pub const VALID_FORMATS: [OutputFormat; 8] = [
    OutputFormat::Conll,
    OutputFormat::Prolog,
    OutputFormat::Graphical,
    OutputFormat::Tokenized,
    OutputFormat::Tagged,
    OutputFormat::Preprocessed,
    OutputFormat::Moses,
    OutputFormat::Raw,
];

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conll => "conll",
            Self::Prolog => "prolog",
            Self::Graphical => "graphical",
            Self::Tokenized => "tokenized",
            Self::Tagged => "tagged",
            Self::Preprocessed => "preprocessed",
            Self::Moses => "moses",
            Self::Raw => "raw",
        }
    }

    pub fn strategy(&self) -> RenderStrategy {
        FORMAT_TABLE
            .iter()
            .find(|(format, _)| format == self)
            .map(|(_, strategy)| *strategy)
            .unwrap_or(RenderStrategy::Passthrough)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知格式名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMAT_TABLE
            .iter()
            .map(|(format, _)| *format)
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// 引擎输入格式，HTTP 服务只提交纯文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Plain,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
