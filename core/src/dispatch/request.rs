use super::DispatchError;

/// 默认输出格式
pub const DEFAULT_FORMAT: &str = "conll";

/// 单次请求的输入，格式保留为原始字符串，由 [`super::Dispatcher`] 校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub text: String,
    pub format: String,
}

impl ParseRequest {
    /// 从 query 或 body 中取出的字段构建请求。
    ///
    /// `text` 缺失或为空时返回 [`DispatchError::MissingText`]；`format` 缺失时使用 `conll`。
    /// 不做 trim、长度或编码检查。
    pub fn resolve(text: Option<String>, format: Option<String>) -> Result<Self, DispatchError> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(DispatchError::MissingText),
        };
        let format = format.unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        Ok(Self { text, format })
    }
}
