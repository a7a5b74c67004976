/// 引擎对一次 `(text, format)` 调用的返回值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutput {
    /// 逐行结果（conll / prolog / moses / tokenized / tagged）
    Lines(Vec<String>),
    /// 单个原始文本（preprocessed / raw）
    Raw(String),
    /// 文档序列，graphical 只取第一个
    Documents(Vec<String>),
}

impl ParseOutput {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Lines(_) => "lines",
            Self::Raw(_) => "raw",
            Self::Documents(_) => "documents",
        }
    }
}
