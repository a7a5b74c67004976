//! parzu-core：HTTP 无关的请求分发核心（输入解析、格式表、引擎抽象、响应渲染）。

pub mod api;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod format;
