//! 请求分发：输入解析 -> 格式校验 -> 单次引擎调用 -> 按策略渲染

pub mod handler;
pub mod render;
pub mod request;

pub use handler::{DispatchError, Dispatcher};
pub use render::{render, Rendered, CONTENT_TYPE_HTML, CONTENT_TYPE_SVG, CONTENT_TYPE_TEXT};
pub use request::ParseRequest;
