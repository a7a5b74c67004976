//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `parzu_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, load_from_path, AppConfig, CommandEngineConfig, EngineConfig, EngineProvider,
    HttpServerConfig, LoggingConfig,
};
pub use crate::dispatch::{
    render, DispatchError, Dispatcher, ParseRequest, Rendered, CONTENT_TYPE_HTML,
    CONTENT_TYPE_SVG, CONTENT_TYPE_TEXT,
};
pub use crate::engine::{LimitedEngine, ParseEngine, ParseOutput};
pub use crate::error::{CliError, EngineError, EngineErrorKind};
pub use crate::format::{
    InputFormat, OutputFormat, RenderStrategy, FORMAT_TABLE, OTHER_FORMATS, SUGGESTED_FORMATS,
    VALID_FORMATS,
};
