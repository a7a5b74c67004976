#[allow(clippy::module_inception)]
pub mod error;
pub mod engine;

pub use engine::{EngineError, EngineErrorKind};
pub use error::CliError;
