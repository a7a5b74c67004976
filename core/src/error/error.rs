use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("engine error: {0}")]
    Engine(#[from] super::EngineError),
    #[error("server failed: {0}")]
    Server(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
