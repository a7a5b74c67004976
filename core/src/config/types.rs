use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "parzu_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Tokio worker threads; unset uses one per core.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Whole-request timeout in milliseconds, 0 disables it.
    #[serde(default)]
    pub request_timeout_ms: u64,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    5003
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            workers: None,
            request_timeout_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine_provider")]
    pub provider: EngineProvider,

    /// Concurrent engine calls allowed; 1 serialises access.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

/// `kind` may be omitted and then defaults to `command`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineProvider {
    Command(CommandEngineConfig),
}

#[derive(Deserialize)]
struct RawEngineProvider {
    #[serde(default = "default_engine_kind")]
    kind: String,
    #[serde(flatten)]
    config: CommandEngineConfig,
}

fn default_engine_kind() -> String {
    "command".to_string()
}

impl<'de> Deserialize<'de> for EngineProvider {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEngineProvider::deserialize(deserializer)?;
        match raw.kind.as_str() {
            "command" => Ok(Self::Command(raw.config)),
            other => Err(de::Error::unknown_variant(other, &["command"])),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEngineConfig {
    #[serde(default = "default_engine_program")]
    pub program: String,

    /// Extra arguments placed before `-i plain -o <format>`.
    #[serde(default)]
    pub args: Vec<String>,

    /// Per-call timeout in milliseconds, 0 waits indefinitely.
    #[serde(default)]
    pub timeout_ms: u64,

    #[serde(default)]
    pub working_dir: Option<String>,
}

fn default_engine_program() -> String {
    "parzu".to_string()
}

fn default_engine_provider() -> EngineProvider {
    EngineProvider::Command(CommandEngineConfig::default())
}

fn default_max_concurrency() -> usize {
    4
}

impl Default for CommandEngineConfig {
    fn default() -> Self {
        Self {
            program: default_engine_program(),
            args: Vec::new(),
            timeout_ms: 0,
            working_dir: None,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider: default_engine_provider(),
            max_concurrency: default_max_concurrency(),
        }
    }
}
