use std::path::PathBuf;

use clap::Parser;
use parzu_core::api::{AppConfig, EngineProvider};

#[derive(Parser, Debug, Default)]
#[command(
    name = "parzu-server",
    version,
    about = "Simple web API for the ParZu dependency parser"
)]
pub struct Args {
    /// Port number to listen to (default: 5003)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Host address to listen on (default: 127.0.0.1)
    #[arg(long, short = 'H')]
    pub host: Option<String>,

    /// Set debug mode (log level `debug`)
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Explicit config file instead of ~/.parzu/config.toml or ./config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of runtime worker threads
    #[arg(long)]
    pub workers: Option<usize>,

    /// Serve every request on a single thread
    #[arg(long, conflicts_with = "workers")]
    pub single_threaded: bool,

    /// Parser executable to invoke
    #[arg(long)]
    pub engine_program: Option<String>,

    /// Maximum concurrent parser invocations (1 serialises access)
    #[arg(long)]
    pub max_concurrency: Option<usize>,
}

impl Args {
    /// 命令行参数优先于配置文件与环境变量
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(port) = self.port {
            cfg.http_server.port = port;
        }
        if let Some(host) = &self.host {
            cfg.http_server.host = host.clone();
        }
        if self.debug {
            cfg.logging.level = "debug".to_string();
        }
        if let Some(workers) = self.workers {
            cfg.http_server.workers = Some(workers);
        }
        if let Some(max) = self.max_concurrency {
            cfg.engine.max_concurrency = max;
        }
        let EngineProvider::Command(ref mut cmd_cfg) = cfg.engine.provider;
        if let Some(program) = &self.engine_program {
            cmd_cfg.program = program.clone();
        }
    }
}
