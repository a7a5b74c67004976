use std::path::{Path, PathBuf};

use super::types::{AppConfig, EngineProvider};

/// Get the default parzu data directory: ~/.parzu
pub fn get_parzu_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".parzu"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.parzu/config.toml (highest)
    let user_config = get_parzu_data_dir()
        .map(|dir| dir.join("config.toml"))
        .ok()
        .filter(|p| p.exists());

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = match user_config {
        Some(path) => read_config(&path)?,
        None if local_config.exists() => read_config(local_config)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Load an explicit config file; env overrides still apply.
pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let mut cfg = read_config(path)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    tracing::debug!("config loaded from {}", path.display());
    Ok(cfg)
}

fn apply_env_overrides(
    cfg: &mut AppConfig,
    get: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("PARZU_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = non_empty("PARZU_PORT") {
        cfg.http_server.port = v
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PARZU_PORT {v:?}: {e}"))?;
    }
    if let Some(v) = non_empty("PARZU_LOG_LEVEL") {
        cfg.logging.level = v;
    }

    let EngineProvider::Command(ref mut cmd_cfg) = cfg.engine.provider;
    if let Some(v) = non_empty("PARZU_ENGINE_PROGRAM") {
        cmd_cfg.program = v;
    }

    Ok(())
}
