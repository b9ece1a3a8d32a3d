//! Server config loader.
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults
//! - strict YAML file named by `HITCOUNTER_CONFIG` (optional)
//! - `LISTEN_ADDR`, `REDIS_HOST`, `REDIS_PORT`
//!
//! Read once at startup. Nothing re-reads the environment afterwards.

pub mod schema;

use std::fs;

use hitcounter_core::error::{Result, HitError};

pub use schema::{Config, RedisSection};

pub const ENV_CONFIG_FILE: &str = "HITCOUNTER_CONFIG";
pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const ENV_REDIS_HOST: &str = "REDIS_HOST";
pub const ENV_REDIS_PORT: &str = "REDIS_PORT";

pub fn load_from_file(path: &str) -> Result<Config> {
    let s = fs::read_to_string(path)
        .map_err(|e| HitError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Config> {
    let cfg: Config = serde_yaml::from_str(s)
        .map_err(|e| HitError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Full startup load: optional file, then environment overrides.
pub fn load() -> Result<Config> {
    load_with(|k| std::env::var(k).ok())
}

/// Same as [`load`] with an injectable variable lookup.
pub fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(ENV_CONFIG_FILE) {
        Some(path) => load_from_file(&path)?,
        None => Config::default(),
    };
    apply_env(&mut cfg, lookup)?;
    Ok(cfg)
}

/// Overlay environment values onto `cfg` and re-validate.
pub fn apply_env<F>(cfg: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(listen) = lookup(ENV_LISTEN_ADDR) {
        cfg.listen = listen;
    }
    if let Some(host) = lookup(ENV_REDIS_HOST) {
        cfg.redis.host = host;
    }
    if let Some(port) = lookup(ENV_REDIS_PORT) {
        cfg.redis.port = port
            .trim()
            .parse()
            .map_err(|e| HitError::Config(format!("{ENV_REDIS_PORT} must be a port number ({port}): {e}")))?;
    }
    cfg.validate()
}
