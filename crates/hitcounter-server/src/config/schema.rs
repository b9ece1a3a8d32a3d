use std::net::SocketAddr;

use serde::Deserialize;
use hitcounter_core::error::{Result, HitError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub redis: RedisSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            redis: RedisSection::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.redis.validate()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| HitError::Config(format!("listen must be a valid SocketAddr ({}): {e}", self.listen)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedisSection {
    #[serde(default = "default_redis_host")]
    pub host: String,

    #[serde(default = "default_redis_port")]
    pub port: u16,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for RedisSection {
    fn default() -> Self {
        Self {
            host: default_redis_host(),
            port: default_redis_port(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl RedisSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(HitError::Config("redis.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(HitError::Config("redis.port must be non-zero".into()));
        }
        if !(100..=30000).contains(&self.connect_timeout_ms) {
            return Err(HitError::Config(
                "redis.connect_timeout_ms must be between 100 and 30000".into(),
            ));
        }
        Ok(())
    }

    /// Connection URL in the form the redis client expects.
    pub fn url(&self) -> String {
        if self.host.contains(':') {
            format!("redis://[{}]:{}/", self.host, self.port)
        } else {
            format!("redis://{}:{}/", self.host, self.port)
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_redis_host() -> String {
    "localhost".into()
}
fn default_redis_port() -> u16 {
    6379
}
fn default_connect_timeout_ms() -> u64 {
    2000
}
