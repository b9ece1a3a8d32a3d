//! Shared application state.
//!
//! Holds the startup config and the counter store handle. Cloned into every
//! request; nothing in here is mutated after construction.

use std::sync::Arc;

use hitcounter_core::error::Result;
use hitcounter_core::CounterStore;

use crate::config::Config;
use crate::infra::RedisStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: Config,
    store: Arc<dyn CounterStore>,
}

impl AppState {
    /// Build state around an explicit store (tests, alternative backends).
    pub fn new(cfg: Config, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    /// Build state backed by the Redis endpoint in `cfg`.
    pub fn from_config(cfg: Config) -> Result<Self> {
        let store = RedisStore::new(&cfg.redis)?;
        tracing::info!(endpoint = %store.endpoint(), "redis store configured");
        Ok(Self::new(cfg, Arc::new(store)))
    }

    pub fn cfg(&self) -> &Config {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.inner.store)
    }
}
