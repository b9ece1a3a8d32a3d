use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::{HitError, Result};

use super::CounterStore;

/// In-process store with the same string-valued semantics as Redis.
///
/// Values are kept as strings so a non-integer value can be seeded with
/// [`MemoryStore::set_raw`]. [`MemoryStore::set_offline`] makes every call
/// fail with `Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, String>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `key` with an arbitrary value.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(HitError::Unavailable("memory store offline".into()));
        }
        Ok(())
    }
}

fn parse(key: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| HitError::Malformed(format!("value of {key:?} is not an integer: {raw:?}")))
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        self.check_online()?;
        // The entry guard holds the shard lock for the read-modify-write.
        let mut entry = self.values.entry(key.to_string()).or_insert_with(|| "0".into());
        let next = parse(key, entry.value())?
            .checked_add(1)
            .ok_or_else(|| HitError::Malformed(format!("increment of {key:?} would overflow")))?;
        *entry = next.to_string();
        Ok(next)
    }

    async fn get(&self, key: &str) -> Result<Option<i64>> {
        self.check_online()?;
        match self.values.get(key) {
            Some(raw) => parse(key, raw.value()).map(Some),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.check_online()
    }
}
