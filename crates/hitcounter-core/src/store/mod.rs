//! Counter store seam.
//!
//! The store owns the counter. Implementations must make `incr` atomic on
//! their side; callers hold no locks and keep no copy between requests.

mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemoryStore;

/// Key of the single counter tracked by the service.
pub const HITS_KEY: &str = "hits";

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically add one to `key` and return the new value.
    /// An absent key counts as zero.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Read `key` as an integer. `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<i64>>;

    /// Reachability probe.
    async fn ping(&self) -> Result<()>;
}
