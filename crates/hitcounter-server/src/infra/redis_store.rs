//! Redis-backed counter store.
//!
//! The client is built at startup without touching the network. The
//! connection is opened on first use and kept in a `ConnectionManager`.
//! Opening is a single bounded attempt: an unreachable server fails the
//! request that hit it, and the next request tries again from scratch.

use async_trait::async_trait;
use std::time::Duration;

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, ErrorKind, RedisError};
use tokio::sync::OnceCell;

use hitcounter_core::error::{HitError, Result};
use hitcounter_core::CounterStore;

use crate::config::RedisSection;

pub struct RedisStore {
    endpoint: String,
    client: redis::Client,
    connect_timeout: Duration,
    conn: OnceCell<ConnectionManager>,
}

impl RedisStore {
    pub fn new(cfg: &RedisSection) -> Result<Self> {
        let endpoint = cfg.url();
        let client = redis::Client::open(endpoint.as_str())
            .map_err(|e| HitError::Config(format!("invalid redis endpoint {endpoint}: {e}")))?;
        Ok(Self {
            endpoint,
            client,
            connect_timeout: Duration::from_millis(cfg.connect_timeout_ms),
            conn: OnceCell::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn conn(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                tracing::debug!(endpoint = %self.endpoint, "opening redis connection");
                let cfg = ConnectionManagerConfig::new()
                    .set_number_of_retries(0)
                    .set_connection_timeout(self.connect_timeout);
                ConnectionManager::new_with_config(self.client.clone(), cfg).await
            })
            .await
            .map_err(map_redis_err)?;
        Ok(conn.clone())
    }
}

/// Classify a client error.
///
/// Only a value that does not parse as an integer is `Malformed`: a
/// `TypeError` on our side, or the server refusing `INCR` on a non-integer.
/// Any other server `ERR` reply is `Internal`; everything else means the
/// store could not be reached.
pub fn map_redis_err(e: RedisError) -> HitError {
    match e.kind() {
        ErrorKind::TypeError => HitError::Malformed(e.to_string()),
        ErrorKind::ResponseError if is_not_integer_reply(&e) => HitError::Malformed(e.to_string()),
        ErrorKind::ResponseError => HitError::Internal(e.to_string()),
        _ => HitError::Unavailable(e.to_string()),
    }
}

fn is_not_integer_reply(e: &RedisError) -> bool {
    e.detail().is_some_and(|d| d.contains("not an integer"))
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn().await?;
        let n: i64 = conn.incr(key, 1).await.map_err(map_redis_err)?;
        Ok(n)
    }

    async fn get(&self, key: &str) -> Result<Option<i64>> {
        let mut conn = self.conn().await?;
        let v: Option<i64> = conn.get(key).await.map_err(map_redis_err)?;
        Ok(v)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_err)?;
        Ok(())
    }
}
