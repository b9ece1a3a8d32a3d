//! hitcounter core: the counter store seam and the shared error surface.
//!
//! This crate carries no HTTP or network dependencies. The server crate
//! provides the Redis-backed store; the in-memory store here backs tests and
//! local runs.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `HitError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

/// Shared result type.
pub use error::{Result, HitError};
pub use store::{CounterStore, MemoryStore, HITS_KEY};
