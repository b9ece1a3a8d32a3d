//! hitcounter server library entry.
//!
//! Wires config, the Redis store, and the HTTP surface. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod infra;
pub mod ops;
pub mod router;
