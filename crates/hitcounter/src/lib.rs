//! Top-level facade crate for hitcounter.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use hitcounter_core::*;
}

pub mod server {
    pub use hitcounter_server::*;
}
