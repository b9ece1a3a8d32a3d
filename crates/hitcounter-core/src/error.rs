//! Shared error type across hitcounter crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Counter store could not be reached.
    StoreUnavailable,
    /// Stored value is not an integer.
    MalformedValue,
    /// Invalid configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::MalformedValue => "MALFORMED_VALUE",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HitError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HitError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed value: {0}")]
    Malformed(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HitError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HitError::Unavailable(_) => ClientCode::StoreUnavailable,
            HitError::Malformed(_) => ClientCode::MalformedValue,
            HitError::Config(_) => ClientCode::Config,
            HitError::Internal(_) => ClientCode::Internal,
        }
    }
}
