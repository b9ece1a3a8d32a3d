//! Counter endpoint.

pub mod error;

use axum::extract::State;

use hitcounter_core::HITS_KEY;

use crate::app_state::AppState;

pub use error::ApiError;

/// `GET /`: bump the counter, read it back, render `Hits: <n>`.
///
/// The increment and the read are two round trips. Under concurrent load the
/// read may already include another request's increment.
pub async fn hits(State(state): State<AppState>) -> Result<String, ApiError> {
    let store = state.store();
    store.incr(HITS_KEY).await?;
    let n = store.get(HITS_KEY).await?.unwrap_or(0);
    Ok(format!("Hits: {n}"))
}
