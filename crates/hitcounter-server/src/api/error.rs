// HTTP mapping for store failures.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hitcounter_core::HitError;

#[derive(Debug)]
pub struct ApiError(pub HitError);

impl From<HitError> for ApiError {
    fn from(e: HitError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        tracing::warn!(error = %err, code = err.client_code().as_str(), "request failed");
        let body = Json(json!({
            "error": err.client_code().as_str(),
            "message": err.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
