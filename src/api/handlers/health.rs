use axum::extract::State;
use tracing::error;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

pub const DATABASE_UNAVAILABLE: &str = "Database unavailable";

pub async fn health_handler(State(state): State<AppState>) -> ApiResult<&'static str> {
    state.records.ping().await.map_err(|e| {
        error!(error = %e, "Health check failed");
        ApiError::ServiceUnavailable(DATABASE_UNAVAILABLE)
    })?;

    Ok("OK")
}
