use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain;

pub const RETRIEVE_FAILED: &str = "Failed to retrieve data";

#[derive(Debug, Serialize, Deserialize)]
pub struct RetrieveResponse {
    pub text: String,
}

#[tracing::instrument(skip(state), fields(ipfs_hash = %ipfs_hash))]
pub async fn retrieve_handler(
    Path(ipfs_hash): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<RetrieveResponse>> {
    info!("Processing retrieve request");

    let text = domain::retrieve_text(&ipfs_hash, state.records.as_ref(), state.pinning.as_ref())
        .await
        .map_err(|e| ApiError::from_domain(e, RETRIEVE_FAILED))?;

    Ok(Json(RetrieveResponse { text }))
}
