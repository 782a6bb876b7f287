use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain;

pub const STORE_FAILED: &str = "Failed to store data";

#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreResponse {
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn store_handler(
    State(state): State<AppState>,
    payload: Result<Json<StoreRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StoreResponse>)> {
    info!("Processing store request");

    // An unparseable body is treated the same as a missing `text` field
    let text = match payload {
        Ok(Json(request)) => request.text.unwrap_or_default(),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected store request body");
            String::new()
        }
    };

    let ipfs_hash = domain::store_text(&text, state.pinning.as_ref(), state.records.as_ref())
        .await
        .map_err(|e| ApiError::from_domain(e, STORE_FAILED))?;

    Ok((StatusCode::CREATED, Json(StoreResponse { ipfs_hash })))
}
