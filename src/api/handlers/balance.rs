use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain;

pub const BALANCE_FAILED: &str = "Failed to fetch token balance";

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

#[tracing::instrument(
    skip(state),
    fields(
        token_address = %token_address,
        wallet_address = %wallet_address
    )
)]
pub async fn balance_handler(
    Path((token_address, wallet_address)): Path<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<Json<BalanceResponse>> {
    info!("Processing balance request");

    let balance = domain::token_balance(&token_address, &wallet_address, state.chain.as_ref())
        .await
        .map_err(|e| ApiError::from_domain(e, BALANCE_FAILED))?;

    Ok(Json(BalanceResponse { balance }))
}
