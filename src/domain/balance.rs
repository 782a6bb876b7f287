use ethers::types::U256;
use futures::try_join;
use std::num::ParseFloatError;
use tracing::info;

use crate::chain::{parse_address, ChainClient};
use crate::domain::{DomainError, INVALID_TOKEN_ADDRESS, INVALID_WALLET_ADDRESS};

/// Read `balanceOf(wallet)` and `decimals()` on `token` and return the
/// human-scaled balance. Both reads are `eth_call`s; nothing is submitted.
pub async fn token_balance(
    token_address: &str,
    wallet_address: &str,
    chain: &dyn ChainClient,
) -> Result<f64, DomainError> {
    let token = parse_address(token_address)
        .ok_or(DomainError::InvalidInput(INVALID_TOKEN_ADDRESS))?;
    let wallet = parse_address(wallet_address)
        .ok_or(DomainError::InvalidInput(INVALID_WALLET_ADDRESS))?;

    let (raw, decimals) = try_join!(chain.balance_of(token, wallet), chain.decimals(token))?;
    let balance = scale_balance(raw, decimals).map_err(|e| {
        DomainError::UpstreamFailure(format!("unreadable balance {}: {}", raw, e))
    })?;

    info!(raw = %raw, decimals, balance, "Fetched token balance");
    Ok(balance)
}

/// `raw / 10^decimals` in floating point. The raw value is rounded once, from
/// its decimal form, so results are lossy for large values.
pub fn scale_balance(raw: U256, decimals: u8) -> Result<f64, ParseFloatError> {
    let raw = raw.to_string().parse::<f64>()?;
    Ok(raw / 10f64.powi(i32::from(decimals)))
}
