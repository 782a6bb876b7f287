// Blockchain adapter - read-only ERC-20 calls over JSON-RPC

pub mod address;
pub mod erc20;

use async_trait::async_trait;
use ethers::types::{Address, U256};
use thiserror::Error;

pub use address::parse_address;
pub use erc20::EthersChainClient;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid provider URL: {0}")]
    InvalidProviderUrl(String),

    #[error("Contract call {method} failed: {reason}")]
    CallFailed { method: &'static str, reason: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// `balanceOf(wallet)` on the token contract
    async fn balance_of(&self, token: Address, wallet: Address) -> Result<U256, ChainError>;

    /// `decimals()` on the token contract
    async fn decimals(&self, token: Address) -> Result<u8, ChainError>;
}
