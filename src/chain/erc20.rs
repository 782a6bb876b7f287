use async_trait::async_trait;
use ethers::{
    contract::abigen,
    providers::{Http, Provider},
    types::{Address, U256},
};
use std::sync::Arc;
use tracing::debug;

use crate::chain::{ChainClient, ChainError};

abigen!(
    Erc20Token,
    r#"[
        function balanceOf(address owner) external view returns (uint256)
        function decimals() external view returns (uint8)
    ]"#,
);

/// JSON-RPC backed chain client. Calls are `eth_call`s only, nothing is signed.
#[derive(Debug, Clone)]
pub struct EthersChainClient {
    provider: Arc<Provider<Http>>,
}

impl EthersChainClient {
    pub fn new(rpc_url: &str) -> Result<Self, ChainError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ChainError::InvalidProviderUrl(e.to_string()))?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }

    fn token(&self, token: Address) -> Erc20Token<Provider<Http>> {
        Erc20Token::new(token, self.provider.clone())
    }
}

#[async_trait]
impl ChainClient for EthersChainClient {
    async fn balance_of(&self, token: Address, wallet: Address) -> Result<U256, ChainError> {
        let balance = self
            .token(token)
            .balance_of(wallet)
            .call()
            .await
            .map_err(|e| ChainError::CallFailed {
                method: "balanceOf",
                reason: e.to_string(),
            })?;

        debug!(token = ?token, wallet = ?wallet, balance = %balance, "balanceOf returned");
        Ok(balance)
    }

    async fn decimals(&self, token: Address) -> Result<u8, ChainError> {
        self.token(token)
            .decimals()
            .call()
            .await
            .map_err(|e| ChainError::CallFailed {
                method: "decimals",
                reason: e.to_string(),
            })
    }
}
