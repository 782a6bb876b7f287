// Domain layer - the three operations, with no HTTP concerns.
// Each one delegates to exactly one kind of external collaborator per step
// and surfaces failures without retrying.

pub mod balance;
pub mod ingest;
pub mod retrieval;

use crate::chain::ChainError;
use crate::db::DatabaseError;
use crate::pinning::PinningError;

pub const TEXT_REQUIRED: &str = "Text data is required";
pub const INVALID_TOKEN_ADDRESS: &str = "Invalid token address";
pub const INVALID_WALLET_ADDRESS: &str = "Invalid wallet address";

// Domain error type - no HTTP concerns
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),
}

impl From<DatabaseError> for DomainError {
    fn from(e: DatabaseError) -> Self {
        DomainError::StorageFailure(e.to_string())
    }
}

impl From<PinningError> for DomainError {
    fn from(e: PinningError) -> Self {
        DomainError::UpstreamFailure(e.to_string())
    }
}

impl From<ChainError> for DomainError {
    fn from(e: ChainError) -> Self {
        DomainError::UpstreamFailure(e.to_string())
    }
}

pub use balance::{scale_balance, token_balance};
pub use ingest::store_text;
pub use retrieval::retrieve_text;
