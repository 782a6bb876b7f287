// Pinning service adapter - uploads content to a content-addressed network
// and reads it back through a gateway

pub mod pinata;

use async_trait::async_trait;
use thiserror::Error;

pub use pinata::PinataClient;

#[derive(Error, Debug)]
pub enum PinningError {
    #[error("Pinning request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected pinning response: {0}")]
    InvalidResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PinningClient: Send + Sync {
    /// Pin `text` as a single attachment and return its content identifier
    async fn pin_text(&self, text: &str) -> Result<String, PinningError>;

    /// Fetch previously pinned content as plain text
    async fn fetch_text(&self, identifier: &str) -> Result<String, PinningError>;
}
