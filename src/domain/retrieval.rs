use tracing::info;

use crate::db::RecordStore;
use crate::domain::DomainError;
use crate::pinning::PinningClient;

/// Return the pinned text for a recorded identifier. The gateway is trusted;
/// fetched bytes are not checked against the identifier.
pub async fn retrieve_text(
    ipfs_hash: &str,
    records: &dyn RecordStore,
    pinning: &dyn PinningClient,
) -> Result<String, DomainError> {
    if records.find_by_identifier(ipfs_hash).await?.is_none() {
        return Err(DomainError::NotFound(ipfs_hash.to_string()));
    }

    let text = pinning.fetch_text(ipfs_hash).await?;

    info!(ipfs_hash = %ipfs_hash, bytes = text.len(), "Retrieved pinned text");
    Ok(text)
}
