use tracing::{info, warn};

use crate::db::RecordStore;
use crate::domain::{DomainError, TEXT_REQUIRED};
use crate::pinning::PinningClient;

/// Pin `text` and record the returned identifier.
///
/// A pin that succeeds followed by a failed record write is not compensated:
/// the content stays pinned without a local record, and the identifier is
/// logged so it can be reconciled by hand.
pub async fn store_text(
    text: &str,
    pinning: &dyn PinningClient,
    records: &dyn RecordStore,
) -> Result<String, DomainError> {
    if text.is_empty() {
        return Err(DomainError::InvalidInput(TEXT_REQUIRED));
    }

    let ipfs_hash = pinning.pin_text(text).await?;

    if let Err(e) = records.insert(&ipfs_hash).await {
        warn!(
            ipfs_hash = %ipfs_hash,
            error = %e,
            "Content pinned but record write failed; pin has no local record"
        );
        return Err(e.into());
    }

    info!(ipfs_hash = %ipfs_hash, "Stored text record");
    Ok(ipfs_hash)
}
