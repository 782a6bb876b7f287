use std::sync::Arc;

use crate::chain::ChainClient;
use crate::db::RecordStore;
use crate::pinning::PinningClient;

/// Shared handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub pinning: Arc<dyn PinningClient>,
    pub records: Arc<dyn RecordStore>,
    pub chain: Arc<dyn ChainClient>,
}

impl AppState {
    pub fn new(
        pinning: Arc<dyn PinningClient>,
        records: Arc<dyn RecordStore>,
        chain: Arc<dyn ChainClient>,
    ) -> Self {
        Self {
            pinning,
            records,
            chain,
        }
    }
}
