pub mod api;
pub mod chain;
pub mod config;
pub mod db;
pub mod domain;
pub mod pinning;

// Re-export commonly used types
pub use api::server::{create_app, create_router, run_server};
pub use api::state::AppState;
pub use config::{Config, ConfigError};

pub use db::{PgRecordStore, RecordStore, StoredRecord, DatabaseError};
pub use pinning::{PinataClient, PinningClient, PinningError};
pub use chain::{ChainClient, ChainError, EthersChainClient};
pub use domain::DomainError;
