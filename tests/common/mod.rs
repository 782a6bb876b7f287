#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use ethers::types::{Address, U256};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use textpin_api::{
    create_router, AppState, ChainClient, ChainError, DatabaseError, PinningClient,
    PinningError, RecordStore, StoredRecord,
};

/// In-memory pinning service keyed by a hash of the content
#[derive(Default)]
pub struct FakePinning {
    content: Mutex<HashMap<String, String>>,
    pub pin_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    pub fail_pin: AtomicBool,
    pub fail_fetch: AtomicBool,
}

impl FakePinning {
    pub fn identifier_for(text: &str) -> String {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        format!("Qm{:016x}", hasher.finish())
    }
}

#[async_trait]
impl PinningClient for FakePinning {
    async fn pin_text(&self, text: &str) -> Result<String, PinningError> {
        self.pin_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pin.load(Ordering::SeqCst) {
            return Err(PinningError::InvalidResponse("pinning unavailable".to_string()));
        }

        let identifier = Self::identifier_for(text);
        self.content
            .lock()
            .unwrap()
            .insert(identifier.clone(), text.to_string());
        Ok(identifier)
    }

    async fn fetch_text(&self, identifier: &str) -> Result<String, PinningError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(PinningError::InvalidResponse("gateway timeout".to_string()));
        }

        self.content
            .lock()
            .unwrap()
            .get(identifier)
            .cloned()
            .ok_or_else(|| PinningError::InvalidResponse(format!("{} not pinned", identifier)))
    }
}

/// In-memory record store with a unique identifier constraint
#[derive(Default)]
pub struct FakeRecords {
    records: Mutex<HashMap<String, StoredRecord>>,
    pub insert_calls: AtomicUsize,
    pub fail_writes: AtomicBool,
    pub fail_ping: AtomicBool,
}

impl FakeRecords {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.lock().unwrap().contains_key(identifier)
    }
}

#[async_trait]
impl RecordStore for FakeRecords {
    async fn insert(&self, identifier: &str) -> Result<StoredRecord, DatabaseError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DatabaseError::ConnectionError("connection reset".to_string()));
        }

        let mut records = self.records.lock().unwrap();
        if records.contains_key(identifier) {
            return Err(DatabaseError::IntegrityError(format!(
                "identifier {} already recorded",
                identifier
            )));
        }

        let now = Utc::now();
        let record = StoredRecord {
            id: records.len() as i64 + 1,
            identifier: identifier.to_string(),
            created_at: now,
            updated_at: now,
        };
        records.insert(identifier.to_string(), record.clone());
        Ok(record)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredRecord>, DatabaseError> {
        Ok(self.records.lock().unwrap().get(identifier).cloned())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.fail_ping.load(Ordering::SeqCst) {
            return Err(DatabaseError::ConnectionError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Token contract returning fixed values
pub struct FakeChain {
    pub raw_balance: U256,
    pub decimals: u8,
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl FakeChain {
    pub fn new(raw_balance: u64, decimals: u8) -> Self {
        Self {
            raw_balance: U256::from(raw_balance),
            decimals,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }
}

impl Default for FakeChain {
    fn default() -> Self {
        Self::new(1_500_000, 6)
    }
}

#[async_trait]
impl ChainClient for FakeChain {
    async fn balance_of(&self, _token: Address, _wallet: Address) -> Result<U256, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChainError::CallFailed {
                method: "balanceOf",
                reason: "execution reverted".to_string(),
            });
        }
        Ok(self.raw_balance)
    }

    async fn decimals(&self, _token: Address) -> Result<u8, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChainError::CallFailed {
                method: "decimals",
                reason: "execution reverted".to_string(),
            });
        }
        Ok(self.decimals)
    }
}

pub struct TestApp {
    pub router: Router,
    pub pinning: Arc<FakePinning>,
    pub records: Arc<FakeRecords>,
    pub chain: Arc<FakeChain>,
}

pub fn test_app() -> TestApp {
    test_app_with_chain(FakeChain::default())
}

pub fn test_app_with_chain(chain: FakeChain) -> TestApp {
    let pinning = Arc::new(FakePinning::default());
    let records = Arc::new(FakeRecords::default());
    let chain = Arc::new(chain);

    let state = AppState::new(pinning.clone(), records.clone(), chain.clone());

    TestApp {
        router: create_router(state),
        pinning,
        records,
        chain,
    }
}
