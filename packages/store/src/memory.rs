use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::models::{Record, RecordBody, RecordKey};
use crate::repo::RecordStore;

/// A call received by a [`MemoryStore`], kept for inspection.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreRequest {
    List,
    Create(RecordBody),
    Update(RecordKey, RecordBody),
    Delete(RecordKey),
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    next_id: u64,
    offline: bool,
    requests: Vec<StoreRequest>,
}

/// In-memory RecordStore for testing and offline demos.
///
/// Keys are assigned sequentially starting at `"1"`, like the mock API.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `records`. New keys continue after the
    /// largest numeric key present.
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records,
                next_id,
                ..Inner::default()
            })),
        }
    }

    /// While offline every call fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    pub fn records(&self) -> Vec<Record> {
        self.inner.lock().unwrap().records.clone()
    }

    /// Every call received so far, including failed ones.
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn begin(&self, request: StoreRequest) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        if inner.offline {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(inner)
    }
}

impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Record>, StoreError> {
        let inner = self.begin(StoreRequest::List)?;
        Ok(inner.records.clone())
    }

    async fn create(&self, body: &RecordBody) -> Result<Record, StoreError> {
        let mut inner = self.begin(StoreRequest::Create(body.clone()))?;
        inner.next_id += 1;
        let record = Record::from_body(RecordKey::new(inner.next_id.to_string()), body.clone());
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, key: &RecordKey, body: &RecordBody) -> Result<Record, StoreError> {
        let mut inner = self.begin(StoreRequest::Update(key.clone(), body.clone()))?;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| &r.id == key)
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        *slot = Record::from_body(key.clone(), body.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, key: &RecordKey) -> Result<(), StoreError> {
        let mut inner = self.begin(StoreRequest::Delete(key.clone()))?;
        let index = inner
            .records
            .iter()
            .position(|r| &r.id == key)
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        inner.records.remove(index);
        Ok(())
    }
}
