//! # Record store — the remote collection seen from the client
//!
//! [`RecordStore`] is the async interface every backend implements: the HTTP
//! client in the `api` crate for the real mock API, and [`crate::MemoryStore`]
//! for tests and offline demos.
//!
//! The list controller never caches on the side. After each successful
//! mutation it calls [`RecordStore::list`] again and takes that as the truth.

use std::future::Future;

use crate::error::StoreError;
use crate::models::{Record, RecordBody, RecordKey};

/// Async CRUD access to the `/userrecord/` collection.
pub trait RecordStore {
    /// Fetch every record, in the store's order.
    fn list(&self) -> impl Future<Output = Result<Vec<Record>, StoreError>>;

    /// Create a record; the store assigns its key.
    fn create(&self, body: &RecordBody) -> impl Future<Output = Result<Record, StoreError>>;

    /// Replace the fields of the record addressed by `key`.
    fn update(
        &self,
        key: &RecordKey,
        body: &RecordBody,
    ) -> impl Future<Output = Result<Record, StoreError>>;

    /// Remove the record addressed by `key`.
    fn delete(&self, key: &RecordKey) -> impl Future<Output = Result<(), StoreError>>;
}
