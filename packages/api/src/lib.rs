//! # API crate — HTTP access to the user records collection
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpRecordStore`], the `reqwest` implementation of [`store::RecordStore`] |
//! | [`config`] | [`ApiConfig`]: base URL from `records.toml` or the `RECORDS_API_URL` environment variable |
//! | [`error`] | [`ApiError`] for setup failures |
//!
//! Request failures surface as [`store::StoreError`] so the list controller
//! handles every backend the same way.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpRecordStore;
pub use config::ApiConfig;
pub use error::ApiError;
