pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod list;
pub mod models;
pub mod notice;
pub mod repo;
pub mod tags;

mod memory;
pub use memory::{MemoryStore, StoreRequest};

pub use config::RecordsConfig;
pub use controller::{perform, RecordListController};
pub use error::{ConfigError, StoreError};
pub use form::{Field, FormErrors, RecordForm};
pub use list::{LoadState, ModalTicket, Mutation, RecordListState};
pub use models::{Age, DraftRecord, EditorMode, Record, RecordBody, RecordKey};
pub use notice::{Notice, NoticeLevel};
pub use repo::RecordStore;
pub use tags::{TagEditor, TagSet};
