//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::make_store;

pub mod views;
pub use views::RecordsView;

mod notifications;
pub use notifications::NoticeStack;

mod tag_badge;
pub use tag_badge::{tag_label, TagBadge, TagColor};

mod tag_input;
pub use tag_input::TagInput;

mod record_form;
pub use record_form::RecordFormView;

mod record_table;
pub use record_table::RecordTable;
