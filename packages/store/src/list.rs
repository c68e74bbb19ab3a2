//! # Record list state
//!
//! [`RecordListState`] is everything the records page shows: the fetched
//! collection, the modal and its [`RecordForm`], the editing target, the
//! pending delete confirmation, the current page and the notice stack.
//!
//! It does no I/O. User actions that need the network return a [`Mutation`];
//! whoever owns the state runs it against a [`crate::RecordStore`] and reports
//! back with [`RecordListState::mutation_succeeded`] or
//! [`RecordListState::mutation_failed`], then refetches. Nothing is merged
//! locally, so between a mutation and the refetch the list shows the previous
//! server state.
//!
//! Every opening of the modal gets a fresh [`ModalTicket`] and saves carry the
//! ticket they were submitted from. An outcome only touches the modal when
//! that same opening is still on screen; a late answer for a modal the user
//! already cancelled just posts its notice.

use crate::error::StoreError;
use crate::form::RecordForm;
use crate::models::{DraftRecord, EditorMode, Record, RecordBody, RecordKey};
use crate::notice::{Notice, NoticeLevel};

/// Result of the last collection fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Record>),
    Failed(String),
}

/// Identifies one opening of the record modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModalTicket(u64);

/// A network write requested by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Create(ModalTicket, RecordBody),
    Update(ModalTicket, RecordKey, RecordBody),
    Delete(RecordKey),
}

impl Mutation {
    /// The modal opening a save was submitted from.
    pub fn ticket(&self) -> Option<ModalTicket> {
        match self {
            Mutation::Create(ticket, _) | Mutation::Update(ticket, ..) => Some(*ticket),
            Mutation::Delete(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordListState {
    load: LoadState,
    modal_open: bool,
    ticket: ModalTicket,
    saving: bool,
    editing: Option<RecordKey>,
    form: RecordForm,
    pending_delete: Option<RecordKey>,
    page: usize,
    page_size: usize,
    notices: Vec<Notice>,
    next_notice: u64,
}

impl Default for RecordListState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl RecordListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            load: LoadState::Loading,
            modal_open: false,
            ticket: ModalTicket::default(),
            saving: false,
            editing: None,
            form: RecordForm::new(),
            pending_delete: None,
            page: 1,
            page_size: page_size.max(1),
            notices: Vec::new(),
            next_notice: 0,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The fetched records, or an empty slice while loading or failed.
    pub fn records(&self) -> &[Record] {
        match &self.load {
            LoadState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Mark a fetch as started. Already loaded rows stay visible until the
    /// fetch completes.
    pub fn begin_load(&mut self) {
        if !matches!(self.load, LoadState::Loaded(_)) {
            self.load = LoadState::Loading;
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<Record>, StoreError>) {
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "records loaded");
                self.load = LoadState::Loaded(records);
                self.page = self.page.clamp(1, self.page_count());
            }
            Err(err) => {
                tracing::error!("failed to fetch records: {err}");
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    // Modal

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn ticket(&self) -> ModalTicket {
        self.ticket
    }

    /// A save from the open modal is in flight.
    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn editing(&self) -> Option<&RecordKey> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> EditorMode {
        match &self.editing {
            Some(key) => EditorMode::Edit(key.clone()),
            None => EditorMode::Create,
        }
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    pub fn open_create(&mut self) {
        self.next_ticket();
        self.editing = None;
        self.form.initialize(EditorMode::Create, None);
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, record: &Record) {
        self.next_ticket();
        self.editing = Some(record.id.clone());
        self.form
            .initialize(EditorMode::Edit(record.id.clone()), Some(&DraftRecord::from(record)));
        self.modal_open = true;
    }

    pub fn cancel_modal(&mut self) {
        self.modal_open = false;
        self.saving = false;
        self.editing = None;
        self.form.close();
    }

    /// The modal's OK action: ask the form to submit and turn its payload
    /// into a mutation. `None` when the form is closed, rejects its input or
    /// is already saving.
    pub fn confirm_modal(&mut self) -> Option<Mutation> {
        if !self.modal_open || self.saving {
            return None;
        }
        let body = self.form.submit()?;
        self.saving = true;
        Some(self.on_form_submit(body))
    }

    /// Update the editing target if there is one, otherwise create.
    pub fn on_form_submit(&self, body: RecordBody) -> Mutation {
        match &self.editing {
            Some(key) => Mutation::Update(self.ticket, key.clone(), body),
            None => Mutation::Create(self.ticket, body),
        }
    }

    /// The modal that submitted `mutation` is still the one on screen.
    fn owns_modal(&self, mutation: &Mutation) -> bool {
        self.modal_open && mutation.ticket() == Some(self.ticket)
    }

    fn next_ticket(&mut self) {
        self.ticket.0 += 1;
        self.saving = false;
    }

    // Delete confirmation

    pub fn pending_delete(&self) -> Option<&RecordKey> {
        self.pending_delete.as_ref()
    }

    pub fn request_delete(&mut self, record: &Record) {
        self.pending_delete = Some(record.id.clone());
    }

    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<Mutation> {
        self.pending_delete.take().map(Mutation::Delete)
    }

    // Mutation outcomes

    pub fn mutation_succeeded(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::Create(..) => {
                if self.owns_modal(mutation) {
                    self.cancel_modal();
                }
                self.push_notice(NoticeLevel::Info, "Added", "User added successfully");
            }
            Mutation::Update(..) => {
                if self.owns_modal(mutation) {
                    self.cancel_modal();
                }
                self.push_notice(NoticeLevel::Info, "Updated", "User updated successfully");
            }
            Mutation::Delete(_) => {
                self.push_notice(NoticeLevel::Success, "Deleted", "Record deleted successfully");
            }
        }
    }

    /// Leave the modal and target as they are; put the submitted values back
    /// into the form so the user can retry, unless another modal has been
    /// opened since.
    pub fn mutation_failed(&mut self, mutation: &Mutation, err: &StoreError) {
        tracing::warn!("mutation failed: {err}");
        match mutation {
            Mutation::Create(_, body) | Mutation::Update(_, _, body) => {
                if self.owns_modal(mutation) {
                    self.form.restore(body);
                    self.saving = false;
                }
                self.push_notice(NoticeLevel::Error, "Error", "Error saving data");
            }
            Mutation::Delete(_) => {
                self.push_notice(NoticeLevel::Error, "Error", "Failed to delete record");
            }
        }
    }

    // Pagination

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.records().len().div_ceil(self.page_size).max(1)
    }

    /// One-based page number.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn visible_records(&self) -> &[Record] {
        let records = self.records();
        let start = ((self.page - 1) * self.page_size).min(records.len());
        let end = (start + self.page_size).min(records.len());
        &records[start..end]
    }

    // Notices

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn push_notice(&mut self, level: NoticeLevel, title: &str, description: &str) -> u64 {
        self.next_notice += 1;
        self.notices.push(Notice {
            id: self.next_notice,
            level,
            title: title.to_string(),
            description: description.to_string(),
        });
        self.next_notice
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
