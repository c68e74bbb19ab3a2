//! # Record form state
//!
//! [`RecordForm`] holds the draft shown inside the modal: four required
//! scalar fields plus a [`TagEditor`]. It is keyed on an [`EditorMode`], so
//! asking it to initialize for the mode it already shows is a no-op and
//! in-progress edits survive re-renders. Switching mode (or reopening after
//! [`RecordForm::close`]) resets the draft.
//!
//! Submission goes through [`RecordForm::submit`]: validation failures are
//! recorded per field in [`FormErrors`] and nothing is emitted.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Age, DraftRecord, EditorMode, RecordBody};
use crate::tags::{TagEditor, TagSet};

/// The four required inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Address,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Age, Field::Address];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn set(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordForm {
    mode: Option<EditorMode>,
    first_name: String,
    last_name: String,
    age: String,
    address: String,
    tags: TagEditor,
    errors: FormErrors,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `values` (or empty fields) for `mode`.
    ///
    /// Returns `false` without touching the draft when `mode` is already the
    /// active one.
    pub fn initialize(&mut self, mode: EditorMode, values: Option<&DraftRecord>) -> bool {
        if self.mode.as_ref() == Some(&mode) {
            return false;
        }
        match values {
            Some(draft) => self.fill(draft),
            None => self.reset(),
        }
        self.mode = Some(mode);
        true
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        self.mode.as_ref()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Address => &self.address,
        }
    }

    /// Update one input. Clears that field's error.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Age => self.age = value,
            Field::Address => self.address = value,
        }
        self.errors.clear(field);
    }

    pub fn tags(&self) -> &TagEditor {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagEditor {
        &mut self.tags
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Snapshot of the current inputs.
    pub fn draft(&self) -> DraftRecord {
        DraftRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age.clone(),
            address: self.address.clone(),
            tags: self.tags.tags().clone(),
        }
    }

    /// Check the required fields and record an error for each failing one.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            let value = self.value(field).trim();
            if value.is_empty() {
                errors.set(field, format!("Please input {}!", field.label()));
            } else if field == Field::Age && Age::parse(value).is_none() {
                errors.set(field, "Age must be a number".to_string());
            }
        }
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "record form rejected");
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, on success, emit the payload and reset to an empty draft.
    pub fn submit(&mut self) -> Option<RecordBody> {
        if !self.validate() {
            return None;
        }
        let age = Age::parse(&self.age)?;
        let body = RecordBody {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age,
            address: self.address.clone(),
            tags: self.tags.tags().clone(),
        };
        self.reset();
        Some(body)
    }

    /// Put a previously submitted payload back into the inputs.
    pub fn restore(&mut self, body: &RecordBody) {
        self.fill(&DraftRecord::from(body));
    }

    /// Discard the draft and forget the mode.
    pub fn close(&mut self) {
        self.reset();
        self.mode = None;
    }

    fn fill(&mut self, draft: &DraftRecord) {
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.age = draft.age.clone();
        self.address = draft.address.clone();
        self.tags.reset(draft.tags.clone());
        self.errors = FormErrors::default();
    }

    fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.age.clear();
        self.address.clear();
        self.tags.reset(TagSet::new());
        self.errors = FormErrors::default();
    }
}
