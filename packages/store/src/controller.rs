//! Async driver pairing a [`RecordListState`] with a [`RecordStore`].
//!
//! Every action awaits at most one store call plus the follow-up refetch. There
//! are no retries and nothing is cancelled.

use crate::config::RecordsConfig;
use crate::error::StoreError;
use crate::list::{Mutation, RecordListState};
use crate::models::{Record, RecordBody};
use crate::repo::RecordStore;

/// Send `mutation` to `store`.
pub async fn perform<S: RecordStore>(store: &S, mutation: &Mutation) -> Result<(), StoreError> {
    match mutation {
        Mutation::Create(_, body) => {
            let created = store.create(body).await?;
            tracing::info!(id = %created.id, "record created");
        }
        Mutation::Update(_, key, body) => {
            store.update(key, body).await?;
            tracing::info!(id = %key, "record updated");
        }
        Mutation::Delete(key) => {
            store.delete(key).await?;
            tracing::info!(id = %key, "record deleted");
        }
    }
    Ok(())
}

pub struct RecordListController<S: RecordStore> {
    store: S,
    state: RecordListState,
}

impl<S: RecordStore> RecordListController<S> {
    pub fn new(store: S, config: &RecordsConfig) -> Self {
        Self {
            store,
            state: RecordListState::new(config.table.page_size),
        }
    }

    pub fn state(&self) -> &RecordListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RecordListState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the whole collection.
    pub async fn load_records(&mut self) {
        self.state.begin_load();
        let result = self.store.list().await;
        self.state.finish_load(result);
    }

    /// Refetch after a mutation. Same as [`Self::load_records`].
    pub async fn refresh(&mut self) {
        self.load_records().await;
    }

    pub fn open_create(&mut self) {
        self.state.open_create();
    }

    pub fn open_edit(&mut self, record: &Record) {
        self.state.open_edit(record);
    }

    pub fn cancel_modal(&mut self) {
        self.state.cancel_modal();
    }

    /// The modal's OK action. Returns `Ok(false)` when the form rejected its
    /// input and nothing was sent.
    pub async fn confirm_modal(&mut self) -> Result<bool, StoreError> {
        match self.state.confirm_modal() {
            Some(mutation) => self.run(mutation).await.map(|()| true),
            None => Ok(false),
        }
    }

    /// Create or update depending on the editing target.
    pub async fn on_form_submit(&mut self, body: RecordBody) -> Result<(), StoreError> {
        let mutation = self.state.on_form_submit(body);
        self.run(mutation).await
    }

    /// Ask for confirmation before deleting `record`.
    pub fn request_delete(&mut self, record: &Record) {
        self.state.request_delete(record);
    }

    pub fn dismiss_delete(&mut self) {
        self.state.dismiss_delete();
    }

    /// Delete the record awaiting confirmation, if any.
    pub async fn confirm_delete(&mut self) -> Result<(), StoreError> {
        match self.state.confirm_delete() {
            Some(mutation) => self.run(mutation).await,
            None => Ok(()),
        }
    }

    /// Request and confirm deletion in one step.
    pub async fn delete_record(&mut self, record: &Record) -> Result<(), StoreError> {
        self.state.request_delete(record);
        self.confirm_delete().await
    }

    async fn run(&mut self, mutation: Mutation) -> Result<(), StoreError> {
        match perform(&self.store, &mutation).await {
            Ok(()) => {
                self.state.mutation_succeeded(&mutation);
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.state.mutation_failed(&mutation, &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::list::LoadState;
    use crate::memory::{MemoryStore, StoreRequest};
    use crate::models::{Age, RecordKey};
    use crate::notice::NoticeLevel;
    use crate::tags::TagSet;

    fn record(id: &str, first: &str, last: &str) -> Record {
        Record {
            id: RecordKey::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            age: Age(40.0),
            address: "Somewhere".to_string(),
            tags: TagSet::new(),
        }
    }

    fn controller(records: Vec<Record>) -> RecordListController<MemoryStore> {
        RecordListController::new(MemoryStore::with_records(records), &RecordsConfig::default())
    }

    fn fill_ada(state: &mut RecordListState) {
        let form = state.form_mut();
        form.set_value(Field::FirstName, "Ada");
        form.set_value(Field::LastName, "Lovelace");
        form.set_value(Field::Age, "36");
        form.set_value(Field::Address, "London");
        form.tags_mut().add_tag("math");
    }

    #[tokio::test]
    async fn test_create_sends_payload_and_refreshes() {
        let mut list = controller(vec![]);
        list.load_records().await;
        assert_eq!(list.state().records().len(), 0);

        list.open_create();
        fill_ada(list.state_mut());
        assert_eq!(list.confirm_modal().await, Ok(true));

        let expected = RecordBody {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: Age(36.0),
            address: "London".into(),
            tags: TagSet::from_iter(["math"]),
        };
        assert_eq!(
            list.store().requests(),
            vec![StoreRequest::List, StoreRequest::Create(expected.clone()), StoreRequest::List]
        );
        assert!(!list.state().modal_open());
        assert_eq!(list.state().editing(), None);

        let rows = list.state().records();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].body(), expected);

        let notice = &list.state().notices()[0];
        assert_eq!((notice.title.as_str(), notice.level), ("Added", NoticeLevel::Info));
    }

    #[tokio::test]
    async fn test_edit_updates_target_key() {
        let mut list = controller(vec![record("41", "Grace", "Hopper"), record("42", "Ada", "Byron")]);
        list.load_records().await;

        let target = list.state().records()[1].clone();
        list.open_edit(&target);
        list.state_mut().form_mut().set_value(Field::LastName, "Lovelace");
        assert_eq!(list.confirm_modal().await, Ok(true));

        let update = list
            .store()
            .requests()
            .into_iter()
            .find(|r| matches!(r, StoreRequest::Update(..)))
            .expect("update issued");
        match update {
            StoreRequest::Update(key, body) => {
                assert_eq!(key.as_str(), "42");
                assert_eq!(body.last_name, "Lovelace");
            }
            other => panic!("unexpected request {other:?}"),
        }

        let row = list
            .state()
            .records()
            .iter()
            .find(|r| r.id.as_str() == "42")
            .expect("row 42 still present");
        assert_eq!(row.last_name, "Lovelace");
        assert_eq!(list.state().records().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_row_after_refresh() {
        let mut list = controller(vec![record("7", "Alan", "Turing"), record("8", "Kurt", "Godel")]);
        list.load_records().await;

        let doomed = list.state().records()[0].clone();
        list.delete_record(&doomed).await.unwrap();

        assert!(list
            .store()
            .requests()
            .contains(&StoreRequest::Delete(RecordKey::new("7"))));
        assert!(list.state().records().iter().all(|r| r.id.as_str() != "7"));
        assert_eq!(list.state().notices()[0].description, "Record deleted successfully");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_and_adds_no_row() {
        let mut list = controller(vec![record("1", "Alan", "Turing")]);
        list.load_records().await;

        list.open_create();
        fill_ada(list.state_mut());
        list.store().set_offline(true);

        assert!(matches!(list.confirm_modal().await, Err(StoreError::Unavailable(_))));
        assert!(list.state().modal_open());
        assert_eq!(list.state().form().value(Field::FirstName), "Ada");
        assert_eq!(list.state().form().tags().tags().as_slice(), ["math"]);
        assert_eq!(list.state().records().len(), 1);
        assert_eq!(list.store().records().len(), 1);

        let notice = &list.state().notices()[0];
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.description, "Error saving data");
    }

    #[tokio::test]
    async fn test_retry_after_failed_create() {
        let mut list = controller(vec![]);
        list.load_records().await;
        list.open_create();
        fill_ada(list.state_mut());
        list.store().set_offline(true);
        assert!(list.confirm_modal().await.is_err());
        assert!(!list.state().saving());

        list.store().set_offline(false);
        assert_eq!(list.confirm_modal().await, Ok(true));
        assert!(!list.state().modal_open());
        assert_eq!(list.state().records()[0].first_name, "Ada");
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_list() {
        let mut list = controller(vec![record("7", "Alan", "Turing")]);
        list.load_records().await;
        list.store().set_offline(true);

        let target = list.state().records()[0].clone();
        assert!(list.delete_record(&target).await.is_err());
        assert_eq!(list.state().records().len(), 1);
        assert_eq!(list.state().notices()[0].description, "Failed to delete record");
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mut list = controller(vec![]);
        list.load_records().await;
        list.open_create();
        list.state_mut().form_mut().set_value(Field::FirstName, "Ada");

        assert_eq!(list.confirm_modal().await, Ok(false));
        assert_eq!(list.store().requests(), vec![StoreRequest::List]);
        assert!(list.state().modal_open());
    }

    #[tokio::test]
    async fn test_on_form_submit_without_target_creates() {
        let mut list = controller(vec![]);
        let body = record("_", "Ada", "Lovelace").body();
        list.on_form_submit(body.clone()).await.unwrap();
        assert_eq!(list.store().requests()[0], StoreRequest::Create(body));
    }

    #[tokio::test]
    async fn test_initial_fetch_failure_is_terminal() {
        let mut list = controller(vec![]);
        list.store().set_offline(true);
        list.load_records().await;
        assert!(matches!(list.state().load_state(), LoadState::Failed(_)));
        assert_eq!(list.store().requests(), vec![StoreRequest::List]);
    }
}
