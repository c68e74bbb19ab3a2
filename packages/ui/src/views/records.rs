//! The user records page.
//!
//! Holds the [`RecordListState`] in a signal and runs network work in spawned
//! tasks. A task takes what it needs from the state, drops the borrow, awaits
//! the store, then writes the outcome back, so rendering never sees a held
//! borrow. Each successful mutation is followed by a full refetch.

use dioxus::prelude::*;
use store::{LoadState, Mutation, RecordListState, RecordStore, RecordsConfig, StoreError};

use crate::notifications::NoticeStack;
use crate::record_form::RecordFormView;
use crate::record_table::RecordTable;
use crate::repo::make_store;
use crate::views::ModalOverlay;

const RECORDS_CSS: Asset = asset!("/assets/records.css");

/// Fetch the collection into `state`. The last fetch to finish wins.
pub async fn reload<S: RecordStore>(mut state: Signal<RecordListState>, backend: &S) {
    state.write().begin_load();
    let result = backend.list().await;
    state.write().finish_load(result);
}

/// Run `mutation` in the background and refetch on success.
pub fn run_mutation<S>(mut state: Signal<RecordListState>, backend: S, mutation: Mutation)
where
    S: RecordStore + 'static,
{
    spawn(async move {
        match store::perform(&backend, &mutation).await {
            Ok(()) => {
                state.write().mutation_succeeded(&mutation);
                reload(state, &backend).await;
            }
            Err(err) => state.write().mutation_failed(&mutation, &err),
        }
    });
}

/// Send `mutation`, or fail it straight away when there is no backend.
fn dispatch<S>(mut state: Signal<RecordListState>, backend: Option<S>, mutation: Mutation)
where
    S: RecordStore + 'static,
{
    match backend {
        Some(backend) => run_mutation(state, backend, mutation),
        None => state.write().mutation_failed(&mutation, &not_configured()),
    }
}

fn not_configured() -> StoreError {
    StoreError::Unavailable("records API is not configured".to_string())
}

#[component]
pub fn RecordsView() -> Element {
    let config = try_use_context::<RecordsConfig>().unwrap_or_default();
    let duration_secs = config.notifications.duration_secs;
    let mut state = use_signal(|| RecordListState::new(config.table.page_size));

    let backend = use_hook(|| match make_store(&config) {
        Ok(backend) => Some(backend),
        Err(err) => {
            tracing::error!("cannot build records API client: {err}");
            None
        }
    });

    let _loader = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                match backend {
                    Some(backend) => reload(state, &backend).await,
                    None => state.write().finish_load(Err(not_configured())),
                }
            }
        }
    });

    let on_confirm = {
        let backend = backend.clone();
        move |_: ()| {
            let mutation = state.write().confirm_modal();
            if let Some(mutation) = mutation {
                dispatch(state, backend.clone(), mutation);
            }
        }
    };

    let on_confirm_delete = {
        let backend = backend.clone();
        move |_: ()| {
            let mutation = state.write().confirm_delete();
            if let Some(mutation) = mutation {
                dispatch(state, backend.clone(), mutation);
            }
        }
    };

    let snapshot = state.read().clone();
    match snapshot.load_state() {
        LoadState::Loading => {
            return rsx! {
                div { class: "records-status", "Loading..." }
            };
        }
        LoadState::Failed(_) => {
            return rsx! {
                div { class: "records-status records-status--error", "Error fetching data" }
            };
        }
        LoadState::Loaded(_) => {}
    }
    let mode = snapshot.mode();

    rsx! {
        document::Stylesheet { href: RECORDS_CSS }

        NoticeStack {
            notices: snapshot.notices().to_vec(),
            duration_secs: duration_secs,
            on_dismiss: move |id| state.write().dismiss_notice(id),
        }

        div {
            class: "records-page",
            h4 { class: "records-title", "User Records" }
            div {
                class: "records-toolbar",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.write().open_create(),
                    "+ Record"
                }
            }

            if snapshot.modal_open() {
                ModalOverlay {
                    title: mode.modal_title().to_string(),
                    confirm_label: mode.confirm_label().to_string(),
                    busy: snapshot.saving(),
                    on_confirm: on_confirm,
                    on_cancel: move |_| state.write().cancel_modal(),
                    RecordFormView { state: state }
                }
            }

            RecordTable { state: state, on_confirm_delete: on_confirm_delete }
        }
    }
}
