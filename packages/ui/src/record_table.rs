use dioxus::prelude::*;
use store::{Record, RecordListState};

use crate::icons::{FaPen, FaTrashCan};
use crate::tag_badge::TagBadge;
use crate::Icon;

/// One page of records with per-row Edit/Delete actions and a pager.
///
/// Edit and the first Delete click only touch the list state. Confirming a
/// delete calls `on_confirm_delete`, which owns the network request.
#[component]
pub fn RecordTable(state: Signal<RecordListState>, on_confirm_delete: EventHandler<()>) -> Element {
    let (rows, pending_delete, page, page_count) = {
        let current = state.read();
        (
            current.visible_records().to_vec(),
            current.pending_delete().cloned(),
            current.current_page(),
            current.page_count(),
        )
    };

    rsx! {
        div {
            class: "records-table-wrap",
            table {
                class: "records-table",
                thead {
                    tr {
                        th { colspan: 2, "Name" }
                        th { rowspan: 2, "Age" }
                        th { rowspan: 2, "Address" }
                        th { rowspan: 2, "Tags" }
                        th { rowspan: 2, "Action" }
                    }
                    tr {
                        th { "First Name" }
                        th { "Last Name" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "records-empty", colspan: 6, "No data" }
                        }
                    }
                    for record in rows {
                        RecordRow {
                            key: "{record.id}",
                            confirming: pending_delete.as_ref() == Some(&record.id),
                            record: record.clone(),
                            state: state,
                            on_confirm_delete: on_confirm_delete,
                        }
                    }
                }
            }
            Pager { state: state, page: page, page_count: page_count }
        }
    }
}

#[component]
fn RecordRow(
    record: Record,
    confirming: bool,
    state: Signal<RecordListState>,
    on_confirm_delete: EventHandler<()>,
) -> Element {
    let mut state = state;
    let tags = record.tags.as_slice().to_vec();
    let edit_target = record.clone();
    let delete_target = record.clone();

    rsx! {
        tr {
            td { "{record.first_name}" }
            td { "{record.last_name}" }
            td { "{record.age}" }
            td { "{record.address}" }
            td {
                for tag in tags {
                    TagBadge { key: "{tag}", tag: tag.clone() }
                }
            }
            td {
                class: "records-actions",
                button {
                    class: "btn",
                    onclick: move |_| state.write().open_edit(&edit_target),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                span {
                    class: "popconfirm-anchor",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| state.write().request_delete(&delete_target),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                    if confirming {
                        div {
                            class: "popconfirm",
                            role: "alertdialog",
                            div { class: "popconfirm-title", "Delete the task" }
                            div { class: "popconfirm-description", "Are you sure to delete this record?" }
                            div {
                                class: "popconfirm-buttons",
                                button {
                                    class: "btn btn-small",
                                    onclick: move |_| state.write().dismiss_delete(),
                                    "No"
                                }
                                button {
                                    class: "btn btn-small btn-primary",
                                    onclick: move |_| on_confirm_delete.call(()),
                                    "Yes"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Pager(state: Signal<RecordListState>, page: usize, page_count: usize) -> Element {
    let mut state = state;

    rsx! {
        nav {
            class: "pager",
            button {
                class: "btn btn-small",
                disabled: page <= 1,
                onclick: move |_| state.write().set_page(page.saturating_sub(1)),
                "‹"
            }
            for n in 1..=page_count {
                button {
                    key: "{n}",
                    class: if n == page { "btn btn-small pager-current" } else { "btn btn-small" },
                    onclick: move |_| state.write().set_page(n),
                    "{n}"
                }
            }
            button {
                class: "btn btn-small",
                disabled: page >= page_count,
                onclick: move |_| state.write().set_page(page + 1),
                "›"
            }
        }
    }
}
