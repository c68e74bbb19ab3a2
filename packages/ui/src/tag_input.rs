use dioxus::prelude::*;
use store::RecordListState;

use crate::icons::FaXmark;
use crate::Icon;

/// Free-text tag entry for the open record form. Enter adds the typed tag;
/// each chip has a remove button.
#[component]
pub fn TagInput(state: Signal<RecordListState>) -> Element {
    let mut state = state;
    let (pending, tags) = {
        let current = state.read();
        let editor = current.form().tags();
        (editor.pending().to_string(), editor.tags().as_slice().to_vec())
    };

    rsx! {
        div {
            class: "form-item",
            label { r#for: "record-tag-input", "Tags" }
            input {
                id: "record-tag-input",
                class: "form-input",
                r#type: "text",
                placeholder: "Enter a tag and press Enter",
                value: "{pending}",
                oninput: move |evt: FormEvent| {
                    state.write().form_mut().tags_mut().set_pending(evt.value());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        state.write().form_mut().tags_mut().commit_pending();
                    }
                },
            }
            div {
                class: "tag-chips",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag-chip",
                        "{tag}"
                        button {
                            class: "tag-chip-remove",
                            r#type: "button",
                            title: "Remove tag",
                            onclick: {
                                let tag = tag.clone();
                                move |_| {
                                    state.write().form_mut().tags_mut().remove_tag(&tag);
                                }
                            },
                            Icon { icon: FaXmark, width: 10, height: 10 }
                        }
                    }
                }
            }
        }
    }
}
