use dioxus::prelude::*;
use store::{Field, RecordListState};

use crate::tag_input::TagInput;

/// Form body shown inside the record modal. It has no submit button; the
/// modal's OK action submits through the list state.
#[component]
pub fn RecordFormView(state: Signal<RecordListState>) -> Element {
    rsx! {
        form {
            class: "record-form",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            for field in Field::ALL {
                FormField { key: "{field:?}", state: state, field: field }
            }
            TagInput { state: state }
        }
    }
}

#[component]
fn FormField(state: Signal<RecordListState>, field: Field) -> Element {
    let mut state = state;
    let (value, error) = {
        let current = state.read();
        let form = current.form();
        (
            form.value(field).to_string(),
            form.errors().get(field).map(str::to_string),
        )
    };
    let id = format!("record-{field:?}").to_lowercase();
    let input_type = if field == Field::Age { "number" } else { "text" };
    let class = if error.is_some() { "form-input form-input--error" } else { "form-input" };

    rsx! {
        div {
            class: "form-item",
            label {
                r#for: "{id}",
                span { class: "form-required", "*" }
                "{field.label()}"
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    state.write().form_mut().set_value(field, evt.value());
                },
            }
            if let Some(error) = error {
                div { class: "form-error", "{error}" }
            }
        }
    }
}
