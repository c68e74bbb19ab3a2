use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card with a
/// title bar and a confirm/cancel footer.
/// Clicking outside the card, the close icon or Cancel triggers `on_cancel`.
/// The confirm button is disabled while `busy`.
#[component]
pub fn ModalOverlay(
    title: String,
    confirm_label: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-mask",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    span { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_cancel.call(()),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
                div { class: "modal-body", {children} }
                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
