use dioxus::prelude::*;

use ui::RecordsView;

#[component]
pub fn Home() -> Element {
    rsx! {
        RecordsView {}
    }
}
