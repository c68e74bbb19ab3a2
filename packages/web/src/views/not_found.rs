use dioxus::prelude::*;

use crate::Route;

/// Redirect unknown paths to `/`
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
