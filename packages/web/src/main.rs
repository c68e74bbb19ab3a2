use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use store::RecordsConfig;
use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Read `records.toml` from the working directory when running natively.
fn load_config() -> RecordsConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match std::fs::read_to_string(RecordsConfig::filename()) {
            Ok(text) => match RecordsConfig::from_toml(&text) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("ignoring {}: {e}", RecordsConfig::filename()),
            },
            Err(_) => tracing::debug!("no {} found, using defaults", RecordsConfig::filename()),
        }
    }
    RecordsConfig::default()
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
