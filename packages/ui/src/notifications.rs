use std::time::Duration;

use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

use crate::icons::FaXmark;
use crate::Icon;

/// Top-right stack of transient notices. Each one dismisses itself after
/// `duration_secs`, or earlier when clicked.
#[component]
pub fn NoticeStack(notices: Vec<Notice>, duration_secs: u32, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div {
            class: "notice-stack",
            for notice in notices {
                NoticeCard {
                    key: "{notice.id}",
                    notice: notice.clone(),
                    duration_secs: duration_secs,
                    on_dismiss: on_dismiss,
                }
            }
        }
    }
}

#[component]
fn NoticeCard(notice: Notice, duration_secs: u32, on_dismiss: EventHandler<u64>) -> Element {
    let id = notice.id;

    use_hook(move || {
        spawn(async move {
            sleep(Duration::from_secs(u64::from(duration_secs))).await;
            on_dismiss.call(id);
        });
    });

    let class = match notice.level {
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            div {
                class: "notice-content",
                div { class: "notice-title", "{notice.title}" }
                div { class: "notice-description", "{notice.description}" }
            }
            button {
                class: "notice-close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                Icon { icon: FaXmark, width: 10, height: 10 }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
