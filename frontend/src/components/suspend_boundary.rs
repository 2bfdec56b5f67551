use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

pub const DEFAULT_LOADING_TEXT: &str = "読み込み中...";

/// Suspense plus error boundary around a section backed by a server function.
#[component]
pub fn SuspendWrapper(
    #[props(default = DEFAULT_LOADING_TEXT.to_string())]
    loading_text: String,
    children: Element,
) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! {
                LoadingIndicator { loading_text: loading_text.clone() }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(loading_text: String) -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            span { class: "loading-dot" }
            "{loading_text}"
        }
    }
}
