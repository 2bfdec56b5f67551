//! Error boundaries. Server function failures and render errors end up in the same panel.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render failure in {} boundary: {:?}", boundary_name.read(), err);
                rsx! {
                    ErrorPanel {
                        title: "ページを表示できませんでした".to_string(),
                        detail: format!("{:#?}", err),
                        p { class: "error-boundary-name", "{boundary_name}" }
                        a { class: "retry-btn", href: "/", "最初の画面に戻る" }
                    }
                }
            },
            children
        }
    }
}

/// Wraps one section so a failing server call only replaces that section.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "不明なエラー".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "retry-btn",
                            onclick: move |_| err.clear_errors(),
                            "再試行"
                        }
                    }
                }
            },
            div {
                class: "boundary-contents",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorPanel {
            title: "データの読み込みに失敗しました".to_string(),
            detail: error_txt(),
            {children}
        }
    }
}

#[component]
fn ErrorPanel(title: String, detail: String, children: Element) -> Element {
    rsx! {
        div {
            class: "error-panel",
            h3 { class: "error-title", "⚠️ {title}" }
            pre { class: "error-detail", "{detail}" }
            {children}
        }
    }
}
