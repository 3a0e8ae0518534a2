//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// How the user can retry; failed fetches are never retried automatically
    #[props(default = "Select a team again or reload the page to retry.".to_string())]
    pub hint: String,
}

/// The single user-visible message for any failed fetch.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #8E2424;",
                    "{props.hint}"
                }
            }
        }
    }
}
