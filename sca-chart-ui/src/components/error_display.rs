//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a fetch or backend error in a styled box. The message is
/// whatever the controller stored in `FetchStatus::Error`: server text
/// verbatim, or a transport description.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #fdf0f0; color: #b85c5c; border-radius: 4px; border: 1px solid #e29191;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
