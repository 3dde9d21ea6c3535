//! Empty-slice placeholder.

use dioxus::prelude::*;

/// Rendered wherever a snapshot slice is empty. Individual charts fall
/// back to this instead of reducing over empty collections.
#[component]
pub fn NoData(#[props(default = "No data available".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; \
                    padding: 24px; color: #999; font-size: 13px;",
            "{label}"
        }
    }
}
