//! Refetch overlay.

use dioxus::prelude::*;

/// Advisory overlay shown while a snapshot refetch is in flight. The
/// previous snapshot stays visible underneath (no flash-to-empty on
/// every filter click) and pointer events pass through, so the slider
/// and filters remain interactive.
#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }
    rsx! {
        div {
            style: "position: absolute; inset: 0; background: rgba(255, 255, 255, 0.55); \
                    display: flex; justify-content: center; align-items: flex-start; \
                    padding-top: 80px; pointer-events: none; z-index: 10;",
            div {
                style: "background: #fff; border: 1px solid #e29191; border-radius: 4px; \
                        padding: 8px 16px; color: #666; font-size: 14px;",
                "Updating..."
            }
        }
    }
}
