//! Observed-container-size primitive shared by every chart.
//!
//! Charts are a pure function of (snapshot slice, container box). The
//! container's box is unknown until layout runs (at first mount it may
//! legitimately be zero), so each chart defers drawing behind this hook:
//! `None` until a nonzero box is first observed, then updated on window
//! resizes. Implemented once here instead of per chart.

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// On-screen box of a chart container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// How often to re-check a container that has not been laid out yet.
const POLL_INTERVAL_MS: i32 = 100;
/// Give up polling after this many attempts; the placeholder stays up.
const MAX_POLL_ATTEMPTS: u32 = 100;

/// Observe the box of the element with the given DOM id.
///
/// Returns `None` until the element exists with a nonzero box; callers
/// render a placeholder in that state. The signal updates whenever a
/// window resize changes the box.
pub fn use_observed_size(container_id: &'static str) -> Signal<Option<ElementSize>> {
    let mut size = use_signal(|| None::<ElementSize>);

    use_effect(move || {
        // Initial measure: poll until layout has given the container a
        // nonzero box.
        spawn(async move {
            for _ in 0..MAX_POLL_ATTEMPTS {
                if let Some(measured) = measure(container_id) {
                    if measured.is_drawable() {
                        size.set(Some(measured));
                        return;
                    }
                }
                sleep_ms(POLL_INTERVAL_MS).await;
            }
            log::warn!("container #{} never received a nonzero box", container_id);
        });

        // Re-measure on window resize. The listener lives for the page;
        // chart containers are never unmounted individually.
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(measured) = measure(container_id) {
                if measured.is_drawable() && Some(measured) != size() {
                    size.set(Some(measured));
                }
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        on_resize.forget();
    });

    size
}

fn measure(container_id: &str) -> Option<ElementSize> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();
    Some(ElementSize {
        width: rect.width(),
        height: rect.height(),
    })
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
