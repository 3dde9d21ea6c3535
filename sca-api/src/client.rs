//! Browser fetch client for the analytics backend.
//!
//! All calls go through the page's fetch API with an explicit deadline:
//! an `AbortController` armed by a one-shot timer, so a hung backend
//! surfaces as [`ApiError::Timeout`] rather than a loading state that
//! never resolves. Superseded requests are NOT aborted here; stale
//! responses are dropped at the controller via
//! [`crate::request_guard::RequestTracker`].

use crate::analysis::ChannelAnalysis;
use crate::config;
use crate::error::ApiError;
use crate::payload::parse_payload;
use crate::query::{SnapshotQuery, ANALYZE_PATH, SHORTS_DATA_PATH};
use crate::shorts::ShortsFeed;
use crate::snapshot::DashboardSnapshot;
use js_sys::Reflect;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Blob, FormData, Request, RequestInit, Response, Window};

/// Client-side request deadline.
const FETCH_TIMEOUT_MS: i32 = 15_000;

/// Thin client over the backend's three endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the backend matching the page's hostname.
    pub fn from_location() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw shorts feed; used once at mount to derive the date index.
    pub async fn fetch_shorts_feed(&self) -> Result<ShortsFeed, ApiError> {
        self.get_json(SHORTS_DATA_PATH).await
    }

    /// Aggregated snapshot for one (date range, filters) pair.
    pub async fn fetch_snapshot(
        &self,
        query: &SnapshotQuery<'_>,
    ) -> Result<DashboardSnapshot, ApiError> {
        self.get_json(&query.to_path()).await
    }

    /// Kick off a channel analysis. The endpoint expects a multipart body
    /// with a `csvFile` part even in API-only mode, so an empty
    /// placeholder file rides along.
    pub async fn analyze_channel(&self, channel_id: &str) -> Result<ChannelAnalysis, ApiError> {
        let url = format!("{}{}", self.base_url, ANALYZE_PATH);
        log::debug!("POST {}", url);

        let controller = new_abort_controller()?;
        let form = FormData::new().map_err(|_| network_err("form construction failed"))?;
        form.append_with_str("channelId", channel_id)
            .map_err(|_| network_err("form construction failed"))?;
        let empty_csv = Blob::new().map_err(|_| network_err("form construction failed"))?;
        form.append_with_blob_and_filename("csvFile", &empty_csv, "dummy.csv")
            .map_err(|_| network_err("form construction failed"))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(form.as_ref());
        init.set_signal(Some(&controller.signal()));
        let request = Request::new_with_str_and_init(&url, &init)
            .map_err(|_| network_err("invalid request"))?;

        let (status, body) = dispatch_with_deadline(request, controller).await?;
        decode(status, &body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let controller = new_abort_controller()?;
        let request = get_request(&url, &controller.signal())?;
        let (status, body) = dispatch_with_deadline(request, controller).await?;
        decode(status, &body)
    }
}

fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| network_err("no window object"))
}

fn network_err(message: &str) -> ApiError {
    ApiError::Network(message.to_string())
}

fn new_abort_controller() -> Result<AbortController, ApiError> {
    AbortController::new().map_err(|_| network_err("abort controller unavailable"))
}

fn get_request(url: &str, signal: &AbortSignal) -> Result<Request, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(signal));
    Request::new_with_str_and_init(url, &init).map_err(|_| network_err("invalid request"))
}

/// Run the fetch with the timeout timer armed; the timer is cleared
/// whichever side wins.
async fn dispatch_with_deadline(
    request: Request,
    controller: AbortController,
) -> Result<(u16, String), ApiError> {
    let window = window()?;
    let on_timeout = Closure::<dyn FnMut()>::new(move || controller.abort());
    let timeout_id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            FETCH_TIMEOUT_MS,
        )
        .map_err(|_| network_err("failed to arm request deadline"))?;

    let result = fetch_body(&window, &request).await;
    window.clear_timeout_with_handle(timeout_id);
    drop(on_timeout);
    result
}

async fn fetch_body(window: &Window, request: &Request) -> Result<(u16, String), ApiError> {
    let fetched = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(classify_fetch_error)?;
    let response: Response = fetched
        .dyn_into()
        .map_err(|_| network_err("unexpected fetch result"))?;
    let status = response.status();
    let text = response
        .text()
        .map_err(|_| network_err("unreadable response body"))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|_| network_err("unreadable response body"))?;
    Ok((status, body.as_string().unwrap_or_default()))
}

/// An aborted fetch rejects with a DOMException named "AbortError"; only
/// our own deadline aborts, so that maps to `Timeout`.
fn classify_fetch_error(err: JsValue) -> ApiError {
    let name = Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    if name.as_deref() == Some("AbortError") {
        return ApiError::Timeout;
    }
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "fetch failed".to_string());
    ApiError::Network(message)
}

fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        // Prefer the server's own error text when the body carries one
        // (the backend pairs error statuses with `{"error": ...}`).
        return match parse_payload::<serde_json::Value>(body) {
            Err(ApiError::Application(message)) => Err(ApiError::Application(message)),
            _ => Err(ApiError::Http { status }),
        };
    }
    parse_payload(body)
}
