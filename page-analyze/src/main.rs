//! Channel-analysis page: the entry form that kicks off a backend
//! analysis run and persists its result across reloads.
//!
//! Peripheral glue around the dashboard core: validates the channel ID,
//! POSTs to `/api/analyze`, shows the returned summary, and mirrors the
//! original site's local-storage keys so a completed analysis survives
//! a page reload.

use dioxus::prelude::*;
use sca_api::analysis::{is_valid_channel_id, AnalysisSummary, ChannelAnalysis};
use sca_api::client::ApiClient;
use sca_api::storage;
use sca_chart_ui::components::ErrorDisplay;
use sca_utils::{dates, numbers};
use std::sync::atomic::{AtomicBool, Ordering};

const PAGE_STYLE: &str = "padding: 16px; max-width: 640px; margin: 0 auto; \
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;";

const INPUT_STYLE: &str = "padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; \
    font-size: 14px; width: 100%; box-sizing: border-box;";

const BUTTON_STYLE: &str = "padding: 8px 20px; border: none; border-radius: 4px; \
    background: #e78383; color: #fff; font-size: 14px; cursor: pointer;";

/// Single UI-root creation per page load.
static ROOT_CREATED: AtomicBool = AtomicBool::new(false);

fn main() {
    if ROOT_CREATED.swap(true, Ordering::SeqCst) {
        log::warn!("analyze root already created, skipping relaunch");
        return;
    }
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("analyze-root"))
        .launch(App);
}

#[derive(Debug, Clone, Default, PartialEq)]
enum AnalyzeStatus {
    #[default]
    Idle,
    Running,
    Failed(String),
    Complete(AnalysisSummary),
}

#[component]
fn App() -> Element {
    let mut channel_id = use_signal(String::new);
    let mut status = use_signal(AnalyzeStatus::default);
    let client = use_hook(ApiClient::from_location);

    // Restore persisted analysis state once on mount. A completion flag
    // without (or with corrupted) cached data is invalid and is cleared,
    // matching the original page behavior.
    use_effect(move || {
        if let Some(saved) = storage::get(storage::KEY_LAST_CHANNEL_ID) {
            channel_id.set(saved);
        }
        if storage::get(storage::KEY_ANALYSIS_COMPLETE).as_deref() != Some("true") {
            return;
        }
        match storage::get(storage::KEY_CACHED_API_DATA) {
            Some(cached) => match serde_json::from_str::<ChannelAnalysis>(&cached) {
                Ok(analysis) => status.set(AnalyzeStatus::Complete(analysis.data.summary)),
                Err(err) => {
                    log::warn!("dropping corrupted cached analysis: {}", err);
                    storage::remove(storage::KEY_CACHED_API_DATA);
                    storage::remove(storage::KEY_ANALYSIS_COMPLETE);
                }
            },
            None => storage::remove(storage::KEY_ANALYSIS_COMPLETE),
        }
    });

    let run_analysis = {
        let client = client.clone();
        move |_| {
            let id = channel_id().trim().to_string();
            if id.is_empty() {
                status.set(AnalyzeStatus::Failed(
                    "Please enter a YouTube channel ID.".to_string(),
                ));
                return;
            }
            if !is_valid_channel_id(&id) {
                status.set(AnalyzeStatus::Failed(
                    "Channel ID should start with 'UC' and be 24 or 25 characters long."
                        .to_string(),
                ));
                return;
            }
            // Switching channels invalidates the previous analysis.
            if storage::get(storage::KEY_LAST_CHANNEL_ID).is_some_and(|last| last != id) {
                storage::remove(storage::KEY_ANALYSIS_COMPLETE);
                storage::remove(storage::KEY_CACHED_API_DATA);
            }
            status.set(AnalyzeStatus::Running);

            let client = client.clone();
            spawn(async move {
                match client.analyze_channel(&id).await {
                    Ok(analysis) if analysis.has_summary() => {
                        storage::set(storage::KEY_LAST_CHANNEL_ID, &id);
                        storage::set(storage::KEY_ANALYSIS_COMPLETE, "true");
                        if let Ok(json) = serde_json::to_string(&analysis) {
                            storage::set(storage::KEY_CACHED_API_DATA, &json);
                        }
                        status.set(AnalyzeStatus::Complete(analysis.data.summary));
                    }
                    Ok(_) => status.set(AnalyzeStatus::Failed(
                        "Invalid response format from server".to_string(),
                    )),
                    Err(err) => status.set(AnalyzeStatus::Failed(err.to_string())),
                }
            });
        }
    };

    let clear_saved = move |_| {
        storage::clear_saved_state();
        channel_id.set(String::new());
        status.set(AnalyzeStatus::Idle);
    };

    let current = status();
    let running = current == AnalyzeStatus::Running;
    let button_label = if running { "Analyzing..." } else { "Analyze" };

    let error_banner = match &current {
        AnalyzeStatus::Failed(message) => Some(rsx! {
            ErrorDisplay { message: message.clone() }
        }),
        _ => None,
    };
    let results = match &current {
        AnalyzeStatus::Complete(summary) => Some(results_panel(summary)),
        _ => None,
    };

    rsx! {
        div {
            style: PAGE_STYLE,
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "Analyze your channel"
            }
            p {
                style: "margin: 0 0 16px 0; font-size: 13px; color: #666;",
                "Enter your channel ID to fetch and analyze your Shorts."
            }
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "text",
                    style: INPUT_STYLE,
                    placeholder: "UCxxxxxxxxxxxxxxxxxxxxxx",
                    value: "{channel_id}",
                    oninput: move |evt| channel_id.set(evt.value()),
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: running,
                    onclick: run_analysis,
                    "{button_label}"
                }
            }
            {error_banner}
            {results}
            button {
                style: "margin-top: 24px; border: none; background: none; color: #999; \
                        font-size: 12px; text-decoration: underline; cursor: pointer;",
                onclick: clear_saved,
                "Clear saved data"
            }
        }
    }
}

fn results_panel(summary: &AnalysisSummary) -> Element {
    let total_shorts = numbers::format_thousands(summary.total_shorts as f64);
    let total_views = numbers::format_thousands(summary.total_views);
    let avg_views = numbers::format_thousands(summary.avg_views_per_short);
    let range = format!(
        "{} to {}",
        dates::short_label(&summary.date_range.start),
        dates::short_label(&summary.date_range.end)
    );

    rsx! {
        div {
            style: "margin-top: 16px; padding: 16px; background: #fff; border: 1px solid #eee; \
                    border-radius: 6px; display: flex; flex-direction: column; gap: 8px;",
            div {
                style: "font-size: 13px; color: #666;",
                "Analysis complete"
            }
            ResultRow { label: "Shorts analyzed", value: total_shorts }
            ResultRow { label: "Total views", value: total_views }
            ResultRow { label: "Avg views per Short", value: avg_views }
            ResultRow { label: "Date range", value: range }
        }
    }
}

#[component]
fn ResultRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; font-size: 14px;",
            span { style: "color: #666;", "{label}" }
            strong { "{value}" }
        }
    }
}
