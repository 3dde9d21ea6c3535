//! Shorts caption analytics dashboard.
//!
//! The root `App` component is the controller: it owns every piece of
//! dashboard state, sequences the three load phases, and hands
//! read-only snapshot slices down to the chart components.
//!
//! Data flow:
//! 1. On mount, `/api/shorts_data` is fetched once and reduced to the
//!    date index (distinct sorted dates).
//! 2. The selected range initializes to the full span, which triggers
//!    the first snapshot fetch.
//! 3. Every slider commit or filter click updates the committed
//!    (range, filters) pair; the refetch effect issues a sequenced
//!    request and stale responses are dropped on arrival, so the
//!    displayed snapshot always matches the latest committed pair.

use dioxus::prelude::*;
use sca_api::client::ApiClient;
use sca_api::date_index::DateRangeIndex;
use sca_api::filters::{ActiveFilters, FilterAction};
use sca_api::query::SnapshotQuery;
use sca_api::snapshot::DashboardSnapshot;
use sca_chart_ui::components::{
    ChartHeader, DonutChart, ErrorDisplay, FeatureBarChart, FilterBar, KpiCardsRow,
    LoadingOverlay, LoadingSpinner, NoData, PostingHeatMap, PostingSchedule, ScatterPlot,
    SentimentBar, TimeRangeSlider, TopShortsList,
};
use sca_chart_ui::state::{DashboardState, FetchStatus};
use std::sync::atomic::{AtomicBool, Ordering};

const PAGE_STYLE: &str = "padding: 16px; max-width: 1200px; margin: 0 auto; \
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
    background: #faf7f7;";

const CARD_STYLE: &str = "background: #fff; border: 1px solid #eee; border-radius: 6px; \
    padding: 16px; flex: 1; min-width: 320px;";

/// The host page may evaluate the bundle more than once; the UI root
/// must be created at most once per page load.
static ROOT_CREATED: AtomicBool = AtomicBool::new(false);

fn main() {
    if ROOT_CREATED.swap(true, Ordering::SeqCst) {
        log::warn!("dashboard root already created, skipping relaunch");
        return;
    }
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("shorts-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"shorts dashboard mounted".into());

    let mut state = use_context_provider(DashboardState::new);
    let client = use_hook(ApiClient::from_location);
    let mut feed_loaded = use_signal(|| false);
    let mut initial_error = use_signal(|| None::<String>);

    // Phase 1: derive the date index from the raw feed, once on mount.
    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.fetch_shorts_feed().await {
                    Ok(feed) => {
                        let index = DateRangeIndex::from_records(&feed.data);
                        log::info!("date index ready: {} distinct dates", index.len());
                        // Set the range before the index so the refetch
                        // effect only ever observes a consistent pair.
                        if let Some(span) = index.full_span() {
                            state.selected_range.set(span);
                            state.pending_range.set(span);
                        }
                        state.date_index.set(index);
                        feed_loaded.set(true);
                    }
                    Err(err) => {
                        log::error!("initial load failed: {}", err);
                        initial_error.set(Some(err.to_string()));
                    }
                }
            });
        });
    }

    // Phases 2 and 3: fetch a snapshot whenever the committed
    // (range, filters) pair changes. Responses carry the sequence number
    // of the request that produced them and are dropped when superseded.
    {
        let client = client.clone();
        use_effect(move || {
            let index = (state.date_index)();
            let range = (state.selected_range)();
            let filters = (state.filters)();
            let Some((start, end)) = index
                .endpoints(range)
                .map(|(s, e)| (s.to_string(), e.to_string()))
            else {
                return;
            };

            let seq = state.requests.write().issue();
            state.status.set(FetchStatus::Loading);
            log::debug!("snapshot fetch #{}: {} .. {}", seq, start, end);

            let client = client.clone();
            spawn(async move {
                let query = SnapshotQuery {
                    start_date: &start,
                    end_date: &end,
                    filters,
                };
                let result = client.fetch_snapshot(&query).await;
                if !state.requests.peek().is_current(seq) {
                    log::debug!("snapshot fetch #{} superseded, dropping response", seq);
                    return;
                }
                match result {
                    Ok(snapshot) => {
                        state.snapshot.set(Some(snapshot));
                        state.status.set(FetchStatus::Ready);
                    }
                    Err(err) => {
                        log::error!("snapshot fetch #{} failed: {}", seq, err);
                        state.status.set(FetchStatus::Error(err.to_string()));
                    }
                }
            });
        });
    }

    // Intent handlers passed down to the widgets.
    let on_pending = move |range: (usize, usize)| state.pending_range.set(range);
    let on_commit = move |range: (usize, usize)| {
        state.pending_range.set(range);
        // A release without movement must not refetch.
        if *state.selected_range.peek() != range {
            state.selected_range.set(range);
        }
    };
    let on_filter_action = move |action: FilterAction| {
        let next = state.filters.peek().apply(action);
        if *state.filters.peek() != next {
            state.filters.set(next);
        }
    };

    let status = (state.status)();
    let index = (state.date_index)();
    let snapshot = (state.snapshot)();
    let filters = (state.filters)();
    let pending = (state.pending_range)();
    let fetch_error = status.error_message().map(str::to_string);

    // Initial load failed outright: full-page error line.
    if let Some(message) = initial_error() {
        return rsx! {
            div {
                style: PAGE_STYLE,
                PageHeader {}
                ErrorDisplay { message }
            }
        };
    }

    let body = if !feed_loaded() {
        rsx! { LoadingSpinner {} }
    } else if index.is_empty() {
        rsx! { NoData { label: "No Shorts found for this channel".to_string() } }
    } else {
        let grid = match snapshot {
            Some(snap) => rsx! {
                DashboardGrid {
                    snapshot: snap,
                    filters,
                    on_action: on_filter_action,
                }
            },
            // First snapshot still in flight.
            None => rsx! { LoadingSpinner {} },
        };
        let error_banner = fetch_error.map(|message| rsx! { ErrorDisplay { message } });
        rsx! {
            TimeRangeSlider {
                dates: index.dates().to_vec(),
                pending,
                on_pending,
                on_commit,
            }
            FilterBar { filters, on_action: on_filter_action }
            {error_banner}
            div {
                style: "position: relative;",
                LoadingOverlay { visible: status.is_loading() }
                {grid}
            }
        }
    };

    rsx! {
        div {
            style: PAGE_STYLE,
            PageHeader {}
            {body}
        }
    }
}

#[component]
fn PageHeader() -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "How are your Shorts captions performing?"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #666;",
                "Engagement statistics for the selected date range; filters are recomputed server-side."
            }
        }
    }
}

/// The chart grid for one snapshot. Widgets receive read-only slices and
/// report clicks upward as filter actions; none of them mutate state.
#[component]
fn DashboardGrid(
    snapshot: DashboardSnapshot,
    filters: ActiveFilters,
    on_action: EventHandler<FilterAction>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            KpiCardsRow {
                summary: snapshot.summary.clone(),
                series: snapshot.time_series_data.clone(),
            }
            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap;",
                div {
                    style: CARD_STYLE,
                    ChartHeader {
                        title: "Caption features",
                        subtitle: "click a segment to filter every chart",
                    }
                    div {
                        style: "display: flex; gap: 16px; flex-wrap: wrap; justify-content: center;",
                        DonutChart {
                            stats: snapshot.hashtag_stats.clone(),
                            feature: "hashtags",
                            icon: "#",
                            active: filters.hashtags,
                            on_filter: move |has| on_action.call(FilterAction::SetHashtags(has)),
                        }
                        DonutChart {
                            stats: snapshot.emoji_stats.clone(),
                            feature: "emojis",
                            icon: "\u{1F600}",
                            active: filters.emojis,
                            on_filter: move |has| on_action.call(FilterAction::SetEmojis(has)),
                        }
                    }
                }
                div {
                    style: CARD_STYLE,
                    SentimentBar {
                        stats: snapshot.sentiment_stats.clone(),
                        active: filters.sentiment,
                        on_select: move |class| on_action.call(FilterAction::SetSentiment(class)),
                    }
                }
            }
            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap;",
                div {
                    style: CARD_STYLE,
                    FeatureBarChart {
                        hashtag_stats: snapshot.hashtag_stats.clone(),
                        emoji_stats: snapshot.emoji_stats.clone(),
                    }
                }
                div {
                    style: CARD_STYLE,
                    PostingSchedule { per_day: snapshot.videos_per_day.clone() }
                }
            }
            div {
                style: CARD_STYLE,
                ScatterPlot { data: snapshot.scatter_data.duration_vs_engagement.clone() }
            }
            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap;",
                div {
                    style: CARD_STYLE,
                    PostingHeatMap { heat: snapshot.heat_map_data.clone() }
                }
                div {
                    style: CARD_STYLE,
                    TopShortsList { shorts: snapshot.top_shorts.clone() }
                }
            }
        }
    }
}
