//! Date-range slider over the date index.
//!
//! Drag ticks update only the pending range (label display); the commit
//! fires once on release. The controller maps committed indices through
//! the date index and issues exactly one fetch per commit.

use dioxus::prelude::*;
use sca_utils::dates;

#[derive(Props, Clone, PartialEq)]
pub struct TimeRangeSliderProps {
    /// All selectable dates, ascending (the date index).
    pub dates: Vec<String>,
    /// In-progress drag position.
    pub pending: (usize, usize),
    /// Fired on every drag tick; label display only.
    pub on_pending: EventHandler<(usize, usize)>,
    /// Fired on release; triggers the refetch.
    pub on_commit: EventHandler<(usize, usize)>,
}

/// Two-thumb range selection as a pair of stacked sliders. The thumbs
/// cannot cross and stay at least one step apart.
#[component]
pub fn TimeRangeSlider(props: TimeRangeSliderProps) -> Element {
    // With fewer than two dates there is no range to select.
    if props.dates.len() < 2 {
        return rsx! {};
    }
    let max_idx = props.dates.len() - 1;
    let (pending_start, pending_end) = props.pending;
    let start_label = dates::short_label(&props.dates[pending_start.min(max_idx)]);
    let end_label = dates::short_label(&props.dates[pending_end.min(max_idx)]);

    let clamp_start = move |raw: usize| raw.min(pending_end.saturating_sub(1));
    let clamp_end = move |raw: usize| raw.clamp(pending_start + 1, max_idx);

    let on_pending = props.on_pending;
    let on_commit = props.on_commit;

    let start_input = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<usize>() {
            on_pending.call((clamp_start(raw), pending_end));
        }
    };
    let start_change = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<usize>() {
            on_commit.call((clamp_start(raw), pending_end));
        }
    };
    let end_input = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<usize>() {
            on_pending.call((pending_start, clamp_end(raw)));
        }
    };
    let end_change = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<usize>() {
            on_commit.call((pending_start, clamp_end(raw)));
        }
    };

    rsx! {
        div {
            style: "margin: 12px 0 20px 0;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 13px; color: #666; margin-bottom: 6px;",
                span { "{start_label}" }
                span { "{end_label}" }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 2px;",
                input {
                    r#type: "range",
                    min: "0",
                    max: "{max_idx}",
                    value: "{pending_start}",
                    style: "width: 100%; accent-color: #e78383;",
                    oninput: start_input,
                    onchange: start_change,
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{max_idx}",
                    value: "{pending_end}",
                    style: "width: 100%; accent-color: #e78383;",
                    oninput: end_input,
                    onchange: end_change,
                }
            }
        }
    }
}
