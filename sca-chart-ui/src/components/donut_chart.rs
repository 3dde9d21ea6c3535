//! Usage donut with click-to-filter segments.

use crate::components::{NoData, ACCENT_DARK, NEUTRAL_SEGMENT};
use crate::scale::donut_segment_path;
use dioxus::prelude::*;
use sca_api::filters::FeatureToggle;
use sca_api::snapshot::FeatureStats;

const SIZE: f64 = 200.0;
const INNER_RADIUS: f64 = 50.0;
const OUTER_RADIUS: f64 = 80.0;

#[derive(Props, Clone, PartialEq)]
pub struct DonutChartProps {
    pub stats: FeatureStats,
    /// Feature noun used in labels ("hashtags", "emojis").
    pub feature: String,
    /// Center icon glyph.
    pub icon: String,
    /// Current constraint on this dimension, for segment highlighting.
    pub active: FeatureToggle,
    #[props(default = "#e78383".to_string())]
    pub color: String,
    /// Segment click intent: `true` for the "use" segment. The widget
    /// never mutates filter state itself.
    pub on_filter: EventHandler<bool>,
}

/// Two-segment donut of feature usage share. Segments are proportional
/// to the server's rounded percentages; they always close the circle
/// even when the two values do not sum to exactly 100, and the displayed
/// number is the server's, not a renormalized one.
#[component]
pub fn DonutChart(props: DonutChartProps) -> Element {
    let usage_pct = props.stats.usage_percentage;
    let non_usage_pct = props.stats.non_usage_percentage;
    let avg_per_video = props.stats.avg_per_video;
    let feature = props.feature.clone();
    let total = usage_pct + non_usage_pct;

    if total <= 0.0 {
        return rsx! {
            div {
                style: "text-align: center; padding: 16px; width: 200px;",
                NoData { label: format!("No {} data", feature) }
            }
        };
    }

    let usage_fraction = usage_pct / total;
    let center = SIZE / 2.0;
    let use_path =
        donut_segment_path(center, center, INNER_RADIUS, OUTER_RADIUS, 0.0, usage_fraction);
    let rest_path =
        donut_segment_path(center, center, INNER_RADIUS, OUTER_RADIUS, usage_fraction, 1.0);

    let use_stroke = if props.active == FeatureToggle::Require {
        ACCENT_DARK
    } else {
        "none"
    };
    let rest_stroke = if props.active == FeatureToggle::Exclude {
        ACCENT_DARK
    } else {
        "none"
    };
    let on_filter = props.on_filter;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 4px;",
            div {
                style: "position: relative; width: 200px; height: 200px;",
                svg {
                    width: "200",
                    height: "200",
                    view_box: "0 0 200 200",
                    path {
                        d: "{use_path}",
                        fill: "{props.color}",
                        stroke: "{use_stroke}",
                        stroke_width: "3",
                        style: "cursor: pointer;",
                        onclick: move |_| on_filter.call(true),
                    }
                    path {
                        d: "{rest_path}",
                        fill: "{NEUTRAL_SEGMENT}",
                        stroke: "{rest_stroke}",
                        stroke_width: "3",
                        style: "cursor: pointer;",
                        onclick: move |_| on_filter.call(false),
                    }
                }
                div {
                    style: "position: absolute; inset: 0; display: flex; flex-direction: column; \
                            justify-content: center; align-items: center; pointer-events: none;",
                    div { style: "font-size: 22px;", "{props.icon}" }
                    div { style: "font-weight: bold;", "{usage_pct}%" }
                }
            }
            div {
                style: "font-size: 12px; color: #666;",
                "{usage_pct}% use {feature} • {non_usage_pct}% don't"
            }
            div {
                style: "font-size: 12px; color: #999;",
                "{avg_per_video} avg {feature} per video"
            }
        }
    }
}
