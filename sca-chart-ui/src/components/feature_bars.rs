//! Average views with and without caption features.

use crate::components::{ChartHeader, NoData, ACCENT, NEUTRAL_SEGMENT};
use dioxus::prelude::*;
use sca_api::snapshot::FeatureStats;
use sca_utils::numbers::format_count;

const MAX_BAR_HEIGHT: f64 = 160.0;

#[derive(Props, Clone, PartialEq)]
pub struct FeatureBarChartProps {
    pub hashtag_stats: FeatureStats,
    pub emoji_stats: FeatureStats,
}

/// Four bars comparing average views with/without hashtags and emojis.
#[component]
pub fn FeatureBarChart(props: FeatureBarChartProps) -> Element {
    let bars = [
        ("with hashtags", props.hashtag_stats.avg_views_with, ACCENT),
        (
            "without hashtags",
            props.hashtag_stats.avg_views_without,
            NEUTRAL_SEGMENT,
        ),
        ("with emojis", props.emoji_stats.avg_views_with, ACCENT),
        (
            "without emojis",
            props.emoji_stats.avg_views_without,
            NEUTRAL_SEGMENT,
        ),
    ];
    let max = bars.iter().map(|(_, v, _)| *v).fold(0.0, f64::max);

    let columns: Vec<(&'static str, String, String)> = bars
        .iter()
        .map(|(label, value, color)| {
            let height = if max > 0.0 {
                value / max * MAX_BAR_HEIGHT
            } else {
                0.0
            };
            (
                *label,
                format!(
                    "width: 48px; border-radius: 3px 3px 0 0; height: {:.0}px; background: {};",
                    height, color
                ),
                format_count(*value),
            )
        })
        .collect();

    rsx! {
        div {
            ChartHeader {
                title: "Average views by caption feature",
                subtitle: "do hashtags and emojis pay off",
            }
            if max <= 0.0 {
                NoData {}
            } else {
                div {
                    style: "display: flex; gap: 20px; align-items: flex-end; height: 200px;",
                    for (label, bar_style, value) in columns {
                        div {
                            style: "display: flex; flex-direction: column; align-items: center; \
                                    justify-content: flex-end; height: 100%;",
                            div {
                                style: "font-size: 11px; color: #666;",
                                "{value}"
                            }
                            div { style: "{bar_style}" }
                            span {
                                style: "font-size: 11px; color: #999; margin-top: 4px; text-align: center;",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
