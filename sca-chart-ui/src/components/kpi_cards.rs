//! KPI summary cards with sparkline trends.

use crate::components::{NoData, Sparkline, ACCENT};
use dioxus::prelude::*;
use sca_api::snapshot::{ChartPoint, Summary, TimeSeriesData};
use sca_utils::numbers;

#[derive(Props, Clone, PartialEq)]
pub struct KpiCardsRowProps {
    pub summary: Summary,
    pub series: TimeSeriesData,
}

/// The three headline cards: average views, likes, comments, each with
/// a monthly trend sparkline.
#[component]
pub fn KpiCardsRow(props: KpiCardsRowProps) -> Element {
    let views_value = kpi_value(&props.summary.avg_views, props.summary.avg_views_raw);
    let likes_value = kpi_value(&props.summary.avg_likes, props.summary.avg_likes_raw);
    let comments_value = kpi_value(&props.summary.avg_comments, props.summary.avg_comments_raw);

    rsx! {
        div {
            style: "display: flex; gap: 16px; flex-wrap: wrap;",
            KpiCard {
                title: "AVG. VIEWS",
                value: views_value,
                canvas_id: "kpi-views-trend",
                points: props.series.views_points(),
            }
            KpiCard {
                title: "AVG. LIKES",
                value: likes_value,
                canvas_id: "kpi-likes-trend",
                points: props.series.likes_points(),
            }
            KpiCard {
                title: "AVG. COMMENTS",
                value: comments_value,
                canvas_id: "kpi-comments-trend",
                points: props.series.comments_points(),
            }
        }
    }
}

#[component]
fn KpiCard(title: String, value: String, canvas_id: String, points: Vec<ChartPoint>) -> Element {
    let mut hover = use_signal(|| None::<(String, String)>);
    let hover_text = match hover() {
        Some((month, value)) => format!("{}: {}", month, value),
        None => String::new(),
    };

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #eee; border-radius: 6px; \
                    padding: 16px; min-width: 260px; flex: 1;",
            div {
                style: "font-size: 12px; color: #666; letter-spacing: 0.08em;",
                "{title}"
            }
            div {
                style: "font-size: 28px; font-weight: bold; margin: 4px 0 8px 0;",
                "{value}"
            }
            if points.is_empty() {
                NoData {}
            } else {
                Sparkline {
                    id: canvas_id,
                    points: points.clone(),
                    color: ACCENT.to_string(),
                    on_hover: move |info| hover.set(info),
                }
            }
            div {
                style: "font-size: 12px; color: #999; min-height: 16px;",
                "{hover_text}"
            }
        }
    }
}

/// The backend pre-formats KPI strings; fall back to formatting the raw
/// average when a filtered snapshot drops the formatted field.
fn kpi_value(formatted: &str, raw: f64) -> String {
    if formatted.is_empty() {
        numbers::format_count(raw)
    } else {
        formatted.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::kpi_value;

    #[test]
    fn test_kpi_value_prefers_server_formatting() {
        assert_eq!(kpi_value("1.2M", 1_234_567.0), "1.2M");
    }

    #[test]
    fn test_kpi_value_falls_back_to_raw() {
        assert_eq!(kpi_value("", 5_400.0), "5.4K");
        assert_eq!(kpi_value("", 0.0), "0");
    }
}
