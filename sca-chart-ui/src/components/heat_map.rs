//! Posting heat map: hour of day by weekday, metric-selectable.

use crate::components::{ChartHeader, NoData};
use crate::scale::heat_color;
use dioxus::prelude::*;
use sca_api::snapshot::{HeatMapData, HeatMapMetric};
use sca_utils::dates::{DAY_ABBREVIATIONS, DAY_ORDER};
use std::collections::BTreeMap;

/// Largest cell value of one metric table; 0.0 for an empty table.
fn table_max(table: &BTreeMap<String, BTreeMap<String, f64>>) -> f64 {
    table
        .values()
        .flat_map(|row| row.values())
        .fold(0.0, |acc, v| acc.max(*v))
}

/// One render-ready row of cells.
struct HeatRow {
    abbreviation: &'static str,
    cells: Vec<(String, String)>,
}

fn build_rows(heat: &HeatMapData, metric: HeatMapMetric) -> Vec<HeatRow> {
    let max = table_max(heat.metric(metric));
    DAY_ORDER
        .iter()
        .enumerate()
        .map(|(i, day)| HeatRow {
            abbreviation: DAY_ABBREVIATIONS[i],
            cells: (0..24)
                .map(|hour| {
                    let value = heat.cell(metric, hour, *day);
                    (
                        format!(
                            "flex: 1; height: 16px; border-radius: 2px; background: {};",
                            heat_color(value, max)
                        ),
                        format!("{} {}:00 {:.0}", day, hour, value),
                    )
                })
                .collect(),
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct PostingHeatMapProps {
    pub heat: HeatMapData,
}

/// Hour-by-weekday grid colored by the selected metric's volume.
#[component]
pub fn PostingHeatMap(props: PostingHeatMapProps) -> Element {
    let mut metric = use_signal(|| HeatMapMetric::VideosPosted);
    let current = metric();
    let empty = props.heat.metric(current).is_empty();
    let rows = build_rows(&props.heat, current);

    rsx! {
        div {
            ChartHeader {
                title: "Posting heat map",
                subtitle: "when Shorts go out, hour by weekday",
            }
            div {
                style: "display: flex; gap: 8px; margin-bottom: 8px;",
                for option in HeatMapMetric::ALL {
                    button {
                        style: format!(
                            "border: 1px solid #ddd; border-radius: 12px; padding: 2px 10px; \
                             font-size: 12px; cursor: pointer; background: {}; color: {};",
                            if option == current { "#e78383" } else { "#fff" },
                            if option == current { "#fff" } else { "#666" }
                        ),
                        onclick: move |_| metric.set(option),
                        {option.label()}
                    }
                }
            }
            if empty {
                NoData {}
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 2px;",
                    for row in rows {
                        div {
                            style: "display: flex; gap: 2px; align-items: center;",
                            span {
                                style: "width: 16px; font-size: 11px; color: #999;",
                                "{row.abbreviation}"
                            }
                            for (cell_style, tooltip) in row.cells {
                                div {
                                    style: "{cell_style}",
                                    title: "{tooltip}",
                                }
                            }
                        }
                    }
                    div {
                        style: "display: flex; justify-content: space-between; margin-left: 18px; \
                                font-size: 10px; color: #999;",
                        span { "0h" }
                        span { "6h" }
                        span { "12h" }
                        span { "18h" }
                        span { "23h" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::table_max;
    use std::collections::BTreeMap;

    #[test]
    fn test_table_max() {
        let mut table: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        table.insert(
            "14".to_string(),
            [("Monday".to_string(), 3.0), ("Friday".to_string(), 9.0)]
                .into_iter()
                .collect(),
        );
        assert_eq!(table_max(&table), 9.0);
    }

    #[test]
    fn test_empty_table_max_is_zero() {
        assert_eq!(table_max(&BTreeMap::new()), 0.0);
    }
}
