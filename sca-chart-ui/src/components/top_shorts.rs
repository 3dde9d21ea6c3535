//! Ranked list of top-performing shorts.

use crate::components::{ChartHeader, ACCENT};
use dioxus::prelude::*;
use sca_api::snapshot::TopShort;
use sca_utils::numbers::format_count;

/// Which metric the list is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Views,
    Likes,
    Comments,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Views, SortKey::Likes, SortKey::Comments];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Views => "Views",
            SortKey::Likes => "Likes",
            SortKey::Comments => "Comments",
        }
    }
}

fn sort_value(short: &TopShort, key: SortKey) -> f64 {
    let value = match key {
        SortKey::Views => short.view_count,
        SortKey::Likes => short.like_count,
        SortKey::Comments => short.comment_count,
    };
    value.unwrap_or(0.0)
}

/// Top five by the chosen metric, descending. Missing counts rank as
/// zero instead of panicking the comparison.
fn rank(shorts: &[TopShort], key: SortKey) -> Vec<TopShort> {
    let mut sorted = shorts.to_vec();
    sorted.sort_by(|a, b| {
        sort_value(b, key)
            .partial_cmp(&sort_value(a, key))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(5);
    sorted
}

#[derive(Props, Clone, PartialEq)]
pub struct TopShortsListProps {
    pub shorts: Vec<TopShort>,
}

/// Ranked list with metric sort buttons. An empty list renders an
/// explicit "no data" row.
#[component]
pub fn TopShortsList(props: TopShortsListProps) -> Element {
    let mut sort_by = use_signal(|| SortKey::Views);
    let current = sort_by();
    let ranked = rank(&props.shorts, current);
    let count = ranked.len();

    let rows: Vec<(String, String, String)> = ranked
        .iter()
        .enumerate()
        .map(|(index, short)| {
            // Bars step down by rank position, not by value.
            let percentage = (count - index) as f64 / count as f64 * 100.0;
            (
                short.title.clone().unwrap_or_else(|| "Untitled".to_string()),
                format!(
                    "height: 100%; width: {:.0}%; background: {}; border-radius: 3px;",
                    percentage, ACCENT
                ),
                format_count(sort_value(short, current)),
            )
        })
        .collect();

    rsx! {
        div {
            ChartHeader {
                title: "Top performing Shorts",
                subtitle: "your best performing Shorts by engagement",
            }
            div {
                style: "display: flex; gap: 8px; margin-bottom: 8px; align-items: center;",
                span {
                    style: "font-size: 11px; color: #999; letter-spacing: 0.08em;",
                    "SORT BY"
                }
                for key in SortKey::ALL {
                    button {
                        style: format!(
                            "border: 1px solid #ddd; border-radius: 12px; padding: 2px 10px; \
                             font-size: 12px; cursor: pointer; background: {}; color: {};",
                            if key == current { "#e78383" } else { "#fff" },
                            if key == current { "#fff" } else { "#666" }
                        ),
                        onclick: move |_| sort_by.set(key),
                        {key.label()}
                    }
                }
            }
            if rows.is_empty() {
                div {
                    style: "padding: 12px 0; color: #999; font-size: 13px;",
                    "No data available"
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    for (title, bar_style, value) in rows {
                        div {
                            div {
                                style: "font-size: 13px; margin-bottom: 2px; white-space: nowrap; \
                                        overflow: hidden; text-overflow: ellipsis;",
                                "{title}"
                            }
                            div {
                                style: "display: flex; align-items: center; gap: 8px;",
                                div {
                                    style: "flex: 1; height: 8px; background: #f3f3f3; border-radius: 3px;",
                                    div { style: "{bar_style}" }
                                }
                                span {
                                    style: "font-size: 12px; color: #666; min-width: 48px; text-align: right;",
                                    "{value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{rank, sort_value, SortKey};
    use sca_api::snapshot::TopShort;

    fn short(title: &str, views: Option<f64>, likes: Option<f64>) -> TopShort {
        TopShort {
            title: Some(title.to_string()),
            view_count: views,
            like_count: likes,
            comment_count: None,
        }
    }

    #[test]
    fn test_rank_orders_descending_and_truncates() {
        let shorts: Vec<TopShort> = (0..8)
            .map(|i| short(&format!("s{}", i), Some(f64::from(i)), None))
            .collect();
        let ranked = rank(&shorts, SortKey::Views);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].title.as_deref(), Some("s7"));
        assert_eq!(ranked[4].title.as_deref(), Some("s3"));
    }

    #[test]
    fn test_missing_counts_rank_as_zero() {
        let shorts = vec![short("a", None, None), short("b", Some(10.0), None)];
        let ranked = rank(&shorts, SortKey::Views);
        assert_eq!(ranked[0].title.as_deref(), Some("b"));
        assert_eq!(sort_value(&ranked[1], SortKey::Views), 0.0);
    }

    #[test]
    fn test_empty_list_ranks_empty() {
        assert!(rank(&[], SortKey::Likes).is_empty());
    }
}
