//! Posting-schedule weekday bars.

use crate::components::{ChartHeader, NoData, ACCENT, ACCENT_DARK};
use dioxus::prelude::*;
use sca_utils::dates::{DAY_ABBREVIATIONS, DAY_ORDER};
use std::collections::BTreeMap;

const MAX_BAR_HEIGHT: f64 = 160.0;

/// Counts in display order, zero-filled for days the backend omitted.
fn day_counts(per_day: &BTreeMap<String, f64>) -> [(&'static str, f64); 7] {
    DAY_ORDER.map(|day| (day, per_day.get(day).copied().unwrap_or(0.0)))
}

/// First day (in week order) holding the maximum count; `None` when the
/// week is empty.
fn most_active(counts: &[(&'static str, f64); 7]) -> Option<&'static str> {
    let max = counts.iter().map(|(_, n)| *n).fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    counts.iter().find(|(_, n)| *n == max).map(|(day, _)| *day)
}

#[derive(Props, Clone, PartialEq)]
pub struct PostingScheduleProps {
    /// Weekday name -> shorts posted (snapshot `videos_per_day`).
    pub per_day: BTreeMap<String, f64>,
}

/// Bars per weekday with the most active day highlighted.
#[component]
pub fn PostingSchedule(props: PostingScheduleProps) -> Element {
    let counts = day_counts(&props.per_day);
    let total: f64 = counts.iter().map(|(_, n)| n).sum();
    let max = counts.iter().map(|(_, n)| *n).fold(0.0, f64::max);
    let active_days = counts.iter().filter(|(_, n)| *n > 0.0).count();
    let top_day = most_active(&counts);
    let top_day_label = top_day.unwrap_or("-");

    // Render-ready columns; height scaling is guarded on the empty week.
    let columns: Vec<(&'static str, f64, f64, bool)> = counts
        .iter()
        .enumerate()
        .map(|(i, (day, count))| {
            let height = if max > 0.0 {
                count / max * MAX_BAR_HEIGHT
            } else {
                0.0
            };
            (DAY_ABBREVIATIONS[i], *count, height, top_day == Some(*day))
        })
        .collect();

    rsx! {
        div {
            ChartHeader {
                title: "Posting schedule",
                subtitle: "how many Shorts are posted each day",
            }
            if total <= 0.0 {
                NoData {}
            } else {
                div {
                    style: "font-size: 13px; color: #666; margin-bottom: 8px;",
                    "Most active: "
                    strong { "{top_day_label}" }
                }
                div {
                    style: "display: flex; gap: 10px; align-items: flex-end; height: 190px;",
                    for (abbreviation, count, height, is_top) in columns {
                        div {
                            style: "display: flex; flex-direction: column; align-items: center; \
                                    justify-content: flex-end; flex: 1; height: 100%;",
                            if count > 0.0 {
                                div {
                                    style: "font-size: 11px; color: #666;",
                                    "{count}"
                                }
                            }
                            div {
                                style: format!(
                                    "width: 100%; border-radius: 3px 3px 0 0; height: {:.0}px; background: {};",
                                    height,
                                    if is_top { ACCENT_DARK } else { ACCENT }
                                ),
                            }
                            span {
                                style: "font-size: 11px; color: #999; margin-top: 4px;",
                                "{abbreviation}"
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 24px; margin-top: 8px; font-size: 12px; color: #666;",
                    div {
                        strong { "{total} " }
                        "total Shorts"
                    }
                    div {
                        strong { "{active_days} " }
                        "active days"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{day_counts, most_active};
    use std::collections::BTreeMap;

    fn per_day(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_day_counts_zero_fill_in_week_order() {
        let counts = day_counts(&per_day(&[("Wednesday", 4.0), ("Monday", 2.0)]));
        assert_eq!(counts[0], ("Monday", 2.0));
        assert_eq!(counts[1], ("Tuesday", 0.0));
        assert_eq!(counts[2], ("Wednesday", 4.0));
        assert_eq!(counts[6], ("Sunday", 0.0));
    }

    #[test]
    fn test_most_active_day() {
        let counts = day_counts(&per_day(&[("Friday", 7.0), ("Monday", 7.0), ("Sunday", 1.0)]));
        // Ties resolve to the earliest day of the week.
        assert_eq!(most_active(&counts), Some("Monday"));
    }

    #[test]
    fn test_empty_week_has_no_most_active_day() {
        let counts = day_counts(&per_day(&[]));
        assert_eq!(most_active(&counts), None);
    }
}
