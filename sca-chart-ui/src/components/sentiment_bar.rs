//! Sentiment breakdown bar with click-to-filter segments.

use crate::components::{ChartHeader, NoData, ACCENT_DARK};
use dioxus::prelude::*;
use sca_api::filters::{SentimentClass, SentimentFilter};
use sca_utils::numbers::share_percentage;
use std::collections::BTreeMap;

fn class_color(class: SentimentClass) -> &'static str {
    match class {
        SentimentClass::Positive => "#8fbc8f",
        SentimentClass::Neutral => "#cfcfcf",
        SentimentClass::Negative => "#e78383",
    }
}

/// Per-class counts derived from the snapshot's `sentiment_stats` map.
#[derive(Debug, Clone, PartialEq)]
struct Breakdown {
    counts: [(SentimentClass, f64); 3],
    total: f64,
}

impl Breakdown {
    fn from_stats(stats: &BTreeMap<String, f64>) -> Self {
        let counts =
            SentimentClass::ALL.map(|c| (c, stats.get(c.as_str()).copied().unwrap_or(0.0)));
        let total = counts.iter().map(|(_, n)| n).sum();
        Self { counts, total }
    }

    fn percentage(&self, class: SentimentClass) -> f64 {
        let count = self
            .counts
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, n)| *n)
            .unwrap_or(0.0);
        share_percentage(count, self.total)
    }

    /// The class with the highest count; `None` for an empty breakdown.
    fn dominant(&self) -> Option<SentimentClass> {
        if self.total <= 0.0 {
            return None;
        }
        self.counts
            .iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| *c)
    }
}

/// Render-ready segment of the bar.
#[derive(Clone, PartialEq)]
struct Segment {
    class: SentimentClass,
    label: &'static str,
    count: f64,
    percentage_label: String,
    style: String,
    tooltip: String,
}

fn build_segments(breakdown: &Breakdown, active: SentimentFilter) -> Vec<Segment> {
    breakdown
        .counts
        .iter()
        .map(|(class, count)| {
            let pct = breakdown.percentage(*class);
            let highlight = if active == SentimentFilter::Only(*class) {
                format!("box-shadow: inset 0 0 0 2px {};", ACCENT_DARK)
            } else {
                String::new()
            };
            Segment {
                class: *class,
                label: class.label(),
                count: *count,
                percentage_label: format!("{:.1}%", pct),
                style: format!(
                    "width: {:.2}%; background: {}; cursor: pointer; display: flex; \
                     align-items: center; justify-content: center; font-size: 11px; \
                     color: #fff; {}",
                    pct,
                    class_color(*class),
                    highlight
                ),
                tooltip: format!("{}: {:.0}", class.label(), count),
            }
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct SentimentBarProps {
    pub stats: BTreeMap<String, f64>,
    /// Current sentiment constraint, for segment highlighting.
    pub active: SentimentFilter,
    /// Segment click intent; the widget never mutates filter state.
    pub on_select: EventHandler<SentimentClass>,
}

/// Segmented bar of title sentiment. Clicking a segment narrows the
/// dashboard to that class; clicking it again clears the constraint
/// (handled by the controller's reducer).
#[component]
pub fn SentimentBar(props: SentimentBarProps) -> Element {
    let breakdown = Breakdown::from_stats(&props.stats);
    let segments = build_segments(&breakdown, props.active);
    let on_select = props.on_select;
    let dominant_label = breakdown.dominant().map(|c| c.label()).unwrap_or("-");

    rsx! {
        div {
            ChartHeader {
                title: "Sentiment analysis",
                subtitle: "tone of your Shorts titles",
            }
            if breakdown.total <= 0.0 {
                NoData {}
            } else {
                div {
                    style: "font-size: 13px; color: #666; margin-bottom: 8px;",
                    "Most common: "
                    strong { "{dominant_label}" }
                }
                div {
                    style: "display: flex; height: 36px; border-radius: 4px; overflow: hidden;",
                    for segment in segments.clone() {
                        if segment.count > 0.0 {
                            div {
                                style: "{segment.style}",
                                title: "{segment.tooltip}",
                                onclick: move |_| on_select.call(segment.class),
                                "{segment.count}"
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 24px; margin-top: 8px;",
                    for segment in segments {
                        div {
                            style: "font-size: 12px; color: #666;",
                            strong { "{segment.percentage_label} " }
                            "{segment.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Breakdown;
    use sca_api::filters::SentimentClass;
    use std::collections::BTreeMap;

    fn stats(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_breakdown_percentages() {
        let b =
            Breakdown::from_stats(&stats(&[("positive", 6.0), ("neutral", 3.0), ("negative", 1.0)]));
        assert_eq!(b.total, 10.0);
        assert_eq!(b.percentage(SentimentClass::Positive), 60.0);
        assert_eq!(b.dominant(), Some(SentimentClass::Positive));
    }

    #[test]
    fn test_empty_stats_do_not_divide() {
        let b = Breakdown::from_stats(&stats(&[]));
        assert_eq!(b.total, 0.0);
        assert_eq!(b.percentage(SentimentClass::Neutral), 0.0);
        assert_eq!(b.dominant(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        // A filtered snapshot may carry only one class.
        let b = Breakdown::from_stats(&stats(&[("negative", 4.0), ("mixed", 9.0)]));
        assert_eq!(b.total, 4.0);
        assert_eq!(b.dominant(), Some(SentimentClass::Negative));
    }
}
