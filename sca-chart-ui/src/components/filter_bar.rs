//! Active-filter chips and the reset control.

use dioxus::prelude::*;
use sca_api::filters::{ActiveFilters, FeatureToggle, FilterAction, SentimentFilter};

#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    pub filters: ActiveFilters,
    pub on_action: EventHandler<FilterAction>,
}

fn toggle_chip(toggle: FeatureToggle, feature: &str) -> Option<String> {
    match toggle {
        FeatureToggle::Unconstrained => None,
        FeatureToggle::Require => Some(format!("with {}", feature)),
        FeatureToggle::Exclude => Some(format!("without {}", feature)),
    }
}

/// Shows which dimensions are constrained and offers a wholesale reset.
/// With no constraints it shows the click-to-filter hint instead.
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let mut chips: Vec<String> = Vec::new();
    if let Some(chip) = toggle_chip(props.filters.hashtags, "hashtags") {
        chips.push(chip);
    }
    if let Some(chip) = toggle_chip(props.filters.emojis, "emojis") {
        chips.push(chip);
    }
    if let SentimentFilter::Only(class) = props.filters.sentiment {
        chips.push(format!("{} sentiment", class.label().to_lowercase()));
    }

    if chips.is_empty() {
        return rsx! {
            div {
                style: "margin: 8px 0; font-size: 13px; color: #999;",
                "Click on sections in the donut and sentiment charts to filter all charts"
            }
        };
    }

    let on_action = props.on_action;
    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
            span {
                style: "font-size: 13px; color: #666;",
                "Filtering:"
            }
            for chip in chips {
                span {
                    style: "background: #fdf0f0; border: 1px solid #e29191; border-radius: 12px; \
                            padding: 2px 10px; font-size: 13px; color: #b85c5c;",
                    "{chip}"
                }
            }
            button {
                style: "border: none; background: none; color: #666; font-size: 13px; \
                        text-decoration: underline; cursor: pointer;",
                onclick: move |_| on_action.call(FilterAction::ResetAll),
                "Clear filters"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_chip;
    use sca_api::filters::FeatureToggle;

    #[test]
    fn test_toggle_chip_labels() {
        assert_eq!(toggle_chip(FeatureToggle::Unconstrained, "hashtags"), None);
        assert_eq!(
            toggle_chip(FeatureToggle::Require, "hashtags").as_deref(),
            Some("with hashtags")
        );
        assert_eq!(
            toggle_chip(FeatureToggle::Exclude, "emojis").as_deref(),
            Some("without emojis")
        );
    }
}
