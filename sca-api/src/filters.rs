//! Feature filter state and its transition function.
//!
//! Filters are server-evaluated: every transition is followed by a
//! snapshot refetch, because aggregated percentages must be recomputed
//! over the filtered subset server-side. Nothing here touches the
//! network; the reducer is a pure value-to-value function.

use serde::{Deserialize, Serialize};

/// Constraint on a boolean feature dimension (hashtag/emoji presence).
///
/// A dedicated `Unconstrained` variant keeps "filter off" distinct from
/// "filter for absence"; an `Option<bool>` conflates the two too easily
/// at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureToggle {
    #[default]
    Unconstrained,
    /// Only shorts that have the feature.
    Require,
    /// Only shorts that lack the feature.
    Exclude,
}

impl FeatureToggle {
    /// The query-string value for this constraint, `None` when off.
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            FeatureToggle::Unconstrained => None,
            FeatureToggle::Require => Some("true"),
            FeatureToggle::Exclude => Some("false"),
        }
    }

    /// Donut-segment click semantics: selecting the already-active
    /// segment clears the dimension, anything else overwrites it.
    fn clicked(self, has_feature: bool) -> Self {
        let wanted = if has_feature {
            FeatureToggle::Require
        } else {
            FeatureToggle::Exclude
        };
        if self == wanted {
            FeatureToggle::Unconstrained
        } else {
            wanted
        }
    }
}

/// Sentiment classes as classified by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    Positive,
    Neutral,
    Negative,
}

impl SentimentClass {
    pub const ALL: [SentimentClass; 3] = [
        SentimentClass::Positive,
        SentimentClass::Neutral,
        SentimentClass::Negative,
    ];

    /// Wire/key form, matching backend `sentiment_stats` keys.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Neutral => "neutral",
            SentimentClass::Negative => "negative",
        }
    }

    /// Capitalized display form.
    pub fn label(self) -> &'static str {
        match self {
            SentimentClass::Positive => "Positive",
            SentimentClass::Neutral => "Neutral",
            SentimentClass::Negative => "Negative",
        }
    }
}

/// Constraint on the sentiment dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentFilter {
    #[default]
    Unconstrained,
    Only(SentimentClass),
}

impl SentimentFilter {
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            SentimentFilter::Unconstrained => None,
            SentimentFilter::Only(class) => Some(class.as_str()),
        }
    }
}

/// The active feature filters. Each dimension is independent; changing
/// one never drops the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    pub hashtags: FeatureToggle,
    pub emojis: FeatureToggle,
    pub sentiment: SentimentFilter,
}

/// Intents emitted by the click-to-filter widgets (donut segments,
/// sentiment segments) and the reset control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Donut click on the hashtag chart; `true` = the "use" segment.
    SetHashtags(bool),
    /// Donut click on the emoji chart; `true` = the "use" segment.
    SetEmojis(bool),
    /// Sentiment segment click.
    SetSentiment(SentimentClass),
    /// Clear every dimension back to unconstrained.
    ResetAll,
}

impl ActiveFilters {
    pub fn is_unconstrained(&self) -> bool {
        *self == ActiveFilters::default()
    }

    /// Pure transition function. Clicking an already-active segment
    /// clears that one dimension; `ResetAll` clears everything.
    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetHashtags(has) => Self {
                hashtags: self.hashtags.clicked(has),
                ..self
            },
            FilterAction::SetEmojis(has) => Self {
                emojis: self.emojis.clicked(has),
                ..self
            },
            FilterAction::SetSentiment(class) => Self {
                sentiment: if self.sentiment == SentimentFilter::Only(class) {
                    SentimentFilter::Unconstrained
                } else {
                    SentimentFilter::Only(class)
                },
                ..self
            },
            FilterAction::ResetAll => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_reclick_clears_single_dimension() {
        let filters = ActiveFilters::default()
            .apply(FilterAction::SetHashtags(true))
            .apply(FilterAction::SetSentiment(SentimentClass::Positive));
        assert_eq!(filters.hashtags, FeatureToggle::Require);

        // Clicking the same donut segment again clears hashtags only.
        let filters = filters.apply(FilterAction::SetHashtags(true));
        assert_eq!(filters.hashtags, FeatureToggle::Unconstrained);
        assert_eq!(
            filters.sentiment,
            SentimentFilter::Only(SentimentClass::Positive)
        );
    }

    #[test]
    fn test_overwrite_within_dimension() {
        let filters = ActiveFilters::default()
            .apply(FilterAction::SetEmojis(true))
            .apply(FilterAction::SetEmojis(false));
        assert_eq!(filters.emojis, FeatureToggle::Exclude);
    }

    #[test]
    fn test_sentiment_toggle() {
        let filters = ActiveFilters::default().apply(FilterAction::SetSentiment(SentimentClass::Negative));
        assert_eq!(
            filters.sentiment,
            SentimentFilter::Only(SentimentClass::Negative)
        );
        let filters = filters.apply(FilterAction::SetSentiment(SentimentClass::Negative));
        assert_eq!(filters.sentiment, SentimentFilter::Unconstrained);
    }

    #[test]
    fn test_reset_all_clears_every_dimension() {
        let filters = ActiveFilters::default()
            .apply(FilterAction::SetHashtags(false))
            .apply(FilterAction::SetEmojis(true))
            .apply(FilterAction::SetSentiment(SentimentClass::Neutral))
            .apply(FilterAction::ResetAll);
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_unrelated_dimensions_survive_any_transition() {
        let start = ActiveFilters {
            hashtags: FeatureToggle::Exclude,
            emojis: FeatureToggle::Require,
            sentiment: SentimentFilter::Only(SentimentClass::Neutral),
        };
        let after = start.apply(FilterAction::SetHashtags(true));
        assert_eq!(after.emojis, start.emojis);
        assert_eq!(after.sentiment, start.sentiment);
    }

    #[test]
    fn test_query_values() {
        assert_eq!(FeatureToggle::Unconstrained.as_query_value(), None);
        assert_eq!(FeatureToggle::Require.as_query_value(), Some("true"));
        assert_eq!(FeatureToggle::Exclude.as_query_value(), Some("false"));
        assert_eq!(
            SentimentFilter::Only(SentimentClass::Positive).as_query_value(),
            Some("positive")
        );
    }
}
