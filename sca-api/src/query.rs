//! Query construction for the dashboard-data endpoint.

use crate::filters::ActiveFilters;

/// Path of the raw per-short feed (drives the date index only).
pub const SHORTS_DATA_PATH: &str = "/api/shorts_data";

/// Path of the aggregated snapshot endpoint.
pub const DASHBOARD_DATA_PATH: &str = "/api/dashboard_data";

/// Path of the channel-analysis endpoint (multipart POST).
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Parameters of one snapshot request: the committed date range plus the
/// active filters. Filter params are appended only for constrained
/// dimensions: the backend treats an absent param as "no constraint",
/// which is not the same thing as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotQuery<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub filters: ActiveFilters,
}

impl SnapshotQuery<'_> {
    /// Render the query string, without the leading `?`.
    ///
    /// All values (ISO dates, `true`/`false`, sentiment class names) are
    /// URL-safe by construction, so no percent-encoding is needed.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("start_date={}&end_date={}", self.start_date, self.end_date);
        if let Some(value) = self.filters.hashtags.as_query_value() {
            query.push_str("&hashtag_filter=");
            query.push_str(value);
        }
        if let Some(value) = self.filters.emojis.as_query_value() {
            query.push_str("&emoji_filter=");
            query.push_str(value);
        }
        if let Some(value) = self.filters.sentiment.as_query_value() {
            query.push_str("&sentiment_filter=");
            query.push_str(value);
        }
        query
    }

    /// Full request path: `/api/dashboard_data?start_date=...`.
    pub fn to_path(&self) -> String {
        format!("{}?{}", DASHBOARD_DATA_PATH, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterAction, SentimentClass};

    #[test]
    fn test_unfiltered_query_has_only_dates() {
        let query = SnapshotQuery {
            start_date: "2024-01-31",
            end_date: "2024-03-01",
            filters: ActiveFilters::default(),
        };
        assert_eq!(
            query.to_query_string(),
            "start_date=2024-01-31&end_date=2024-03-01"
        );
    }

    #[test]
    fn test_filter_click_sequence() {
        // Slider committed to a sub-range: one fetch, no filter params.
        let filters = ActiveFilters::default();
        let query = SnapshotQuery {
            start_date: "2024-01-31",
            end_date: "2024-03-01",
            filters,
        };
        assert_eq!(
            query.to_query_string(),
            "start_date=2024-01-31&end_date=2024-03-01"
        );

        // "Use hashtags" donut segment clicked: same range plus the flag.
        let filters = filters.apply(FilterAction::SetHashtags(true));
        let query = SnapshotQuery {
            start_date: "2024-01-31",
            end_date: "2024-03-01",
            filters,
        };
        assert_eq!(
            query.to_query_string(),
            "start_date=2024-01-31&end_date=2024-03-01&hashtag_filter=true"
        );

        // Same segment clicked again: the flag is gone, not `false`.
        let filters = filters.apply(FilterAction::SetHashtags(true));
        let query = SnapshotQuery {
            start_date: "2024-01-31",
            end_date: "2024-03-01",
            filters,
        };
        assert_eq!(
            query.to_query_string(),
            "start_date=2024-01-31&end_date=2024-03-01"
        );
    }

    #[test]
    fn test_all_dimensions_constrained() {
        let filters = ActiveFilters::default()
            .apply(FilterAction::SetHashtags(true))
            .apply(FilterAction::SetEmojis(false))
            .apply(FilterAction::SetSentiment(SentimentClass::Neutral));
        let query = SnapshotQuery {
            start_date: "2024-01-01",
            end_date: "2024-12-31",
            filters,
        };
        assert_eq!(
            query.to_query_string(),
            "start_date=2024-01-01&end_date=2024-12-31\
             &hashtag_filter=true&emoji_filter=false&sentiment_filter=neutral"
        );
    }

    #[test]
    fn test_to_path() {
        let query = SnapshotQuery {
            start_date: "2024-06-01",
            end_date: "2024-06-01",
            filters: ActiveFilters::default(),
        };
        assert_eq!(
            query.to_path(),
            "/api/dashboard_data?start_date=2024-06-01&end_date=2024-06-01"
        );
    }
}
