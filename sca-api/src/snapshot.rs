//! The aggregated dashboard snapshot.
//!
//! One snapshot corresponds to one committed (date range, filters) pair
//! and is replaced wholesale on every fetch; chart components receive
//! read-only slices of it and never patch it incrementally.
//!
//! The backend assembles this JSON server-side and its shape varies
//! field-by-field across filter combinations, so every section defaults
//! when absent rather than failing deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single (date, value) pair used for sparkline chart data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub value: f64,
}

/// Aggregated response for the current (SelectedRange, ActiveFilters) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub summary: Summary,
    pub hashtag_stats: FeatureStats,
    pub emoji_stats: FeatureStats,
    /// Sentiment class -> number of shorts.
    pub sentiment_stats: BTreeMap<String, f64>,
    /// Weekday name -> number of shorts posted.
    pub videos_per_day: BTreeMap<String, f64>,
    /// Posting-hour ("0".."23") -> average views.
    pub time_success_data: BTreeMap<String, f64>,
    /// Coarse daypart label -> average views.
    pub time_buckets: BTreeMap<String, f64>,
    pub heat_map_data: HeatMapData,
    pub top_shorts: Vec<TopShort>,
    pub scatter_data: ScatterData,
    pub time_series_data: TimeSeriesData,
}

/// Headline KPIs. The formatted strings come pre-rendered from the
/// backend ("1.2M"); the raw averages drive anything numeric client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub total_shorts: u64,
    pub avg_views: String,
    pub avg_likes: String,
    pub avg_comments: String,
    pub avg_words: f64,
    pub avg_shorts_per_day: f64,
    pub avg_views_raw: f64,
    pub avg_likes_raw: f64,
    pub avg_comments_raw: f64,
}

/// Usage statistics for one caption feature (hashtags or emojis).
///
/// `usage_percentage + non_usage_percentage` may miss 100 by a rounding
/// step server-side; consumers render both proportionally and must not
/// renormalize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureStats {
    pub usage_percentage: f64,
    pub non_usage_percentage: f64,
    #[serde(alias = "avg_hashtags_per_video", alias = "avg_emojis_per_video")]
    pub avg_per_video: f64,
    pub avg_views_with: f64,
    pub avg_views_without: f64,
}

/// Hour-by-weekday totals, one table per metric.
///
/// Outer key is the posting hour as a string ("0".."23"), inner key the
/// weekday name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapData {
    pub videos_posted: BTreeMap<String, BTreeMap<String, f64>>,
    pub views: BTreeMap<String, BTreeMap<String, f64>>,
    pub likes: BTreeMap<String, BTreeMap<String, f64>>,
    pub comments: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Selectable heat-map metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatMapMetric {
    VideosPosted,
    Views,
    Likes,
    Comments,
}

impl HeatMapMetric {
    pub const ALL: [HeatMapMetric; 4] = [
        HeatMapMetric::VideosPosted,
        HeatMapMetric::Views,
        HeatMapMetric::Likes,
        HeatMapMetric::Comments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeatMapMetric::VideosPosted => "Videos posted",
            HeatMapMetric::Views => "Views",
            HeatMapMetric::Likes => "Likes",
            HeatMapMetric::Comments => "Comments",
        }
    }
}

impl HeatMapData {
    pub fn metric(&self, metric: HeatMapMetric) -> &BTreeMap<String, BTreeMap<String, f64>> {
        match metric {
            HeatMapMetric::VideosPosted => &self.videos_posted,
            HeatMapMetric::Views => &self.views,
            HeatMapMetric::Likes => &self.likes,
            HeatMapMetric::Comments => &self.comments,
        }
    }

    /// Cell lookup with a zero default for missing hour/day slots.
    pub fn cell(&self, metric: HeatMapMetric, hour: u32, day: &str) -> f64 {
        self.metric(metric)
            .get(&hour.to_string())
            .and_then(|row| row.get(day))
            .copied()
            .unwrap_or(0.0)
    }
}

/// One entry of the ranked list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopShort {
    pub title: Option<String>,
    pub view_count: Option<f64>,
    pub like_count: Option<f64>,
    pub comment_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterData {
    pub duration_vs_engagement: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterPoint {
    pub duration_seconds: f64,
    pub engagement_rate: f64,
}

/// Monthly averages for the KPI sparklines. Each series carries its own
/// wire key per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesData {
    pub views: Vec<ViewsPoint>,
    pub likes: Vec<LikesPoint>,
    pub comments: Vec<CommentsPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsPoint {
    pub date: String,
    pub view_count: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikesPoint {
    pub date: String,
    pub like_count: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsPoint {
    pub date: String,
    pub comment_count: f64,
}

impl TimeSeriesData {
    pub fn views_points(&self) -> Vec<ChartPoint> {
        self.views
            .iter()
            .map(|p| ChartPoint {
                date: p.date.clone(),
                value: p.view_count,
            })
            .collect()
    }

    pub fn likes_points(&self) -> Vec<ChartPoint> {
        self.likes
            .iter()
            .map(|p| ChartPoint {
                date: p.date.clone(),
                value: p.like_count,
            })
            .collect()
    }

    pub fn comments_points(&self) -> Vec<ChartPoint> {
        self.comments
            .iter()
            .map(|p| ChartPoint {
                date: p.date.clone(),
                value: p.comment_count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::parse_payload;

    #[test]
    fn test_missing_sections_default() {
        // A heavily filtered snapshot may drop whole sections.
        let snapshot: DashboardSnapshot =
            parse_payload(r#"{"summary": {"total_shorts": 3, "avg_views": "1.2K"}}"#).unwrap();
        assert_eq!(snapshot.summary.total_shorts, 3);
        assert_eq!(snapshot.summary.avg_views, "1.2K");
        assert!(snapshot.top_shorts.is_empty());
        assert!(snapshot.scatter_data.duration_vs_engagement.is_empty());
        assert!(snapshot.sentiment_stats.is_empty());
    }

    #[test]
    fn test_feature_stats_aliases() {
        let snapshot: DashboardSnapshot = parse_payload(
            r#"{
                "hashtag_stats": {"usage_percentage": 60.4, "non_usage_percentage": 39.5,
                                  "avg_hashtags_per_video": 2.5},
                "emoji_stats": {"usage_percentage": 10.0, "non_usage_percentage": 90.0,
                                "avg_emojis_per_video": 1.1}
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.hashtag_stats.avg_per_video, 2.5);
        assert_eq!(snapshot.emoji_stats.avg_per_video, 1.1);
        // Rounded percentages need not sum to 100; the value is kept as-is.
        let total = snapshot.hashtag_stats.usage_percentage
            + snapshot.hashtag_stats.non_usage_percentage;
        assert!((total - 99.9).abs() < 1e-9);
    }

    #[test]
    fn test_heat_map_cell_defaults_to_zero() {
        let snapshot: DashboardSnapshot = parse_payload(
            r#"{"heat_map_data": {"views": {"14": {"Monday": 1200}}}}"#,
        )
        .unwrap();
        let heat = &snapshot.heat_map_data;
        assert_eq!(heat.cell(HeatMapMetric::Views, 14, "Monday"), 1200.0);
        assert_eq!(heat.cell(HeatMapMetric::Views, 14, "Tuesday"), 0.0);
        assert_eq!(heat.cell(HeatMapMetric::Likes, 14, "Monday"), 0.0);
    }

    #[test]
    fn test_time_series_points() {
        let snapshot: DashboardSnapshot = parse_payload(
            r#"{"time_series_data": {
                "views": [{"date": "2024-01-01 00:00:00", "view_count": 1500.0}],
                "likes": [{"date": "2024-01-01 00:00:00", "like_count": 80.0}],
                "comments": []
            }}"#,
        )
        .unwrap();
        let views = snapshot.time_series_data.views_points();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].value, 1500.0);
        assert!(snapshot.time_series_data.comments_points().is_empty());
    }

    #[test]
    fn test_null_top_short_title() {
        let snapshot: DashboardSnapshot = parse_payload(
            r#"{"top_shorts": [{"title": null, "view_count": 10}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.top_shorts[0].title, None);
        assert_eq!(snapshot.top_shorts[0].view_count, Some(10.0));
    }
}
