//! Raw per-short records from `/api/shorts_data`.

use serde::{Deserialize, Serialize};

/// The raw feed payload. The dashboard uses it solely to derive the
/// [`crate::date_index::DateRangeIndex`]; everything aggregated comes
/// from the snapshot endpoint instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortsFeed {
    #[serde(default)]
    pub data: Vec<ShortRecord>,
}

/// One short-form video record. The backend serializes missing values as
/// `null` (NaN-scrubbed dataframes), so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortRecord {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub published_at: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub hour: Option<u32>,
    pub duration_seconds: Option<f64>,
    pub view_count: Option<f64>,
    pub like_count: Option<f64>,
    pub comment_count: Option<f64>,
    pub engagement_rate: Option<f64>,
    pub has_hashtags: Option<bool>,
    pub hashtag_count: Option<f64>,
    pub has_emojis: Option<bool>,
    pub emoji_count: Option<f64>,
    pub sentiment: Option<String>,
    pub day_of_week: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ShortsFeed;

    #[test]
    fn test_sparse_record_deserializes() {
        // Only a date, everything else absent or null.
        let feed: ShortsFeed = serde_json::from_str(
            r#"{"data": [{"date": "2024-01-01", "title": null, "view_count": null}]}"#,
        )
        .unwrap();
        assert_eq!(feed.data.len(), 1);
        assert_eq!(feed.data[0].date.as_deref(), Some("2024-01-01"));
        assert_eq!(feed.data[0].title, None);
    }

    #[test]
    fn test_empty_payload() {
        let feed: ShortsFeed = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(feed.data.is_empty());
    }
}
