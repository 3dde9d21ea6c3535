//! Channel-analysis types for `POST /api/analyze`.

use serde::{Deserialize, Serialize};

/// Response envelope of a channel analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelAnalysis {
    pub data: AnalysisData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisData {
    pub summary: AnalysisSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSummary {
    pub total_shorts: u64,
    pub total_views: f64,
    pub avg_views_per_short: f64,
    pub date_range: AnalysisDateRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDateRange {
    pub start: String,
    pub end: String,
}

impl ChannelAnalysis {
    /// A response without a summary is treated as malformed by the page
    /// (the original glue rejected payloads missing `data.summary`).
    pub fn has_summary(&self) -> bool {
        self.data.summary.total_shorts > 0 || !self.data.summary.date_range.start.is_empty()
    }
}

/// Validate a YouTube channel ID: "UC" followed by 22 or 23 word
/// characters or dashes (24 or 25 chars total).
pub fn is_valid_channel_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("UC") else {
        return false;
    };
    let len = rest.chars().count();
    (22..=23).contains(&len)
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::parse_payload;

    #[test]
    fn test_valid_channel_ids() {
        assert!(is_valid_channel_id("UCabcdefghijklmnopqrstuv"));
        assert!(is_valid_channel_id("UC_1234567890-abcdefghiJK"));
    }

    #[test]
    fn test_invalid_channel_ids() {
        assert!(!is_valid_channel_id(""));
        assert!(!is_valid_channel_id("abcdefghijklmnopqrstuvwx"));
        assert!(!is_valid_channel_id("UCshort"));
        assert!(!is_valid_channel_id("UCabcdefghijklmnopqrstuvwxyz"));
        assert!(!is_valid_channel_id("UCabcdefghijklmnopqrst!v"));
    }

    #[test]
    fn test_analysis_summary_parses() {
        let analysis: ChannelAnalysis = parse_payload(
            r#"{"data": {"summary": {
                "total_shorts": 42,
                "total_views": 1200000,
                "avg_views_per_short": 28571.4,
                "date_range": {"start": "2023-01-05", "end": "2024-03-31"}
            }}}"#,
        )
        .unwrap();
        assert!(analysis.has_summary());
        assert_eq!(analysis.data.summary.total_shorts, 42);
        assert_eq!(analysis.data.summary.date_range.end, "2024-03-31");
    }

    #[test]
    fn test_empty_analysis_has_no_summary() {
        let analysis: ChannelAnalysis = parse_payload("{}").unwrap();
        assert!(!analysis.has_summary());
    }
}
