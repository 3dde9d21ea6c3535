//! Shared utility functions for SCA crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Weekday names in backend order (the posting-schedule and heat-map
    /// payloads key rows by these exact strings).
    pub const DAY_ORDER: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Single-letter weekday abbreviations aligned with [`DAY_ORDER`].
    pub const DAY_ABBREVIATIONS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Short human label for slider endpoints, e.g. "Jan 31, 2024".
    ///
    /// Backend dates are ISO; anything unparseable is shown as-is rather
    /// than failing the render.
    pub fn short_label(s: &str) -> String {
        match parse_date(trim_timestamp(s)) {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => s.to_string(),
        }
    }

    /// Month-and-year label for sparkline hover, e.g. "January 2024".
    pub fn month_label(s: &str) -> String {
        match parse_date(trim_timestamp(s)) {
            Ok(date) => date.format("%B %Y").to_string(),
            Err(_) => s.to_string(),
        }
    }

    /// Strip a trailing timestamp from "YYYY-MM-DD HH:MM:SS" or
    /// "YYYY-MM-DDTHH:MM:SS" values (the monthly time series carries
    /// midnight timestamps).
    pub fn trim_timestamp(s: &str) -> &str {
        match s.find(['T', ' ']) {
            Some(idx) => &s[..idx],
            None => s,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-01-31");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_short_label() {
            assert_eq!(short_label("2024-03-01"), "Mar 1, 2024");
            // Unparseable input passes through untouched.
            assert_eq!(short_label("not-a-date"), "not-a-date");
        }

        #[test]
        fn test_month_label_with_timestamp() {
            assert_eq!(month_label("2024-01-01 00:00:00"), "January 2024");
            assert_eq!(month_label("2024-01-01T00:00:00"), "January 2024");
        }

        #[test]
        fn test_trim_timestamp_plain_date() {
            assert_eq!(trim_timestamp("2024-01-01"), "2024-01-01");
        }
    }
}

/// Number formatting for KPI values and chart labels
pub mod numbers {
    /// Compact count formatting: 1_234_567 -> "1.2M", 5_400 -> "5.4K",
    /// 321 -> "321". Mirrors the backend's summary formatting so locally
    /// formatted values match server-formatted ones.
    pub fn format_count(value: f64) -> String {
        if value >= 1_000_000.0 {
            format!("{:.1}M", value / 1_000_000.0)
        } else if value >= 1_000.0 {
            format!("{:.1}K", value / 1_000.0)
        } else {
            format!("{:.0}", value)
        }
    }

    /// Thousands-separated integer formatting: 1234567 -> "1,234,567".
    pub fn format_thousands(value: f64) -> String {
        let rounded = value.round() as i64;
        let digits = rounded.abs().to_string();
        let mut out = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        if rounded < 0 {
            format!("-{}", out)
        } else {
            out
        }
    }

    /// Percentage share of `part` in `total`, 0.0 when the total is zero.
    pub fn share_percentage(part: f64, total: f64) -> f64 {
        if total > 0.0 {
            part / total * 100.0
        } else {
            0.0
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(1_234_567.0), "1.2M");
            assert_eq!(format_count(5_400.0), "5.4K");
            assert_eq!(format_count(1_000.0), "1.0K");
            assert_eq!(format_count(321.0), "321");
            assert_eq!(format_count(0.0), "0");
        }

        #[test]
        fn test_format_thousands() {
            assert_eq!(format_thousands(1_234_567.0), "1,234,567");
            assert_eq!(format_thousands(999.0), "999");
            assert_eq!(format_thousands(0.0), "0");
            assert_eq!(format_thousands(1_000.4), "1,000");
        }

        #[test]
        fn test_share_percentage() {
            assert_eq!(share_percentage(25.0, 100.0), 25.0);
            assert_eq!(share_percentage(1.0, 3.0).round(), 33.0);
            // Zero total must not divide.
            assert_eq!(share_percentage(5.0, 0.0), 0.0);
        }
    }
}
