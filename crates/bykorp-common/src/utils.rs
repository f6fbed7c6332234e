//! Utility functions for Bykorp
//!
//! List fields (service features, portfolio technologies) travel over the API
//! as a single comma-separated string. These helpers convert between that
//! representation and `Vec<String>`, and render timestamps the way the API
//! reports them.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// # Examples
///
/// ```
/// use bykorp_common::split_list;
///
/// assert_eq!(split_list("React, Node.js,,PostgreSQL"), vec!["React", "Node.js", "PostgreSQL"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list entries with the given separator, returning `None` for an empty list.
pub fn join_list(items: &[String], separator: &str) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(separator))
    }
}

/// Render a timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a calendar date as `YYYY-MM-DD`.
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Campaign Strategy,Ad Creation"),
            vec!["Campaign Strategy", "Ad Creation"]
        );
        assert_eq!(split_list(" a , b "), vec!["a", "b"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_join_list() {
        let items = vec!["React".to_string(), "Tailwind".to_string()];
        assert_eq!(join_list(&items, ",").as_deref(), Some("React,Tailwind"));
        assert_eq!(join_list(&items, ", ").as_deref(), Some("React, Tailwind"));
        assert_eq!(join_list(&[], ","), None);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(format_date(date), "2024-08-15");
    }
}
