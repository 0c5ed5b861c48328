//! Date arithmetic and labels over chain timestamps.
//!
//! Every function takes `now` explicitly so results are reproducible.

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::chain_time;
use std::collections::HashSet;

use crate::error::ParseError;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Parse a chain timestamp supplied by a caller
pub fn parse_date(raw: &str) -> Result<NaiveDateTime, ParseError> {
    chain_time::parse(raw).ok_or_else(|| ParseError::InvalidDate(raw.to_string()))
}

pub fn second_diff(from: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - from).num_seconds()
}

pub fn hour_diff(from: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - from).num_hours()
}

pub fn day_diff(from: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - from).num_days()
}

/// Compact age label: `"45s"`, `"5m"`, `"3h"`, `"2d"`, `"4mo"`, `"1y"`.
pub fn relative_short(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let secs = second_diff(date, now).abs();
    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h", secs / HOUR)
    } else if secs < 30 * DAY {
        format!("{}d", secs / DAY)
    } else if secs < 365 * DAY {
        format!("{}mo", secs / (30 * DAY))
    } else {
        format!("{}y", secs / (365 * DAY))
    }
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

/// Long form label: `"a few seconds ago"`, `"3 days ago"`, `"in 2 hours"`.
pub fn relative_long(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = second_diff(date, now);
    let secs = diff.abs();

    let span = if secs < 45 {
        "a few seconds".to_string()
    } else if secs < 90 {
        "a minute".to_string()
    } else if secs < 45 * MINUTE {
        format!("{} minutes", round_div(secs, MINUTE))
    } else if secs < 90 * MINUTE {
        "an hour".to_string()
    } else if secs < 22 * HOUR {
        format!("{} hours", round_div(secs, HOUR))
    } else if secs < 36 * HOUR {
        "a day".to_string()
    } else if secs < 26 * DAY {
        format!("{} days", round_div(secs, DAY))
    } else if secs < 45 * DAY {
        "a month".to_string()
    } else if secs < 320 * DAY {
        format!("{} months", round_div(secs, 30 * DAY).max(2))
    } else if secs < 548 * DAY {
        "a year".to_string()
    } else {
        format!("{} years", round_div(secs, 365 * DAY).max(2))
    };

    if diff >= 0 {
        format!("{} ago", span)
    } else {
        format!("in {}", span)
    }
}

/// Buckets used to put headers above a date-ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateGroup {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    Older,
}

pub fn date_group(date: NaiveDateTime, now: NaiveDateTime) -> DateGroup {
    let day = date.date();
    let today = now.date();

    if day == today {
        DateGroup::Today
    } else if day == today - Duration::days(1) {
        DateGroup::Yesterday
    } else if day.iso_week() == today.iso_week() {
        DateGroup::ThisWeek
    } else if day.year() == today.year() && day.month() == today.month() {
        DateGroup::ThisMonth
    } else {
        DateGroup::Older
    }
}

/// For each date, the group header to show above it: `Some` only on the
/// first item of each group, `None` elsewhere. Computed as one pass over the
/// full list so per-row rendering needs no shared state.
pub fn group_headers(dates: &[NaiveDateTime], now: NaiveDateTime) -> Vec<Option<DateGroup>> {
    let mut seen = HashSet::new();
    dates
        .iter()
        .map(|date| {
            let group = date_group(*date, now);
            seen.insert(group).then_some(group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_date(raw).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-10T12:00:00Z"), Ok(at("2024-05-10T12:00:00")));
        assert_eq!(
            parse_date("last tuesday"),
            Err(ParseError::InvalidDate("last tuesday".to_string()))
        );
    }

    #[test]
    fn test_diffs() {
        let now = at("2024-05-10T12:00:00");
        assert_eq!(second_diff(at("2024-05-10T11:59:00"), now), 60);
        assert_eq!(hour_diff(at("2024-05-10T09:30:00"), now), 2);
        assert_eq!(day_diff(at("2024-05-07T13:00:00"), now), 2);
    }

    #[test]
    fn test_relative_short() {
        let now = at("2024-05-10T12:00:00");
        assert_eq!(relative_short(at("2024-05-10T11:59:30"), now), "30s");
        assert_eq!(relative_short(at("2024-05-10T11:55:00"), now), "5m");
        assert_eq!(relative_short(at("2024-05-10T09:00:00"), now), "3h");
        assert_eq!(relative_short(at("2024-05-08T12:00:00"), now), "2d");
        assert_eq!(relative_short(at("2024-01-10T12:00:00"), now), "4mo");
        assert_eq!(relative_short(at("2022-05-10T12:00:00"), now), "2y");
    }

    #[test]
    fn test_relative_long() {
        let now = at("2024-05-10T12:00:00");
        assert_eq!(relative_long(at("2024-05-10T11:59:50"), now), "a few seconds ago");
        assert_eq!(relative_long(at("2024-05-10T11:50:00"), now), "10 minutes ago");
        assert_eq!(relative_long(at("2024-05-07T12:00:00"), now), "3 days ago");
        assert_eq!(relative_long(at("2024-05-10T14:00:00"), now), "in 2 hours");
        assert_eq!(relative_long(at("2023-05-01T12:00:00"), now), "a year ago");
    }

    #[test]
    fn test_date_groups() {
        // Friday
        let now = at("2024-05-10T12:00:00");
        assert_eq!(date_group(at("2024-05-10T01:00:00"), now), DateGroup::Today);
        assert_eq!(date_group(at("2024-05-09T23:00:00"), now), DateGroup::Yesterday);
        assert_eq!(date_group(at("2024-05-07T10:00:00"), now), DateGroup::ThisWeek);
        assert_eq!(date_group(at("2024-05-02T10:00:00"), now), DateGroup::ThisMonth);
        assert_eq!(date_group(at("2024-04-28T10:00:00"), now), DateGroup::Older);
    }

    #[test]
    fn test_group_headers_mark_first_of_each_group() {
        let now = at("2024-05-10T12:00:00");
        let dates = [
            at("2024-05-10T11:00:00"),
            at("2024-05-10T08:00:00"),
            at("2024-05-09T08:00:00"),
            at("2024-05-02T08:00:00"),
            at("2024-05-01T08:00:00"),
        ];

        let headers = group_headers(&dates, now);
        assert_eq!(
            headers,
            vec![
                Some(DateGroup::Today),
                None,
                Some(DateGroup::Yesterday),
                Some(DateGroup::ThisMonth),
                None,
            ]
        );

        // A second pass starts fresh
        assert_eq!(group_headers(&dates, now), headers);
    }
}
