//! Time windows for time-filtered endpoints
//!
//! A [`TimePeriod`] is a `since`/`until` pair of ISO-8601 timestamps. The
//! helper constructors take a date and a human-readable relative offset such
//! as `"6 months"` and compute the other end of the window in a given IANA
//! timezone. Any leading sign on the offset is discarded: the direction of the
//! shift is decided by the helper, never by the caller's sign.

use chrono::{
    Datelike, DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Formats accepted for textual date-times without an explicit offset
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Errors raised while building a time period
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimePeriodError {
    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),

    #[error("Unrecognized date: '{0}'")]
    InvalidDate(String),

    #[error("Unrecognized relative offset: '{0}'")]
    InvalidOffset(String),

    #[error("Local time {0} does not exist in timezone {1}")]
    NonexistentLocalTime(NaiveDateTime, String),

    #[error("Date out of range after applying offset '{0}'")]
    OutOfRange(String),
}

/// A `since`/`until` window, both ends as ISO-8601 strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl TimePeriod {
    pub fn new(since: Option<String>, until: Option<String>) -> Self {
        Self { since, until }
    }

    /// Window anchored at `start`, with `since` moved `offset` later
    ///
    /// `until` keeps the given date and `since` is shifted forward, so the
    /// resulting `since` is after `until`.
    pub fn starting_at(
        start: impl Into<DateInput>,
        offset: &str,
        timezone: &str,
    ) -> Result<Self, TimePeriodError> {
        let tz = parse_timezone(timezone)?;
        let relative = RelativeOffset::from_str(offset)?;
        let until = start.into().resolve(tz)?;
        let since = relative.shift(until, Direction::Forward, offset)?;

        Ok(Self {
            since: Some(format_timestamp(&since)),
            until: Some(format_timestamp(&until)),
        })
    }

    /// Window that ends at `end` and begins `offset` earlier
    pub fn ending_at(
        end: impl Into<DateInput>,
        offset: &str,
        timezone: &str,
    ) -> Result<Self, TimePeriodError> {
        let tz = parse_timezone(timezone)?;
        let relative = RelativeOffset::from_str(offset)?;
        let until = end.into().resolve(tz)?;
        let since = relative.shift(until, Direction::Backward, offset)?;

        Ok(Self {
            since: Some(format_timestamp(&since)),
            until: Some(format_timestamp(&until)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }
}

/// Anything that can be interpreted as a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Free text such as `2014-06-07`, `2014-04`, `2014-06-07 12:30` or RFC 3339
    Text(String),
    /// Midnight of the date in the configured timezone
    Date(NaiveDate),
    /// Wall-clock time in the configured timezone
    Local(NaiveDateTime),
    Utc(DateTime<Utc>),
    Fixed(DateTime<FixedOffset>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Local(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Fixed(value)
    }
}

impl DateInput {
    /// Interpret this input in `tz`
    pub fn resolve(&self, tz: Tz) -> Result<DateTime<Tz>, TimePeriodError> {
        match self {
            Self::Text(text) => parse_text(text, tz),
            Self::Date(date) => localize(date.and_time(NaiveTime::MIN), tz),
            Self::Local(naive) => localize(*naive, tz),
            Self::Utc(dt) => Ok(dt.with_timezone(&tz)),
            Self::Fixed(dt) => Ok(dt.with_timezone(&tz)),
        }
    }
}

/// A sign-less relative offset such as `"1 year 2 weeks"`
///
/// Calendar units collapse into months and days; clock units into seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeOffset {
    pub months: u32,
    pub days: u64,
    pub seconds: u64,
}

impl FromStr for RelativeOffset {
    type Err = TimePeriodError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || TimePeriodError::InvalidOffset(input.to_string());
        let offset = normalize_offset(input);

        let whole = Regex::new(r"(?i)^(?:\s*\d+\s*[a-z]+\s*,?)+\s*$").map_err(|_| invalid())?;
        if !whole.is_match(offset) {
            return Err(invalid());
        }

        let term = Regex::new(r"(?i)(\d+)\s*([a-z]+)").map_err(|_| invalid())?;
        let mut total = RelativeOffset::default();
        for captures in term.captures_iter(offset) {
            let amount: u64 = captures[1].parse().map_err(|_| invalid())?;
            total = total
                .add_term(amount, &captures[2])
                .ok_or_else(invalid)?;
        }

        Ok(total)
    }
}

impl RelativeOffset {
    fn add_term(self, amount: u64, unit: &str) -> Option<Self> {
        let mut next = self;
        match unit.to_ascii_lowercase().as_str() {
            "sec" | "secs" | "second" | "seconds" => {
                next.seconds = next.seconds.checked_add(amount)?;
            }
            "min" | "mins" | "minute" | "minutes" => {
                next.seconds = next.seconds.checked_add(amount.checked_mul(60)?)?;
            }
            "hour" | "hours" => {
                next.seconds = next.seconds.checked_add(amount.checked_mul(3_600)?)?;
            }
            "day" | "days" => {
                next.days = next.days.checked_add(amount)?;
            }
            "week" | "weeks" => {
                next.days = next.days.checked_add(amount.checked_mul(7)?)?;
            }
            "fortnight" | "fortnights" => {
                next.days = next.days.checked_add(amount.checked_mul(14)?)?;
            }
            "month" | "months" => {
                next.months = next.months.checked_add(u32::try_from(amount).ok()?)?;
            }
            "year" | "years" => {
                let months = u32::try_from(amount.checked_mul(12)?).ok()?;
                next.months = next.months.checked_add(months)?;
            }
            _ => return None,
        }
        Some(next)
    }

    /// Apply the offset to the wall-clock time of `from`, in `from`'s timezone
    ///
    /// Months move the calendar month and keep the day of month; a day past
    /// the end of the target month rolls over into the next one, so
    /// 2014-08-31 plus 6 months is 2015-03-03.
    fn shift(
        &self,
        from: DateTime<Tz>,
        direction: Direction,
        source: &str,
    ) -> Result<DateTime<Tz>, TimePeriodError> {
        let out_of_range = || TimePeriodError::OutOfRange(source.to_string());
        let tz = from.timezone();
        let local = from.naive_local();

        let months = i64::from(self.months);
        let days = i64::try_from(self.days)
            .ok()
            .and_then(TimeDelta::try_days)
            .ok_or_else(out_of_range)?;
        let seconds = i64::try_from(self.seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(out_of_range)?;

        let shifted = match direction {
            Direction::Forward => add_months_overflowing(local, months)
                .and_then(|dt| dt.checked_add_signed(days))
                .and_then(|dt| dt.checked_add_signed(seconds)),
            Direction::Backward => add_months_overflowing(local, -months)
                .and_then(|dt| dt.checked_sub_signed(days))
                .and_then(|dt| dt.checked_sub_signed(seconds)),
        }
        .ok_or_else(out_of_range)?;

        localize(shifted, tz)
    }
}

/// Shift by whole calendar months, letting surplus days spill into the next month
fn add_months_overflowing(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let date = local.date();
    let total = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let shifted = first.checked_add_signed(TimeDelta::try_days(i64::from(date.day0()))?)?;
    Some(shifted.and_time(local.time()))
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Strip a single leading `+` or `-` from an offset
pub fn normalize_offset(offset: &str) -> &str {
    let trimmed = offset.trim_start();
    trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed)
}

/// Parse an IANA timezone name such as `Europe/London`
pub fn parse_timezone(name: &str) -> Result<Tz, TimePeriodError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimePeriodError::UnknownTimezone(name.to_string()))
}

/// ISO-8601 with second precision; zero offsets render as `Z`
pub fn format_timestamp(dt: &DateTime<Tz>) -> String {
    dt.fixed_offset().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_text(text: &str, tz: Tz) -> Result<DateTime<Tz>, TimePeriodError> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&tz));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return localize(naive, tz);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return localize(date.and_time(NaiveTime::MIN), tz);
    }

    // Year and month only, e.g. `2014-04`
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d") {
        return localize(date.and_time(NaiveTime::MIN), tz);
    }

    Err(TimePeriodError::InvalidDate(text.to_string()))
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, TimePeriodError> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimePeriodError::NonexistentLocalTime(naive, tz.name().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_at_shifts_since_forward() {
        let period = TimePeriod::starting_at("2014-06-07", "6 months", "UTC").unwrap();
        assert_eq!(period.until.as_deref(), Some("2014-06-07T00:00:00Z"));
        assert_eq!(period.since.as_deref(), Some("2014-12-07T00:00:00Z"));
    }

    #[test]
    fn test_starting_at_ignores_offset_sign() {
        let plain = TimePeriod::starting_at("2014-06-07", "6 months", "UTC").unwrap();
        let negative = TimePeriod::starting_at("2014-06-07", "-6 months", "UTC").unwrap();
        let positive = TimePeriod::starting_at("2014-06-07", "+6 months", "UTC").unwrap();
        assert_eq!(plain, negative);
        assert_eq!(plain, positive);
    }

    #[test]
    fn test_ending_at_shifts_since_backward() {
        let period = TimePeriod::ending_at("2014-04-01", "6 months", "UTC").unwrap();
        assert_eq!(period.until.as_deref(), Some("2014-04-01T00:00:00Z"));
        assert_eq!(period.since.as_deref(), Some("2013-10-01T00:00:00Z"));

        let negative = TimePeriod::ending_at("2014-04-01", "-6 months", "UTC").unwrap();
        assert_eq!(period, negative);
    }

    #[test]
    fn test_year_month_input() {
        let period = TimePeriod::ending_at("2014-04", "10 days", "UTC").unwrap();
        assert_eq!(period.until.as_deref(), Some("2014-04-01T00:00:00Z"));
        assert_eq!(period.since.as_deref(), Some("2014-03-22T00:00:00Z"));
    }

    #[test]
    fn test_interpreted_in_configured_timezone() {
        let period = TimePeriod::starting_at("2014-06-07", "6 months", "Europe/London").unwrap();
        // BST in June, GMT in December
        assert_eq!(period.until.as_deref(), Some("2014-06-07T00:00:00+01:00"));
        assert_eq!(period.since.as_deref(), Some("2014-12-07T00:00:00Z"));
    }

    #[test]
    fn test_rfc3339_input_is_converted_to_timezone() {
        let period =
            TimePeriod::ending_at("2014-06-07T12:00:00+02:00", "1 hour", "UTC").unwrap();
        assert_eq!(period.until.as_deref(), Some("2014-06-07T10:00:00Z"));
        assert_eq!(period.since.as_deref(), Some("2014-06-07T09:00:00Z"));
    }

    #[test]
    fn test_typed_inputs() {
        let date = NaiveDate::from_ymd_opt(2014, 6, 7).unwrap();
        let from_date = TimePeriod::starting_at(date, "1 day", "UTC").unwrap();
        assert_eq!(from_date.since.as_deref(), Some("2014-06-08T00:00:00Z"));

        let utc = Utc.with_ymd_and_hms(2014, 6, 7, 8, 30, 0).unwrap();
        let from_utc = TimePeriod::ending_at(utc, "30 minutes", "UTC").unwrap();
        assert_eq!(from_utc.since.as_deref(), Some("2014-06-07T08:00:00Z"));
        assert_eq!(from_utc.until.as_deref(), Some("2014-06-07T08:30:00Z"));
    }

    #[test]
    fn test_month_overflow_rolls_into_next_month() {
        let period = TimePeriod::starting_at("2014-08-31", "6 months", "UTC").unwrap();
        assert_eq!(period.since.as_deref(), Some("2015-03-03T00:00:00Z"));

        let period = TimePeriod::ending_at("2014-03-31", "1 month", "UTC").unwrap();
        assert_eq!(period.since.as_deref(), Some("2014-03-03T00:00:00Z"));

        let period = TimePeriod::starting_at("2016-01-31", "1 month", "UTC").unwrap();
        assert_eq!(period.since.as_deref(), Some("2016-03-02T00:00:00Z"));
    }

    #[test]
    fn test_months_across_year_boundaries() {
        let period = TimePeriod::ending_at("2014-02-15", "14 months", "UTC").unwrap();
        assert_eq!(period.since.as_deref(), Some("2012-12-15T00:00:00Z"));

        let period = TimePeriod::starting_at("2014-11-15", "1 year 2 months", "UTC").unwrap();
        assert_eq!(period.since.as_deref(), Some("2016-01-15T00:00:00Z"));
    }

    #[test]
    fn test_offset_grammar() {
        let offset: RelativeOffset = "1 year 2 weeks".parse().unwrap();
        assert_eq!(offset.months, 12);
        assert_eq!(offset.days, 14);

        let offset: RelativeOffset = "3 hours, 15 mins 10 sec".parse().unwrap();
        assert_eq!(offset.seconds, 3 * 3_600 + 15 * 60 + 10);

        let offset: RelativeOffset = "1 Fortnight".parse().unwrap();
        assert_eq!(offset.days, 14);

        let offset: RelativeOffset = "6months".parse().unwrap();
        assert_eq!(offset.months, 6);
    }

    #[test]
    fn test_invalid_offsets() {
        assert!(matches!(
            "".parse::<RelativeOffset>(),
            Err(TimePeriodError::InvalidOffset(_))
        ));
        assert!(matches!(
            "six months".parse::<RelativeOffset>(),
            Err(TimePeriodError::InvalidOffset(_))
        ));
        assert!(matches!(
            "6 lightyears".parse::<RelativeOffset>(),
            Err(TimePeriodError::InvalidOffset(_))
        ));
        assert!(matches!(
            "--6 months".parse::<RelativeOffset>(),
            Err(TimePeriodError::InvalidOffset(_))
        ));
    }

    #[test]
    fn test_normalize_offset() {
        assert_eq!(normalize_offset("-6 months"), "6 months");
        assert_eq!(normalize_offset("+6 months"), "6 months");
        assert_eq!(normalize_offset("6 months"), "6 months");
        assert_eq!(normalize_offset("  -1 day"), "1 day");
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            TimePeriod::starting_at("2014-06-07", "1 day", "Mars/Olympus"),
            Err(TimePeriodError::UnknownTimezone("Mars/Olympus".to_string()))
        );
        assert_eq!(
            TimePeriod::starting_at("yesterday-ish", "1 day", "UTC"),
            Err(TimePeriodError::InvalidDate("yesterday-ish".to_string()))
        );
    }

    #[test]
    fn test_nonexistent_local_time() {
        // Clocks in London jump from 01:00 to 02:00 on 2014-03-30
        let result = TimePeriod::starting_at("2014-03-30 01:30", "1 day", "Europe/London");
        assert!(matches!(
            result,
            Err(TimePeriodError::NonexistentLocalTime(_, _))
        ));
    }

    #[test]
    fn test_serde_skips_missing_ends() {
        let period = TimePeriod::new(Some("2014-01-01T00:00:00Z".to_string()), None);
        let yaml = serde_yaml::to_string(&period).unwrap();
        assert!(yaml.contains("since"));
        assert!(!yaml.contains("until"));
        assert!(!period.is_empty());
        assert!(TimePeriod::default().is_empty());
    }
}
