//! Per-column type inference: numeric coercion and date detection.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::DateRange;

use super::round4;

/// Minimum ratio of parsed dates to non-empty values for a column to
/// classify as a date column. Guards against columns that only
/// incidentally contain a few date-shaped strings.
pub const DATE_RATIO_THRESHOLD: f64 = 0.8;

/// Slash- and dash-separated date formats, tried in order.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d"];

/// Timestamp format tried after the plain date formats.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coerce one raw value to a number.
///
/// Surrounding whitespace is stripped; anything that then fails to parse
/// as a base-10 floating-point literal is dropped by the caller, never
/// reported as a column-level failure.
pub fn coerce_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Collect a column's numeric sequence.
///
/// Absent and empty values are excluded entirely (not treated as zero);
/// malformed values are silently dropped.
pub fn numeric_values(values: &[Option<String>]) -> Vec<f64> {
    values
        .iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .filter_map(|v| coerce_numeric(v))
        .collect()
}

/// Count a column's missing values (absent or empty string).
pub fn missing_count(values: &[Option<String>]) -> usize {
    values
        .iter()
        .filter(|v| v.as_deref().map_or(true, str::is_empty))
        .count()
}

/// Try the fixed format list against one value, first match winning.
///
/// Formats, in order: year-month-day, year-month (first of the month
/// implied), US month/day/year with 4- then 2-digit year, slash-separated
/// year-first, and year-month-day with time.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(midnight(date));
    }
    if let Some(date) = parse_year_month(value) {
        return Some(midnight(date));
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(midnight(date));
        }
    }
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

/// `%Y-%m` with day-of-month 1 implied.
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Detect whether a column holds dates and report their range.
///
/// Returns `None` unless at least one value parses and the ratio of
/// parsed dates to non-empty values meets [`DATE_RATIO_THRESHOLD`].
/// No cross-row format consistency is required; each value takes the
/// first format that matches it.
pub fn detect_date_range(values: &[Option<String>]) -> Option<DateRange> {
    let mut parsed: Vec<NaiveDateTime> = Vec::new();
    let mut non_empty = 0usize;

    for value in values.iter().flatten() {
        if value.is_empty() {
            continue;
        }
        non_empty += 1;
        if let Some(date) = parse_date(value) {
            parsed.push(date);
        }
    }

    if parsed.is_empty() {
        return None;
    }
    let ratio = parsed.len() as f64 / non_empty as f64;
    if ratio < DATE_RATIO_THRESHOLD {
        return None;
    }

    let min = *parsed.iter().min()?;
    let max = *parsed.iter().max()?;
    Some(DateRange {
        min,
        max,
        non_null_ratio: round4(ratio),
    })
}
