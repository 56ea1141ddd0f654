// Calendar arithmetic for week identifiers.
//
// A week identifier is a token of the form `YYYY-Wnn` (zero-padded, e.g.
// `2025-W07`). Week 1 is anchored to Jan 1 of the year, not to the ISO-8601
// Thursday rule; identifiers already in the store depend on this numbering.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeekIdError {
    #[error("malformed week identifier: {0}")]
    Malformed(String),
}

/// The five schedulable weekdays. Lowercase on the wire, which is also the
/// map-key form used inside a week schedule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weekday: {0}")]
pub struct ParseWeekdayError(String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            other => Err(ParseWeekdayError(other.to_string())),
        }
    }
}

/// Inclusive 7-day range named by a week identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One entry of the week selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOption {
    pub id: String,
    pub display: String,
    pub is_current: bool,
}

pub fn week_id_of(date: NaiveDate) -> String {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .expect("january 1st exists for every representable year");
    // 0 = Sunday .. 6 = Saturday
    let first_dow = i64::from(jan1.weekday().num_days_from_sunday());
    let days_since = (date - jan1).num_days();
    let week_num = (days_since + first_dow + 1 + 6) / 7;
    format!("{}-W{:02}", date.year(), week_num)
}

pub fn current_week_id() -> String {
    week_id_of(Local::now().date_naive())
}

pub fn is_current_week(week_id: &str) -> bool {
    week_id == current_week_id()
}

/// Inverse of [`week_id_of`]: the 7-day range the identifier names.
pub fn week_range_of(week_id: &str) -> Result<WeekRange, WeekIdError> {
    let malformed = || WeekIdError::Malformed(week_id.to_string());

    let (year_raw, week_raw) = week_id.split_once("-W").ok_or_else(malformed)?;
    let year: i32 = year_raw.parse().map_err(|_| malformed())?;
    let week_num: u32 = week_raw.parse().map_err(|_| malformed())?;
    if week_num == 0 {
        return Err(malformed());
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(malformed)?;
    let first_dow = i64::from(jan1.weekday().num_days_from_sunday());
    // When the year starts on a Sunday the week already begins on Jan 1.
    let day_offset = if first_dow == 0 { 1 } else { first_dow };
    let days_to_start = (i64::from(week_num) - 1) * 7 - (day_offset - 1);

    let start = jan1
        .checked_add_signed(Duration::days(days_to_start))
        .ok_or_else(malformed)?;
    let end = start
        .checked_add_signed(Duration::days(6))
        .ok_or_else(malformed)?;
    Ok(WeekRange { start, end })
}

/// Shape test for week-identifier map keys: `YYYY-Wnn`.
pub fn is_week_id(token: &str) -> bool {
    match token.split_once("-W") {
        Some((year, week)) => {
            year.len() == 4
                && year.bytes().all(|b| b.is_ascii_digit())
                && !week.is_empty()
                && week.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Identifiers for the current week and the next `count` weeks, in order.
pub fn next_week_ids(count: usize) -> Vec<String> {
    let today = Local::now().date_naive();
    (0..=count as i64)
        .map(|offset| week_id_of(today + Duration::days(7 * offset)))
        .collect()
}

/// Human form of a week identifier, e.g. `"May 12 - 18, 2025"`. The second
/// month only appears when the range crosses a month boundary.
pub fn format_week_display(week_id: &str) -> Result<String, WeekIdError> {
    let WeekRange { start, end } = week_range_of(week_id)?;
    let start_month = start.format("%b");
    let end_month = end.format("%b");
    if start.month() == end.month() {
        Ok(format!(
            "{start_month} {} - {}, {}",
            start.day(),
            end.day(),
            start.year()
        ))
    } else {
        Ok(format!(
            "{start_month} {} - {end_month} {}, {}",
            start.day(),
            end.day(),
            start.year()
        ))
    }
}

/// The five weekday dates of a week, Monday slot first.
pub fn week_dates(week_id: &str) -> Result<Vec<NaiveDate>, WeekIdError> {
    let range = week_range_of(week_id)?;
    Ok((0..Weekday::ALL.len() as i64)
        .map(|offset| range.start + Duration::days(offset))
        .collect())
}

/// Selector options for the current week and the next `count` weeks.
pub fn week_options(count: usize) -> Vec<WeekOption> {
    let current = current_week_id();
    next_week_ids(count)
        .into_iter()
        .map(|id| {
            let display = format_week_display(&id).unwrap_or_else(|_| id.clone());
            let is_current = id == current;
            let display = if is_current {
                format!("Current Week ({display})")
            } else {
                display
            };
            WeekOption {
                id,
                display,
                is_current,
            }
        })
        .collect()
}
