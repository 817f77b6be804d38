//! Calendar helpers: day stems and date parsing
//!
//! Day stems count elapsed days from 0001-01-01 on the proleptic Gregorian
//! calendar, with the epoch day taken as Jia (stem 0).

use chrono::{Datelike, NaiveDate};

use super::error::DivinationError;
use super::symbols::Stem;

/// Days elapsed since 0001-01-01
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - 1
}

/// Heavenly stem of a calendar day
pub fn day_stem(date: NaiveDate) -> Stem {
    Stem::cyclic(days_since_epoch(date))
}

/// Validates a year/month/day triple into a date
pub fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DivinationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DivinationError::InvalidInput(format!("{year}-{month}-{day} is not a calendar date"))
    })
}

/// Parses a `Y-M-D` date string
///
/// Whitespace around each part is ignored. The result is not checked
/// against the calendar; pass it through [`checked_date`] for that.
pub fn parse_date(input: &str) -> Result<(i32, u32, u32), DivinationError> {
    let malformed =
        || DivinationError::InvalidInput(format!("date '{input}' must use the 'Y-M-D' format"));

    let parts: Vec<&str> = input.trim().split('-').map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(malformed());
    };

    let year = year.parse::<i32>().map_err(|_| malformed())?;
    let month = month.parse::<u32>().map_err(|_| malformed())?;
    let day = day.parse::<u32>().map_err(|_| malformed())?;
    Ok((year, month, day))
}
