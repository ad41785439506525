use chrono::{Datelike, NaiveDate};
use log::trace;

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// 1-based ordinal of `date` within its year.
pub fn day_of_year<D: Datelike>(date: &D) -> u32 {
    let dim = days_in_months(date.year());
    let preceding: u32 = dim[..date.month0() as usize].iter().sum();
    preceding + date.day()
}

/// Inverse of [`day_of_year`]. Returns `None` when the day falls outside the year.
pub fn month_day(year: i32, day_of_year: u32) -> Option<(u32, u32)> {
    if day_of_year == 0 {
        return None;
    }
    let mut remaining = day_of_year;
    for (month_idx, &dim) in days_in_months(year).iter().enumerate() {
        if remaining <= dim {
            return Some((month_idx as u32 + 1, remaining));
        }
        remaining -= dim;
    }
    None
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| {
        trace!("rejected date input {:?}: {}", input, source);
        Error::InvalidDate {
            input: trimmed.to_string(),
            source,
        }
    })
}
