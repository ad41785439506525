//! Errors raised by the checked entry points.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid timezone offset {value}h (must be between -14h and +14h)")]
    InvalidTimezoneOffset { value: f64 },

    #[error("day {day_of_year} is outside year {year}")]
    InvalidDayOfYear { year: i32, day_of_year: u32 },

    #[error("invalid date '{input}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("series resolution must be at least one sample per day")]
    InvalidResolution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::InvalidLatitude { value: 91.5 };
        assert!(err.to_string().contains("91.5"));

        let err = Error::InvalidDayOfYear {
            year: 2023,
            day_of_year: 366,
        };
        assert_eq!(err.to_string(), "day 366 is outside year 2023");

        let err = Error::InvalidCalendarDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "2023-02-29 is not a calendar date");
    }

    #[test]
    fn date_error_keeps_parse_source() {
        let source = chrono::NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d").unwrap_err();
        let err = Error::InvalidDate {
            input: "2024-13-01".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid date '2024-13-01'"));
    }
}
