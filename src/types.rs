use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{Error, Result};

/// Declination strategy. Always passed explicitly; the two are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclinationModel {
    /// `23.44° · sin(2π/365 · (n − 81))` on a fixed 365-day cycle.
    SimpleApprox,
    /// NOAA Fourier series over the fractional year, leap-year aware.
    NoaaFourier,
}

impl fmt::Display for DeclinationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimpleApprox => f.write_str("simple"),
            Self::NoaaFourier => f.write_str("noaa"),
        }
    }
}

/// Strategy used to build an elevation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElevationModel {
    /// NOAA declination with equation of time, longitude and timezone correction.
    #[default]
    NoaaFourier,
    /// Hour angle measured from 12:00 and a day-79 declination sinusoid.
    /// Ignores longitude, timezone and the equation of time.
    SolarNoonSinusoid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoLocation"))]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

/// A Gregorian date expressed as year plus 1-based day of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendarDate"))]
pub struct CalendarDate {
    year: i32,
    day_of_year: u32,
}

impl CalendarDate {
    pub fn new(year: i32, day_of_year: u32) -> Result<Self> {
        if day_of_year == 0 || day_of_year > calendar::days_in_year(year) {
            return Err(Error::InvalidDayOfYear { year, day_of_year });
        }
        Ok(Self { year, day_of_year })
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(Error::InvalidCalendarDate { year, month, day })?;
        Ok(Self::from(date))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    pub fn days_in_year(&self) -> u32 {
        calendar::days_in_year(self.year)
    }

    /// `(month, day)` of this date.
    pub fn month_day(&self) -> (u32, u32) {
        calendar::month_day(self.year, self.day_of_year).unwrap_or((12, 31))
    }

    /// `None` only for years outside chrono's supported range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, self.day_of_year)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: chrono::Datelike::year(&date),
            day_of_year: calendar::day_of_year(&date),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        calendar::parse_date(s).map(Self::from)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGeoLocation {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = Error;

    fn try_from(raw: RawGeoLocation) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    day_of_year: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = Error;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        Self::new(raw.year, raw.day_of_year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (month, day) = self.month_day();
        write!(f, "{:04}-{:02}-{:02}", self.year, month, day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElevationSample {
    /// Clock hours in `[0, 24)`.
    pub time_of_day: f64,
    pub elevation_deg: f64,
}

/// One local day of elevation samples, ascending by `time_of_day`.
///
/// Built only by the generators in [`crate::elevation`]; there is no way to
/// edit samples in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ElevationSeries {
    pub(crate) date: CalendarDate,
    pub(crate) model: ElevationModel,
    pub(crate) samples: Vec<ElevationSample>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesConfig {
    /// Samples per 24 hours.
    pub resolution: usize,
    pub model: ElevationModel,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            resolution: crate::elevation::RESOLUTION,
            model: ElevationModel::NoaaFourier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayLength {
    pub day_of_year: u32,
    pub hours: f64,
}

/// Sunrise and sunset in local solar hours, symmetric around 12:00.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaylightWindow {
    pub sunrise: f64,
    pub sunset: f64,
}

/// Horizon crossings read off an elevation series, in clock hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonCrossings {
    pub sunrise: Option<f64>,
    pub sunset: Option<f64>,
}
