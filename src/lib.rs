//! Daylight duration and solar elevation curves for a terrestrial observer.

pub mod angles;
pub mod calendar;
pub mod day_length;
pub mod elevation;
pub mod error;
pub mod types;

pub use angles::{
    declination, deg_to_rad, equation_of_time, equinox_sinusoid_declination, fractional_year,
    hour_angle, noaa_declination, noaa_equation_of_time, rad_to_deg,
    simple_declination, solar_elevation, true_solar_time, EARTH_AXIAL_TILT,
};

pub use calendar::{day_of_year, days_in_months, days_in_year, leap_year, month_day, parse_date};

pub use day_length::{
    annual_day_lengths, day_length_from_declination, day_length_hours, day_length_with_horizon,
    daylight_window, POLAR_EQUINOX_TOLERANCE, STANDARD_HORIZON,
};

pub use elevation::{
    elevation_series, minutes_to_time, simple_elevation_series, solar_elevation_series,
    time_to_minutes, RESOLUTION,
};

pub use error::{Error, Result};

pub use types::{
    CalendarDate, DayLength, DaylightWindow, DeclinationModel, ElevationModel, ElevationSample,
    ElevationSeries, GeoLocation, HorizonCrossings, SeriesConfig,
};
