//! Daylight duration from latitude and declination.

use std::f64::consts::PI;

use log::{debug, trace};

use crate::angles::{self, deg_to_rad};
use crate::calendar::days_in_year;
use crate::types::{DayLength, DaylightWindow, DeclinationModel};

/// Declinations closer to zero than this (degrees) count as the equinox at a pole.
pub const POLAR_EQUINOX_TOLERANCE: f64 = 0.35;

/// Sunrise/sunset altitude accounting for refraction and the solar semi-diameter, degrees.
pub const STANDARD_HORIZON: f64 = -0.833;

pub const POLAR_EQUINOX_HOURS: f64 = 12.0;

/// Hours of daylight for a sunset hour-angle cosine `x`.
fn hours_from_cos_hour_angle(x: f64) -> f64 {
    if x.is_nan() {
        trace!("degenerate hour angle at pole, using {POLAR_EQUINOX_HOURS}h");
        POLAR_EQUINOX_HOURS
    } else if x < -1.0 {
        trace!("polar day (x = {x})");
        24.0
    } else if x > 1.0 {
        trace!("polar night (x = {x})");
        0.0
    } else {
        (24.0 / PI) * x.acos()
    }
}

fn at_pole(latitude_deg: f64) -> bool {
    latitude_deg.abs() == 90.0
}

/// At a pole a near-zero declination is the equinox instant.
fn snap_polar_declination(declination_rad: f64) -> f64 {
    if declination_rad.abs() < deg_to_rad(POLAR_EQUINOX_TOLERANCE) {
        0.0
    } else {
        declination_rad
    }
}

/// Daylight hours from latitude and declination, both in radians.
pub fn day_length_from_declination(latitude_rad: f64, declination_rad: f64) -> f64 {
    hours_from_cos_hour_angle(-latitude_rad.tan() * declination_rad.tan())
}

/// Daylight hours in `[0, 24]` for a latitude in degrees.
///
/// At an exact pole the latitude tangent is taken as signed infinity so that
/// the polar branches are exact; see [`POLAR_EQUINOX_TOLERANCE`].
///
/// Only `NoaaFourier` lands inside that band on days 80 and 266 of every
/// year. `SimpleApprox` crosses zero on day 81 and is about −1° on day 266,
/// so the north pole reads 0.0 there.
pub fn day_length_hours(
    latitude_deg: f64,
    day_of_year: u32,
    year: i32,
    model: DeclinationModel,
) -> f64 {
    let declination = angles::declination(day_of_year, year, model);
    if at_pole(latitude_deg) {
        let tan_lat = f64::INFINITY.copysign(latitude_deg);
        let declination = snap_polar_declination(declination);
        hours_from_cos_hour_angle(-tan_lat * declination.tan())
    } else {
        day_length_from_declination(deg_to_rad(latitude_deg), declination)
    }
}

/// Daylight hours measured against a horizon altitude other than zero,
/// e.g. [`STANDARD_HORIZON`] for almanac sunrise and sunset.
pub fn day_length_with_horizon(
    latitude_deg: f64,
    day_of_year: u32,
    year: i32,
    model: DeclinationModel,
    horizon_deg: f64,
) -> f64 {
    let declination = angles::declination(day_of_year, year, model);
    let (sin_lat, cos_lat, declination) = if at_pole(latitude_deg) {
        (latitude_deg.signum(), 0.0, snap_polar_declination(declination))
    } else {
        let lat = deg_to_rad(latitude_deg);
        (lat.sin(), lat.cos(), declination)
    };
    let x = (deg_to_rad(horizon_deg).sin() - sin_lat * declination.sin())
        / (cos_lat * declination.cos());
    hours_from_cos_hour_angle(x)
}

pub fn daylight_window(
    latitude_deg: f64,
    day_of_year: u32,
    year: i32,
    model: DeclinationModel,
) -> DaylightWindow {
    let half = day_length_hours(latitude_deg, day_of_year, year, model) / 2.0;
    DaylightWindow {
        sunrise: 12.0 - half,
        sunset: 12.0 + half,
    }
}

/// Day length for every day of `year`, in day order.
pub fn annual_day_lengths(latitude_deg: f64, year: i32, model: DeclinationModel) -> Vec<DayLength> {
    let days = days_in_year(year);
    let table: Vec<DayLength> = (1..=days)
        .map(|day_of_year| DayLength {
            day_of_year,
            hours: day_length_hours(latitude_deg, day_of_year, year, model),
        })
        .collect();
    debug!(
        "computed {} day lengths for latitude {:.2} in {} ({})",
        table.len(),
        latitude_deg,
        year,
        model
    );
    table
}
