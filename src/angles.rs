use std::f64::consts::PI;

use crate::calendar::days_in_year;
use crate::types::DeclinationModel;

/// Axial tilt used by both sinusoidal declination variants, degrees.
pub const EARTH_AXIAL_TILT: f64 = 23.44;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Day on which the simple day-length sinusoid crosses zero.
pub const SIMPLE_EQUINOX_DAY: f64 = 81.0;
/// Spring equinox reference of the simplified elevation chart.
pub const SPRING_EQUINOX_DAY: f64 = 79.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Fractional year γ in radians. `day` may carry a fraction of a day.
pub fn fractional_year(day: f64, year: i32) -> f64 {
    2.0 * PI / days_in_year(year) as f64 * day
}

pub fn simple_declination(day_of_year: u32) -> f64 {
    deg_to_rad(EARTH_AXIAL_TILT)
        * (2.0 * PI / 365.0 * (day_of_year as f64 - SIMPLE_EQUINOX_DAY)).sin()
}

pub fn equinox_sinusoid_declination(day_of_year: u32) -> f64 {
    deg_to_rad(EARTH_AXIAL_TILT)
        * (2.0 * PI / 365.0 * (day_of_year as f64 - SPRING_EQUINOX_DAY)).sin()
}

/// NOAA declination in radians for fractional year `gamma`.
pub fn noaa_declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.001480 * (3.0 * gamma).sin()
}

/// Apparent minus mean solar time in minutes for fractional year `gamma`.
pub fn noaa_equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Solar declination in radians.
///
/// `year` only matters for [`DeclinationModel::NoaaFourier`], which spreads the
/// cycle over 365 or 366 days.
pub fn declination(day_of_year: u32, year: i32, model: DeclinationModel) -> f64 {
    match model {
        DeclinationModel::SimpleApprox => simple_declination(day_of_year),
        DeclinationModel::NoaaFourier => {
            noaa_declination(fractional_year(day_of_year as f64, year))
        }
    }
}

pub fn equation_of_time(day_of_year: u32, year: i32) -> f64 {
    noaa_equation_of_time(fractional_year(day_of_year as f64, year))
}

/// True solar time in minutes for a clock time given in minutes after local midnight.
pub fn true_solar_time(
    clock_minutes: f64,
    equation_of_time: f64,
    longitude: f64,
    timezone_offset_hours: f64,
) -> f64 {
    clock_minutes + equation_of_time + MINUTES_PER_DEGREE * longitude
        - 60.0 * timezone_offset_hours
}

/// Hour angle in degrees from true solar time in minutes.
pub fn hour_angle(true_solar_minutes: f64) -> f64 {
    true_solar_minutes / MINUTES_PER_DEGREE - 180.0
}

/// Elevation in degrees. Rounding can push the cosine a hair outside
/// `[-1, 1]`, so it is clamped before `acos`.
pub fn solar_elevation(latitude_rad: f64, declination_rad: f64, hour_angle_rad: f64) -> f64 {
    let cos_zenith = latitude_rad.sin() * declination_rad.sin()
        + latitude_rad.cos() * declination_rad.cos() * hour_angle_rad.cos();
    90.0 - rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}
