//! Solar elevation curves over one local day.

use std::f64::consts::PI;

use log::debug;

use crate::angles::{
    deg_to_rad, equinox_sinusoid_declination, fractional_year, hour_angle, noaa_declination,
    noaa_equation_of_time, solar_elevation, true_solar_time,
};
use crate::error::{Error, Result};
use crate::types::{
    CalendarDate, ElevationModel, ElevationSample, ElevationSeries, GeoLocation,
    HorizonCrossings, SeriesConfig,
};

/// Samples per day, one per minute.
pub const RESOLUTION: usize = 1440;
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Largest timezone offset in use anywhere, hours.
pub const MAX_TIMEZONE_OFFSET: f64 = 14.0;

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (u32, u32)) -> u32 {
    time.0 * 60 + time.1
}

fn noaa_sample(
    latitude_rad: f64,
    longitude_deg: f64,
    timezone_offset_hours: f64,
    date: CalendarDate,
    fraction: f64,
) -> ElevationSample {
    let fractional_day = (date.day_of_year() - 1) as f64 + fraction;
    let gamma = fractional_year(fractional_day, date.year());
    let declination = noaa_declination(gamma);
    let eot = noaa_equation_of_time(gamma);
    let tst = true_solar_time(
        fraction * MINUTES_PER_DAY,
        eot,
        longitude_deg,
        timezone_offset_hours,
    );
    let ha = deg_to_rad(hour_angle(tst));
    ElevationSample {
        time_of_day: fraction * 24.0,
        elevation_deg: solar_elevation(latitude_rad, declination, ha),
    }
}

fn sinusoid_sample(latitude_rad: f64, declination_rad: f64, fraction: f64) -> ElevationSample {
    let time_of_day = fraction * 24.0;
    let ha = (2.0 * PI / 24.0) * (time_of_day - 12.0);
    ElevationSample {
        time_of_day,
        elevation_deg: solar_elevation(latitude_rad, declination_rad, ha),
    }
}

#[cfg(feature = "parallel")]
fn collect_samples<F>(resolution: usize, sample_fn: F) -> Vec<ElevationSample>
where
    F: Fn(f64) -> ElevationSample + Send + Sync,
{
    use rayon::prelude::*;

    (0..resolution)
        .into_par_iter()
        .map(|i| sample_fn(i as f64 / resolution as f64))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_samples<F>(resolution: usize, sample_fn: F) -> Vec<ElevationSample>
where
    F: Fn(f64) -> ElevationSample,
{
    (0..resolution)
        .map(|i| sample_fn(i as f64 / resolution as f64))
        .collect()
}

/// `resolution` must be non-zero.
fn build_series(
    latitude_deg: f64,
    longitude_deg: f64,
    timezone_offset_hours: f64,
    date: CalendarDate,
    config: &SeriesConfig,
) -> ElevationSeries {
    let latitude_rad = deg_to_rad(latitude_deg);
    let samples = match config.model {
        ElevationModel::NoaaFourier => collect_samples(config.resolution, |fraction| {
            noaa_sample(
                latitude_rad,
                longitude_deg,
                timezone_offset_hours,
                date,
                fraction,
            )
        }),
        ElevationModel::SolarNoonSinusoid => {
            let declination = equinox_sinusoid_declination(date.day_of_year());
            collect_samples(config.resolution, |fraction| {
                sinusoid_sample(latitude_rad, declination, fraction)
            })
        }
    };
    debug!(
        "generated {} elevation samples for {} at ({:.2}, {:.2}) UTC{:+} using {:?}",
        samples.len(),
        date,
        latitude_deg,
        longitude_deg,
        timezone_offset_hours,
        config.model
    );
    ElevationSeries {
        date,
        model: config.model,
        samples,
    }
}

/// One-per-minute NOAA elevation curve for a local day. Inputs are not validated.
pub fn solar_elevation_series(
    latitude_deg: f64,
    longitude_deg: f64,
    timezone_offset_hours: f64,
    date: CalendarDate,
) -> ElevationSeries {
    build_series(
        latitude_deg,
        longitude_deg,
        timezone_offset_hours,
        date,
        &SeriesConfig::default(),
    )
}

/// One-per-minute curve from the solar-noon sinusoid strategy.
pub fn simple_elevation_series(latitude_deg: f64, date: CalendarDate) -> ElevationSeries {
    let config = SeriesConfig {
        model: ElevationModel::SolarNoonSinusoid,
        ..SeriesConfig::default()
    };
    build_series(latitude_deg, 0.0, 0.0, date, &config)
}

/// Checked entry point: validates the offset and resolution before sampling.
pub fn elevation_series(
    location: &GeoLocation,
    timezone_offset_hours: f64,
    date: CalendarDate,
    config: &SeriesConfig,
) -> Result<ElevationSeries> {
    if !timezone_offset_hours.is_finite() || timezone_offset_hours.abs() > MAX_TIMEZONE_OFFSET {
        return Err(Error::InvalidTimezoneOffset {
            value: timezone_offset_hours,
        });
    }
    if config.resolution == 0 {
        return Err(Error::InvalidResolution);
    }
    Ok(build_series(
        location.latitude(),
        location.longitude(),
        timezone_offset_hours,
        date,
        config,
    ))
}

fn interpolate_linear(v1: f64, v2: f64, fraction: f64) -> f64 {
    v1 + fraction * (v2 - v1)
}

/// Time at which the segment from `a` to `b` crosses zero elevation.
fn zero_crossing(a: &ElevationSample, b: &ElevationSample) -> f64 {
    let fraction = -a.elevation_deg / (b.elevation_deg - a.elevation_deg);
    interpolate_linear(a.time_of_day, b.time_of_day, fraction)
}

impl ElevationSeries {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn model(&self) -> ElevationModel {
        self.model
    }

    pub fn samples(&self) -> &[ElevationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElevationSample> {
        self.samples.iter()
    }

    /// Hours between consecutive samples.
    pub fn step_hours(&self) -> f64 {
        24.0 / self.samples.len() as f64
    }

    /// `(time_of_day, elevation_deg)` pairs, ready for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| (s.time_of_day, s.elevation_deg))
            .collect()
    }

    /// Sample closest to `time_of_day`, or `None` outside `[0, 24]`.
    pub fn nearest(&self, time_of_day: f64) -> Option<&ElevationSample> {
        if self.samples.is_empty() || !(0.0..=24.0).contains(&time_of_day) {
            return None;
        }
        let idx = (time_of_day / self.step_hours()).round() as usize;
        self.samples.get(idx.min(self.samples.len() - 1))
    }

    /// Elevation at `time_of_day`, linearly interpolated between neighbouring
    /// samples. Past the last sample the last value is held.
    pub fn elevation_at(&self, time_of_day: f64) -> Option<f64> {
        if self.samples.is_empty() || !(0.0..24.0).contains(&time_of_day) {
            return None;
        }
        let step = self.step_hours();
        let idx_before = ((time_of_day / step) as usize).min(self.samples.len() - 1);
        let before = &self.samples[idx_before];
        match self.samples.get(idx_before + 1) {
            None => Some(before.elevation_deg),
            Some(after) => {
                let fraction = (time_of_day - before.time_of_day) / step;
                Some(interpolate_linear(
                    before.elevation_deg,
                    after.elevation_deg,
                    fraction,
                ))
            }
        }
    }

    /// Highest sample of the day.
    pub fn peak(&self) -> Option<&ElevationSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.elevation_deg.total_cmp(&b.elevation_deg))
    }

    /// Time with the sun above the horizon, at the series' sampling resolution.
    pub fn daylight_hours(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let above = self.samples.iter().filter(|s| s.elevation_deg > 0.0).count();
        24.0 * above as f64 / self.samples.len() as f64
    }

    /// First rising and first setting crossing of the horizon within the day.
    pub fn horizon_crossings(&self) -> HorizonCrossings {
        let mut sunrise = None;
        let mut sunset = None;
        for pair in self.samples.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if sunrise.is_none() && a.elevation_deg <= 0.0 && b.elevation_deg > 0.0 {
                sunrise = Some(zero_crossing(a, b));
            } else if sunset.is_none() && a.elevation_deg > 0.0 && b.elevation_deg <= 0.0 {
                sunset = Some(zero_crossing(a, b));
            }
        }
        HorizonCrossings { sunrise, sunset }
    }
}

impl<'a> IntoIterator for &'a ElevationSeries {
    type Item = &'a ElevationSample;
    type IntoIter = std::slice::Iter<'a, ElevationSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
