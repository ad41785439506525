//! Daylight duration for a latitude and date.
//!
//! ```bash
//! daylight --latitude 51.5 --date 2024-06-21
//! daylight -l -33.9 -m simple
//! RUST_LOG=debug daylight -l 90 -d 2024-03-20
//! ```
//!
//! Exits 1 on a malformed date or any other argument error.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::debug;
use tracing_subscriber::EnvFilter;

use solar_daylight::{day_length_hours, parse_date, CalendarDate, DeclinationModel, GeoLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    /// Sinusoidal declination, fixed 365-day year
    Simple,
    /// NOAA Fourier-series declination, leap-year aware
    Noaa,
}

impl From<ModelArg> for DeclinationModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Simple => DeclinationModel::SimpleApprox,
            ModelArg::Noaa => DeclinationModel::NoaaFourier,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "daylight", version, about = "Hours of daylight for a latitude and date")]
struct Args {
    /// Latitude in decimal degrees, north positive
    #[arg(
        short,
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_latitude
    )]
    latitude: f64,

    /// Date as YYYY-MM-DD [default: today]
    #[arg(short, long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Declination model
    #[arg(short, long, value_enum, default_value_t = ModelArg::Noaa)]
    model: ModelArg,
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    GeoLocation::new(value, 0.0)
        .map(|location| location.latitude())
        .map_err(|e| e.to_string())
}

fn report(date: NaiveDate, latitude: f64, model: DeclinationModel) -> String {
    let calendar_date = CalendarDate::from(date);
    let hours = day_length_hours(
        latitude,
        calendar_date.day_of_year(),
        calendar_date.year(),
        model,
    );
    debug!(
        "day {} of {} at latitude {} with {} model: {}h",
        calendar_date.day_of_year(),
        calendar_date.year(),
        latitude,
        model,
        hours
    );
    format!(
        "{}  |  Latitude: {:.2} deg  |  Daylight: {:.2} hours",
        date.format("%Y-%m-%d"),
        latitude,
        hours
    )
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    println!("{}", report(date, args.latitude, args.model.into()));
    ExitCode::SUCCESS
}
