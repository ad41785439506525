use chrono::{Offset, TimeZone};
use chrono_tz::Europe::London;

use solar_daylight::{
    daylight_window, elevation_series, minutes_to_time, CalendarDate, DeclinationModel,
    ElevationModel, GeoLocation, SeriesConfig,
};

fn hhmm(hours: f64) -> String {
    let (h, m) = minutes_to_time((hours * 60.0).round() as u32);
    format!("{:02}:{:02}", h, m)
}

fn main() -> solar_daylight::Result<()> {
    let location = GeoLocation::new(51.5, -0.1)?;
    let date = CalendarDate::from_ymd(2024, 6, 21)?;

    let offset = London
        .with_ymd_and_hms(2024, 6, 21, 12, 0, 0)
        .single()
        .map(|dt| dt.offset().fix().local_minus_utc() as f64 / 3600.0)
        .unwrap_or(0.0);

    println!("=== Solar Elevation Example ===");
    println!(
        "Location: London ({:.1}°N, {:.1}°W), UTC{:+}",
        location.latitude(),
        -location.longitude(),
        offset
    );
    println!("Date: {}", date);
    println!();

    for model in [ElevationModel::NoaaFourier, ElevationModel::SolarNoonSinusoid] {
        let config = SeriesConfig {
            model,
            ..SeriesConfig::default()
        };
        let series = elevation_series(&location, offset, date, &config)?;
        println!("--- {:?} ---", model);
        if let Some(peak) = series.peak() {
            println!("Peak: {:.2}° at {}", peak.elevation_deg, hhmm(peak.time_of_day));
        }
        let crossings = series.horizon_crossings();
        if let (Some(rise), Some(set)) = (crossings.sunrise, crossings.sunset) {
            println!("Sunrise: {}  Sunset: {}", hhmm(rise), hhmm(set));
        }
        println!("Sun above horizon: {:.2} hours", series.daylight_hours());
        for hour in (0..24).step_by(3) {
            if let Some(e) = series.elevation_at(hour as f64) {
                println!("  {:02}:00  {:>7.2}°", hour, e);
            }
        }
        println!();
    }

    let window = daylight_window(
        location.latitude(),
        date.day_of_year(),
        date.year(),
        DeclinationModel::NoaaFourier,
    );
    println!(
        "Day-length window (solar time): {} - {}",
        hhmm(window.sunrise),
        hhmm(window.sunset)
    );
    Ok(())
}
