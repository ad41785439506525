use solar_daylight::angles::*;
use solar_daylight::types::DeclinationModel;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
}

// ── FractionalYear ──

#[test]
fn test_fractional_year_spans_full_circle() {
    assert_eq!(fractional_year(0.0, 2023), 0.0);
    assert_approx!(fractional_year(365.0, 2023), 2.0 * std::f64::consts::PI, 1e-12);
    assert_approx!(fractional_year(366.0, 2024), 2.0 * std::f64::consts::PI, 1e-12);
    assert!(fractional_year(100.0, 2024) < fractional_year(100.0, 2023));
}

// ── Declination ──

#[test]
fn test_noaa_declination_solstices() {
    let summer = rad_to_deg(declination(172, 2023, DeclinationModel::NoaaFourier));
    let winter = rad_to_deg(declination(355, 2023, DeclinationModel::NoaaFourier));
    assert_approx!(summer, 23.45, 0.1);
    assert_approx!(winter, -23.43, 0.1);
}

#[test]
fn test_simple_declination_solstices() {
    let summer = rad_to_deg(declination(172, 2023, DeclinationModel::SimpleApprox));
    let winter = rad_to_deg(declination(355, 2023, DeclinationModel::SimpleApprox));
    assert_approx!(summer, 23.44, 0.05);
    assert_approx!(winter, -23.44, 0.1);
}

#[test]
fn test_declination_near_zero_at_equinoxes() {
    for model in [DeclinationModel::SimpleApprox, DeclinationModel::NoaaFourier] {
        assert_approx!(rad_to_deg(declination(80, 2023, model)), 0.0, 0.5);
        assert_approx!(rad_to_deg(declination(266, 2023, model)), 0.0, 1.1);
    }
}

#[test]
fn test_declination_bounded_all_days() {
    for year in [2023, 2024] {
        for n in 1..=366 {
            for model in [DeclinationModel::SimpleApprox, DeclinationModel::NoaaFourier] {
                let decl = rad_to_deg(declination(n, year, model));
                assert!(decl.abs() <= 23.5, "day {} of {} ({}): {}", n, year, model, decl);
            }
        }
    }
}

#[test]
fn test_models_disagree_by_up_to_a_degree() {
    let mut max_diff: f64 = 0.0;
    for n in 1..=365 {
        let simple = declination(n, 2023, DeclinationModel::SimpleApprox);
        let noaa = declination(n, 2023, DeclinationModel::NoaaFourier);
        max_diff = max_diff.max(rad_to_deg((simple - noaa).abs()));
    }
    assert!(max_diff > 0.1 && max_diff < 2.0, "max_diff={}", max_diff);
}

#[test]
fn test_equinox_sinusoid_leads_simple_by_two_days() {
    for n in 3..=365 {
        assert_approx!(equinox_sinusoid_declination(n - 2), simple_declination(n), 1e-12);
    }
}

// ── EquationOfTime ──

#[test]
fn test_equation_of_time_extremes() {
    assert_approx!(equation_of_time(44, 2023), -14.26, 0.05);
    assert_approx!(equation_of_time(307, 2023), 16.34, 0.05);
    assert_approx!(equation_of_time(80, 2024), -7.6, 0.1);
}

#[test]
fn test_equation_of_time_bounded() {
    for n in 1..=366 {
        let eot = equation_of_time(n, 2024);
        assert!((-15.0..=17.0).contains(&eot), "Day {}: {}", n, eot);
    }
}

// ── TrueSolarTime / HourAngle ──

#[test]
fn test_true_solar_time_corrections() {
    assert_approx!(true_solar_time(720.0, 0.0, 0.0, 0.0), 720.0, 1e-12);
    // 15° east in UTC+1 is on its zone meridian
    assert_approx!(true_solar_time(720.0, 0.0, 15.0, 1.0), 720.0, 1e-12);
    assert_approx!(true_solar_time(720.0, -7.5, -0.1, 1.0), 652.1, 1e-9);
}

#[test]
fn test_hour_angle_known_values() {
    assert_approx!(hour_angle(720.0), 0.0, 1e-12);
    assert_approx!(hour_angle(780.0), 15.0, 1e-12);
    assert_approx!(hour_angle(0.0), -180.0, 1e-12);
    assert!(hour_angle(600.0) < 0.0);
}

// ── SolarElevation ──

#[test]
fn test_solar_elevation_overhead_and_antipode() {
    assert_approx!(solar_elevation(0.0, 0.0, 0.0), 90.0, 1e-6);
    assert_approx!(solar_elevation(0.0, 0.0, std::f64::consts::PI), -90.0, 1e-6);
}

#[test]
fn test_solar_elevation_noon_equals_colatitude_plus_declination() {
    let lat = deg_to_rad(40.0);
    let decl = deg_to_rad(10.0);
    assert_approx!(solar_elevation(lat, decl, 0.0), 60.0, 1e-9);
}

#[test]
fn test_solar_elevation_always_in_range() {
    for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
        for decl in [-23.44, 0.0, 23.44] {
            for ha in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let e = solar_elevation(deg_to_rad(lat), deg_to_rad(decl), deg_to_rad(ha));
                assert!((-90.0..=90.0).contains(&e), "{} {} {}: {}", lat, decl, ha, e);
            }
        }
    }
}
