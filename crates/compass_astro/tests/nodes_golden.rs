//! Golden values for node placement against independently computed charts.

use chrono::{TimeZone, Utc};
use compass_astro::{
    GeoLocation, HouseSystem, NodeMode, ZodiacSign, compute_nodes, normalize_360, opposite_house,
};

fn angular_diff(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    d.min(360.0 - d)
}

#[test]
fn paris_june_2000() {
    // 2000-06-15 14:30 CEST = 12:30 UTC.
    let utc = Utc.with_ymd_and_hms(2000, 6, 15, 12, 30, 0).unwrap();
    let chart = compute_nodes(
        &utc,
        &GeoLocation::new(48.8566, 2.3522),
        HouseSystem::Placidus,
        NodeMode::Mean,
    )
    .unwrap();

    assert!((chart.jd_ut - 2_451_711.020_833_3).abs() < 1e-6);
    assert!(angular_diff(chart.north.longitude_deg, 116.2531) < 1e-3);
    assert_eq!(chart.north.sign.sign, ZodiacSign::Cancer);
    assert_eq!(chart.north.house, 10);
    assert_eq!(chart.south.sign.sign, ZodiacSign::Capricorn);
    assert_eq!(chart.south.house, 4);
    assert_eq!(chart.system, HouseSystem::Placidus);

    let expected = [
        182.875, 207.649, 238.1169, 273.622, 308.8193, 338.7353, 2.875, 27.649, 58.1169, 93.622,
        128.8193, 158.7353,
    ];
    for (i, (got, want)) in chart.cusps.as_array().iter().zip(expected).enumerate() {
        assert!(angular_diff(*got, want) < 0.02, "cusp {}: {got} vs {want}", i + 1);
    }
}

#[test]
fn paris_true_node() {
    let utc = Utc.with_ymd_and_hms(2000, 6, 15, 12, 30, 0).unwrap();
    let chart = compute_nodes(
        &utc,
        &GeoLocation::new(48.8566, 2.3522),
        HouseSystem::Placidus,
        NodeMode::True,
    )
    .unwrap();
    assert!(angular_diff(chart.north.longitude_deg, 114.628) < 1e-3);
    assert_eq!(chart.north.sign.sign, ZodiacSign::Cancer);
    assert_eq!(chart.north.house, 10);
}

#[test]
fn london_new_year_1990() {
    let utc = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let chart = compute_nodes(
        &utc,
        &GeoLocation::new(51.5074, -0.1278),
        HouseSystem::Placidus,
        NodeMode::Mean,
    )
    .unwrap();
    assert!(angular_diff(chart.north.longitude_deg, 318.458) < 1e-3);
    assert_eq!(chart.north.sign.sign, ZodiacSign::Aquarius);
    assert_eq!(chart.north.house, 5);
    assert_eq!(chart.south.sign.sign, ZodiacSign::Leo);
    assert_eq!(chart.south.house, 11);
    assert!(angular_diff(chart.ascendant_deg, 187.2341) < 0.02);
    assert!(angular_diff(chart.mc_deg, 99.428) < 0.02);
}

#[test]
fn new_york_october_1985() {
    let utc = Utc.with_ymd_and_hms(1985, 10, 26, 8, 0, 0).unwrap();
    let chart = compute_nodes(
        &utc,
        &GeoLocation::new(40.7128, -74.006),
        HouseSystem::Placidus,
        NodeMode::Mean,
    )
    .unwrap();
    assert!(angular_diff(chart.north.longitude_deg, 39.354) < 1e-3);
    assert_eq!(chart.north.sign.sign, ZodiacSign::Taurus);
    assert_eq!(chart.north.house, 8);
    assert_eq!(chart.south.sign.sign, ZodiacSign::Scorpio);
    assert_eq!(chart.south.house, 2);
}

#[test]
fn axis_is_always_opposed() {
    let loc = GeoLocation::new(-33.8688, 151.2093);
    for year in (1900..2100).step_by(7) {
        let utc = Utc.with_ymd_and_hms(year, 3, 10, 6, 0, 0).unwrap();
        let chart = compute_nodes(&utc, &loc, HouseSystem::Placidus, NodeMode::True).unwrap();
        assert_eq!(chart.south.sign.sign, chart.north.sign.sign.opposite(), "{year}");
        assert_eq!(chart.south.house, opposite_house(chart.north.house), "{year}");
        assert!((1..=12).contains(&chart.north.house));
    }
}

#[test]
fn polar_birth_falls_back_to_porphyry() {
    // Longyearbyen, inside the Arctic circle.
    let utc = Utc.with_ymd_and_hms(2010, 12, 21, 12, 0, 0).unwrap();
    let chart = compute_nodes(
        &utc,
        &GeoLocation::new(78.2232, 15.6267),
        HouseSystem::Placidus,
        NodeMode::Mean,
    )
    .unwrap();
    assert_eq!(chart.system, HouseSystem::Porphyry);
    assert!((1..=12).contains(&chart.north.house));
    assert_eq!(chart.south.house, opposite_house(chart.north.house));
}
