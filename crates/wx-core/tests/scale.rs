// File: crates/wx-core/tests/scale.rs
// Purpose: Axis solving (bounds, rain multiplier) and the pixel transforms built on it.

use chrono::{TimeZone, Utc};
use wx_core::geometry::CanvasGeometry;
use wx_core::axis::precipitation_ticks;
use wx_core::scale::{solve_multiplier, RAIN_MULTIPLIERS};
use wx_core::{CoordinateMapper, ForecastPoint, InstantDetails, NextHourSummary, Scale};

fn point(h: u32, temp: f64, rain_max: f64) -> ForecastPoint {
    ForecastPoint::new(
        Utc.with_ymd_and_hms(2024, 6, 25, h, 0, 0).unwrap(),
        InstantDetails::new(temp, 2.0, 90.0),
        NextHourSummary::dry("rain").with_precipitation(0.0, rain_max / 2.0, rain_max),
    )
}

#[test]
fn bounds_are_floor_and_ceil_of_extremes() {
    let pts = vec![point(0, 12.4, 0.0), point(1, 17.2, 0.0), point(2, 14.0, 0.0)];
    let s = Scale::solve(&pts);
    assert_eq!((s.min_temp, s.max_temp, s.temp_range()), (12, 18, 6));
}

#[test]
fn multiplier_is_largest_that_fits() {
    // range 6, 2 mm: 2*2 = 4 fits, 2*5 = 10 does not
    let pts = vec![point(0, 10.0, 2.0), point(1, 16.0, 0.0)];
    assert_eq!(Scale::solve(&pts).multiplier, 2.0);

    assert_eq!(solve_multiplier(12.0, 6.0), 0.5);
    assert_eq!(solve_multiplier(40.0, 6.0), 0.1);
    assert_eq!(solve_multiplier(1.0, 50.0), 50.0);
}

#[test]
fn rain_is_rounded_up_before_solving() {
    // 0.3 mm counts as 1 mm: 1*5 = 5 fits range 5, 1*10 does not
    let pts = vec![point(0, 0.0, 0.3), point(1, 5.0, 0.0)];
    let s = Scale::solve(&pts);
    assert_eq!(s.max_rain, 1.0);
    assert_eq!(s.multiplier, 5.0);
}

#[test]
fn no_rain_still_yields_a_table_multiplier() {
    let pts = vec![point(0, 3.0, 0.0), point(1, 9.0, 0.0)];
    let s = Scale::solve(&pts);
    assert!(!s.has_rain());
    assert!(RAIN_MULTIPLIERS.contains(&s.multiplier));
}

#[test]
fn oversized_rain_keeps_default_multiplier() {
    // nothing fits a zero range
    assert_eq!(solve_multiplier(4.0, 0.0), 1.0);
}

#[test]
fn empty_input_is_degenerate_but_valid() {
    let s = Scale::solve(std::iter::empty::<&ForecastPoint>());
    assert_eq!(s.temp_range(), 0);
    assert!(RAIN_MULTIPLIERS.contains(&s.multiplier));
}

#[test]
fn hour_axis_spans_graph_width() {
    let geo = CanvasGeometry::new(600, 448);
    let map = CoordinateMapper::new(geo, Scale::solve(&vec![point(0, 0.0, 0.0), point(1, 10.0, 0.0)]));
    assert!((map.hour_to_x(0.0) - geo.margins.left).abs() < 1e-9);
    assert!((map.hour_to_x(11.0) - (600.0 - geo.margins.right)).abs() < 1e-9);
    assert!(map.hour_to_x(11.0) - map.hour_to_x(0.0) <= geo.graph_width() + 1e-9);
}

#[test]
fn temperature_axis_is_inverted() {
    let geo = CanvasGeometry::new(600, 448);
    let map = CoordinateMapper::new(geo, Scale::solve(&vec![point(0, 0.0, 0.0), point(1, 10.0, 0.0)]));
    let bottom = 448.0 - geo.margins.bottom;
    assert!((map.temp_to_y(0.0) - bottom).abs() < 1e-9);
    assert!((map.temp_to_y(10.0) - geo.margins.top).abs() < 1e-9);
    assert!(map.temp_to_y(7.0) < map.temp_to_y(3.0));
}

#[test]
fn flat_temperatures_map_to_one_row() {
    let geo = CanvasGeometry::new(600, 448);
    let pts = vec![point(0, 8.0, 0.0), point(1, 8.0, 0.0)];
    let map = CoordinateMapper::new(geo, Scale::solve(&pts));
    assert_eq!(map.scale().temp_range(), 0);
    let y = map.temp_to_y(8.0);
    assert!(y.is_finite());
    assert_eq!(map.temp_to_y(-40.0), y);
    assert_eq!(map.temp_to_y(40.0), y);
}

#[test]
fn precipitation_shares_the_temperature_axis() {
    let geo = CanvasGeometry::new(600, 448);
    let pts = vec![point(0, 10.0, 2.0), point(1, 16.0, 0.0)];
    let map = CoordinateMapper::new(geo, Scale::solve(&pts));
    // multiplier 2: 1.5 mm sits where 10 + 3 degrees sits
    assert!((map.precip_to_y(1.5) - map.temp_to_y(13.0)).abs() < 1e-9);
    assert_eq!(map.precip_to_y(0.0), map.temp_to_y(10.0));
}

#[test]
fn margins_follow_layout_ratios() {
    let geo = CanvasGeometry::new(600, 450);
    assert_eq!(geo.margins.top, 100.0);
    assert_eq!(geo.margins.bottom, 30.0);
    assert_eq!(geo.margins.left, 40.0);
    assert_eq!(geo.margins.right, 50.0);
    assert_eq!(geo.graph_width(), 510.0);
    assert_eq!(geo.hour_width(), 42.5);
}

#[test]
fn precipitation_ticks_round_halves_to_even() {
    let s = Scale { min_temp: 10, max_temp: 16, max_rain: 2.0, multiplier: 2.0 };
    // offsets 0..6 over 2: 0, 0.5, 1, 1.5, 2, 2.5
    assert_eq!(precipitation_ticks(&s), vec![0.0, 1.0, 2.0]);

    let dry = Scale { min_temp: 10, max_temp: 16, max_rain: 0.0, multiplier: 50.0 };
    assert_eq!(precipitation_ticks(&dry), vec![0.0]);
}
