// File: crates/wx-core/tests/ingest.rs
// Purpose: Parsing locationforecast documents and expiry headers into timeline input.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wx_core::ingest::{parse_expiry, parse_forecast, points_from_value};
use wx_core::{Error, ForecastTimeline};

fn entry(time: &str, temp: f64, symbol: &str) -> serde_json::Value {
    json!({
        "time": time,
        "data": {
            "instant": { "details": { "air_temperature": temp } },
            "next_1_hours": { "summary": { "symbol_code": symbol } }
        }
    })
}

#[test]
fn expiry_header_is_parsed_as_utc() {
    let t = parse_expiry("Tue, 25 Jun 2024 05:22:48 GMT").expect("valid header");
    assert_eq!(t, Utc.with_ymd_and_hms(2024, 6, 25, 5, 22, 48).unwrap());
}

#[test]
fn bad_expiry_header_is_an_error() {
    assert!(matches!(parse_expiry("tomorrow-ish"), Err(Error::InvalidExpiry(_))));
}

#[test]
fn window_after_advance_matches_remaining_entries() {
    let doc = json!({
        "properties": {
            "timeseries": [
                entry("2024-06-25T04:00:00Z", 21.0, "clearsky_day"),
                entry("2024-06-25T05:00:00Z", 19.0, "clearsky_day"),
                entry("2024-06-25T06:00:00Z", 17.0, "fog"),
            ]
        }
    });
    let mut tl = ForecastTimeline::new();
    tl.ingest(points_from_value(&doc).unwrap(), parse_expiry("Tue, 25 Jun 2024 05:22:48 GMT").unwrap());
    tl.advance(Utc.with_ymd_and_hms(2024, 6, 25, 4, 30, 0).unwrap());

    let got: Vec<(f64, String)> = tl
        .window(12)
        .map(|p| (p.temperature(), p.symbol_code().to_string()))
        .collect();
    assert_eq!(got, vec![(19.0, "clearsky_day".to_string()), (17.0, "fog".to_string())]);
    assert_eq!(tl.current().map(|p| p.temperature()), Some(21.0));
}

#[test]
fn incomplete_entries_are_dropped() {
    let doc = json!({
        "properties": {
            "timeseries": [
                entry("2024-06-25T04:00:00Z", 21.0, "clearsky_day"),
                // six-hour resolution tail without next_1_hours
                { "time": "2024-06-28T00:00:00Z",
                  "data": { "instant": { "details": { "air_temperature": 12.0 } } } },
                // no temperature
                { "time": "2024-06-25T05:00:00Z",
                  "data": { "instant": { "details": {} },
                            "next_1_hours": { "summary": { "symbol_code": "rain" } } } },
                entry("not a time", 3.0, "fog"),
            ]
        }
    });
    let points = points_from_value(&doc).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].temperature(), 21.0);
}

#[test]
fn full_entry_fields_are_mapped() {
    let text = r#"{
      "type": "Feature",
      "properties": {
        "timeseries": [{
          "time": "2024-06-25T04:00:00Z",
          "data": {
            "instant": { "details": {
              "air_temperature": 14.2,
              "wind_speed": 4.1,
              "wind_speed_percentile_90": 6.3,
              "wind_from_direction": 225.5
            }},
            "next_1_hours": {
              "summary": { "symbol_code": "lightrain" },
              "details": {
                "precipitation_amount": 0.4,
                "precipitation_amount_min": 0.1,
                "precipitation_amount_max": 1.2
              }
            }
          }
        }]
      }
    }"#;
    let points = parse_forecast(text).unwrap();
    let p = &points[0];
    assert_eq!(p.timestamp, Utc.with_ymd_and_hms(2024, 6, 25, 4, 0, 0).unwrap());
    assert_eq!(p.details.wind_speed, 4.1);
    assert_eq!(p.details.gust_speed(), 6.3);
    assert_eq!(p.details.wind_from_direction, 225.5);
    assert_eq!(p.next_hour.symbol_code, "lightrain");
    assert_eq!(p.next_hour.precipitation_amount_min, 0.1);
    assert_eq!(p.next_hour.precipitation_amount, 0.4);
    assert_eq!(p.next_hour.precipitation_upper_bound(), 1.2);
}

#[test]
fn gust_falls_back_to_mean_wind() {
    let doc = json!({ "properties": { "timeseries": [entry("2024-06-25T04:00:00Z", 1.0, "fog")] } });
    let points = points_from_value(&doc).unwrap();
    assert_eq!(points[0].details.gust_speed(), points[0].details.wind_speed);
}

#[test]
fn missing_timeseries_is_an_error() {
    assert!(matches!(points_from_value(&json!({ "properties": {} })), Err(Error::MissingTimeseries)));
    assert!(matches!(parse_forecast("{ nope"), Err(Error::Json(_))));
}
