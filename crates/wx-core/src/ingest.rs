// File: crates/wx-core/src/ingest.rs
// Summary: Parse a locationforecast/2.0 JSON document and its `Expires` header into forecast points.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::forecast::{ForecastPoint, InstantDetails, NextHourSummary};

#[derive(Deserialize)]
struct RawEntry {
    time: String,
    data: RawData,
}

#[derive(Deserialize)]
struct RawData {
    instant: RawInstant,
    next_1_hours: Option<RawNextHours>,
}

#[derive(Deserialize)]
struct RawInstant {
    details: RawInstantDetails,
}

#[derive(Deserialize)]
struct RawInstantDetails {
    air_temperature: f64,
    #[serde(default)]
    wind_speed: f64,
    wind_speed_percentile_90: Option<f64>,
    #[serde(default)]
    wind_from_direction: f64,
}

#[derive(Deserialize)]
struct RawNextHours {
    summary: RawSummary,
    #[serde(default)]
    details: RawPrecipitation,
}

#[derive(Deserialize)]
struct RawSummary {
    symbol_code: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawPrecipitation {
    precipitation_amount: f64,
    precipitation_amount_min: f64,
    precipitation_amount_max: f64,
}

impl RawEntry {
    fn into_point(self) -> Option<ForecastPoint> {
        let next = self.data.next_1_hours?;
        let timestamp = DateTime::parse_from_rfc3339(&self.time).ok()?.with_timezone(&Utc);
        let d = self.data.instant.details;
        let mut details = InstantDetails::new(d.air_temperature, d.wind_speed, d.wind_from_direction);
        details.wind_speed_percentile_90 = d.wind_speed_percentile_90;
        let summary = NextHourSummary::dry(next.summary.symbol_code).with_precipitation(
            next.details.precipitation_amount_min,
            next.details.precipitation_amount,
            next.details.precipitation_amount_max,
        );
        Some(ForecastPoint::new(timestamp, details, summary))
    }
}

/// Extract forecast points from an already parsed document.
///
/// Entries without a `next_1_hours` block, a parseable `time` or an air
/// temperature are skipped. Only a missing `properties.timeseries` array is an error.
pub fn points_from_value(doc: &Value) -> Result<Vec<ForecastPoint>> {
    let series = doc
        .pointer("/properties/timeseries")
        .and_then(Value::as_array)
        .ok_or(Error::MissingTimeseries)?;

    let points: Vec<ForecastPoint> = series
        .iter()
        .filter_map(|entry| RawEntry::deserialize(entry).ok())
        .filter_map(RawEntry::into_point)
        .collect();

    let dropped = series.len() - points.len();
    if dropped > 0 {
        debug!(dropped, kept = points.len(), "skipped incomplete forecast entries");
    }
    Ok(points)
}

/// Parse forecast points from JSON text.
pub fn parse_forecast(json: &str) -> Result<Vec<ForecastPoint>> {
    let doc: Value = serde_json::from_str(json)?;
    points_from_value(&doc)
}

/// Parse an HTTP date such as `Tue, 25 Jun 2024 05:22:48 GMT`.
pub fn parse_expiry(header: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(header.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::InvalidExpiry(header.to_string()))
}
