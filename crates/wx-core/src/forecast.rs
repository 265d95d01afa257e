// File: crates/wx-core/src/forecast.rs
// Summary: Forecast point model: one hourly record with instant details and a next-hour summary.

use chrono::{DateTime, Utc};

/// Instantaneous values valid at the point's timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct InstantDetails {
    /// Air temperature in °C.
    pub air_temperature: f64,
    /// Hourly mean wind speed in m/s.
    pub wind_speed: f64,
    /// 90th percentile wind speed (gust) in m/s, when the feed provides it.
    pub wind_speed_percentile_90: Option<f64>,
    /// Direction the wind blows from, degrees clockwise from north.
    pub wind_from_direction: f64,
}

impl InstantDetails {
    pub fn new(air_temperature: f64, wind_speed: f64, wind_from_direction: f64) -> Self {
        Self { air_temperature, wind_speed, wind_speed_percentile_90: None, wind_from_direction }
    }

    pub fn with_gust(mut self, gust: f64) -> Self {
        self.wind_speed_percentile_90 = Some(gust);
        self
    }

    /// Gust speed, falling back to the mean wind speed when no percentile is known.
    pub fn gust_speed(&self) -> f64 {
        self.wind_speed_percentile_90.unwrap_or(self.wind_speed)
    }
}

/// Summary of the hour following the point's timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct NextHourSummary {
    /// Sky-condition symbol code, e.g. `clearsky_day`.
    pub symbol_code: String,
    /// Expected precipitation in mm.
    pub precipitation_amount: f64,
    pub precipitation_amount_min: f64,
    pub precipitation_amount_max: f64,
}

impl NextHourSummary {
    pub fn dry(symbol_code: impl Into<String>) -> Self {
        Self {
            symbol_code: symbol_code.into(),
            precipitation_amount: 0.0,
            precipitation_amount_min: 0.0,
            precipitation_amount_max: 0.0,
        }
    }

    pub fn with_precipitation(mut self, min: f64, expected: f64, max: f64) -> Self {
        self.precipitation_amount_min = min;
        self.precipitation_amount = expected;
        self.precipitation_amount_max = max;
        self
    }

    /// Largest of the expected/min/max amounts.
    pub fn precipitation_upper_bound(&self) -> f64 {
        self.precipitation_amount_max
            .max(self.precipitation_amount)
            .max(self.precipitation_amount_min)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub details: InstantDetails,
    pub next_hour: NextHourSummary,
}

impl ForecastPoint {
    pub fn new(timestamp: DateTime<Utc>, details: InstantDetails, next_hour: NextHourSummary) -> Self {
        Self { timestamp, details, next_hour }
    }

    pub fn temperature(&self) -> f64 { self.details.air_temperature }

    pub fn symbol_code(&self) -> &str { &self.next_hour.symbol_code }
}
