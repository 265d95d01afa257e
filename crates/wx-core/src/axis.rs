// File: crates/wx-core/src/axis.rs
// Summary: Axis ticks: hour labels along X, degree and millimetre labels along the shared Y axis.

use chrono::{DateTime, Duration, FixedOffset, Local, Offset, Utc};

use crate::scale::Scale;
use crate::types::HOURS;

/// Time zone used for hour-of-day labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelZone {
    /// The host's local zone.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl LabelZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Two-digit hour of `t` in this zone.
    pub fn hour_label(&self, t: DateTime<Utc>) -> String {
        match self {
            LabelZone::Local => t.with_timezone(&Local).format("%H").to_string(),
            LabelZone::Fixed(offset) => t.with_timezone(offset).format("%H").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourTick {
    pub index: usize,
    pub label: String,
}

/// Labels for every hour slot, counted from a single anchor instant.
pub fn hour_ticks(anchor: DateTime<Utc>, zone: LabelZone) -> Vec<HourTick> {
    (0..HOURS)
        .map(|index| HourTick { index, label: zone.hour_label(anchor + Duration::hours(index as i64)) })
        .collect()
}

/// Whole degrees that get a horizontal gridline (`max_temp` excluded).
pub fn temperature_ticks(scale: &Scale) -> std::ops::Range<i32> {
    scale.min_temp..scale.max_temp
}

/// Millimetre values labelled on the precipitation axis, one per degree step,
/// with repeats from coarse multipliers removed. Halves round to even.
pub fn precipitation_ticks(scale: &Scale) -> Vec<f64> {
    let mut ticks: Vec<f64> = Vec::new();
    for offset in 0..scale.temp_range() {
        let mm = (offset as f64 / scale.multiplier).round_ties_even();
        if ticks.last() != Some(&mm) {
            ticks.push(mm);
        }
    }
    ticks
}
