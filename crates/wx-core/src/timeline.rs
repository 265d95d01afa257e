// File: crates/wx-core/src/timeline.rs
// Summary: Forecast timeline: sorted forecast points, the "current" slot, and windowed views.

use std::collections::vec_deque;
use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::forecast::ForecastPoint;
use crate::types::HOURS;

/// Whether the timeline still has upcoming points to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    HasData,
    Exhausted,
}

/// Owns the forecast points between refreshes.
///
/// Points are kept sorted by timestamp. [`advance`](Self::advance) pops the
/// expired prefix and keeps the latest popped point as `current`.
#[derive(Clone, Debug, Default)]
pub struct ForecastTimeline {
    points: VecDeque<ForecastPoint>,
    current: Option<ForecastPoint>,
    refresh_deadline: Option<DateTime<Utc>>,
}

impl ForecastTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every point with `points` (sorted here) and store the refresh deadline.
    /// Duplicate timestamps are kept as separate entries in arrival order.
    pub fn ingest(&mut self, points: impl IntoIterator<Item = ForecastPoint>, expiry: DateTime<Utc>) {
        let mut sorted: Vec<ForecastPoint> = points.into_iter().collect();
        sorted.sort_by_key(|p| p.timestamp);
        debug!(points = sorted.len(), %expiry, "ingested forecast");
        self.points = sorted.into();
        self.refresh_deadline = Some(expiry);
    }

    /// Drop every point older than `now`; the newest dropped point becomes `current`.
    /// Returns how many points were dropped.
    pub fn advance(&mut self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        while self.points.front().is_some_and(|p| p.timestamp < now) {
            self.current = self.points.pop_front();
            removed += 1;
        }
        if removed > 0 {
            debug!(removed, remaining = self.points.len(), %now, "advanced timeline");
        }
        removed
    }

    /// Window over the first `max_count` upcoming points.
    pub fn window(&self, max_count: usize) -> Window<'_> {
        let end = max_count.min(self.points.len());
        Window { points: self.points.range(..end), current: self.current.as_ref() }
    }

    /// Window with the chart's default hour count.
    pub fn default_window(&self) -> Window<'_> {
        self.window(HOURS)
    }

    pub fn state(&self) -> TimelineState {
        if self.points.is_empty() { TimelineState::Exhausted } else { TimelineState::HasData }
    }

    pub fn current(&self) -> Option<&ForecastPoint> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn refresh_deadline(&self) -> Option<DateTime<Utc>> {
        self.refresh_deadline
    }

    /// True before the first ingest and once the deadline has passed.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.refresh_deadline.map_or(true, |deadline| now >= deadline)
    }

    /// How long a run loop may sleep before it should fetch or redraw again.
    ///
    /// Expiry plus one minute, capped at an hour. A lapsed deadline retries
    /// after ten seconds.
    pub fn poll_interval(&self, now: DateTime<Utc>) -> Duration {
        match self.refresh_deadline {
            Some(deadline) => {
                let deadline = deadline + Duration::minutes(1);
                if deadline > now {
                    (deadline - now).min(Duration::hours(1))
                } else {
                    Duration::seconds(10)
                }
            }
            None => Duration::zero(),
        }
    }
}

/// Read-only view of the upcoming points plus the current observation.
///
/// Iterating consumes the window; ask the timeline for a fresh one after each
/// `advance`. The borrow keeps the timeline from changing underneath.
#[derive(Clone, Debug)]
pub struct Window<'a> {
    points: vec_deque::Iter<'a, ForecastPoint>,
    current: Option<&'a ForecastPoint>,
}

impl<'a> Window<'a> {
    pub fn current(&self) -> Option<&'a ForecastPoint> {
        self.current
    }

    /// Remaining points without consuming the window.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &'a ForecastPoint> + Clone + 'a {
        self.points.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.points.len() == 0
    }
}

impl<'a> Iterator for Window<'a> {
    type Item = &'a ForecastPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for Window<'_> {}
