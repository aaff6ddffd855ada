use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::foundation::error::{DitherError, DitherResult};

/// Source of frame ticks for the driver loop.
pub trait Ticker: Send {
    /// Block until the next tick and return elapsed seconds, or `None` when the ticker is done.
    fn wait_tick(&mut self) -> Option<f64>;
}

/// Fixed-rate wall-clock ticker. Late ticks are not replayed; the schedule skips ahead.
#[derive(Debug)]
pub struct IntervalTicker {
    start: Instant,
    period: Duration,
    next: Instant,
    limit: Option<Duration>,
}

impl IntervalTicker {
    /// Tick rate used by [`IntervalTicker::default`].
    pub const DEFAULT_HZ: f64 = 60.0;

    /// Ticker firing `hz` times per second. Rates that are not finite and positive, or whose
    /// period does not fit a [`Duration`], are rejected.
    pub fn new(hz: f64) -> DitherResult<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(DitherError::validation(format!(
                "tick rate must be finite and > 0, got {hz}"
            )));
        }
        let period = Duration::try_from_secs_f64(1.0 / hz).map_err(|e| {
            DitherError::validation(format!("tick rate {hz} has no usable period: {e}"))
        })?;
        let start = Instant::now();
        Ok(Self {
            start,
            period,
            next: start,
            limit: None,
        })
    }

    /// Stop ticking once `seconds` of wall time have elapsed. Negative limits clamp to zero.
    pub fn with_limit(mut self, seconds: f64) -> DitherResult<Self> {
        if seconds.is_nan() {
            return Err(DitherError::validation("run limit must be a number, got NaN"));
        }
        let limit = Duration::try_from_secs_f64(seconds.max(0.0)).map_err(|e| {
            DitherError::validation(format!("run limit {seconds}s is out of range: {e}"))
        })?;
        self.limit = Some(limit);
        Ok(self)
    }

    /// Time between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        let start = Instant::now();
        Self {
            start,
            period: Duration::from_secs_f64(1.0 / Self::DEFAULT_HZ),
            next: start,
            limit: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn wait_tick(&mut self) -> Option<f64> {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.start);
        if let Some(limit) = self.limit
            && elapsed >= limit
        {
            return None;
        }
        // A schedule past the clock's range ends after this tick.
        let next = self.next.checked_add(self.period).and_then(|next| {
            if next < now {
                now.checked_add(self.period)
            } else {
                Some(next)
            }
        });
        match next {
            Some(next) => self.next = next,
            None => self.limit = Some(elapsed),
        }
        Some(elapsed.as_secs_f64())
    }
}

/// Scripted ticker yielding a fixed list of times without sleeping.
#[derive(Clone, Debug, Default)]
pub struct ManualTicker {
    times: VecDeque<f64>,
}

impl ManualTicker {
    /// Ticker yielding `times` in order.
    pub fn new(times: impl IntoIterator<Item = f64>) -> Self {
        Self {
            times: times.into_iter().collect(),
        }
    }

    /// `count` ticks spaced `1 / fps` apart, starting at zero.
    pub fn at_fps(fps: f64, count: usize) -> Self {
        let step = if fps > 0.0 { 1.0 / fps } else { 0.0 };
        Self::new((0..count).map(|i| i as f64 * step))
    }

    /// Ticks left.
    pub fn remaining(&self) -> usize {
        self.times.len()
    }
}

impl Ticker for ManualTicker {
    fn wait_tick(&mut self) -> Option<f64> {
        self.times.pop_front()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/clock.rs"]
mod tests;
