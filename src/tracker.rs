//! Core tick accounting and linear-rate time estimation.
//!
//! This module defines the [`ProgressTracker`] trait, the capability set every
//! indicator (and every decorator around one) exposes, and [`TrackerCore`],
//! the state block the concrete renderers compose over.
//!
//! # Time model
//!
//! The rate estimate is a plain linear extrapolation: total elapsed time
//! divided by ticks so far, in milliseconds per tick. There is no smoothing or
//! windowing; the model is adequate for roughly-uniform-cost iterations and
//! intentionally nothing more.
//!
//! # Snapshots
//!
//! All time-derived quantities for one display call come from a single
//! [`TimeStats`] value produced by [`TrackerCore::refresh`]. The clock is read
//! exactly once per refresh, so elapsed, remaining, and total estimates can
//! never skew against each other even if wall time advances between
//! sub-computations.

use std::{fmt, io, time::Duration};

use thiserror::Error;
use web_time::Instant;

/// Errors reported when constructing a tracker.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    /// The tracked task declared a total of zero ticks, which would make
    /// progress and rate computation divide by zero.
    #[error("total tick count must be positive, got 0")]
    ZeroTotal,
}

/// The capability set shared by every progress indicator.
///
/// Concrete renderers ([`ProgressBar`](crate::ProgressBar),
/// [`ProgressLog`](crate::ProgressLog)) implement this trait, and decorators
/// such as [`Throttle`](crate::Throttle) wrap anything that does.
pub trait ProgressTracker {
    /// Records one completed unit of work and returns the new tick count.
    ///
    /// Has no display side effects and never fails. Advancing past the
    /// declared total is a contract violation by the caller: `progress` will
    /// exceed 1.0 and percentages will read past 100.
    fn advance(&mut self) -> u64;

    /// Returns the completed fraction `ticks / total_ticks`.
    ///
    /// In [0, 1] under normal use; not clamped if the caller advances past the
    /// total.
    fn progress(&self) -> f64;

    /// Renders the current state to the output sink.
    fn display(&mut self) -> io::Result<()>;

    /// Signals that the task has finished.
    ///
    /// The default behavior is one final [`display`](Self::display); renderers
    /// may override it to additionally emit a line terminator.
    fn done(&mut self) -> io::Result<()> {
        self.display()
    }
}

/// Time-derived quantities computed from one clock reading.
///
/// Produced by [`TrackerCore::refresh`] at the start of a display call and
/// threaded through its sub-computations, so all three durations agree on
/// "now".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeStats {
    /// Wall time since the tracker was constructed.
    pub elapsed: Duration,
    /// Estimated time left to finish, assuming constant per-tick cost.
    /// Zero once the tick count reaches (or passes) the total.
    pub remaining: Duration,
    /// Estimated total runtime, `rate * total_ticks`.
    pub estimated_total: Duration,
}

/// Tick/time state shared by all renderers.
///
/// `TrackerCore` owns the output sink and the counters, and provides the
/// timing primitives renderers format from. It is public so custom renderers
/// can compose over it the same way [`ProgressBar`](crate::ProgressBar) and
/// [`ProgressLog`](crate::ProgressLog) do.
pub struct TrackerCore<W> {
    pub(crate) out: W,
    ticks: u64,
    total_ticks: u64,
    start: Instant,
    time_width: usize,
}

impl<W> fmt::Debug for TrackerCore<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The sink is intentionally omitted; it need not be Debug.
        f.debug_struct("TrackerCore")
            .field("ticks", &self.ticks)
            .field("total_ticks", &self.total_ticks)
            .field("time_width", &self.time_width)
            .finish_non_exhaustive()
    }
}

impl<W> TrackerCore<W> {
    /// Creates a core for a task of `total` ticks writing to `out`.
    ///
    /// The start time is captured here; construct the core when the work
    /// actually begins or the elapsed estimate will include setup time.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroTotal`] if `total` is zero.
    pub fn new(total: u64, out: W) -> Result<Self, ProgressError> {
        if total == 0 {
            return Err(ProgressError::ZeroTotal);
        }
        Ok(Self {
            out,
            ticks: 0,
            total_ticks: total,
            start: Instant::now(),
            time_width: 3,
        })
    }

    /// Increments the tick counter by one and returns the new count.
    pub fn advance(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Returns the completed fraction `ticks / total_ticks`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.ticks as f64 / self.total_ticks as f64
    }

    /// Returns the current tick count.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the declared total tick count.
    #[must_use]
    pub const fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Reads the clock once and computes a consistent [`TimeStats`].
    ///
    /// With zero ticks the rate is indeterminate; it is treated as 0 so that a
    /// display before the first advance reports zero estimates instead of
    /// dividing by zero.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn refresh(&self) -> TimeStats {
        let elapsed = Instant::now() - self.start;

        // milliseconds per tick, linear over the whole run
        let rate = if self.ticks == 0 {
            0.0
        } else {
            elapsed.as_millis() as f64 / self.ticks as f64
        };

        let left = self.total_ticks.saturating_sub(self.ticks);
        TimeStats {
            elapsed,
            remaining: Duration::from_millis((rate * left as f64) as u64),
            estimated_total: Duration::from_millis((rate * self.total_ticks as f64) as u64),
        }
    }

    /// Returns the current minimum field width for formatted seconds values.
    #[must_use]
    pub const fn time_width(&self) -> usize {
        self.time_width
    }

    /// Widens the seconds field if the estimated total has grown a digit.
    ///
    /// The width never decreases, so the rendered line cannot jitter backwards
    /// on screen when an estimate transiently shrinks.
    pub fn update_display_width(&mut self, stats: &TimeStats) {
        let width = seconds_width(stats.estimated_total);
        if width > self.time_width {
            self.time_width = width;
        }
    }

    /// Formats the shared `NNN% E.E/T.Ts` prefix from a fresh snapshot.
    ///
    /// Widens the time field first so both renderers stay aligned.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn stats_prefix(&mut self, stats: &TimeStats) -> String {
        self.update_display_width(stats);
        let w = self.time_width;
        format!(
            "{:>3.0}% {:>w$.1}/{:>w$.1}s",
            100.0 * self.progress(),
            stats.elapsed.as_millis() as f64 / 1000.0,
            stats.estimated_total.as_millis() as f64 / 1000.0,
            w = w,
        )
    }
}

/// Field width needed to print `total` in seconds with one decimal place.
///
/// Starts at 3 (covers "0.0" through "9.9") and adds one column for every
/// power-of-ten threshold the rounded seconds value reaches.
#[allow(clippy::cast_precision_loss)]
fn seconds_width(total: Duration) -> usize {
    let secs = (total.as_millis() as f64 + 500.0) / 1000.0;
    let mut width = 3;
    let mut threshold = 10.0;
    while threshold <= secs {
        width += 1;
        threshold *= 10.0;
    }
    width
}
