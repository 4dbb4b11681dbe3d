//! A decorator that limits how often a wrapped tracker redraws.
//!
//! Tight loops can call `display` far faster than a terminal can usefully
//! redraw (or a log file can usefully grow). [`Throttle`] wraps any
//! [`ProgressTracker`] and forwards `advance`/`progress`/`done` unchanged,
//! but suppresses `display` until either enough time *or* enough progress has
//! passed since the last real redraw, whichever comes first. The time bound
//! caps staleness; the progress bound guarantees a minimum visual
//! granularity.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tick_progress::{ProgressLog, ProgressTracker, Throttle};
//!
//! let log = ProgressLog::with_writer(1000, Vec::new())?;
//! let mut throttled = Throttle::with_intervals(log, Duration::from_millis(100), 0.01);
//! for _ in 0..1000 {
//!     throttled.advance();
//!     throttled.display()?; // mostly suppressed
//! }
//! throttled.done()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{io, time::Duration};

use web_time::Instant;

use crate::tracker::ProgressTracker;

/// Default minimum time between real redraws.
pub const DEFAULT_TIME_INTERVAL: Duration = Duration::from_millis(100);

/// Default minimum progress delta between real redraws.
pub const DEFAULT_PROGRESS_INTERVAL: f64 = 0.001;

/// Wraps a [`ProgressTracker`] and rate-limits its `display` calls.
///
/// The first `display` always passes through; afterwards a call is forwarded
/// only once the configured time interval or progress interval has elapsed
/// since the last forwarded one.
pub struct Throttle<T> {
    inner: T,
    time_interval: Duration,
    progress_interval: f64,
    /// `None` until the first display has been forwarded.
    last_time: Option<Instant>,
    /// Sentinel -1.0 until the first display has been forwarded.
    last_progress: f64,
}

impl<T: ProgressTracker> Throttle<T> {
    /// Wraps `inner` with the default intervals
    /// ([`DEFAULT_TIME_INTERVAL`], [`DEFAULT_PROGRESS_INTERVAL`]).
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self::with_intervals(inner, DEFAULT_TIME_INTERVAL, DEFAULT_PROGRESS_INTERVAL)
    }

    /// Wraps `inner` with explicit time and progress intervals.
    #[must_use]
    pub fn with_intervals(inner: T, time_interval: Duration, progress_interval: f64) -> Self {
        Self {
            inner,
            time_interval,
            progress_interval,
            last_time: None,
            last_progress: -1.0,
        }
    }

    /// Returns a reference to the wrapped tracker.
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consumes the decorator, returning the wrapped tracker.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ProgressTracker> ProgressTracker for Throttle<T> {
    fn advance(&mut self) -> u64 {
        self.inner.advance()
    }

    fn progress(&self) -> f64 {
        self.inner.progress()
    }

    fn display(&mut self) -> io::Result<()> {
        let now = Instant::now();
        let progress = self.inner.progress();

        let due = match self.last_time {
            None => true,
            Some(last) => {
                now.duration_since(last) >= self.time_interval
                    || progress - self.last_progress >= self.progress_interval
            }
        };
        if !due {
            return Ok(());
        }

        self.inner.display()?;
        self.last_time = Some(now);
        self.last_progress = progress;
        Ok(())
    }

    /// Forwarded unconditionally: a final display must never be throttled.
    fn done(&mut self) -> io::Result<()> {
        self.inner.done()
    }
}
