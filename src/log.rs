//! A newline-terminated progress line safe for files and log streams.
//!
//! [`ProgressLog`] prints one full line per display call:
//!
//! ```text
//!  42% 2.6/6.3s ETA [2026-08-30 14:07:12 +0200]
//! ```
//!
//! Elapsed time and the rate estimate come from the monotonic clock; the ETA
//! timestamp is the system wall clock plus the remaining-time estimate,
//! rendered in local time with a timezone offset. Because every line is
//! newline-terminated, this renderer works equally well on terminals and in
//! plain files, which is the differentiator from
//! [`ProgressBar`](crate::ProgressBar).

use std::{
    fmt,
    io::{self, Stdout, Write},
};

use chrono::{Local, TimeDelta};

use crate::tracker::{ProgressError, ProgressTracker, TrackerCore};

/// A progress reporter that appends one log line per display call.
pub struct ProgressLog<W = Stdout> {
    core: TrackerCore<W>,
}

impl<W> fmt::Debug for ProgressLog<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressLog").field("core", &self.core).finish()
    }
}

impl ProgressLog<Stdout> {
    /// Creates a log reporter for `total` ticks writing to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroTotal`] if `total` is zero.
    pub fn new(total: u64) -> Result<Self, ProgressError> {
        Self::with_writer(total, io::stdout())
    }
}

impl<W: Write> ProgressLog<W> {
    /// Creates a log reporter writing to an arbitrary sink.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroTotal`] if `total` is zero.
    pub fn with_writer(total: u64, out: W) -> Result<Self, ProgressError> {
        Ok(Self {
            core: TrackerCore::new(total, out)?,
        })
    }
}

impl<W: Write> ProgressTracker for ProgressLog<W> {
    fn advance(&mut self) -> u64 {
        self.core.advance()
    }

    fn progress(&self) -> f64 {
        self.core.progress()
    }

    fn display(&mut self) -> io::Result<()> {
        let stats = self.core.refresh();
        let prefix = self.core.stats_prefix(&stats);

        // Wall clock, not the monotonic clock: the ETA is a calendar moment.
        let remaining_ms =
            i64::try_from(stats.remaining.as_millis()).unwrap_or(i64::MAX);
        let eta = Local::now() + TimeDelta::milliseconds(remaining_ms);

        writeln!(
            self.core.out,
            "{prefix} ETA [{}]",
            eta.format("%Y-%m-%d %H:%M:%S %z")
        )?;
        self.core.out.flush()
    }

    // done() keeps the trait default: a plain final display. Every log line is
    // already newline-terminated, so no extra terminator is wanted.
}
