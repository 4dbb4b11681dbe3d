//! Iterator adapters for automatic progress tracking.
//!
//! This module provides the [`ProgressIteratorExt`] trait, which adds a helper
//! method to any Rust [`Iterator`]. This allows you to attach a progress
//! indicator to a loop with a single method call: each `next()` advances the
//! tracker and requests a display, and exhaustion triggers `done()` exactly
//! once.
//!
//! Pair the adapter with a [`Throttle`](crate::Throttle) so the per-item
//! display requests stay cheap:
//!
//! ```ignore
//! use tick_progress::{ProgressBar, ProgressIteratorExt, Throttle};
//!
//! let bar = ProgressBar::new(items.len() as u64)?;
//! for item in items.iter().track_progress(Throttle::new(bar)) {
//!     // ...
//! }
//! ```
//!
//! # Errors
//!
//! [`Iterator::next`] has no channel for I/O failures, so write errors from
//! the tracker are discarded inside the adapter. Drive the tracker manually if
//! you need to observe them.

use crate::tracker::ProgressTracker;

/// An iterator adapter that wraps an underlying iterator and tracks progress.
///
/// Advances the tracker and requests a display on every call to `next()`;
/// calls `done()` once when the underlying iterator is exhausted.
pub struct ProgressIter<I, T> {
    iter: I,
    tracker: T,
    finished: bool,
}

impl<I, T> ProgressIter<I, T> {
    /// Creates a new `ProgressIter`.
    ///
    /// Note: This is usually constructed via
    /// [`ProgressIteratorExt::track_progress`].
    pub const fn new(iter: I, tracker: T) -> Self {
        Self {
            iter,
            tracker,
            finished: false,
        }
    }

    /// Returns a reference to the tracker, e.g. to inspect its progress.
    pub const fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Consumes the adapter, returning the tracker.
    pub fn into_inner(self) -> T {
        self.tracker
    }
}

impl<I: Iterator, T: ProgressTracker> Iterator for ProgressIter<I, T> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();

        if item.is_some() {
            self.tracker.advance();
            let _ = self.tracker.display();
        } else if !self.finished {
            // Iterator exhausted
            self.finished = true;
            let _ = self.tracker.done();
        }

        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension trait to easily attach progress tracking to any Iterator.
pub trait ProgressIteratorExt: Sized {
    /// Wraps the iterator so that each yielded item advances and displays the
    /// given tracker.
    fn track_progress<T: ProgressTracker>(self, tracker: T) -> ProgressIter<Self, T>;
}

impl<I: Iterator> ProgressIteratorExt for I {
    fn track_progress<T: ProgressTracker>(self, tracker: T) -> ProgressIter<Self, T> {
        ProgressIter::new(self, tracker)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::tracker::ProgressTracker;

    use super::ProgressIteratorExt as _;

    #[derive(Default)]
    struct Recording {
        ticks: u64,
        displays: usize,
        dones: usize,
    }

    impl ProgressTracker for Recording {
        fn advance(&mut self) -> u64 {
            self.ticks += 1;
            self.ticks
        }

        fn progress(&self) -> f64 {
            self.ticks as f64 / 5.0
        }

        fn display(&mut self) -> io::Result<()> {
            self.displays += 1;
            Ok(())
        }

        fn done(&mut self) -> io::Result<()> {
            self.dones += 1;
            Ok(())
        }
    }

    /// Iterator Integration
    /// Every yielded item advances and displays; exhaustion calls done once.
    #[test]
    fn test_iterator_adapter() {
        let mut it = (0..5).track_progress(Recording::default());

        let mut count = 0;
        while it.next().is_some() {
            count += 1;
        }
        // Extra next() calls after exhaustion must not re-trigger done().
        assert!(it.next().is_none());
        assert!(it.next().is_none());

        let tracker = it.into_inner();
        assert_eq!(count, 5);
        assert_eq!(tracker.ticks, 5);
        assert_eq!(tracker.displays, 5);
        assert_eq!(tracker.dones, 1, "done must fire exactly once");
    }

    /// Tracker Access
    /// The tracker can be inspected mid-iteration.
    #[test]
    fn test_tracker_accessor() {
        let mut it = (0..4).track_progress(Recording::default());
        it.next();
        it.next();

        assert_eq!(it.tracker().ticks, 2);
        assert!((it.tracker().progress() - 0.4).abs() < 1e-12);
    }
}
