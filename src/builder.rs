//! Fluent interface for configuring [`ProgressBar`] instances.
//!
//! [`ProgressBar::new`](crate::ProgressBar::new) covers the common case (width
//! 60, `=` fill, standard output). [`BarBuilder`] is for everything else:
//! custom bar geometry, custom fill glyphs, or redirecting the bar to an
//! arbitrary [`Write`] sink such as standard error or an in-memory buffer in
//! tests.

use std::io::{self, Stdout, Write};

use crate::{
    bar::ProgressBar,
    tracker::{ProgressError, TrackerCore},
};

/// Default bar interior width, in characters.
pub const DEFAULT_BAR_WIDTH: usize = 60;

/// A builder pattern for constructing [`ProgressBar`] instances.
///
/// The sink type parameter follows the builder: [`with_writer`]
/// (`BarBuilder<W>::with_writer`) rebinds it, so a builder started for stdout
/// can be redirected anywhere before `build`.
///
/// [`with_writer`]: BarBuilder::with_writer
pub struct BarBuilder<W = Stdout> {
    total: u64,
    width: usize,
    complete: char,
    incomplete: char,
    out: W,
}

impl BarBuilder<Stdout> {
    /// Starts building a bar for a task of `total` ticks with the default
    /// configuration (width 60, `=` complete, space incomplete, stdout).
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total,
            width: DEFAULT_BAR_WIDTH,
            complete: '=',
            incomplete: ' ',
            out: io::stdout(),
        }
    }
}

impl<W: Write> BarBuilder<W> {
    /// Sets the bar interior width, in characters.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the glyphs drawn for completed and not-yet-completed cells.
    #[must_use]
    pub fn with_chars(mut self, complete: char, incomplete: char) -> Self {
        self.complete = complete;
        self.incomplete = incomplete;
        self
    }

    /// Redirects the bar to an arbitrary sink.
    #[must_use]
    pub fn with_writer<V: Write>(self, out: V) -> BarBuilder<V> {
        BarBuilder {
            total: self.total,
            width: self.width,
            complete: self.complete,
            incomplete: self.incomplete,
            out,
        }
    }

    /// Consumes the builder and returns the constructed [`ProgressBar`].
    ///
    /// The tracker's start time is captured here.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroTotal`] if the total is zero.
    pub fn build(self) -> Result<ProgressBar<W>, ProgressError> {
        Ok(ProgressBar {
            core: TrackerCore::new(self.total, self.out)?,
            bar_width: self.width,
            complete: self.complete,
            incomplete: self.incomplete,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::tracker::{ProgressError, ProgressTracker};

    use super::BarBuilder;

    /// Configuration Plumbing
    /// Builder settings reach the constructed bar.
    #[test]
    fn test_builder_configures_bar() {
        let mut bar = BarBuilder::new(8)
            .with_width(8)
            .with_chars('#', '.')
            .with_writer(Vec::new())
            .build()
            .unwrap();
        for _ in 0..4 {
            bar.advance();
        }
        bar.display().unwrap();

        let out = String::from_utf8(bar.core.out.clone()).unwrap();
        assert!(out.starts_with("[####>...]"), "got {out:?}");
    }

    /// Zero Total
    /// The fail-fast check happens at build time.
    #[test]
    fn test_builder_rejects_zero_total() {
        let err = BarBuilder::new(0).with_writer(Vec::new()).build().unwrap_err();
        assert!(matches!(err, ProgressError::ZeroTotal));
    }
}
