//! An in-place redrawing progress bar for interactive terminals.
//!
//! [`ProgressBar`] renders a growing character-art bar with percentage and
//! elapsed/estimated-total seconds:
//!
//! ```text
//! [=============================>                              ]  49% 3.1/6.3s
//! ```
//!
//! Every display ends with a carriage return and a flush, so repeated calls
//! overwrite the same terminal line. That makes this renderer unsuitable for
//! files or log streams; use [`ProgressLog`](crate::ProgressLog) there.

use std::{
    fmt,
    io::{self, Stdout, Write},
};

use crate::{
    builder::BarBuilder,
    tracker::{ProgressError, ProgressTracker, TrackerCore},
};

/// A progress bar that redraws in place on the current terminal line.
///
/// The bar interior is always exactly `bar_width` characters: filled cells,
/// then a `>` cursor marking the leading edge, then incomplete cells. When the
/// caller advances past the declared total the fill is clamped to the bar
/// width but the percentage text is allowed to read past 100.
pub struct ProgressBar<W = Stdout> {
    pub(crate) core: TrackerCore<W>,
    pub(crate) bar_width: usize,
    pub(crate) complete: char,
    pub(crate) incomplete: char,
}

impl<W> fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("core", &self.core)
            .field("bar_width", &self.bar_width)
            .field("complete", &self.complete)
            .field("incomplete", &self.incomplete)
            .finish()
    }
}

impl ProgressBar<Stdout> {
    /// Creates a bar for `total` ticks with default configuration
    /// (width 60, `=` fill, space incomplete) writing to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroTotal`] if `total` is zero.
    pub fn new(total: u64) -> Result<Self, ProgressError> {
        BarBuilder::new(total).build()
    }
}

impl<W: Write> ProgressTracker for ProgressBar<W> {
    fn advance(&mut self) -> u64 {
        self.core.advance()
    }

    fn progress(&self) -> f64 {
        self.core.progress()
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn display(&mut self) -> io::Result<()> {
        let stats = self.core.refresh();

        let pos = (self.bar_width as f64 * self.core.progress()) as usize;
        let mut cells = String::with_capacity(self.bar_width);
        for i in 0..self.bar_width {
            if i < pos {
                cells.push(self.complete);
            } else if i == pos {
                cells.push('>');
            } else {
                cells.push(self.incomplete);
            }
        }

        let prefix = self.core.stats_prefix(&stats);
        write!(self.core.out, "[{cells}] {prefix}\r")?;
        self.core.out.flush()
    }

    /// One final display, then a newline so subsequent output starts fresh.
    fn done(&mut self) -> io::Result<()> {
        self.display()?;
        writeln!(self.core.out)?;
        self.core.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::{builder::BarBuilder, tracker::ProgressTracker};

    fn rendered(bar: &crate::ProgressBar<Vec<u8>>) -> String {
        String::from_utf8(bar.core.out.clone()).unwrap()
    }

    /// Cursor Placement
    /// With total=100, width=10 and 34 advances: 3 filled cells, the cursor
    /// at index 3, and 6 incomplete cells.
    #[test]
    fn test_cursor_placement() {
        let mut bar = BarBuilder::new(100)
            .with_width(10)
            .with_writer(Vec::new())
            .build()
            .unwrap();
        for _ in 0..34 {
            bar.advance();
        }
        bar.display().unwrap();

        let out = rendered(&bar);
        assert!(out.starts_with("[===>      ]  34%"), "got {out:?}");
        assert!(out.ends_with("s\r"));
    }

    /// Interior Width
    /// The bar interior is exactly `bar_width` characters for any progress.
    #[test]
    fn test_interior_width_is_constant() {
        for ticks in [0, 1, 7, 12, 19, 20] {
            let mut bar = BarBuilder::new(20)
                .with_width(12)
                .with_writer(Vec::new())
                .build()
                .unwrap();
            for _ in 0..ticks {
                bar.advance();
            }
            bar.display().unwrap();

            let out = rendered(&bar);
            let open = out.find('[').unwrap();
            let close = out.find(']').unwrap();
            assert_eq!(close - open - 1, 12, "ticks={ticks} out={out:?}");
        }
    }

    /// Custom Characters
    /// Fill and incomplete glyphs are configurable.
    #[test]
    fn test_custom_chars() {
        let mut bar = BarBuilder::new(4)
            .with_width(4)
            .with_chars('#', '-')
            .with_writer(Vec::new())
            .build()
            .unwrap();
        bar.advance();
        bar.advance();
        bar.display().unwrap();

        assert!(rendered(&bar).starts_with("[##>-]"));
    }

    /// Display Before First Advance
    /// Zero ticks must render 0% with zero estimates, not divide by zero.
    #[test]
    fn test_display_before_advance() {
        let mut bar = BarBuilder::new(50)
            .with_width(6)
            .with_writer(Vec::new())
            .build()
            .unwrap();
        bar.display().unwrap();

        let out = rendered(&bar);
        assert!(out.starts_with("[>     ]   0%"), "got {out:?}");
        assert!(out.ends_with("/0.0s\r"));
    }

    /// Overshoot
    /// Past the total, the fill clamps to the bar width (no cursor) while the
    /// percentage text is allowed to exceed 100. Intentionally permissive.
    #[test]
    fn test_overshoot_clamps_fill_not_percent() {
        let mut bar = BarBuilder::new(10)
            .with_width(5)
            .with_writer(Vec::new())
            .build()
            .unwrap();
        for _ in 0..12 {
            bar.advance();
        }
        bar.display().unwrap();

        let out = rendered(&bar);
        assert!(out.starts_with("[=====] 120%"), "got {out:?}");
    }

    /// Completion Terminator
    /// done() emits exactly one trailing newline after the final redraw.
    #[test]
    fn test_done_emits_single_newline() {
        let mut bar = BarBuilder::new(2)
            .with_width(4)
            .with_writer(Vec::new())
            .build()
            .unwrap();
        bar.advance();
        bar.advance();
        bar.done().unwrap();

        let out = rendered(&bar);
        assert!(out.ends_with("s\r\n"), "got {out:?}");
        assert_eq!(out.matches('\n').count(), 1);
    }
}
