//! # `tick_progress`
//!
//! A small library for rendering textual progress indicators for long-running
//! iterative tasks.
//!
//! `tick_progress` tracks tick counts against an expected total, estimates
//! elapsed/remaining/total time from observed throughput, and renders a
//! formatted line to an output stream without flooding it with updates. It is
//! designed to be:
//!
//! * **Synchronous**: every operation is an immediate call in the caller's own
//!   loop; the library schedules no I/O of its own.
//! * **Sink-generic**: renderers write to any [`std::io::Write`], defaulting
//!   to standard output.
//! * **Throttled**: the [`Throttle`] decorator wraps any tracker and suppresses
//!   redraws until enough time or progress has passed, whichever comes first.
//!
//! ## Modules
//!
//! * [`bar`]: An in-place redrawing progress bar for interactive terminals.
//! * [`builder`]: Fluent interface for configuring [`ProgressBar`] instances.
//! * [`iter`]: Extension trait for tracking progress on Iterators.
//! * [`log`]: A newline-terminated progress line safe for files and logs.
//! * [`throttle`]: The redraw-frequency limiting decorator.
//! * [`tracker`]: The [`ProgressTracker`] trait and the shared tick/time core.
//!
//! ## Example
//!
//! ```
//! use tick_progress::{BarBuilder, ProgressTracker};
//!
//! let mut bar = BarBuilder::new(10).with_writer(Vec::new()).build()?;
//! for _ in 0..10 {
//!     bar.advance();
//!     bar.display()?;
//! }
//! bar.done()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bar;
pub mod builder;
pub mod iter;
pub mod log;
pub mod throttle;
pub mod tracker;

pub use bar::ProgressBar;
pub use builder::BarBuilder;
pub use iter::{ProgressIter, ProgressIteratorExt};
pub use log::ProgressLog;
pub use throttle::Throttle;
pub use tracker::{ProgressError, ProgressTracker, TimeStats, TrackerCore};
