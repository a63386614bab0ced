//! Simplot - quick diagnostic plots of 1-D and 2-D arrays in the terminal.
//!
//! A [`SimplePlot`] wraps one plot panel and offers shortcuts for the plots
//! needed most often while debugging numeric code: a sequence, a line
//! through points, or a grid of colored pixels. Plots render into a
//! ratatui buffer, so they can be shown interactively or printed as text.
//!
//! # Features
//!
//! - Sequence, points, pixels and grid views with shared handles
//! - Lower-left or upper-left origin
//! - Axis limits, labels and printf-like tic formats
//! - Color bars and several color palettes
//! - Gruvbox color themes
//! - Clipboard export of the plotted data
//!
//! # Example
//!
//! ```
//! use simplot::SimplePlot;
//!
//! let mut plot = SimplePlot::as_pixels(&[[1.0f64, 2.0], [3.0, 4.0]])?;
//! plot.add_color_bar_labeled("amplitude");
//! plot.set_h_label(Some("x2"));
//! let text = plot.to_text(60, 16);
//! assert!(text.contains("amplitude"));
//! # Ok::<(), simplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod axis;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod orientation;
pub mod panel;
pub mod plot;
pub mod sample;
pub mod sampling;
pub mod style;
pub mod theme;
pub mod viewer;
pub mod views;

pub use error::{PlotError, Result};
pub use orientation::{Orientation, Origin};
pub use panel::{Panel, PlotPanel};
pub use plot::SimplePlot;
pub use sample::Sample;
pub use sampling::Sampling;
pub use views::{ColorBar, GridView, PixelsView, PointsView, SequenceView, TiledView, ViewRef};
