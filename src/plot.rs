//! The simple plot: one panel and shortcuts for the common plots.
//!
//! A [`SimplePlot`] owns exactly one panel for its whole life. Views added
//! through it are returned as shared handles, so the caller can keep
//! styling them; handing the same handle to [`SimplePlot::add`] again moves
//! the view to the top of the draw order.
//!
//! # Example
//!
//! ```
//! use simplot::SimplePlot;
//!
//! let mut plot = SimplePlot::as_sequence(&[1.0f64, 2.5, 3.0]);
//! plot.set_title(Some("Sequence"));
//! plot.add_grid();
//! let text = plot.to_text(40, 12);
//! assert_eq!(text.split('\n').next().map(str::trim), Some("Sequence"));
//! ```

use crate::error::Result;
use crate::orientation::{Orientation, Origin};
use crate::panel::{Panel, PlotPanel};
use crate::sample::{narrow, narrow_array, narrow_grid, Sample};
use crate::sampling::Sampling;
use crate::views::{
    share, ColorBar, GridView, Interpolation, PixelsView, PointsView, SequenceView, SharedView,
    TiledView, ViewId, ViewRef,
};
use ndarray::ArrayView2;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::cell::RefCell;
use std::rc::Rc;

/// A plot with a single panel.
#[derive(Debug)]
pub struct SimplePlot<P: Panel = PlotPanel> {
    panel: P,
}

impl Default for SimplePlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SimplePlot {
    /// Plot with the origin in the lower-left corner.
    pub fn new() -> Self {
        Self::with_origin(Origin::LowerLeft)
    }

    /// Plot with the given origin.
    pub fn with_origin(origin: Origin) -> Self {
        Self::with_panel(PlotPanel::new(origin.into()))
    }

    /// Plot of a sequence f(x) sampled at x = 0, 1, 2, ...
    pub fn as_sequence<T: Sample>(f: &[T]) -> Self {
        let mut plot = Self::new();
        plot.add_sequence(f);
        plot
    }

    /// Plot of points (i, x2[i]) joined by a line.
    pub fn as_points<T: Sample>(x2: &[T]) -> Self {
        let mut plot = Self::new();
        plot.add_points_values(x2);
        plot
    }

    /// Pixels plot of rows `f[i2][i1]`, with the origin in the upper-left
    /// corner and no interpolation.
    pub fn as_pixels<T: Sample, R: AsRef<[T]>>(f: &[R]) -> Result<Self> {
        let f = narrow_grid(f)?;
        Ok(Self::pixels_plot(PixelsView::from_array(f)))
    }

    /// Pixels plot of an array of shape `(n2, n1)`.
    pub fn as_pixels_array<T: Sample>(f: ArrayView2<'_, T>) -> Self {
        Self::pixels_plot(PixelsView::from_array(narrow_array(f)))
    }

    fn pixels_plot(mut view: PixelsView) -> Self {
        view.set_interpolation(Interpolation::Nearest);
        let mut plot = Self::with_origin(Origin::UpperLeft);
        plot.add(&share(view));
        plot
    }

    /// Render into a new buffer of the given size.
    pub fn to_buffer(&self, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        (&self.panel).render(area, &mut buf);
        buf
    }

    /// Render to plain text, one line per row with trailing spaces removed.
    pub fn to_text(&self, width: u16, height: u16) -> String {
        let buf = self.to_buffer(width, height);
        (0..height)
            .map(|y| {
                let row: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Show the plot in the terminal until the user quits.
    pub fn show(&mut self) -> Result<()> {
        crate::viewer::run(&mut self.panel)
    }
}

impl<P: Panel> SimplePlot<P> {
    /// Plot around an existing panel.
    pub fn with_panel(panel: P) -> Self {
        Self { panel }
    }

    /// Origin the plot was created with.
    pub fn origin(&self) -> Origin {
        match self.panel.orientation() {
            Orientation::X1RightX2Up => Origin::LowerLeft,
            Orientation::X1DownX2Right => Origin::UpperLeft,
        }
    }

    /// The panel.
    pub fn plot_panel(&self) -> &P {
        &self.panel
    }

    /// The panel, mutably.
    pub fn plot_panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Add dotted grid lines at the major tics of both axes.
    pub fn add_grid(&mut self) -> ViewRef<GridView> {
        self.add_view(GridView::new())
    }

    /// Add grid lines configured by a string such as `"H-.V-."`.
    pub fn add_grid_with(&mut self, parameters: &str) -> Result<ViewRef<GridView>> {
        Ok(self.add_view(GridView::with_parameters(parameters)?))
    }

    /// Add a pixels view of rows `f[i2][i1]` sampled at 0, 1, 2, ...
    pub fn add_pixels<T: Sample, R: AsRef<[T]>>(&mut self, f: &[R]) -> Result<ViewRef<PixelsView>> {
        let f = narrow_grid(f)?;
        Ok(self.add_view(PixelsView::from_array(f)))
    }

    /// Add a pixels view with samplings of x1 and x2.
    pub fn add_pixels_sampled<T: Sample, R: AsRef<[T]>>(
        &mut self,
        s1: Sampling,
        s2: Sampling,
        f: &[R],
    ) -> Result<ViewRef<PixelsView>> {
        let view = PixelsView::new(s1, s2, narrow_grid(f)?)?;
        Ok(self.add_view(view))
    }

    /// Add points (x1[i], x2[i]).
    pub fn add_points<T: Sample>(&mut self, x1: &[T], x2: &[T]) -> Result<ViewRef<PointsView>> {
        let view = PointsView::new(narrow(x1), narrow(x2))?;
        Ok(self.add_view(view))
    }

    /// Add points (i, x2[i]).
    pub fn add_points_values<T: Sample>(&mut self, x2: &[T]) -> ViewRef<PointsView> {
        self.add_view(PointsView::from_values(narrow(x2)))
    }

    /// Add points of a function x2(x1) sampled by `s1`.
    pub fn add_points_sampled<T: Sample>(
        &mut self,
        s1: &Sampling,
        x2: &[T],
    ) -> Result<ViewRef<PointsView>> {
        let view = PointsView::from_sampling(s1, narrow(x2))?;
        Ok(self.add_view(view))
    }

    /// Add a sequence f(x) sampled at x = 0, 1, 2, ...
    pub fn add_sequence<T: Sample>(&mut self, f: &[T]) -> ViewRef<SequenceView> {
        self.add_view(SequenceView::from_values(narrow(f)))
    }

    /// Add a sequence sampled by `sx`.
    pub fn add_sequence_sampled<T: Sample>(
        &mut self,
        sx: Sampling,
        f: &[T],
    ) -> Result<ViewRef<SequenceView>> {
        let view = SequenceView::new(sx, narrow(f))?;
        Ok(self.add_view(view))
    }

    /// Add a color bar for the most recently added pixels view.
    ///
    /// If the plot already has a color bar, that bar is returned unchanged.
    pub fn add_color_bar(&mut self) -> ViewRef<ColorBar> {
        self.panel.add_color_bar(None)
    }

    /// Add a labeled color bar, or relabel the existing one.
    pub fn add_color_bar_labeled(&mut self, label: &str) -> ViewRef<ColorBar> {
        self.panel.add_color_bar(Some(label))
    }

    /// Remove the color bar; returns `true` if there was one.
    pub fn remove_color_bar(&mut self) -> bool {
        self.panel.remove_color_bar()
    }

    /// Add a view, or move it to the end of the draw order if present.
    ///
    /// Returns `true` if the view was not already in the plot.
    pub fn add<V: TiledView + 'static>(&mut self, view: &ViewRef<V>) -> bool {
        self.panel.add_tiled_view(view.clone())
    }

    /// Same as [`SimplePlot::add`] for a type-erased view, such as one
    /// taken from [`PlotPanel::views`].
    pub fn add_shared(&mut self, view: &SharedView) -> bool {
        self.panel.add_tiled_view(Rc::clone(view))
    }

    /// Remove a view; returns `true` if it was in the plot.
    pub fn remove<V: ?Sized>(&mut self, view: &Rc<RefCell<V>>) -> bool {
        self.panel.remove(ViewId::of(view))
    }

    /// Whether a view is in the plot.
    pub fn contains<V: ?Sized>(&self, view: &Rc<RefCell<V>>) -> bool {
        self.panel.contains(ViewId::of(view))
    }

    fn add_view<V: TiledView + 'static>(&mut self, view: V) -> ViewRef<V> {
        let view = share(view);
        self.add(&view);
        view
    }

    /// Set the title; `None` or empty removes it.
    pub fn set_title(&mut self, title: Option<&str>) {
        self.panel.set_title(title);
    }

    /// Same as [`SimplePlot::set_title`].
    pub fn add_title(&mut self, title: Option<&str>) {
        self.panel.set_title(title);
    }

    /// Remove the title.
    pub fn remove_title(&mut self) {
        self.panel.set_title(None);
    }

    /// Current title.
    pub fn title(&self) -> Option<&str> {
        self.panel.title()
    }

    /// Fix the limits of both axes.
    pub fn set_limits(&mut self, hmin: f64, vmin: f64, hmax: f64, vmax: f64) -> Result<()> {
        self.panel.set_limits(hmin, vmin, hmax, vmax)
    }

    /// Fix the horizontal limits.
    pub fn set_h_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.panel.set_h_limits(min, max)
    }

    /// Fix the vertical limits.
    pub fn set_v_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.panel.set_v_limits(min, max)
    }

    /// Compute both limits from the views again.
    pub fn set_limits_default(&mut self) {
        self.panel.set_limits_default();
    }

    /// Compute the horizontal limits from the views again.
    pub fn set_h_limits_default(&mut self) {
        self.panel.set_h_limits_default();
    }

    /// Compute the vertical limits from the views again.
    pub fn set_v_limits_default(&mut self) {
        self.panel.set_v_limits_default();
    }

    /// Set the horizontal axis label.
    pub fn set_h_label(&mut self, label: Option<&str>) {
        self.panel.set_h_label(label);
    }

    /// Set the vertical axis label.
    pub fn set_v_label(&mut self, label: Option<&str>) {
        self.panel.set_v_label(label);
    }

    /// Set the horizontal tic format, e.g. `"%1.3f"`.
    pub fn set_h_format(&mut self, format: Option<&str>) {
        self.panel.set_h_format(format);
    }

    /// Set the vertical tic format.
    pub fn set_v_format(&mut self, format: Option<&str>) {
        self.panel.set_v_format(format);
    }
}

impl Widget for &SimplePlot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.panel).render(area, buf);
    }
}
