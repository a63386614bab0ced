//! Plot panels: a tile of views surrounded by axes, title and color bar.

mod render;

use crate::axis::AxisFormat;
use crate::color::ColorPalette;
use crate::config::LayoutConfig;
use crate::error::{check_limits, Result};
use crate::orientation::Orientation;
use crate::theme::Theme;
use crate::views::{share, Bounds, ColorBar, SharedView, ViewId, ViewKind, ViewRef};
use std::fmt;

/// Axis limits: computed from the views, or fixed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Limits {
    /// Computed from the bounds of the views.
    #[default]
    Auto,
    /// Fixed range.
    Fixed {
        /// Minimum value.
        min: f64,
        /// Maximum value.
        max: f64,
    },
}

/// Capabilities a simple plot forwards to its panel.
pub trait Panel: fmt::Debug {
    /// Orientation chosen at construction.
    fn orientation(&self) -> Orientation;

    /// Add a view; a view already present is moved to the end.
    ///
    /// Returns `true` if the view was not already present.
    fn add_tiled_view(&mut self, view: SharedView) -> bool;

    /// Remove a view; returns `true` if it was present.
    fn remove(&mut self, view: ViewId) -> bool;

    /// Whether a view is present.
    fn contains(&self, view: ViewId) -> bool;

    /// Add a color bar bound to the most recent pixels view.
    ///
    /// If a bar exists it is returned, relabeled when `label` is given.
    fn add_color_bar(&mut self, label: Option<&str>) -> ViewRef<ColorBar>;

    /// Remove the color bar; returns `true` if there was one.
    fn remove_color_bar(&mut self) -> bool;

    /// Set the title; `None` or empty removes it.
    fn set_title(&mut self, title: Option<&str>);

    /// Current title.
    fn title(&self) -> Option<&str>;

    /// Fix the horizontal limits.
    fn set_h_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Fix the vertical limits.
    fn set_v_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Fix both limits. Nothing changes unless both pairs are valid.
    fn set_limits(&mut self, hmin: f64, vmin: f64, hmax: f64, vmax: f64) -> Result<()> {
        check_limits(hmin, hmax)?;
        check_limits(vmin, vmax)?;
        self.set_h_limits(hmin, hmax)?;
        self.set_v_limits(vmin, vmax)
    }

    /// Restore automatic horizontal limits.
    fn set_h_limits_default(&mut self);

    /// Restore automatic vertical limits.
    fn set_v_limits_default(&mut self);

    /// Restore automatic limits on both axes.
    fn set_limits_default(&mut self) {
        self.set_h_limits_default();
        self.set_v_limits_default();
    }

    /// Set the horizontal axis label.
    fn set_h_label(&mut self, label: Option<&str>);

    /// Set the vertical axis label.
    fn set_v_label(&mut self, label: Option<&str>);

    /// Set the horizontal tic format, e.g. `"%1.2f"`.
    fn set_h_format(&mut self, format: Option<&str>);

    /// Set the vertical tic format.
    fn set_v_format(&mut self, format: Option<&str>);
}

/// A panel that renders into a terminal buffer.
#[derive(Debug)]
pub struct PlotPanel {
    orientation: Orientation,
    views: Vec<SharedView>,
    color_bar: Option<ViewRef<ColorBar>>,
    title: Option<String>,
    h_limits: Limits,
    v_limits: Limits,
    h_label: Option<String>,
    v_label: Option<String>,
    h_format: Option<String>,
    v_format: Option<String>,
    h_tic_format: Option<AxisFormat>,
    v_tic_format: Option<AxisFormat>,
    theme: Theme,
    layout: LayoutConfig,
}

impl Default for PlotPanel {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl PlotPanel {
    /// Create an empty panel.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            views: Vec::new(),
            color_bar: None,
            title: None,
            h_limits: Limits::Auto,
            v_limits: Limits::Auto,
            h_label: None,
            v_label: None,
            h_format: None,
            v_format: None,
            h_tic_format: None,
            v_tic_format: None,
            theme: Theme::default(),
            layout: LayoutConfig::default(),
        }
    }

    /// Views in draw order.
    pub fn views(&self) -> impl Iterator<Item = &SharedView> {
        self.views.iter()
    }

    /// Number of views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// The color bar, if any.
    pub fn color_bar(&self) -> Option<&ViewRef<ColorBar>> {
        self.color_bar.as_ref()
    }

    /// Requested horizontal limits.
    pub fn h_limits_setting(&self) -> Limits {
        self.h_limits
    }

    /// Requested vertical limits.
    pub fn v_limits_setting(&self) -> Limits {
        self.v_limits
    }

    /// Horizontal axis label.
    pub fn h_label(&self) -> Option<&str> {
        self.h_label.as_deref()
    }

    /// Vertical axis label.
    pub fn v_label(&self) -> Option<&str> {
        self.v_label.as_deref()
    }

    /// Horizontal tic format.
    pub fn h_format(&self) -> Option<&str> {
        self.h_format.as_deref()
    }

    /// Vertical tic format.
    pub fn v_format(&self) -> Option<&str> {
        self.v_format.as_deref()
    }

    /// Parsed horizontal tic format; `None` when unset or unparseable.
    pub fn h_tic_format(&self) -> Option<&AxisFormat> {
        self.h_tic_format.as_ref()
    }

    /// Parsed vertical tic format.
    pub fn v_tic_format(&self) -> Option<&AxisFormat> {
        self.v_tic_format.as_ref()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Replace the layout configuration.
    pub fn set_layout(&mut self, layout: LayoutConfig) {
        self.layout = layout;
    }

    /// Union of the bounds of all views, in logical coordinates.
    pub fn view_bounds(&self) -> Option<Bounds> {
        self.views
            .iter()
            .filter_map(|v| v.borrow().bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// Effective horizontal limits.
    pub fn h_limits(&self) -> (f64, f64) {
        self.effective_limits(self.h_limits, true)
    }

    /// Effective vertical limits.
    pub fn v_limits(&self) -> (f64, f64) {
        self.effective_limits(self.v_limits, false)
    }

    fn effective_limits(&self, limits: Limits, horizontal: bool) -> (f64, f64) {
        if let Limits::Fixed { min, max } = limits {
            return (min, max);
        }
        let Some(b) = self.view_bounds() else {
            return (0.0, 1.0);
        };
        let x1 = (b.x1_min, b.x1_max);
        let x2 = (b.x2_min, b.x2_max);
        let (min, max) = match (self.orientation, horizontal) {
            (Orientation::X1RightX2Up, true) | (Orientation::X1DownX2Right, false) => x1,
            _ => x2,
        };
        widen(min, max)
    }

    /// Set the palette of every color-mapped view to the one after the
    /// palette of the most recent such view. Returns the new palette.
    pub fn cycle_palettes(&mut self) -> Option<ColorPalette> {
        let current = self
            .views
            .iter()
            .rev()
            .find_map(|v| v.borrow().color_map())?;
        let next = current.palette().next();
        for view in &self.views {
            view.borrow_mut().set_color_palette(next);
        }
        Some(next)
    }

    /// Data of all views as tab-separated values, one block per view.
    pub fn data_tsv(&self) -> String {
        let mut out = String::new();
        for view in &self.views {
            if !out.is_empty() {
                out.push('\n');
            }
            view.borrow().write_tsv(&mut out);
        }
        out
    }

    fn position(&self, id: ViewId) -> Option<usize> {
        self.views.iter().position(|v| ViewId::of(v) == id)
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    if min < max {
        (min, max)
    } else if min == 0.0 {
        (-0.5, 0.5)
    } else {
        let pad = 0.5 * min.abs();
        (min - pad, max + pad)
    }
}

fn normalize(text: Option<&str>) -> Option<String> {
    text.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Rendering falls back to default tic labels when a format does not parse.
fn parse_format(format: Option<&str>) -> Option<AxisFormat> {
    match AxisFormat::parse(format?) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("ignoring axis format: {}", e);
            None
        },
    }
}

impl Panel for PlotPanel {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_tiled_view(&mut self, view: SharedView) -> bool {
        let id = ViewId::of(&view);
        let kind = view.borrow().kind();
        let added = match self.position(id) {
            Some(index) => {
                self.views.remove(index);
                false
            },
            None => true,
        };
        self.views.push(view);
        tracing::debug!(?kind, added, count = self.views.len(), "view added to panel");
        added
    }

    fn remove(&mut self, view: ViewId) -> bool {
        match self.position(view) {
            Some(index) => {
                self.views.remove(index);
                tracing::debug!(count = self.views.len(), "view removed from panel");
                true
            },
            None => false,
        }
    }

    fn contains(&self, view: ViewId) -> bool {
        self.position(view).is_some()
    }

    fn add_color_bar(&mut self, label: Option<&str>) -> ViewRef<ColorBar> {
        if let Some(ref bar) = self.color_bar {
            if label.is_some() {
                bar.borrow_mut().set_label(label);
            }
            return bar.clone();
        }
        let source = self
            .views
            .iter()
            .rev()
            .find(|v| v.borrow().kind() == ViewKind::Pixels);
        tracing::debug!(bound = source.is_some(), "color bar added");
        let bar = share(ColorBar::new(label, source));
        self.color_bar = Some(bar.clone());
        bar
    }

    fn remove_color_bar(&mut self) -> bool {
        self.color_bar.take().is_some()
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.title = normalize(title);
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_h_limits(&mut self, min: f64, max: f64) -> Result<()> {
        check_limits(min, max)?;
        tracing::debug!(min, max, "horizontal limits fixed");
        self.h_limits = Limits::Fixed { min, max };
        Ok(())
    }

    fn set_v_limits(&mut self, min: f64, max: f64) -> Result<()> {
        check_limits(min, max)?;
        tracing::debug!(min, max, "vertical limits fixed");
        self.v_limits = Limits::Fixed { min, max };
        Ok(())
    }

    fn set_h_limits_default(&mut self) {
        self.h_limits = Limits::Auto;
    }

    fn set_v_limits_default(&mut self) {
        self.v_limits = Limits::Auto;
    }

    fn set_h_label(&mut self, label: Option<&str>) {
        self.h_label = normalize(label);
    }

    fn set_v_label(&mut self, label: Option<&str>) {
        self.v_label = normalize(label);
    }

    fn set_h_format(&mut self, format: Option<&str>) {
        self.h_format = normalize(format);
        self.h_tic_format = parse_format(self.h_format.as_deref());
    }

    fn set_v_format(&mut self, format: Option<&str>) {
        self.v_format = normalize(format);
        self.v_tic_format = parse_format(self.v_format.as_deref());
    }
}
