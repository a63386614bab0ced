//! Color bar showing the color map of a pixels view.

use super::{SharedView, TiledView, ViewId};
use crate::axis::{format_tic, AxisTics};
use crate::color::ColorMap;
use crate::config::ColorBarLayoutConfig;
use crate::theme::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A vertical color ramp with value labels.
///
/// The bar is bound to one color-mapped view when created and follows that
/// view's color map from then on. A bar whose view has been dropped, or
/// that was created with no view, shows the default gray map over [0, 1].
#[derive(Debug)]
pub struct ColorBar {
    label: Option<String>,
    source: Option<Weak<RefCell<dyn TiledView>>>,
}

impl ColorBar {
    /// Color bar bound to `source`.
    pub fn new(label: Option<&str>, source: Option<&SharedView>) -> Self {
        Self {
            label: normalize(label),
            source: source.map(Rc::downgrade),
        }
    }

    /// Label shown above the ramp.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the label; `None` or empty removes it.
    pub fn set_label(&mut self, label: Option<&str>) {
        self.label = normalize(label);
    }

    /// Whether the bar follows the given view.
    pub fn is_bound_to<V: ?Sized>(&self, view: &Rc<RefCell<V>>) -> bool {
        self.source
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|source| ViewId::of(&source) == ViewId::of(view))
    }

    /// Color map currently shown.
    pub fn color_map(&self) -> ColorMap {
        match self.source.as_ref().and_then(Weak::upgrade) {
            Some(view) => {
                let map = view.borrow().color_map();
                map.unwrap_or_default()
            },
            None => ColorMap::default(),
        }
    }

    /// Draw the bar into `area`.
    pub fn draw(
        &self,
        area: Rect,
        buf: &mut Buffer,
        colors: &ThemeColors,
        config: &ColorBarLayoutConfig,
    ) {
        if area.width <= config.ramp_width + 1 || area.height < 3 {
            return;
        }
        let map = self.color_map();

        if let Some(ref label) = self.label {
            let text: String = label.chars().take(area.width as usize).collect();
            buf.set_string(area.x, area.y, text, Style::default().fg(colors.label));
        }

        let ramp = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: config.ramp_width,
            height: area.height - 1,
        };
        let last = (ramp.height - 1).max(1) as f64;
        for i in 0..ramp.height {
            let t = 1.0 - i as f64 / last;
            let color = map.palette().color(t);
            for x in ramp.left()..ramp.right() {
                if let Some(cell) = buf.cell_mut((x, ramp.y + i)) {
                    cell.set_char('█').set_fg(color);
                }
            }
        }

        let decimals = AxisTics::new(map.min(), map.max(), 4).decimals();
        let label_x = ramp.right() + 1;
        let label_width = area.right().saturating_sub(label_x) as usize;
        let mid = (map.min() + map.max()) / 2.0;
        for (row, value) in [
            (ramp.top(), map.max()),
            (ramp.top() + (ramp.height - 1) / 2, mid),
            (ramp.bottom() - 1, map.min()),
        ] {
            let text: String = format_tic(value, decimals)
                .chars()
                .take(label_width)
                .collect();
            buf.set_string(label_x, row, text, Style::default().fg(colors.tic));
        }
    }
}

fn normalize(label: Option<&str>) -> Option<String> {
    label.filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPalette;
    use crate::views::{share, PixelsView};
    use ndarray::array;

    #[test]
    fn follows_bound_view() {
        let pv = share(PixelsView::from_array(array![[1.0, 3.0]]));
        let shared: SharedView = pv.clone();
        let bar = ColorBar::new(Some("amplitude"), Some(&shared));
        assert!(bar.is_bound_to(&pv));
        assert_eq!((bar.color_map().min(), bar.color_map().max()), (1.0, 3.0));

        pv.borrow_mut().set_color_palette(ColorPalette::Jet);
        assert_eq!(bar.color_map().palette(), ColorPalette::Jet);
    }

    #[test]
    fn unbound_bar_uses_default_map() {
        let bar = ColorBar::new(None, None);
        assert_eq!(bar.color_map(), ColorMap::default());
        assert_eq!(bar.label(), None);
    }

    #[test]
    fn dropped_view_falls_back_to_default() {
        let pv = share(PixelsView::from_array(array![[5.0, 9.0]]));
        let shared: SharedView = pv.clone();
        let bar = ColorBar::new(Some(""), Some(&shared));
        drop(shared);
        drop(pv);
        assert_eq!(bar.color_map(), ColorMap::default());
        assert_eq!(bar.label(), None);
    }
}
