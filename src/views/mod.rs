//! Views drawn inside the tile of a plot panel.
//!
//! Views are shared handles (`Rc<RefCell<V>>`) so that a caller can keep
//! styling a view after handing it to a panel. A panel identifies views by
//! the address of their allocation, see [`ViewId`].

mod color_bar;
mod grid;
mod pixels;
mod points;
mod sequence;

pub use color_bar::ColorBar;
pub use grid::{GridLines, GridView};
pub use pixels::{Interpolation, PixelsView};
pub use points::PointsView;
pub use sequence::{SequenceView, Zero};

use crate::axis::AxisTics;
use crate::color::{ColorMap, ColorPalette};
use crate::orientation::Orientation;
use crate::style::LineStyle;
use crate::theme::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a concrete view.
pub type ViewRef<T> = Rc<RefCell<T>>;

/// Shared handle to any tiled view.
pub type SharedView = Rc<RefCell<dyn TiledView>>;

/// Wrap a view in a shared handle.
pub fn share<T>(view: T) -> ViewRef<T> {
    Rc::new(RefCell::new(view))
}

/// Identity of a shared view, independent of its static type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(*const ());

impl ViewId {
    /// Identity of the view behind `view`.
    pub fn of<V: ?Sized>(view: &Rc<RefCell<V>>) -> Self {
        Self(Rc::as_ptr(view).cast::<()>())
    }
}

/// Kind of a tiled view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Points joined by lines and/or marks.
    Points,
    /// Stems of a sampled sequence.
    Sequence,
    /// Colored pixels of a sampled 2-D function.
    Pixels,
    /// Grid lines at axis tics.
    Grid,
}

/// Extent of a view in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x1.
    pub x1_min: f64,
    /// Maximum x1.
    pub x1_max: f64,
    /// Minimum x2.
    pub x2_min: f64,
    /// Maximum x2.
    pub x2_max: f64,
}

impl Bounds {
    /// Smallest bounds containing all finite `(x1, x2)` pairs.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .filter(|(x1, x2)| x1.is_finite() && x2.is_finite())
            .fold(None, |acc: Option<Bounds>, (x1, x2)| {
                let point = Bounds {
                    x1_min: x1,
                    x1_max: x1,
                    x2_min: x2,
                    x2_max: x2,
                };
                Some(match acc {
                    Some(b) => b.union(&point),
                    None => point,
                })
            })
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x1_min: self.x1_min.min(other.x1_min),
            x1_max: self.x1_max.max(other.x1_max),
            x2_min: self.x2_min.min(other.x2_min),
            x2_max: self.x2_max.max(other.x2_max),
        }
    }
}

/// A view drawn inside the tile of a plot panel.
pub trait TiledView: fmt::Debug {
    /// Kind of this view.
    fn kind(&self) -> ViewKind;

    /// Extent used for automatic axis limits, or `None` if the view does
    /// not constrain the limits.
    fn bounds(&self) -> Option<Bounds>;

    /// Draw the view into the tile described by `ctx`.
    fn draw(&self, ctx: &DrawContext<'_>, buf: &mut Buffer);

    /// Color map of a color-mapped view.
    fn color_map(&self) -> Option<ColorMap> {
        None
    }

    /// Change the palette of a color-mapped view; other views ignore it.
    fn set_color_palette(&mut self, _palette: ColorPalette) {}

    /// Append the view's data as tab-separated values.
    fn write_tsv(&self, _out: &mut String) {}

    /// This view as a pixels view, if it is one.
    fn as_pixels_view(&self) -> Option<&PixelsView> {
        None
    }
}

/// Maps world values along one screen axis to normalized `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    v0: f64,
    v1: f64,
}

impl Projector {
    /// Projector with world value `v0` at 0 and `v1` at 1.
    pub fn new(v0: f64, v1: f64) -> Self {
        Self { v0, v1 }
    }

    /// Normalized coordinate of world value `v`.
    pub fn u(&self, v: f64) -> f64 {
        (v - self.v0) / (self.v1 - self.v0)
    }

    /// World value at normalized coordinate `u`.
    pub fn v(&self, u: f64) -> f64 {
        self.v0 + u * (self.v1 - self.v0)
    }
}

/// Everything a view needs to draw itself into a tile.
#[derive(Debug)]
pub struct DrawContext<'a> {
    /// Tile interior in buffer coordinates.
    pub tile: Rect,
    /// Orientation of the panel.
    pub orientation: Orientation,
    /// Horizontal projector, 0 at the left edge.
    pub hp: Projector,
    /// Vertical projector, 0 at the top edge.
    pub vp: Projector,
    /// Major tics of the horizontal axis.
    pub h_tics: AxisTics,
    /// Major tics of the vertical axis.
    pub v_tics: AxisTics,
    /// Theme colors.
    pub colors: &'a ThemeColors,
}

impl DrawContext<'_> {
    /// Continuous (column, row) position of logical point (x1, x2).
    pub fn position(&self, x1: f64, x2: f64) -> (f64, f64) {
        let (h, v) = self.orientation.to_hv(x1, x2);
        (
            self.tile.x as f64 + self.hp.u(h) * self.tile.width as f64,
            self.tile.y as f64 + self.vp.u(v) * self.tile.height as f64,
        )
    }

    /// Cell containing logical point (x1, x2), if inside the tile.
    pub fn cell(&self, x1: f64, x2: f64) -> Option<(u16, u16)> {
        let (cx, cy) = self.position(x1, x2);
        self.cell_at(cx, cy)
    }

    /// Cell containing continuous position (cx, cy), if inside the tile.
    ///
    /// Positions exactly on the right or bottom edge belong to the last
    /// column or row.
    pub fn cell_at(&self, cx: f64, cy: f64) -> Option<(u16, u16)> {
        let col = snap(cx, self.tile.x, self.tile.width)?;
        let row = snap(cy, self.tile.y, self.tile.height)?;
        Some((col, row))
    }

    /// Column of horizontal world value `h`, if inside the tile.
    pub fn column_of(&self, h: f64) -> Option<u16> {
        let cx = self.tile.x as f64 + self.hp.u(h) * self.tile.width as f64;
        snap(cx, self.tile.x, self.tile.width)
    }

    /// Row of vertical world value `v`, if inside the tile.
    pub fn row_of(&self, v: f64) -> Option<u16> {
        let cy = self.tile.y as f64 + self.vp.u(v) * self.tile.height as f64;
        snap(cy, self.tile.y, self.tile.height)
    }

    /// Logical point (x1, x2) at the center of a cell.
    pub fn world_at(&self, col: u16, row: u16) -> (f64, f64) {
        let u = (col.saturating_sub(self.tile.x) as f64 + 0.5) / self.tile.width as f64;
        let w = (row.saturating_sub(self.tile.y) as f64 + 0.5) / self.tile.height as f64;
        self.orientation.to_x1x2(self.hp.v(u), self.vp.v(w))
    }

    /// Put a glyph into a cell of the tile.
    pub fn put(&self, buf: &mut Buffer, col: u16, row: u16, glyph: char, color: Color) {
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(glyph).set_fg(color);
        }
    }

    /// Draw a line between two logical points.
    ///
    /// `step` carries the dash pattern position across consecutive segments.
    pub fn draw_line(
        &self,
        buf: &mut Buffer,
        from: (f64, f64),
        to: (f64, f64),
        style: LineStyle,
        color: Color,
        step: &mut usize,
    ) {
        if style == LineStyle::None {
            return;
        }
        let (x0, y0) = self.position(from.0, from.1);
        let (x1, y1) = self.position(to.0, to.1);
        let (dx, dy) = (x1 - x0, y1 - y0);
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let glyph = line_glyph(style, dx, dy);
        let Some((t0, t1)) = self.clip_segment((x0, y0), (dx, dy)) else {
            return;
        };
        let (x0, y0) = (x0 + t0 * dx, y0 + t0 * dy);
        let (dx, dy) = ((t1 - t0) * dx, (t1 - t0) * dy);
        let n = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        let mut last = None;
        for i in 0..=n {
            let t = i as f64 / n as f64;
            let Some(cell) = self.cell_at(x0 + t * dx, y0 + t * dy) else {
                continue;
            };
            if last == Some(cell) {
                continue;
            }
            last = Some(cell);
            if style.is_drawn(*step) {
                self.put(buf, cell.0, cell.1, glyph, color);
            }
            *step += 1;
        }
    }

    /// Parameter range [t0, t1] of the segment `origin + t * delta` that
    /// lies inside the tile (Liang-Barsky), or `None` if it misses.
    fn clip_segment(&self, origin: (f64, f64), delta: (f64, f64)) -> Option<(f64, f64)> {
        let (x0, y0) = origin;
        let (dx, dy) = delta;
        let left = self.tile.x as f64;
        let top = self.tile.y as f64;
        let right = left + self.tile.width as f64;
        let bottom = top + self.tile.height as f64;
        let edges = [
            (-dx, x0 - left),
            (dx, right - x0),
            (-dy, y0 - top),
            (dy, bottom - y0),
        ];
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
            }
        }
        (t0 <= t1).then_some((t0, t1))
    }
}

fn snap(c: f64, start: u16, len: u16) -> Option<u16> {
    if !c.is_finite() || len == 0 {
        return None;
    }
    let end = start as f64 + len as f64;
    if c >= start as f64 && c < end {
        Some(c.floor() as u16)
    } else if c >= end && c <= end + 1e-6 {
        Some(start + len - 1)
    } else {
        None
    }
}

fn line_glyph(style: LineStyle, dx: f64, dy: f64) -> char {
    if style == LineStyle::Dot {
        '·'
    } else if dy.abs() <= 0.5 * dx.abs() {
        style.horizontal_glyph()
    } else if dx.abs() <= 0.5 * dy.abs() {
        style.vertical_glyph()
    } else if (dx > 0.0) == (dy < 0.0) {
        '╱'
    } else {
        '╲'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn context(colors: &ThemeColors, orientation: Orientation) -> DrawContext<'_> {
        let (vp, hp) = match orientation {
            Orientation::X1RightX2Up => (Projector::new(4.0, 0.0), Projector::new(0.0, 10.0)),
            Orientation::X1DownX2Right => (Projector::new(0.0, 4.0), Projector::new(0.0, 10.0)),
        };
        DrawContext {
            tile: Rect::new(2, 1, 10, 4),
            orientation,
            hp,
            vp,
            h_tics: AxisTics::new(0.0, 10.0, 5),
            v_tics: AxisTics::new(0.0, 4.0, 4),
            colors,
        }
    }

    #[test]
    fn edges_map_to_last_cell() {
        let colors = ThemeColors::from_theme(Theme::GruvboxDark);
        let ctx = context(&colors, Orientation::X1RightX2Up);
        assert_eq!(ctx.cell(0.0, 4.0), Some((2, 1)));
        assert_eq!(ctx.cell(10.0, 0.0), Some((11, 4)));
        assert_eq!(ctx.cell(10.5, 0.0), None);
    }

    #[test]
    fn upper_left_puts_x1_down() {
        let colors = ThemeColors::from_theme(Theme::GruvboxDark);
        let ctx = context(&colors, Orientation::X1DownX2Right);
        // x1 runs down the rows, x2 across the columns
        assert_eq!(ctx.cell(0.0, 0.0), Some((2, 1)));
        assert_eq!(ctx.cell(4.0, 0.0), Some((2, 4)));
        assert_eq!(ctx.cell(0.0, 10.0), Some((11, 1)));
    }

    #[test]
    fn world_at_inverts_cell() {
        let colors = ThemeColors::from_theme(Theme::GruvboxDark);
        let ctx = context(&colors, Orientation::X1RightX2Up);
        let (x1, x2) = ctx.world_at(6, 2);
        assert_eq!(ctx.cell(x1, x2), Some((6, 2)));
    }

    #[test]
    fn view_ids_compare_allocations() {
        let a = share(GridView::new());
        let b = share(GridView::new());
        let shared: SharedView = a.clone();
        assert_eq!(ViewId::of(&a), ViewId::of(&shared));
        assert_ne!(ViewId::of(&a), ViewId::of(&b));
    }

    #[test]
    fn far_out_line_is_clipped_to_tile() {
        let colors = ThemeColors::from_theme(Theme::GruvboxDark);
        let ctx = context(&colors, Orientation::X1RightX2Up);
        let area = Rect::new(0, 0, 14, 6);
        let mut buf = Buffer::empty(area);
        let mut step = 0;
        let solid = LineStyle::Solid;
        ctx.draw_line(&mut buf, (5.0, 0.0), (5.0, 1.0e30), solid, Color::Red, &mut step);
        // one column, every row of the tile
        assert_eq!(step, 4);
        for row in 1..5 {
            assert_eq!(buf[(7, row)].symbol(), "│");
        }
        ctx.draw_line(&mut buf, (-1.0e12, 10.0), (1.0e12, 10.0), solid, Color::Red, &mut step);
        assert_eq!(step, 4);
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let b = Bounds::from_points([(0.0, 1.0), (f64::NAN, 5.0), (2.0, -1.0)]).unwrap();
        assert_eq!((b.x1_min, b.x1_max, b.x2_min, b.x2_max), (0.0, 2.0, -1.0, 1.0));
        assert!(Bounds::from_points(Vec::new()).is_none());
    }
}
